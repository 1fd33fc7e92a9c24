//! GPIO pin abstractions
//!
//! Provides the digital input trait consumed by the encoder and button
//! state machines, plus the active-level convention shared by all lines.

use embedded_hal::digital::InputPin as EhInputPin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digital input pin
///
/// Implementations read the current level of one line. Reads must be
/// cheap and must not block: they run once per tick, typically from a
/// timer interrupt.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<P: InputPin + ?Sized> InputPin for &mut P {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

/// Placeholder for a line that is not wired
///
/// Always reads low. Used as the button type of an encoder without a
/// push-button, where it is never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl InputPin for NoPin {
    fn is_high(&mut self) -> bool {
        false
    }
}

/// Digital level that means "active" (pressed, or quadrature line asserted)
///
/// Encoders wired with pull-ups pull the line to ground when the contact
/// closes, so the default is active-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActiveLevel {
    /// Line is active when it reads high
    High,
    /// Line is active when it reads low
    #[default]
    Low,
}

impl ActiveLevel {
    /// Build from an "active low" flag, as found in pin config strings
    pub fn from_active_low(active_low: bool) -> Self {
        if active_low {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        }
    }

    /// Whether a raw level (true = high) is the active one
    pub fn is_active(self, level_high: bool) -> bool {
        match self {
            ActiveLevel::High => level_high,
            ActiveLevel::Low => !level_high,
        }
    }

    /// Read a pin and report whether it is active
    pub fn read<P: InputPin + ?Sized>(self, pin: &mut P) -> bool {
        self.is_active(pin.is_high())
    }
}

/// Adapter from an `embedded-hal` 1.0 input pin
///
/// `embedded-hal` reads are fallible; the tick path is not. A failed
/// read repeats the last good level, so a transient bus error shows up
/// as "no change" rather than as a spurious edge.
#[derive(Debug)]
pub struct EhInput<P> {
    pin: P,
    last_high: bool,
}

impl<P: EhInputPin> EhInput<P> {
    /// Wrap a pin, priming the cached level with one read
    pub fn new(mut pin: P) -> Self {
        let last_high = pin.is_high().unwrap_or(false);
        Self { pin, last_high }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhInputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        if let Ok(high) = self.pin.is_high() {
            self.last_high = high;
        }
        self.last_high
    }
}
