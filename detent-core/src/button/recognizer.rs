//! Debounced gesture recognizer for one push-button
//!
//! The line is sampled once per `interval_ticks`. All counters below count
//! samples, not ticks; the tick-based thresholds in `ButtonConfig` are
//! converted once at construction.

use detent_hal::InputPin;

use super::events::{ButtonEvent, PressStage};
use super::gesture::Gesture;
use crate::config::ButtonConfig;

/// Push-button gesture recognizer
#[derive(Debug)]
pub struct Button<P> {
    pin: P,
    config: ButtonConfig,
    state: Gesture,
    interval: u16,
    hold_samples: u16,
    repeat_samples: u16,
    double_click_samples: u16,
    double_click: bool,
    long_press_repeat: bool,
    /// Ticks since the last sample
    ticks_since_sample: u16,
    /// Consecutive samples with the button down
    pressed_samples: u16,
    /// Samples left in the double-click window (0 = closed)
    double_click_window: u16,
}

impl<P: InputPin> Button<P> {
    /// Create a button in the `Open` state
    pub fn new(pin: P, config: ButtonConfig) -> Self {
        Self {
            pin,
            config,
            state: Gesture::Open,
            interval: config.effective_interval(),
            hold_samples: config.hold_samples(),
            repeat_samples: config.repeat_samples(),
            double_click_samples: config.double_click_samples(),
            double_click: config.double_click,
            long_press_repeat: config.long_press_repeat,
            ticks_since_sample: 0,
            pressed_samples: 0,
            double_click_window: 0,
        }
    }

    /// Advance one tick; samples the line every `interval_ticks`
    pub fn tick(&mut self) {
        self.ticks_since_sample = self.ticks_since_sample.saturating_add(1);
        if self.ticks_since_sample < self.interval {
            return;
        }
        self.ticks_since_sample = 0;

        if self.config.active_level.read(&mut self.pin) {
            self.on_pressed();
        } else {
            self.on_released();
        }

        if self.double_click_window > 0 {
            self.double_click_window -= 1;
        }
    }

    fn on_pressed(&mut self) {
        self.pressed_samples = self.pressed_samples.saturating_add(1);

        let stage = if self.pressed_samples < self.hold_samples {
            PressStage::Short
        } else if self.long_press_repeat && self.pressed_samples > self.repeat_samples {
            PressStage::Repeat
        } else {
            PressStage::Hold
        };

        self.apply(ButtonEvent::Pressed(stage));
    }

    fn on_released(&mut self) {
        self.pressed_samples = 0;

        let click = self.state == Gesture::Closed;
        let second_click = self.double_click && self.double_click_window > 0;
        self.apply(ButtonEvent::Released { second_click });

        if click && self.double_click {
            self.double_click_window = if second_click {
                0
            } else {
                self.double_click_samples
            };
        }
    }

    fn apply(&mut self, event: ButtonEvent) {
        let next = self.state.transition(event);

        #[cfg(feature = "defmt")]
        if next != self.state {
            defmt::trace!("gesture {} -> {} on {}", self.state, next, event);
        }

        self.state = next;
    }

    /// Current gesture (consuming for everything but `Closed`)
    ///
    /// Reading `LongPressRepeat` rewinds the press counter to the hold
    /// threshold, so it fires again one repeat interval later.
    pub fn gesture(&mut self) -> Gesture {
        let current = self.state;
        if current == Gesture::LongPressRepeat {
            self.pressed_samples = self.hold_samples;
        }
        self.apply(ButtonEvent::Read);
        current
    }

    /// Current gesture without consuming it
    pub fn peek(&self) -> Gesture {
        self.state
    }

    /// Enable or disable double-click detection
    pub fn set_double_click_enabled(&mut self, enabled: bool) {
        self.double_click = enabled;
    }

    /// Whether double-click detection is enabled
    pub fn double_click_enabled(&self) -> bool {
        self.double_click
    }

    /// Enable or disable long-press repeat
    pub fn set_long_press_repeat_enabled(&mut self, enabled: bool) {
        self.long_press_repeat = enabled;
    }

    /// Whether long-press repeat is enabled
    pub fn long_press_repeat_enabled(&self) -> bool {
        self.long_press_repeat
    }

    /// Configuration the button was built with
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
