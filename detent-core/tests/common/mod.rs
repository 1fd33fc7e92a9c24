//! Shared test rig: an encoder and button driven by plain cells

#![allow(dead_code)]

use core::cell::Cell;

use detent_core::config::{ButtonConfig, DetentConfig, EncoderConfig};
use detent_core::ClickEncoder;
use detent_hal::{ActiveLevel, InputPin};

/// Input line backed by a shared cell
pub struct LinePin<'a>(pub &'a Cell<bool>);

impl InputPin for LinePin<'_> {
    fn is_high(&mut self) -> bool {
        self.0.get()
    }
}

/// Raw `A << 1 | B` patterns for one clockwise notch
pub const FORWARD: [u8; 4] = [0b01, 0b11, 0b10, 0b00];

/// Raw `A << 1 | B` patterns for one counter-clockwise notch
pub const BACKWARD: [u8; 4] = [0b10, 0b11, 0b01, 0b00];

/// Three lines, all idle low, read active-high
#[derive(Default)]
pub struct Rig {
    pub a: Cell<bool>,
    pub b: Cell<bool>,
    pub button: Cell<bool>,
}

pub type RigEncoder<'a> = ClickEncoder<LinePin<'a>, LinePin<'a>, LinePin<'a>>;

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active-high config with the given encoder and button settings
    pub fn config(encoder: EncoderConfig, button: ButtonConfig) -> DetentConfig {
        DetentConfig {
            encoder: encoder.with_active_level(ActiveLevel::High),
            button: button.with_active_level(ActiveLevel::High),
        }
    }

    pub fn click_encoder(&self, config: &DetentConfig) -> RigEncoder<'_> {
        ClickEncoder::new(
            LinePin(&self.a),
            LinePin(&self.b),
            Some(LinePin(&self.button)),
            config,
        )
    }

    /// Set the quadrature lines from a raw pattern
    pub fn set(&self, pattern: u8) {
        self.a.set(pattern & 0b10 != 0);
        self.b.set(pattern & 0b01 != 0);
    }

    /// Apply each pattern for one tick
    pub fn play(&self, enc: &mut RigEncoder<'_>, patterns: &[u8]) {
        for &p in patterns {
            self.set(p);
            enc.service();
        }
    }

    /// Hold the button at `pressed` for `ticks` ticks
    pub fn hold(&self, enc: &mut RigEncoder<'_>, pressed: bool, ticks: u32) {
        self.button.set(pressed);
        for _ in 0..ticks {
            enc.service();
        }
    }
}
