//! Configuration type definitions
//!
//! All thresholds are expressed in ticks of the service call, which the
//! defaults assume to be 1 ms. Nothing here is wall-clock based.

use detent_hal::ActiveLevel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default raw quadrature steps per mechanical notch
pub const DEFAULT_STEPS_PER_NOTCH: u8 = 4;

/// Ticks without movement after which acceleration is fully off
pub const DEFAULT_ACCEL_CEILING: u16 = 64;

/// Ticks per unit of extra weight below the ceiling
pub const DEFAULT_ACCEL_SLOPE: u16 = 16;

/// Button sampling period, also the debounce time
pub const DEFAULT_BUTTON_INTERVAL_TICKS: u16 = 20;

/// Continuous press before the button reports `Held`
pub const DEFAULT_HOLD_TICKS: u16 = 1200;

/// Additional press time before `LongPressRepeat` fires
pub const DEFAULT_REPEAT_TICKS: u16 = 200;

/// Window after a click in which a second click makes a double-click
pub const DEFAULT_DOUBLE_CLICK_TICKS: u16 = 400;

/// How raw pin levels are turned into steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecoderMode {
    /// Gray-code difference decoder; skipped states count as noise
    #[default]
    Gray,
    /// 16-entry transition table, full resolution
    Table,
    /// 16-entry transition table, half resolution (flaky detents)
    HalfStepTable,
}

/// Velocity-to-weight acceleration curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelConfig {
    /// Idle ticks at which the weight drops to its floor of 1
    pub ceiling: u16,
    /// Ticks per extra unit of weight (0 is treated as 1)
    pub slope: u16,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_ACCEL_CEILING,
            slope: DEFAULT_ACCEL_SLOPE,
        }
    }
}

impl AccelConfig {
    /// Create an acceleration curve
    pub const fn new(ceiling: u16, slope: u16) -> Self {
        Self { ceiling, slope }
    }

    /// Largest weight this curve can produce (one tick between moves)
    pub fn max_weight(&self) -> u16 {
        (self.ceiling.saturating_sub(1) / self.slope.max(1)).max(1)
    }
}

/// Quadrature decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Raw quadrature transitions per notch (1, 2 or 4; 0 is treated as 1)
    pub steps_per_notch: u8,
    /// Level of the A/B lines that counts as asserted
    pub active_level: ActiveLevel,
    /// Decoding strategy
    pub mode: DecoderMode,
    /// Acceleration enabled at startup
    pub acceleration: bool,
    /// Acceleration curve
    pub accel: AccelConfig,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            steps_per_notch: DEFAULT_STEPS_PER_NOTCH,
            active_level: ActiveLevel::Low,
            mode: DecoderMode::Gray,
            acceleration: false,
            accel: AccelConfig::default(),
        }
    }
}

impl EncoderConfig {
    /// Set steps per notch
    pub fn with_steps_per_notch(mut self, steps: u8) -> Self {
        self.steps_per_notch = steps;
        self
    }

    /// Set the active level of the quadrature lines
    pub fn with_active_level(mut self, level: ActiveLevel) -> Self {
        self.active_level = level;
        self
    }

    /// Set the decoding strategy
    pub fn with_mode(mut self, mode: DecoderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable acceleration
    pub fn with_acceleration(mut self, enabled: bool) -> Self {
        self.acceleration = enabled;
        self
    }

    /// Set the acceleration curve
    pub fn with_accel(mut self, accel: AccelConfig) -> Self {
        self.accel = accel;
        self
    }

    /// Steps per notch, never zero
    pub fn effective_steps_per_notch(&self) -> u8 {
        self.steps_per_notch.max(1)
    }
}

/// Gesture button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Level that means "pressed"
    pub active_level: ActiveLevel,
    /// Ticks between samples of the button line (0 is treated as 1)
    pub interval_ticks: u16,
    /// Ticks of continuous press before `Held`
    pub hold_ticks: u16,
    /// Ticks past the hold threshold before `LongPressRepeat`
    pub repeat_ticks: u16,
    /// Ticks after a click during which a second click is a double-click
    pub double_click_ticks: u16,
    /// Double-click detection enabled at startup
    pub double_click: bool,
    /// Long-press repeat enabled at startup
    pub long_press_repeat: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_level: ActiveLevel::Low,
            interval_ticks: DEFAULT_BUTTON_INTERVAL_TICKS,
            hold_ticks: DEFAULT_HOLD_TICKS,
            repeat_ticks: DEFAULT_REPEAT_TICKS,
            double_click_ticks: DEFAULT_DOUBLE_CLICK_TICKS,
            double_click: false,
            long_press_repeat: false,
        }
    }
}

impl ButtonConfig {
    /// Set the pressed level
    pub fn with_active_level(mut self, level: ActiveLevel) -> Self {
        self.active_level = level;
        self
    }

    /// Set the sampling interval
    pub fn with_interval_ticks(mut self, ticks: u16) -> Self {
        self.interval_ticks = ticks;
        self
    }

    /// Set the hold threshold
    pub fn with_hold_ticks(mut self, ticks: u16) -> Self {
        self.hold_ticks = ticks;
        self
    }

    /// Set the long-press repeat interval
    pub fn with_repeat_ticks(mut self, ticks: u16) -> Self {
        self.repeat_ticks = ticks;
        self
    }

    /// Set the double-click window
    pub fn with_double_click_ticks(mut self, ticks: u16) -> Self {
        self.double_click_ticks = ticks;
        self
    }

    /// Enable or disable double-click detection
    pub fn with_double_click(mut self, enabled: bool) -> Self {
        self.double_click = enabled;
        self
    }

    /// Enable or disable long-press repeat
    pub fn with_long_press_repeat(mut self, enabled: bool) -> Self {
        self.long_press_repeat = enabled;
        self
    }

    /// Sampling interval, never zero
    pub fn effective_interval(&self) -> u16 {
        self.interval_ticks.max(1)
    }

    /// Samples of continuous press before `Held`
    pub fn hold_samples(&self) -> u16 {
        self.hold_ticks / self.effective_interval()
    }

    /// Sample count that must be exceeded for `LongPressRepeat`
    pub fn repeat_samples(&self) -> u16 {
        self.hold_ticks.saturating_add(self.repeat_ticks) / self.effective_interval()
    }

    /// Length of the double-click window in samples
    pub fn double_click_samples(&self) -> u16 {
        self.double_click_ticks / self.effective_interval()
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetentConfig {
    /// Quadrature decoder settings
    pub encoder: EncoderConfig,
    /// Button settings
    pub button: ButtonConfig,
}
