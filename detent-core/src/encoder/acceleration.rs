//! Velocity-sensitive step weighting
//!
//! A counter tracks ticks since the last detected movement. Fast turning
//! keeps it low and the weight high; a pause lets it climb back to the
//! ceiling, where the weight bottoms out at 1.

use crate::config::AccelConfig;

/// Acceleration state for one encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accelerator {
    config: AccelConfig,
    enabled: bool,
    /// Ticks since the last move, saturating at `config.ceiling`
    ticks_since_move: u16,
}

impl Accelerator {
    /// Create an accelerator that starts "at rest" (counter at the ceiling)
    pub fn new(config: AccelConfig, enabled: bool) -> Self {
        Self {
            config,
            enabled,
            ticks_since_move: config.ceiling,
        }
    }

    /// Enable or disable acceleration; takes effect on the next tick
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether acceleration is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ticks since the last weighted move
    pub fn ticks_since_move(&self) -> u16 {
        self.ticks_since_move
    }

    /// Curve in use
    pub fn config(&self) -> AccelConfig {
        self.config
    }

    /// Advance one tick and weigh this tick's raw movement
    ///
    /// Returns `movement` unchanged when disabled. When enabled and moving,
    /// the magnitude is `max(1, (ceiling - ticks_since_move) / slope)` and
    /// the counter restarts from zero.
    pub fn weigh(&mut self, movement: i8) -> i32 {
        self.ticks_since_move = self
            .ticks_since_move
            .saturating_add(1)
            .min(self.config.ceiling);

        if movement == 0 || !self.enabled {
            return i32::from(movement);
        }

        let weight = self.current_weight();
        self.ticks_since_move = 0;
        i32::from(movement.signum()) * i32::from(weight)
    }

    /// Weight a move would get at the current counter value
    pub fn current_weight(&self) -> u16 {
        let headroom = self.config.ceiling.saturating_sub(self.ticks_since_move);
        (headroom / self.config.slope.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_unit_weight() {
        let mut accel = Accelerator::new(AccelConfig::default(), false);
        for _ in 0..10 {
            assert_eq!(accel.weigh(1), 1);
            assert_eq!(accel.weigh(-1), -1);
        }
        assert_eq!(accel.weigh(0), 0);
    }

    #[test]
    fn test_first_move_from_rest_is_unit() {
        let mut accel = Accelerator::new(AccelConfig::default(), true);
        assert_eq!(accel.weigh(1), 1);
        assert_eq!(accel.ticks_since_move(), 0);
    }

    #[test]
    fn test_back_to_back_moves_accelerate() {
        let mut accel = Accelerator::new(AccelConfig::new(64, 16), true);
        accel.weigh(1);
        // One tick after a move: (64 - 1) / 16 = 3
        assert_eq!(accel.weigh(1), 3);
        assert_eq!(accel.weigh(-1), -3);
    }

    #[test]
    fn test_pause_decays_to_floor() {
        let mut accel = Accelerator::new(AccelConfig::new(64, 16), true);
        accel.weigh(1);
        for _ in 0..31 {
            accel.weigh(0);
        }
        // 32 ticks since move: (64 - 32) / 16 = 2
        assert_eq!(accel.weigh(1), 2);

        for _ in 0..100 {
            accel.weigh(0);
        }
        assert_eq!(accel.ticks_since_move(), 64);
        assert_eq!(accel.weigh(1), 1);
    }

    #[test]
    fn test_counter_saturates_at_ceiling() {
        let mut accel = Accelerator::new(AccelConfig::new(5, 1), false);
        for _ in 0..50 {
            accel.weigh(0);
        }
        assert_eq!(accel.ticks_since_move(), 5);
    }

    #[test]
    fn test_zero_slope_does_not_divide_by_zero() {
        let mut accel = Accelerator::new(AccelConfig::new(10, 0), true);
        accel.weigh(1);
        assert_eq!(accel.weigh(1), 9);
    }

    #[test]
    fn test_toggle_takes_effect_next_tick() {
        let mut accel = Accelerator::new(AccelConfig::default(), false);
        accel.weigh(1);
        accel.set_enabled(true);
        assert!(accel.is_enabled());
        // Counter was never reset while disabled, so still at rest
        assert_eq!(accel.weigh(1), 1);
        assert_eq!(accel.weigh(1), 3);
    }
}
