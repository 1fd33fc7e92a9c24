//! Quadrature decoder with optional acceleration
//!
//! Samples both lines on every tick, decodes a signed raw step, weighs it
//! and adds it to a running accumulator. Reads convert raw steps to notches.

use detent_hal::{ActiveLevel, InputPin};

use super::acceleration::Accelerator;
use super::decoder::Decoder;
use crate::config::{DecoderMode, EncoderConfig};

/// Rotary encoder (A/B quadrature lines)
///
/// `tick()` must be called at a steady rate, nominally every 1 ms.
///
/// The accumulator is a wrapping `i32`. Wraparound after ~2^31 raw steps is
/// accepted: notch deltas are computed with wrapping subtraction and stay
/// correct as long as reads are more frequent than a full wrap.
#[derive(Debug)]
pub struct Encoder<A, B> {
    pin_a: A,
    pin_b: B,
    active_level: ActiveLevel,
    steps_per_notch: u8,
    decoder: Decoder,
    accel: Accelerator,
    /// Weighted raw steps since construction
    raw: i32,
    /// Portion of `raw` already reported through `increment()`
    reported: i32,
}

impl<A: InputPin, B: InputPin> Encoder<A, B> {
    /// Create an encoder, sampling both lines once to seed the decoder
    pub fn new(mut pin_a: A, mut pin_b: B, config: EncoderConfig) -> Self {
        let a = config.active_level.read(&mut pin_a);
        let b = config.active_level.read(&mut pin_b);

        Self {
            pin_a,
            pin_b,
            active_level: config.active_level,
            steps_per_notch: config.effective_steps_per_notch(),
            decoder: Decoder::new(config.mode, a, b),
            accel: Accelerator::new(config.accel, config.acceleration),
            raw: 0,
            reported: 0,
        }
    }

    /// Sample the lines and accumulate any movement
    pub fn tick(&mut self) {
        let a = self.active_level.read(&mut self.pin_a);
        let b = self.active_level.read(&mut self.pin_b);

        let movement = self.decoder.step(a, b);
        let weighted = self.accel.weigh(movement);
        self.raw = self.raw.wrapping_add(weighted);
    }

    /// Notches moved since the previous call (consuming)
    ///
    /// Only whole notches are consumed; sub-notch progress carries over to
    /// the next call.
    pub fn increment(&mut self) -> i32 {
        let steps = i32::from(self.steps_per_notch);
        let delta = self.raw.wrapping_sub(self.reported);
        let notches = delta / steps;
        self.reported = self.reported.wrapping_add(notches * steps);
        notches
    }

    /// Total notches since construction (non-consuming)
    pub fn accumulate(&self) -> i32 {
        self.raw / i32::from(self.steps_per_notch)
    }

    /// Raw weighted steps since construction
    pub fn raw_steps(&self) -> i32 {
        self.raw
    }

    /// Enable or disable acceleration
    pub fn set_acceleration_enabled(&mut self, enabled: bool) {
        self.accel.set_enabled(enabled);
    }

    /// Whether acceleration is enabled
    pub fn acceleration_enabled(&self) -> bool {
        self.accel.is_enabled()
    }

    /// Raw steps per reported notch (never zero)
    pub fn steps_per_notch(&self) -> u8 {
        self.steps_per_notch
    }

    /// Decoding strategy in use
    pub fn mode(&self) -> DecoderMode {
        self.decoder.mode()
    }

    /// Give the pins back
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a>(&'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> bool {
            self.0.get()
        }
    }

    /// Active-high encoder driven by two shared cells
    struct Rig {
        a: Cell<bool>,
        b: Cell<bool>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                a: Cell::new(false),
                b: Cell::new(false),
            }
        }

        fn encoder(&self, config: EncoderConfig) -> Encoder<MockPin<'_>, MockPin<'_>> {
            Encoder::new(
                MockPin(&self.a),
                MockPin(&self.b),
                config.with_active_level(ActiveLevel::High),
            )
        }

        /// Set lines from a raw `A << 1 | B` pattern
        fn set(&self, pattern: u8) {
            self.a.set(pattern & 0b10 != 0);
            self.b.set(pattern & 0b01 != 0);
        }
    }

    const FORWARD: [u8; 4] = [0b01, 0b11, 0b10, 0b00];
    const BACKWARD: [u8; 4] = [0b10, 0b11, 0b01, 0b00];

    fn turn<A: InputPin, B: InputPin>(rig: &Rig, enc: &mut Encoder<A, B>, seq: &[u8], notches: usize) {
        for _ in 0..notches {
            for &p in seq {
                rig.set(p);
                enc.tick();
            }
        }
    }

    #[test]
    fn test_one_notch_forward() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default());
        turn(&rig, &mut enc, &FORWARD, 1);
        assert_eq!(enc.increment(), 1);
        assert_eq!(enc.increment(), 0);
        assert_eq!(enc.accumulate(), 1);
    }

    #[test]
    fn test_backward_is_negative() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default());
        turn(&rig, &mut enc, &BACKWARD, 3);
        assert_eq!(enc.increment(), -3);
        assert_eq!(enc.accumulate(), -3);
    }

    #[test]
    fn test_increment_keeps_sub_notch_remainder() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default());

        // 3 of 4 steps: not a notch yet
        for &p in &FORWARD[..3] {
            rig.set(p);
            enc.tick();
        }
        assert_eq!(enc.increment(), 0);

        // Final step completes the notch across two reads
        rig.set(FORWARD[3]);
        enc.tick();
        assert_eq!(enc.increment(), 1);
    }

    #[test]
    fn test_negative_remainder_truncates_toward_zero() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default());
        for &p in &BACKWARD[..2] {
            rig.set(p);
            enc.tick();
        }
        assert_eq!(enc.raw_steps(), -2);
        assert_eq!(enc.increment(), 0);
        assert_eq!(enc.accumulate(), 0);
    }

    #[test]
    fn test_idle_ticks_do_nothing() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default());
        for _ in 0..1000 {
            enc.tick();
        }
        assert_eq!(enc.raw_steps(), 0);
    }

    #[test]
    fn test_zero_steps_per_notch_clamped() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default().with_steps_per_notch(0));
        assert_eq!(enc.steps_per_notch(), 1);
        turn(&rig, &mut enc, &FORWARD, 1);
        assert_eq!(enc.increment(), 4);
    }

    #[test]
    fn test_active_low_inverts_lines() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut enc = Encoder::new(
            MockPin(&a),
            MockPin(&b),
            EncoderConfig::default().with_steps_per_notch(1),
        );
        // Both lines idle high = both inactive = code 0; assert B first
        b.set(false);
        enc.tick();
        assert_eq!(enc.increment(), 1);
    }

    #[test]
    fn test_acceleration_boosts_fast_turns() {
        let rig = Rig::new();
        let mut enc = rig.encoder(
            EncoderConfig::default()
                .with_steps_per_notch(1)
                .with_acceleration(true),
        );
        assert!(enc.acceleration_enabled());
        turn(&rig, &mut enc, &FORWARD, 4);
        // First step at rest weighs 1, the other 15 weigh 3
        assert_eq!(enc.increment(), 1 + 15 * 3);

        enc.set_acceleration_enabled(false);
        turn(&rig, &mut enc, &FORWARD, 1);
        assert_eq!(enc.increment(), 4);
    }

    #[test]
    fn test_accumulator_wraps() {
        let rig = Rig::new();
        let mut enc = rig.encoder(EncoderConfig::default().with_steps_per_notch(1));
        enc.raw = i32::MAX;
        enc.reported = i32::MAX;
        turn(&rig, &mut enc, &FORWARD, 1);
        assert_eq!(enc.raw_steps(), i32::MIN + 3);
        assert_eq!(enc.increment(), 4);
    }

    #[test]
    fn test_release_returns_pins() {
        let rig = Rig::new();
        let enc = rig.encoder(EncoderConfig::default());
        assert_eq!(enc.mode(), DecoderMode::Gray);
        let (mut a, _b) = enc.release();
        rig.a.set(true);
        assert!(a.is_high());
    }
}
