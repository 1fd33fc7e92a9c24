//! Quadrature step decoding
//!
//! Turns successive samples of the A/B lines into signed raw steps.
//!
//! Gray-code convention: `code = (A ? 3 : 0) ^ (B ? 1 : 0)`, so the pin
//! pattern `AB = 00 → 01 → 11 → 10 → 00` yields codes `0 → 1 → 2 → 3 → 0`
//! and counts upward. The table decoders index on `(prev_ab << 2) | ab`
//! with `ab = A << 1 | B` and agree with the Gray decoder on every
//! single-step transition.

use crate::config::DecoderMode;

/// Full-resolution transition table, indexed by `(prev_ab << 2) | ab`
const FULL_STEP_TABLE: [i8; 16] = [0, 1, -1, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, -1, 1, 0];

/// Half-resolution transition table for encoders with flaky detents
const HALF_STEP_TABLE: [i8; 16] = [0, 0, -1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, -1, 0, 0];

/// 2-bit Gray code of the two (active-level adjusted) lines
pub fn gray_code(a: bool, b: bool) -> u8 {
    let code = if a { 3 } else { 0 };
    code ^ u8::from(b)
}

/// Raw 2-bit pin pattern, A in bit 1 and B in bit 0
pub fn ab_pattern(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

/// Signed movement between two Gray codes
///
/// Bit 0 of the difference says a single transition happened, bit 1 gives
/// its direction. A difference of 2 is a skipped state: contact bounce or a
/// missed sample. It is dropped rather than guessed.
pub fn decode_gray(last: u8, code: u8) -> i8 {
    let delta = code.wrapping_sub(last);
    if delta & 1 == 0 {
        0
    } else {
        1 - (delta & 2) as i8
    }
}

/// Table lookup for the table-driven modes
///
/// `DecoderMode::Gray` has no table and always returns 0 here.
pub fn table_step(index: u8, mode: DecoderMode) -> i8 {
    let index = usize::from(index & 0x0F);
    match mode {
        DecoderMode::Gray => 0,
        DecoderMode::Table => FULL_STEP_TABLE[index],
        DecoderMode::HalfStepTable => HALF_STEP_TABLE[index],
    }
}

/// Stateful decoder: remembers the previous sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoder {
    mode: DecoderMode,
    /// Gray code (Gray mode) or 4-bit transition index (table modes)
    last: u8,
}

impl Decoder {
    /// Create a decoder seeded with the current line levels
    ///
    /// Seeding means the power-up position never registers as movement.
    pub fn new(mode: DecoderMode, a: bool, b: bool) -> Self {
        let last = match mode {
            DecoderMode::Gray => gray_code(a, b),
            DecoderMode::Table | DecoderMode::HalfStepTable => ab_pattern(a, b),
        };
        Self { mode, last }
    }

    /// Decoding strategy in use
    pub fn mode(&self) -> DecoderMode {
        self.mode
    }

    /// Feed one sample, get the signed raw step (-1, 0 or +1)
    pub fn step(&mut self, a: bool, b: bool) -> i8 {
        match self.mode {
            DecoderMode::Gray => {
                let code = gray_code(a, b);
                let movement = decode_gray(self.last, code);
                self.last = code;
                movement
            }
            DecoderMode::Table | DecoderMode::HalfStepTable => {
                self.last = ((self.last << 2) | ab_pattern(a, b)) & 0x0F;
                table_step(self.last, self.mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pin levels for the forward sequence 00, 01, 11, 10
    const FORWARD: [(bool, bool); 4] = [(false, false), (false, true), (true, true), (true, false)];

    #[test]
    fn test_gray_codes() {
        let codes: [u8; 4] = FORWARD.map(|(a, b)| gray_code(a, b));
        assert_eq!(codes, [0, 1, 2, 3]);
    }

    #[test]
    fn test_decode_gray_all_pairs() {
        for last in 0..4u8 {
            for code in 0..4u8 {
                let expected = match (code + 4 - last) % 4 {
                    1 => 1,
                    3 => -1,
                    _ => 0,
                };
                assert_eq!(decode_gray(last, code), expected, "{} -> {}", last, code);
            }
        }
    }

    #[test]
    fn test_skipped_state_is_noise() {
        assert_eq!(decode_gray(0, 2), 0);
        assert_eq!(decode_gray(2, 0), 0);
        assert_eq!(decode_gray(1, 3), 0);
        assert_eq!(decode_gray(3, 1), 0);
    }

    #[test]
    fn test_tables_agree_with_gray_on_full_step() {
        for prev in FORWARD {
            for cur in FORWARD {
                let index = (ab_pattern(prev.0, prev.1) << 2) | ab_pattern(cur.0, cur.1);
                let gray = decode_gray(gray_code(prev.0, prev.1), gray_code(cur.0, cur.1));
                assert_eq!(table_step(index, DecoderMode::Table), gray);
            }
        }
    }

    #[test]
    fn test_decoder_forward_and_back() {
        for mode in [DecoderMode::Gray, DecoderMode::Table] {
            let mut decoder = Decoder::new(mode, false, false);
            let mut total = 0i32;
            for (a, b) in FORWARD.iter().cycle().skip(1).take(8) {
                total += i32::from(decoder.step(*a, *b));
            }
            assert_eq!(total, 8);

            // Back from 00 the next state is 10
            for (a, b) in FORWARD.iter().rev().cycle().take(8) {
                total += i32::from(decoder.step(*a, *b));
            }
            assert_eq!(total, 0);
        }
    }

    #[test]
    fn test_half_step_counts_two_per_cycle() {
        let mut decoder = Decoder::new(DecoderMode::HalfStepTable, false, false);
        let mut total = 0i32;
        for (a, b) in FORWARD.iter().cycle().skip(1).take(4) {
            total += i32::from(decoder.step(*a, *b));
        }
        assert_eq!(total, 2);
    }

    #[test]
    fn test_seed_is_not_movement() {
        let mut decoder = Decoder::new(DecoderMode::Gray, true, true);
        assert_eq!(decoder.step(true, true), 0);
        let mut decoder = Decoder::new(DecoderMode::Table, true, false);
        assert_eq!(decoder.step(true, false), 0);
    }

    #[test]
    fn test_gray_has_no_table() {
        assert_eq!(table_step(1, DecoderMode::Gray), 0);
    }
}
