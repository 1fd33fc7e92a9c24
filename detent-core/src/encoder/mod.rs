//! Quadrature decoding
//!
//! Gray-code (or table) step decoding, velocity-based acceleration and
//! the notch-counting encoder built from them.

pub mod acceleration;
pub mod decoder;
pub mod quadrature;

pub use acceleration::Accelerator;
pub use decoder::{decode_gray, gray_code, table_step, Decoder};
pub use quadrature::Encoder;
