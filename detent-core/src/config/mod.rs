//! Configuration types
//!
//! Board-agnostic configuration structures, plus a parser for the
//! `detent.toml` text format.

pub mod parse;
pub mod types;

pub use parse::{parse, ParseError};
pub use types::*;
