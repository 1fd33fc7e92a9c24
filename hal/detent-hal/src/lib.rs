//! Detent Hardware Abstraction Layer
//!
//! This crate defines the one hardware capability the encoder driver
//! consumes: reading the level of a digital input line. Chip-specific
//! code provides it either directly or through any `embedded-hal` 1.0
//! input pin wrapped in [`gpio::EhInput`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (detent-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-core (decoder, button, facade)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          embedded-hal 1.0 InputPin
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input
//! - [`gpio::ActiveLevel`] - Which level counts as "active"
//! - [`gpio::NoPin`] - Stand-in for an unwired line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key types at crate root for convenience
pub use gpio::{ActiveLevel, EhInput, InputPin, NoPin};
