//! Board-agnostic core logic for the rotary encoder driver
//!
//! This crate contains everything that does not depend on a specific
//! chip, driven by a single `service()` call per tick (nominally 1 ms):
//!
//! - Quadrature decoding with optional velocity-based acceleration
//! - Push-button gesture recognition (click, double-click, held, repeat)
//! - A facade owning one encoder and an optional button
//! - Critical-section wrapper for sharing it with an interrupt
//! - Configuration type definitions and a `no_std` config parser

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod click_encoder;
pub mod config;
pub mod encoder;
pub mod shared;

pub use button::{Button, Gesture};
pub use click_encoder::ClickEncoder;
pub use config::DetentConfig;
pub use encoder::Encoder;
pub use shared::SharedClickEncoder;
