//! Push-button gesture recognition
//!
//! Classifies press duration and cadence into click, double-click, held,
//! long-press-repeat and released gestures.

pub mod events;
pub mod gesture;
pub mod recognizer;

pub use events::{ButtonEvent, PressStage};
pub use gesture::Gesture;
pub use recognizer::Button;
