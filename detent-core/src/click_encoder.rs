//! Encoder with an optional push-button behind one tick entry point

use detent_hal::{InputPin, NoPin};

use crate::button::{Button, Gesture};
use crate::config::DetentConfig;
use crate::encoder::Encoder;

/// Rotary encoder plus push-button
///
/// Call [`ClickEncoder::service`] once per tick. A `None` button is a valid
/// configuration: button logic is skipped and [`ClickEncoder::gesture`]
/// always returns `Gesture::Open`.
#[derive(Debug)]
pub struct ClickEncoder<A, B, Btn> {
    encoder: Encoder<A, B>,
    button: Option<Button<Btn>>,
}

impl<A: InputPin, B: InputPin> ClickEncoder<A, B, NoPin> {
    /// Create an encoder with no push-button
    pub fn without_button(pin_a: A, pin_b: B, config: &DetentConfig) -> Self {
        Self::new(pin_a, pin_b, None, config)
    }
}

impl<A: InputPin, B: InputPin, Btn: InputPin> ClickEncoder<A, B, Btn> {
    /// Create an encoder, optionally with a push-button
    pub fn new(pin_a: A, pin_b: B, button: Option<Btn>, config: &DetentConfig) -> Self {
        Self {
            encoder: Encoder::new(pin_a, pin_b, config.encoder),
            button: button.map(|pin| Button::new(pin, config.button)),
        }
    }

    /// Run one tick: decoder first, then the button
    pub fn service(&mut self) {
        self.encoder.tick();
        if let Some(button) = self.button.as_mut() {
            button.tick();
        }
    }

    /// Notches moved since the previous call (consuming)
    pub fn increment(&mut self) -> i32 {
        self.encoder.increment()
    }

    /// Total notches since construction
    pub fn accumulate(&self) -> i32 {
        self.encoder.accumulate()
    }

    /// Current button gesture (consuming for everything but `Closed`)
    pub fn gesture(&mut self) -> Gesture {
        self.button
            .as_mut()
            .map_or(Gesture::Open, |button| button.gesture())
    }

    pub fn set_acceleration_enabled(&mut self, enabled: bool) {
        self.encoder.set_acceleration_enabled(enabled);
    }

    pub fn set_double_click_enabled(&mut self, enabled: bool) {
        if let Some(button) = self.button.as_mut() {
            button.set_double_click_enabled(enabled);
        }
    }

    pub fn set_long_press_repeat_enabled(&mut self, enabled: bool) {
        if let Some(button) = self.button.as_mut() {
            button.set_long_press_repeat_enabled(enabled);
        }
    }

    /// Whether a push-button is attached
    pub fn has_button(&self) -> bool {
        self.button.is_some()
    }

    /// The quadrature decoder
    pub fn encoder(&self) -> &Encoder<A, B> {
        &self.encoder
    }

    /// The push-button, if any
    pub fn button(&self) -> Option<&Button<Btn>> {
        self.button.as_ref()
    }
}
