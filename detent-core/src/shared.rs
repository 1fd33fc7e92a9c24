//! Cross-context access to a click encoder
//!
//! The tick usually runs from a timer interrupt while reads happen in the
//! main loop. Every access here goes through a critical section, so a tick
//! can never land halfway through `increment()` or a reset-on-read.

use core::cell::RefCell;

use critical_section::Mutex;
use detent_hal::InputPin;

use crate::button::Gesture;
use crate::click_encoder::ClickEncoder;

/// Click encoder shared between a tick context and a reader
pub struct SharedClickEncoder<A, B, Btn> {
    inner: Mutex<RefCell<ClickEncoder<A, B, Btn>>>,
}

impl<A, B, Btn> SharedClickEncoder<A, B, Btn> {
    /// Wrap an encoder; usable in a `static`
    pub const fn new(encoder: ClickEncoder<A, B, Btn>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(encoder)),
        }
    }
}

impl<A: InputPin, B: InputPin, Btn: InputPin> SharedClickEncoder<A, B, Btn> {
    /// Run one tick
    pub fn service(&self) {
        self.with(|enc| enc.service());
    }

    /// Notches moved since the previous call (consuming)
    pub fn increment(&self) -> i32 {
        self.with(|enc| enc.increment())
    }

    /// Total notches since construction
    pub fn accumulate(&self) -> i32 {
        self.with(|enc| enc.accumulate())
    }

    /// Current button gesture (consuming for everything but `Closed`)
    pub fn gesture(&self) -> Gesture {
        self.with(|enc| enc.gesture())
    }

    pub fn set_acceleration_enabled(&self, enabled: bool) {
        self.with(|enc| enc.set_acceleration_enabled(enabled));
    }

    pub fn set_double_click_enabled(&self, enabled: bool) {
        self.with(|enc| enc.set_double_click_enabled(enabled));
    }

    pub fn set_long_press_repeat_enabled(&self, enabled: bool) {
        self.with(|enc| enc.set_long_press_repeat_enabled(enabled));
    }

    /// Run `f` on the encoder inside one critical section
    ///
    /// `f` must not call back into this `SharedClickEncoder`.
    pub fn with<R>(&self, f: impl FnOnce(&mut ClickEncoder<A, B, Btn>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}
