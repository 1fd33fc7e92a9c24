//! Gesture state machine definition
//!
//! Every button output is a function of the current gesture and an event.
//! Reads are events too, which makes the reset-on-read contract part of
//! the transition table instead of accessor side logic.

use super::events::{ButtonEvent, PressStage};

/// Button gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Idle; initial state and the state after any consumed gesture
    #[default]
    Open,
    /// Debounced press in progress, below the hold threshold
    Closed,
    /// Pressed for at least the hold threshold
    Held,
    /// Held past the repeat interval; re-fires while held
    LongPressRepeat,
    /// Let go after `Held` or `LongPressRepeat`
    Released,
    /// Short press and release
    Clicked,
    /// Second click within the double-click window
    DoubleClicked,
}

impl Gesture {
    /// Check if this gesture is reported once and then cleared
    pub fn is_one_shot(&self) -> bool {
        matches!(
            self,
            Gesture::Held
                | Gesture::LongPressRepeat
                | Gesture::Released
                | Gesture::Clicked
                | Gesture::DoubleClicked
        )
    }

    /// Process an event and return the next gesture
    pub fn transition(self, event: ButtonEvent) -> Self {
        use ButtonEvent::{Pressed, Read};
        use Gesture::*;

        match (self, event) {
            // Press samples overwrite whatever was pending
            (_, Pressed(PressStage::Short)) => Closed,
            (_, Pressed(PressStage::Hold)) => Held,
            (_, Pressed(PressStage::Repeat)) => LongPressRepeat,

            // Release samples
            (Closed, ButtonEvent::Released { second_click: false }) => Clicked,
            (Closed, ButtonEvent::Released { second_click: true }) => DoubleClicked,
            (Held | LongPressRepeat, ButtonEvent::Released { .. }) => Gesture::Released,

            // Reads: a press in progress must not be re-armed mid-press
            (Closed, Read) => Closed,
            (_, Read) => Open,

            // Default: stay in current gesture
            _ => self,
        }
    }
}
