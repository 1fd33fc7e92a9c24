//! Events that drive gesture transitions

/// How far a continuous press has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressStage {
    /// Pressed, below the hold threshold
    Short,
    /// At or past the hold threshold
    Hold,
    /// Past hold + repeat interval, with long-press repeat enabled
    Repeat,
}

/// Events that can trigger gesture transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// A sample found the button pressed
    Pressed(PressStage),
    /// A sample found the button released
    Released {
        /// Double-click is enabled and its window is still open
        second_click: bool,
    },
    /// The consumer read the current gesture
    Read,
}
