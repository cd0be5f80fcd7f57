//! UI events.
//!
//! A `UiEvent` is an immutable value describing one input occurrence.
//! It carries no reference to a screen or view; routing is the worker's job.

/// Identifier of a physical button.
///
/// The three buttons fitted on the board have named constants; other ids
/// are passed through untouched so extra buttons need no code change here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

impl ButtonId {
    /// Navigate up.
    pub const UP: Self = Self(0);
    /// Navigate down.
    pub const DOWN: Self = Self(1);
    /// Context-dependent action.
    pub const SELECT: Self = Self(2);
}

/// One input occurrence delivered to the UI worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// A button went down (after debouncing).
    ButtonPressed(ButtonId),
    /// A button was let go.
    ButtonReleased(ButtonId),
    /// Periodic tick for animations and idle bookkeeping.
    Tick,
}

impl UiEvent {
    pub const fn button_pressed(button: ButtonId) -> Self {
        UiEvent::ButtonPressed(button)
    }

    pub const fn button_released(button: ButtonId) -> Self {
        UiEvent::ButtonReleased(button)
    }

    /// The button that was pressed, if this is a press.
    pub fn pressed(&self) -> Option<ButtonId> {
        match self {
            UiEvent::ButtonPressed(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this event counts as user activity for display power.
    pub fn is_user_activity(&self) -> bool {
        matches!(self, UiEvent::ButtonPressed(_))
    }
}
