//! Unified error type for screenloop.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Most UI conditions (double attach, no active screen, events before the
//! worker exists) are absorbed silently and never become an `Error`.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The screen already holds [`MAX_VIEWS`](crate::config::MAX_VIEWS) views.
    ViewCapacity,

    /// The display driver failed to initialise or flush.
    Display,
}
