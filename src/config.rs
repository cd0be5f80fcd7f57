//! Application-wide constants and compile-time configuration.
//!
//! Queue sizes, timing parameters, and display geometry live here so
//! they can be tuned in one place.

// Event queue

/// Capacity of the UI event queue. When full, the oldest event is dropped.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Screens

/// Maximum number of views a single screen can hold.
pub const MAX_VIEWS: usize = 8;

/// Period of the `Tick` event posted by the device ticker (ms).
pub const UI_TICK_MS: u64 = 250;

// Display (SSD1306 128x64)

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Enable automatic OLED screen power-off after inactivity.
pub const SCREEN_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before OLED is turned off (seconds).
pub const SCREEN_AUTO_OFF_TIMEOUT_SECS: u64 = 120;

/// A press that wakes a blanked display is not forwarded to the screen.
pub const SWALLOW_WAKE_PRESS: bool = true;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
