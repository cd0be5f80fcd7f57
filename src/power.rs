//! Display power policy - blank the OLED after a period without input.
//!
//! Idle time is accumulated from `Tick` events rather than read from a
//! clock, so the policy runs unchanged on the host.

use crate::config;

/// Decide whether the screen should be on under the inactivity policy.
pub fn screen_should_be_on(auto_off_enabled: bool, idle_secs: u64, auto_off_timeout_secs: u64) -> bool {
    !(auto_off_enabled && idle_secs >= auto_off_timeout_secs)
}

/// Tracks user activity and whether the panel should be lit.
#[derive(Clone, Copy, Debug)]
pub struct DisplayPower {
    on: bool,
    idle_ms: u64,
    auto_off_enabled: bool,
    timeout_secs: u64,
}

impl DisplayPower {
    pub const fn new(auto_off_enabled: bool, timeout_secs: u64) -> Self {
        Self {
            on: true,
            idle_ms: 0,
            auto_off_enabled,
            timeout_secs,
        }
    }

    /// Policy from [`config`].
    pub const fn from_config() -> Self {
        Self::new(
            config::SCREEN_AUTO_OFF_ENABLED,
            config::SCREEN_AUTO_OFF_TIMEOUT_SECS,
        )
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Record a button press. Returns `true` if this woke the display.
    pub fn activity(&mut self) -> bool {
        self.idle_ms = 0;
        if self.on {
            return false;
        }
        info!("Display: waking");
        self.on = true;
        true
    }

    /// Advance idle time. Returns the new state if the display toggled.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<bool> {
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        let should_be_on =
            screen_should_be_on(self.auto_off_enabled, self.idle_ms / 1000, self.timeout_secs);

        if should_be_on == self.on {
            return None;
        }
        info!("Display: on={} after {} ms idle", should_be_on, self.idle_ms);
        self.on = should_be_on;
        Some(should_be_on)
    }
}

impl Default for DisplayPower {
    fn default() -> Self {
        Self::from_config()
    }
}
