//! Switch debounce handling.
//!
//! Provides time-based edge detection with debouncing to prevent multiple
//! taps from contact bounce on physical switches. Time is passed in by the
//! caller in milliseconds so the logic runs on host without a timer driver.

use crate::config::DEBOUNCE_MS;

/// Switch debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl Debouncer {
    /// Create a new debouncer (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the press edge, i.e. once per tap.
    ///
    /// `is_pressed` is the raw switch level (active-low switches pass
    /// `is_low()`). Level changes within [`DEBOUNCE_MS`] of the previous
    /// accepted change are ignored.
    pub fn just_pressed(
        &mut self,
        is_pressed: bool,
        now_ms: u64,
    ) -> bool {
        if is_pressed == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_pressed;
        self.last_change_ms = Some(now_ms);
        is_pressed
    }
}

// =============================================================================
// Tests
// =============================================================================
