//! Formatted date/time for the on-screen clock.

use std::sync::Arc;

use aikata_domain::common::{format_display_date, format_display_time};

use crate::ports::ClockPort;

/// Reads the injected clock and formats it for display.
pub struct WallClock {
    clock: Arc<dyn ClockPort>,
}

impl WallClock {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    /// `YYYY/M/D/WeekdayName`, e.g. `2025/1/7/Tuesday`.
    pub fn display_date(&self) -> String {
        format_display_date(&self.clock.now())
    }

    /// Zero-padded `HH:MM:SS`.
    pub fn display_time(&self) -> String {
        format_display_time(&self.clock.now())
    }
}
