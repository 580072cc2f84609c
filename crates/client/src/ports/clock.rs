//! Clock port.
//!
//! Injected so effect expiry and the on-screen clock are testable with a
//! fixed time source.

use chrono::{DateTime, Utc};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
