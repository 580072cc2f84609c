//! Cross-cutting helpers shared by the companion screen crates.

mod datetime;

pub use datetime::{format_display_date, format_display_time};
