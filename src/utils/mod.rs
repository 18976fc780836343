//! Utility functions and helpers
//!
//! This module contains timestamp utilities.

pub mod time;

pub use time::{clock_label, current_timestamp, format_clock};
