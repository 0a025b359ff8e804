//! Utility functions and helpers
//!
//! This module contains the virtual clock and timestamp helpers.

pub mod time;

pub use time::{
    current_timestamp, end_of_day, floor_to_minute, parse_timestamp, start_of_day, VirtualClock,
};
