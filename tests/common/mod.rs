//! Common utilities for integration tests
#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{assert_states_close, max_abs_physical, max_second_difference};
