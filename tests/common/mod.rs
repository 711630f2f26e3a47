//! Common utilities for integration tests

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{decaying_series, small_config, small_style, wave_series};
