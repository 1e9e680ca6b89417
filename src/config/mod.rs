//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (limits, defaults)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
