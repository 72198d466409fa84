//! Application configuration and constants.
//!
//! This module provides:
//! - Classifier thresholds and resolver bounds
//! - CLI option types and parsing
//! - The library-level resolver configuration

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, LogFormat, LogLevel, OutputFormat, ResolverConfig};
