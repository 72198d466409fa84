//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `ResolveError`)
//! - Failure categorization for unreachable URLs
//! - Outcome statistics for batch runs

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use stats::RunStats;
pub use types::{FailureKind, InitializationError, ResolveError};
