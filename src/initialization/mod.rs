//! Shared resource setup: the logger and the resolver's HTTP client.

mod client;
mod logger;

pub use client::init_redirect_client;
pub use logger::init_logger_with;
