//! Application helpers shared by the library and the binary: scheme
//! defaulting, URL list input, result output and run statistics.

pub mod input;
pub mod output;
pub mod statistics;
pub mod url;

pub use input::read_urls;
pub use output::{render, ResultRecord};
pub use statistics::print_run_statistics;
pub use url::ensure_scheme;
