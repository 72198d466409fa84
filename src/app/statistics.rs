//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, RunStats};
use crate::malice::MaliceReason;

/// Logs a one-line summary followed by per-reason counts of rejected URLs.
pub fn print_run_statistics(stats: &RunStats, elapsed_seconds: f64) {
    let total = stats.total();
    info!(
        "Processed {} URL{} ({} neutralised, {} malicious, {} unreachable) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        stats.neutralised(),
        stats.total_malicious(),
        stats.total_unreachable(),
        elapsed_seconds
    );

    if stats.total_malicious() > 0 {
        info!("Malicious ({} total):", stats.total_malicious());
        for reason in MaliceReason::iter() {
            let count = stats.malicious_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }

    if stats.total_unreachable() > 0 {
        info!("Unreachable ({} total):", stats.total_unreachable());
        for kind in FailureKind::iter() {
            let count = stats.unreachable_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}
