//! Run statistics tracking.
//!
//! Thread-safe counters for the outcomes of a batch of URLs: how many were
//! neutralised, and why the others were rejected.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;
use crate::malice::MaliceReason;

/// Thread-safe outcome statistics.
///
/// All categories are initialized to zero on creation, so counters can be
/// bumped from concurrent tasks through a shared reference.
pub struct RunStats {
    neutralised: AtomicUsize,
    malicious: HashMap<MaliceReason, AtomicUsize>,
    unreachable: HashMap<FailureKind, AtomicUsize>,
}

impl RunStats {
    pub fn new() -> Self {
        let malicious = MaliceReason::iter()
            .map(|reason| (reason, AtomicUsize::new(0)))
            .collect();
        let unreachable = FailureKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();

        RunStats {
            neutralised: AtomicUsize::new(0),
            malicious,
            unreachable,
        }
    }

    pub fn increment_neutralised(&self) {
        self.neutralised.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_malicious(&self, reason: MaliceReason) {
        if let Some(counter) = self.malicious.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("No counter for malice reason {:?}", reason);
        }
    }

    pub fn increment_unreachable(&self, kind: FailureKind) {
        if let Some(counter) = self.unreachable.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("No counter for failure kind {:?}", kind);
        }
    }

    pub fn neutralised(&self) -> usize {
        self.neutralised.load(Ordering::SeqCst)
    }

    pub fn malicious_count(&self, reason: MaliceReason) -> usize {
        self.malicious
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn unreachable_count(&self, kind: FailureKind) -> usize {
        self.unreachable
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_malicious(&self) -> usize {
        self.malicious.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn total_unreachable(&self) -> usize {
        self.unreachable
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.total_malicious() + self.total_unreachable()
    }

    pub fn total(&self) -> usize {
        self.neutralised() + self.total_rejected()
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
