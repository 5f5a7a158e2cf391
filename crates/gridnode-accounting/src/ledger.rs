//! Cumulative usage ledger.

use gridnode_core::JobDemand;
use parking_lot::Mutex;
use tracing::debug;

/// Post-update view of the node's lifetime totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageSnapshot {
    pub total_compute: u64,
    pub total_storage: u64,
}

/// Process-wide cumulative usage counters.
///
/// Requests are dispatched concurrently, so the read-modify-write of both
/// counters happens under a single lock: the snapshot returned by
/// [`record`](UsageLedger::record) includes exactly the contributions
/// recorded before it, with none lost to interleaving.
pub struct UsageLedger {
    totals: Mutex<UsageSnapshot>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self {
            totals: Mutex::new(UsageSnapshot {
                total_compute: 0,
                total_storage: 0,
            }),
        }
    }

    /// Fold one job's demand into the totals and return the updated view.
    pub fn record(&self, demand: JobDemand) -> UsageSnapshot {
        let snapshot = {
            let mut totals = self.totals.lock();
            totals.total_compute = totals.total_compute.saturating_add(demand.compute);
            totals.total_storage = totals.total_storage.saturating_add(demand.storage);
            *totals
        };

        debug!(
            "Recorded job demand ({}, {}), totals now ({}, {})",
            demand.compute, demand.storage, snapshot.total_compute, snapshot.total_storage
        );

        snapshot
    }

    /// Current totals without recording anything.
    pub fn snapshot(&self) -> UsageSnapshot {
        *self.totals.lock()
    }
}

impl Default for UsageLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_totals_start_at_zero() {
        let ledger = UsageLedger::new();
        let totals = ledger.snapshot();
        assert_eq!(totals.total_compute, 0);
        assert_eq!(totals.total_storage, 0);
    }

    #[test]
    fn test_totals_are_exact_sums() {
        let ledger = UsageLedger::new();
        let demands = [(20, 5), (10, 0), (0, 0), (7, 13)];

        let mut last = ledger.snapshot();
        for (compute, storage) in demands {
            last = ledger.record(JobDemand { compute, storage });
        }

        assert_eq!(last.total_compute, 37);
        assert_eq!(last.total_storage, 18);
        assert_eq!(ledger.snapshot(), last);
    }

    #[test]
    fn test_zero_demand_leaves_totals_unchanged() {
        let ledger = UsageLedger::new();
        ledger.record(JobDemand {
            compute: 20,
            storage: 5,
        });

        let totals = ledger.record(JobDemand::default());
        assert_eq!(totals.total_compute, 20);
        assert_eq!(totals.total_storage, 5);
    }

    #[test]
    fn test_concurrent_records_lose_no_updates() {
        let ledger = Arc::new(UsageLedger::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        ledger.record(JobDemand {
                            compute: 3,
                            storage: 1,
                        });
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let totals = ledger.snapshot();
        assert_eq!(totals.total_compute, 8 * 1000 * 3);
        assert_eq!(totals.total_storage, 8 * 1000);
    }

    #[test]
    fn test_snapshot_is_post_update() {
        let ledger = UsageLedger::new();
        let totals = ledger.record(JobDemand {
            compute: 20,
            storage: 5,
        });
        // the returned view already includes this job
        assert_eq!(totals.total_compute, 20);
        assert_eq!(totals.total_storage, 5);
    }
}
