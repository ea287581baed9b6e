//! Hub counters, exposed as JSON on `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Verification and delivery counters
#[derive(Debug, Default)]
pub struct HubMetrics {
    pub verifications_total: AtomicU64,
    pub verifications_succeeded: AtomicU64,
    pub verifications_failed: AtomicU64,

    pub deliveries_total: AtomicU64,
    pub deliveries_succeeded: AtomicU64,
    pub deliveries_failed: AtomicU64,
    /// Publishes refused because nothing was subscribed
    pub deliveries_without_subscriber: AtomicU64,
}

impl HubMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verification attempt
    pub fn record_verification(&self, success: bool) {
        self.verifications_total.fetch_add(1, Ordering::Relaxed);
        if success {
            self.verifications_succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.verifications_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a delivery attempt that reached the outbound request
    pub fn record_delivery(&self, success: bool) {
        self.deliveries_total.fetch_add(1, Ordering::Relaxed);
        if success {
            self.deliveries_succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.deliveries_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a publish refused for lack of a subscriber.
    ///
    /// Refusals are not delivery attempts and stay out of `deliveries_total`.
    pub fn record_no_subscriber(&self) {
        self.deliveries_without_subscriber
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            verifications_total: self.verifications_total.load(Ordering::Relaxed),
            verifications_succeeded: self.verifications_succeeded.load(Ordering::Relaxed),
            verifications_failed: self.verifications_failed.load(Ordering::Relaxed),
            deliveries_total: self.deliveries_total.load(Ordering::Relaxed),
            deliveries_succeeded: self.deliveries_succeeded.load(Ordering::Relaxed),
            deliveries_failed: self.deliveries_failed.load(Ordering::Relaxed),
            deliveries_without_subscriber: self
                .deliveries_without_subscriber
                .load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`HubMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub verifications_total: u64,
    pub verifications_succeeded: u64,
    pub verifications_failed: u64,
    pub deliveries_total: u64,
    pub deliveries_succeeded: u64,
    pub deliveries_failed: u64,
    pub deliveries_without_subscriber: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = HubMetrics::new();
        metrics.record_verification(true);
        metrics.record_verification(false);
        metrics.record_verification(false);
        metrics.record_delivery(true);
        metrics.record_no_subscriber();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.verifications_total, 3);
        assert_eq!(snapshot.verifications_succeeded, 1);
        assert_eq!(snapshot.verifications_failed, 2);
        assert_eq!(snapshot.deliveries_total, 1);
        assert_eq!(snapshot.deliveries_succeeded, 1);
        assert_eq!(snapshot.deliveries_failed, 0);
        assert_eq!(snapshot.deliveries_without_subscriber, 1);
    }

    #[test]
    fn test_delivery_total_is_succeeded_plus_failed() {
        let metrics = HubMetrics::new();
        metrics.record_no_subscriber();
        metrics.record_delivery(false);
        metrics.record_no_subscriber();
        metrics.record_delivery(true);

        let snapshot = metrics.snapshot();
        assert_eq!(
            snapshot.deliveries_total,
            snapshot.deliveries_succeeded + snapshot.deliveries_failed
        );
        assert_eq!(snapshot.deliveries_without_subscriber, 2);
    }
}
