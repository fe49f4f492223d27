//! Service counters

use sentiq_core::Sentiment;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free counters for the service's `/metrics` surface
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    total_predictions: AtomicU64,
    positive_predictions: AtomicU64,
    total_feedback: AtomicU64,
    incorrect_feedback: AtomicU64,
    total_errors: AtomicU64,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                total_predictions: AtomicU64::new(0),
                positive_predictions: AtomicU64::new(0),
                total_feedback: AtomicU64::new(0),
                incorrect_feedback: AtomicU64::new(0),
                total_errors: AtomicU64::new(0),
            }),
        }
    }

    /// Record a completed prediction
    pub fn record_prediction(&self, sentiment: Sentiment) {
        self.inner.total_predictions.fetch_add(1, Ordering::Relaxed);
        if sentiment == Sentiment::Positive {
            self.inner
                .positive_predictions
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a feedback submission
    pub fn record_feedback(&self, is_correct: bool) {
        self.inner.total_feedback.fetch_add(1, Ordering::Relaxed);
        if !is_correct {
            self.inner.incorrect_feedback.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a surfaced error
    pub fn record_error(&self) {
        self.inner.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_predictions: self.inner.total_predictions.load(Ordering::Relaxed),
            positive_predictions: self.inner.positive_predictions.load(Ordering::Relaxed),
            total_feedback: self.inner.total_feedback.load(Ordering::Relaxed),
            incorrect_feedback: self.inner.incorrect_feedback.load(Ordering::Relaxed),
            total_errors: self.inner.total_errors.load(Ordering::Relaxed),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSnapshot {
    pub total_predictions: u64,
    pub positive_predictions: u64,
    pub total_feedback: u64,
    pub incorrect_feedback: u64,
    pub total_errors: u64,
}

impl MetricsSnapshot {
    /// Share of predictions labeled positive
    pub fn positive_rate(&self) -> f64 {
        if self.total_predictions == 0 {
            0.0
        } else {
            self.positive_predictions as f64 / self.total_predictions as f64
        }
    }

    /// Share of feedback marking the prediction correct
    pub fn feedback_accuracy(&self) -> f64 {
        if self.total_feedback == 0 {
            0.0
        } else {
            (self.total_feedback - self.incorrect_feedback) as f64 / self.total_feedback as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_collection() {
        let metrics = MetricsCollector::new();

        metrics.record_prediction(Sentiment::Positive);
        metrics.record_prediction(Sentiment::Negative);
        metrics.record_feedback(true);
        metrics.record_feedback(false);
        metrics.record_error();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_predictions, 2);
        assert_eq!(snapshot.positive_predictions, 1);
        assert_eq!(snapshot.total_feedback, 2);
        assert_eq!(snapshot.incorrect_feedback, 1);
        assert_eq!(snapshot.total_errors, 1);
        assert!((snapshot.positive_rate() - 0.5).abs() < 1e-9);
        assert!((snapshot.feedback_accuracy() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rates_with_no_traffic() {
        let snapshot = MetricsCollector::new().snapshot();
        assert_eq!(snapshot.positive_rate(), 0.0);
        assert_eq!(snapshot.feedback_accuracy(), 0.0);
    }

    #[test]
    fn test_collector_is_shared_across_clones() {
        let metrics = MetricsCollector::new();
        let clone = metrics.clone();
        clone.record_prediction(Sentiment::Positive);
        assert_eq!(metrics.snapshot().total_predictions, 1);
    }
}
