//! Sentiq Telemetry
//!
//! Observability collaborators for the inference pipeline: the sliding-window
//! error monitor with deduplicated alerts, lock-free service counters, and
//! the best-effort tracking sink behind `PredictionSink`.

pub mod metrics;
pub mod monitor;
pub mod tracking;

pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use monitor::{
    Alert, AlertNotifier, ErrorWindowMonitor, LogNotifier, MonitorConfig, MonitorSnapshot,
};
pub use tracking::TrackingSink;
