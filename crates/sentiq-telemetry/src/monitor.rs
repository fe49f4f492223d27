//! Sliding-window error monitoring with deduplicated alerts
//!
//! Failure events accumulate in a trailing time window; when the retained
//! count reaches the threshold, exactly one alert is emitted and the window
//! is cleared for a fresh accumulation cycle. Alert delivery is
//! message-passing to a dedicated notifier task so request-handling code
//! never waits on notification work.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Alerting configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Number of retained events that triggers an alert
    pub threshold: usize,

    /// Trailing window duration
    pub window: Duration,
}

impl MonitorConfig {
    /// Create a configuration from the threshold and a window in minutes
    pub fn new(threshold: usize, window_minutes: u64) -> Self {
        Self {
            threshold,
            window: Duration::from_secs(window_minutes * 60),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

/// A single recorded failure. Immutable once created.
#[derive(Debug, Clone)]
struct ErrorEvent {
    /// Wall-clock timestamp, for display
    timestamp: DateTime<Utc>,
    /// Monotonic instant, for window arithmetic
    at: Instant,
    message: String,
}

/// Alert emitted when the error threshold is crossed
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Events retained in the window at trigger time
    pub error_count: usize,

    /// Configured threshold
    pub threshold: usize,

    /// Configured window in seconds
    pub window_secs: u64,

    /// Messages of the triggering events, oldest first
    pub messages: Vec<String>,

    /// Timestamp of the oldest triggering event (UTC)
    pub oldest_event: DateTime<Utc>,

    /// Trigger timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}

/// External notification collaborator
pub trait AlertNotifier: Send + Sync {
    fn notify(&self, alert: &Alert);
}

/// Default notifier: a CRITICAL-severity structured log record plus an alert
/// counter. Never fails a request.
pub struct LogNotifier;

impl AlertNotifier for LogNotifier {
    fn notify(&self, alert: &Alert) {
        error!(
            error_count = alert.error_count,
            threshold = alert.threshold,
            window_secs = alert.window_secs,
            messages = ?alert.messages,
            "ALERT: error threshold exceeded"
        );
        metrics::counter!("sentiq_alerts_total").increment(1);
    }
}

/// Snapshot of the monitor state
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    /// Events currently retained in the window
    pub count: usize,

    /// Configured threshold
    pub threshold: usize,

    /// Configured window in seconds
    pub window_secs: u64,

    /// Events reported over the process lifetime
    pub total_reported: u64,

    /// Alerts emitted over the process lifetime
    pub alerts_sent: u64,
}

/// Accumulates failure events and triggers an alert exactly once per
/// threshold crossing.
pub struct ErrorWindowMonitor {
    config: MonitorConfig,
    window: Mutex<VecDeque<ErrorEvent>>,
    alerts: mpsc::UnboundedSender<Alert>,
    total_reported: AtomicU64,
    alerts_sent: AtomicU64,
}

impl ErrorWindowMonitor {
    /// Create a monitor together with the receiving end of its alert channel.
    ///
    /// The caller owns alert delivery; see [`ErrorWindowMonitor::with_notifier`]
    /// for the usual wiring.
    pub fn new(config: MonitorConfig) -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (alerts, receiver) = mpsc::unbounded_channel();
        let monitor = Self {
            config,
            window: Mutex::new(VecDeque::new()),
            alerts,
            total_reported: AtomicU64::new(0),
            alerts_sent: AtomicU64::new(0),
        };
        (monitor, receiver)
    }

    /// Create a monitor with a background task delivering alerts to the
    /// given notifier. Must be called from within a tokio runtime.
    pub fn with_notifier(config: MonitorConfig, notifier: Arc<dyn AlertNotifier>) -> Self {
        let (monitor, mut receiver) = Self::new(config);
        tokio::spawn(async move {
            while let Some(alert) = receiver.recv().await {
                notifier.notify(&alert);
            }
        });
        monitor
    }

    /// Report a failure event.
    pub fn report(&self, message: impl Into<String>, context: impl Into<String>) {
        self.report_at(Instant::now(), message.into(), context.into());
    }

    /// Append, trim, and check the threshold under one lock acquisition.
    ///
    /// The append/trim/trigger/clear sequence is atomic: a concurrent report
    /// serializes behind a triggering one and lands in the fresh window.
    fn report_at(&self, now: Instant, message: String, context: String) {
        self.total_reported.fetch_add(1, Ordering::Relaxed);
        warn!(context = %context, "error reported to monitoring: {message}");

        let triggered = {
            let mut window = self.window.lock();
            window.push_back(ErrorEvent {
                timestamp: Utc::now(),
                at: now,
                message,
            });

            // Retain only events strictly newer than the window cutoff.
            while let Some(front) = window.front() {
                if now.duration_since(front.at) >= self.config.window {
                    window.pop_front();
                } else {
                    break;
                }
            }

            if window.len() >= self.config.threshold {
                let oldest_event = window
                    .front()
                    .map(|event| event.timestamp)
                    .unwrap_or_else(Utc::now);
                let alert = Alert {
                    error_count: window.len(),
                    threshold: self.config.threshold,
                    window_secs: self.config.window.as_secs(),
                    messages: window.iter().map(|event| event.message.clone()).collect(),
                    oldest_event,
                    timestamp: Utc::now(),
                };
                window.clear();
                Some(alert)
            } else {
                None
            }
        };

        if let Some(alert) = triggered {
            self.alerts_sent.fetch_add(1, Ordering::Relaxed);
            if self.alerts.send(alert).is_err() {
                warn!("alert channel closed, alert dropped");
            }
        }
    }

    /// Current monitor state
    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            count: self.window.lock().len(),
            threshold: self.config.threshold,
            window_secs: self.config.window.as_secs(),
            total_reported: self.total_reported.load(Ordering::Relaxed),
            alerts_sent: self.alerts_sent.load(Ordering::Relaxed),
        }
    }
}
