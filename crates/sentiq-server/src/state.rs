//! Shared application state
//!
//! Built once, sequentially, before the listener binds: requests can never
//! observe a partially-initialized model or tokenizer.

use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use sentiq_core::PredictionSink;
use sentiq_inference::{ArtifactLoader, InferenceEngine, ModelHyperparams, TokenizerResolver};
use sentiq_telemetry::{
    ErrorWindowMonitor, LogNotifier, MetricsCollector, MonitorConfig, TrackingSink,
};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Inference orchestrator over the loaded model and tokenizer
    pub engine: Arc<InferenceEngine>,

    /// Sliding-window error monitor
    pub monitor: Arc<ErrorWindowMonitor>,

    /// Service counters for the metrics endpoint
    pub metrics: MetricsCollector,

    /// Best-effort tracking sink
    pub tracking: Arc<TrackingSink>,

    /// Prometheus recorder handle for rendering
    pub prometheus: PrometheusHandle,
}

impl AppState {
    /// Load artifacts and assemble the state.
    ///
    /// Idempotent at the process level: called exactly once during startup,
    /// and every fallback tier below it already absorbs missing or
    /// incompatible artifacts.
    pub async fn initialize(
        config: &ServerConfig,
        prometheus: PrometheusHandle,
    ) -> anyhow::Result<Self> {
        let hyperparams =
            ModelHyperparams::load(&config.model_config_path).unwrap_or(ModelHyperparams {
                max_sequence_length: config.max_sequence_length,
                ..ModelHyperparams::default()
            });

        let artifact = ArtifactLoader::new(&config.model_path, hyperparams.clone()).load()?;
        let tokenizer = TokenizerResolver::new(&config.tokenizer_path).resolve();
        info!(
            model = artifact.provenance.as_str(),
            tokenizer = tokenizer.format.as_str(),
            "artifacts ready"
        );

        let metrics = MetricsCollector::new();
        let tracking = Arc::new(TrackingSink::new(metrics.clone()));
        let monitor = Arc::new(ErrorWindowMonitor::with_notifier(
            MonitorConfig::new(
                config.alerting.error_threshold,
                config.alerting.time_window_minutes,
            ),
            Arc::new(LogNotifier),
        ));

        let engine = Arc::new(
            InferenceEngine::new(artifact, tokenizer, hyperparams.max_sequence_length)
                .with_sink(tracking.clone() as Arc<dyn PredictionSink>),
        );

        // Startup self-test over the same path requests take.
        let probe = engine.predict("I love this airline, great service!").await?;
        info!(
            sentiment = probe.sentiment.as_str(),
            probability = probe.probability,
            "startup self-test prediction ok"
        );

        Ok(Self {
            engine,
            monitor,
            metrics,
            tracking,
            prometheus,
        })
    }
}
