//! Best-effort tracking sink
//!
//! Emits per-prediction and per-feedback records as structured log events and
//! metrics. Everything here is fire-and-forget: the sink updates local
//! counters and hands records to the logging/metrics facades, none of which
//! can fail a request.

use crate::metrics::MetricsCollector;
use sentiq_core::{FeedbackRecord, PredictionResult, PredictionSink};
use tracing::{info, warn};

/// Experiment-tracking and structured-log sink for the inference pipeline
pub struct TrackingSink {
    metrics: MetricsCollector,
}

impl TrackingSink {
    /// Create a sink feeding the given counters
    pub fn new(metrics: MetricsCollector) -> Self {
        Self { metrics }
    }

    /// Record a surfaced error
    pub fn record_error(&self, message: &str, context: &str) {
        self.metrics.record_error();
        metrics::counter!("sentiq_errors_total").increment(1);
        tracing::error!(target: "sentiq::tracking", context = %context, "{message}");
    }
}

impl PredictionSink for TrackingSink {
    fn record_prediction(&self, result: &PredictionResult) {
        self.metrics.record_prediction(result.sentiment);

        metrics::counter!("sentiq_predictions_total", "sentiment" => result.sentiment.as_str())
            .increment(1);
        metrics::histogram!("sentiq_prediction_confidence").record(result.confidence as f64);

        info!(
            target: "sentiq::tracking",
            sentiment = result.sentiment.as_str(),
            confidence = result.confidence,
            probability = result.probability,
            is_dummy_model = result.is_dummy_model,
            tokenizer_type = result.tokenizer_type.as_str(),
            text_length = result.text.len(),
            "prediction"
        );
    }

    fn record_feedback(&self, feedback: &FeedbackRecord) {
        self.metrics.record_feedback(feedback.is_correct);

        let outcome = if feedback.is_correct {
            "correct"
        } else {
            "incorrect"
        };
        metrics::counter!("sentiq_feedback_total", "outcome" => outcome).increment(1);

        if feedback.is_correct {
            info!(
                target: "sentiq::tracking",
                predicted = feedback.predicted_sentiment.as_str(),
                actual = feedback.actual_sentiment.as_str(),
                user_id = feedback.user_id.as_deref().unwrap_or("anonymous"),
                "feedback"
            );
        } else {
            warn!(
                target: "sentiq::tracking",
                predicted = feedback.predicted_sentiment.as_str(),
                actual = feedback.actual_sentiment.as_str(),
                user_id = feedback.user_id.as_deref().unwrap_or("anonymous"),
                "feedback"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiq_core::{ModelProvenance, Sentiment, TokenizerFormat};

    #[test]
    fn test_sink_updates_counters() {
        let metrics = MetricsCollector::new();
        let sink = TrackingSink::new(metrics.clone());

        let result = PredictionResult::from_probability(
            "great flight",
            0.9,
            ModelProvenance::Real,
            TokenizerFormat::Native,
        );
        sink.record_prediction(&result);

        let feedback = FeedbackRecord {
            text: "great flight".to_string(),
            predicted_sentiment: Sentiment::Positive,
            actual_sentiment: Sentiment::Negative,
            is_correct: false,
            user_id: None,
        };
        sink.record_feedback(&feedback);
        sink.record_error("boom", "great flight");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_predictions, 1);
        assert_eq!(snapshot.positive_predictions, 1);
        assert_eq!(snapshot.incorrect_feedback, 1);
        assert_eq!(snapshot.total_errors, 1);
    }
}
