//! Domain types shared across the Sentiq service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Derive the label from a raw probability.
    ///
    /// Positive iff `probability > 0.5`, strictly. A probability of exactly
    /// 0.5 resolves to negative.
    pub fn from_probability(probability: f32) -> Self {
        if probability > 0.5 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Get the label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the serving model is the trained artifact or a synthesized stand-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelProvenance {
    /// Trained artifact loaded from storage
    Real,
    /// Structurally equivalent placeholder with no training signal
    SyntheticPlaceholder,
}

impl ModelProvenance {
    /// True when serving the synthesized placeholder
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::SyntheticPlaceholder)
    }

    /// Get the provenance tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::SyntheticPlaceholder => "synthetic-placeholder",
        }
    }
}

/// Which source shape the tokenizer was reconciled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerFormat {
    /// Native serialized tokenizer, validated by invocation
    Native,
    /// Plain keyed structure with a `word_index` entry
    KeyedDict,
    /// Opaque object with an introspectable `word_index`-shaped field
    Extracted,
    /// Fixed built-in vocabulary
    #[serde(rename = "dummy")]
    Builtin,
}

impl TokenizerFormat {
    /// Get the format tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::KeyedDict => "keyed_dict",
            Self::Extracted => "extracted",
            Self::Builtin => "dummy",
        }
    }
}

/// Result of a single sentiment prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Input text
    pub text: String,

    /// Sentiment label
    pub sentiment: Sentiment,

    /// Confidence in the label, in [0.5, 1.0]
    pub confidence: f32,

    /// Raw positive-class probability, in [0.0, 1.0]
    pub probability: f32,

    /// True when served by the synthesized placeholder model
    pub is_dummy_model: bool,

    /// Source shape the tokenizer was reconciled from
    pub tokenizer_type: TokenizerFormat,

    /// Prediction timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    /// Assemble a result from a raw probability.
    ///
    /// Confidence is derived, never set independently: the probability itself
    /// for a positive label, its complement for a negative one. Both values
    /// are rounded to four decimals.
    pub fn from_probability(
        text: impl Into<String>,
        probability: f32,
        provenance: ModelProvenance,
        tokenizer_type: TokenizerFormat,
    ) -> Self {
        let sentiment = Sentiment::from_probability(probability);
        let confidence = match sentiment {
            Sentiment::Positive => probability,
            Sentiment::Negative => 1.0 - probability,
        };

        Self {
            text: text.into(),
            sentiment,
            confidence: round4(confidence),
            probability: round4(probability),
            is_dummy_model: provenance.is_synthetic(),
            tokenizer_type,
            timestamp: Utc::now(),
        }
    }
}

/// User feedback on a previous prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Text the prediction was made for
    pub text: String,

    /// Label the service predicted
    pub predicted_sentiment: Sentiment,

    /// Label the user says is correct
    pub actual_sentiment: Sentiment,

    /// Whether the prediction was correct
    pub is_correct: bool,

    /// Submitting user, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Best-effort sink for per-prediction and per-feedback records.
///
/// Implementations must swallow their own failures; callers never handle sink
/// errors and never let them fail a request.
pub trait PredictionSink: Send + Sync {
    /// Record a completed prediction
    fn record_prediction(&self, result: &PredictionResult);

    /// Record a user feedback submission
    fn record_feedback(&self, feedback: &FeedbackRecord);
}

fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundary_is_strict() {
        assert_eq!(Sentiment::from_probability(0.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_probability(0.5001), Sentiment::Positive);
        assert_eq!(Sentiment::from_probability(0.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_probability(1.0), Sentiment::Positive);
    }

    #[test]
    fn test_confidence_is_derived() {
        let positive = PredictionResult::from_probability(
            "good",
            0.75,
            ModelProvenance::Real,
            TokenizerFormat::Native,
        );
        assert_eq!(positive.sentiment, Sentiment::Positive);
        assert!((positive.confidence - 0.75).abs() < 1e-6);

        let negative = PredictionResult::from_probability(
            "bad",
            0.25,
            ModelProvenance::Real,
            TokenizerFormat::Native,
        );
        assert_eq!(negative.sentiment, Sentiment::Negative);
        assert!((negative.confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_bounds() {
        for probability in [0.0f32, 0.1, 0.5, 0.51, 0.9, 1.0] {
            let result = PredictionResult::from_probability(
                "text",
                probability,
                ModelProvenance::Real,
                TokenizerFormat::Builtin,
            );
            assert!(result.confidence >= 0.5 && result.confidence <= 1.0);
            assert!(result.probability >= 0.0 && result.probability <= 1.0);
        }
    }

    #[test]
    fn test_provenance_flags() {
        let result = PredictionResult::from_probability(
            "text",
            0.8,
            ModelProvenance::SyntheticPlaceholder,
            TokenizerFormat::Builtin,
        );
        assert!(result.is_dummy_model);
        assert_eq!(result.tokenizer_type.as_str(), "dummy");
    }

    #[test]
    fn test_rounding() {
        let result = PredictionResult::from_probability(
            "text",
            0.123_456_79,
            ModelProvenance::Real,
            TokenizerFormat::Native,
        );
        assert_eq!(result.probability, 0.1235);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&ModelProvenance::SyntheticPlaceholder).unwrap(),
            "\"synthetic-placeholder\""
        );
        assert_eq!(
            serde_json::to_string(&TokenizerFormat::Builtin).unwrap(),
            "\"dummy\""
        );
    }
}
