//! Inference orchestration
//!
//! Ties the resolved tokenizer, the loaded predictor, and the lexicon
//! fallback into a single `predict` entry point that always produces a
//! well-formed result.

use crate::artifact::LoadedArtifact;
use crate::fallback::FallbackClassifier;
use crate::predictor::Predictor;
use crate::tokenizer::{ResolvedTokenizer, TokenizerMapping, OOV_INDEX};
use sentiq_core::{
    Error, ModelProvenance, PredictionResult, PredictionSink, Result, TokenizerFormat,
};
use std::sync::Arc;
use tracing::warn;

/// Pad or truncate a sequence to exactly `length`.
///
/// Longer sequences are truncated from the front so the most recent tokens
/// are the ones the model sees; shorter sequences are left-padded with the
/// OOV index.
pub fn pad_sequence(sequence: Vec<u32>, length: usize) -> Vec<u32> {
    if sequence.len() >= length {
        sequence[sequence.len() - length..].to_vec()
    } else {
        let mut padded = vec![OOV_INDEX; length - sequence.len()];
        padded.extend(sequence);
        padded
    }
}

/// Per-request inference orchestrator.
///
/// Holds the read-only shared state produced at startup; `predict` is safe to
/// call from any number of concurrent requests.
pub struct InferenceEngine {
    predictor: Arc<dyn Predictor>,
    tokenizer: Arc<TokenizerMapping>,
    fallback: FallbackClassifier,
    sink: Option<Arc<dyn PredictionSink>>,
    max_sequence_length: usize,
    provenance: ModelProvenance,
    tokenizer_format: TokenizerFormat,
}

impl InferenceEngine {
    /// Assemble the engine from loader and resolver output.
    pub fn new(
        artifact: LoadedArtifact,
        tokenizer: ResolvedTokenizer,
        max_sequence_length: usize,
    ) -> Self {
        Self {
            predictor: artifact.predictor,
            tokenizer: tokenizer.mapping,
            fallback: FallbackClassifier::new(),
            sink: None,
            max_sequence_length,
            provenance: artifact.provenance,
            tokenizer_format: tokenizer.format,
        }
    }

    /// Attach a best-effort sink for per-prediction records.
    pub fn with_sink(mut self, sink: Arc<dyn PredictionSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Provenance of the serving model
    pub fn provenance(&self) -> ModelProvenance {
        self.provenance
    }

    /// Source shape the tokenizer was reconciled from
    pub fn tokenizer_format(&self) -> TokenizerFormat {
        self.tokenizer_format
    }

    /// Predict the sentiment of a text.
    ///
    /// Model invocation runs on the blocking pool. An invocation failure is a
    /// separate failure domain from load failures and is absorbed here by the
    /// lexicon heuristic; the only error this returns is a failure of the
    /// inference task itself.
    pub async fn predict(&self, text: &str) -> Result<PredictionResult> {
        let sequence = self.tokenizer.tokenize(text);
        let padded = pad_sequence(sequence, self.max_sequence_length);

        let predictor = Arc::clone(&self.predictor);
        let outcome = tokio::task::spawn_blocking(move || predictor.infer(&[padded]))
            .await
            .map_err(|e| Error::internal(format!("inference task failed: {e}")))?;

        let probability = match outcome {
            Ok(probabilities) => match probabilities.first() {
                Some(p) if p.is_finite() && (0.0..=1.0).contains(p) => *p,
                _ => {
                    warn!("model returned a malformed probability, using lexicon fallback");
                    self.fallback.score(text)
                }
            },
            Err(e) => {
                warn!(error = %e, "model invocation failed, using lexicon fallback");
                self.fallback.score(text)
            }
        };

        let result = PredictionResult::from_probability(
            text,
            probability,
            self.provenance,
            self.tokenizer_format,
        );

        if let Some(sink) = &self.sink {
            sink.record_prediction(&result);
        }

        Ok(result)
    }
}
