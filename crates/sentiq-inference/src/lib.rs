//! Sentiq Inference
//!
//! The resilient inference pipeline behind the Sentiq sentiment service.
//!
//! The service must keep answering even when the trained artifact, its
//! tokenizer, or the inference call itself are missing, incompatible, or
//! failing. Each stage degrades independently:
//! - artifact loading falls back tier by tier down to a synthesized
//!   placeholder model,
//! - tokenizer resolution reconciles several serialized shapes and bottoms
//!   out at a fixed built-in vocabulary,
//! - prediction-time invocation failures are absorbed by a lexicon
//!   heuristic.

pub mod artifact;
pub mod engine;
pub mod fallback;
pub mod lexicon;
pub mod predictor;
pub mod tokenizer;

pub use artifact::{ArtifactLoader, LoadedArtifact, ModelHyperparams};
pub use engine::{pad_sequence, InferenceEngine};
pub use fallback::FallbackClassifier;
pub use predictor::{LstmClassifier, Predictor};
pub use tokenizer::{ResolvedTokenizer, TokenizerMapping, TokenizerResolver, OOV_INDEX};
