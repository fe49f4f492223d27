//! Sentiq Core
//!
//! Shared foundation for the Sentiq sentiment service: the error taxonomy,
//! prediction/feedback domain types, provenance tags, and the sink trait
//! implemented by the telemetry layer.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    FeedbackRecord, ModelProvenance, PredictionResult, PredictionSink, Sentiment, TokenizerFormat,
};
