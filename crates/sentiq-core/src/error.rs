//! Error types for Sentiq

/// Result type alias using Sentiq's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentiq operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model artifact not present in the artifact store
    #[error("artifact missing: {0}")]
    ArtifactMissing(String),

    /// Model artifact exists but its schema/shape does not match the runtime
    #[error("artifact incompatible: {0}")]
    ArtifactIncompatible(String),

    /// Serialized tokenizer did not match any supported source shape
    #[error("tokenizer format unrecognized: {0}")]
    TokenizerFormat(String),

    /// Model invocation failed at prediction time
    #[error("inference invocation failed: {0}")]
    Inference(String),

    /// Monitoring/alerting sink could not accept a record
    #[error("monitoring sink unavailable: {0}")]
    Monitoring(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact-missing error
    pub fn artifact_missing(msg: impl Into<String>) -> Self {
        Self::ArtifactMissing(msg.into())
    }

    /// Create a new artifact-incompatible error
    pub fn artifact_incompatible(msg: impl Into<String>) -> Self {
        Self::ArtifactIncompatible(msg.into())
    }

    /// Create a new tokenizer-format error
    pub fn tokenizer_format(msg: impl Into<String>) -> Self {
        Self::TokenizerFormat(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new monitoring error
    pub fn monitoring(msg: impl Into<String>) -> Self {
        Self::Monitoring(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
