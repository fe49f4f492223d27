//! End-to-end degraded-mode tests
//!
//! The service contract: when neither the model artifact nor the tokenizer
//! exists on disk, prediction still works, served by the synthesized
//! placeholder over the built-in vocabulary.

use sentiq_core::TokenizerFormat;
use sentiq_inference::{ArtifactLoader, InferenceEngine, ModelHyperparams, TokenizerResolver};

fn small_hyperparams() -> ModelHyperparams {
    ModelHyperparams {
        max_sequence_length: 20,
        vocab_size: 500,
        embedding_dim: 16,
    }
}

#[tokio::test]
async fn predict_survives_missing_artifacts() {
    let dir = tempfile::tempdir().unwrap();

    let loader = ArtifactLoader::new(dir.path().join("absent.safetensors"), small_hyperparams());
    let artifact = loader.load().unwrap();
    assert!(artifact.provenance.is_synthetic());

    let tokenizer = TokenizerResolver::new(dir.path().join("absent_tokenizer.json")).resolve();
    assert_eq!(tokenizer.format, TokenizerFormat::Builtin);

    let engine = InferenceEngine::new(artifact, tokenizer, 20);
    let result = engine
        .predict("I love this airline, great service!")
        .await
        .unwrap();

    assert!(result.is_dummy_model);
    assert_eq!(result.tokenizer_type, TokenizerFormat::Builtin);
    assert!((0.0..=1.0).contains(&result.probability));
    assert!((0.5..=1.0).contains(&result.confidence));
}

#[tokio::test]
async fn degraded_predictions_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();

    let loader = ArtifactLoader::new(dir.path().join("absent.safetensors"), small_hyperparams());
    let artifact = loader.load().unwrap();
    let tokenizer = TokenizerResolver::new(dir.path().join("absent_tokenizer.json")).resolve();
    let engine = InferenceEngine::new(artifact, tokenizer, 20);

    let first = engine.predict("the crew was friendly").await.unwrap();
    let second = engine.predict("the crew was friendly").await.unwrap();
    assert_eq!(first.probability, second.probability);
    assert_eq!(first.sentiment, second.sentiment);
}
