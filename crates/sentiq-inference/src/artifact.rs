//! Model artifact loading with tiered compatibility recovery
//!
//! Three tiers, attempted in order, first success wins, never backtracked:
//! strict checkpoint load, input-layer shape substitution, and placeholder
//! synthesis. Callers always receive a callable predictor; only a failure to
//! construct the placeholder itself propagates.

use crate::predictor::{LstmClassifier, Predictor};
use candle_core::{DType, Device};
use candle_nn::{VarBuilder, VarMap};
use rand::Rng;
use sentiq_core::{Error, ModelProvenance, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Model hyperparameters, optionally read from a configuration blob next to
/// the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelHyperparams {
    /// Fixed sequence length the model expects
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,

    /// Embedding table rows
    #[serde(default = "default_vocab_size")]
    pub vocab_size: usize,

    /// Embedding table columns
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
}

impl Default for ModelHyperparams {
    fn default() -> Self {
        Self {
            max_sequence_length: default_max_sequence_length(),
            vocab_size: default_vocab_size(),
            embedding_dim: default_embedding_dim(),
        }
    }
}

impl ModelHyperparams {
    /// Load the configuration blob, if present and parseable.
    ///
    /// Absence is a normal, handled condition.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "model config not found, using defaults");
            return None;
        }
        match std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|raw| serde_json::from_str(&raw).map_err(Error::from))
        {
            Ok(hyperparams) => {
                info!(path = %path.display(), "model config loaded");
                Some(hyperparams)
            }
            Err(e) => {
                warn!(error = %e, "failed to read model config, using defaults");
                None
            }
        }
    }
}

fn default_max_sequence_length() -> usize {
    50
}

fn default_vocab_size() -> usize {
    10_000
}

fn default_embedding_dim() -> usize {
    300
}

/// A loaded predictor together with its provenance tag
pub struct LoadedArtifact {
    pub predictor: Arc<dyn Predictor>,
    pub provenance: ModelProvenance,
}

/// Loads the trained sequence model from storage, with tiered recovery.
pub struct ArtifactLoader {
    weights_path: PathBuf,
    hyperparams: ModelHyperparams,
    device: Device,
}

impl ArtifactLoader {
    /// Create a loader for the given checkpoint path
    pub fn new(weights_path: impl Into<PathBuf>, hyperparams: ModelHyperparams) -> Self {
        Self {
            weights_path: weights_path.into(),
            hyperparams,
            device: Device::Cpu,
        }
    }

    /// Run the recovery ladder.
    ///
    /// Progression is strictly forward: a failed tier is never retried, and
    /// the input-substitution tier only runs when the strict failure
    /// signature points at the input layer.
    pub fn load(&self) -> Result<LoadedArtifact> {
        match self.try_strict() {
            Ok(model) => {
                info!(tier = "strict", path = %self.weights_path.display(), "model artifact loaded");
                return Ok(LoadedArtifact {
                    predictor: Arc::new(model),
                    provenance: ModelProvenance::Real,
                });
            }
            Err(e) => {
                warn!(error = %e, "strict artifact load failed");
                if is_input_shape_mismatch(&e) {
                    match self.try_input_substitution() {
                        Ok(model) => {
                            info!(
                                tier = "input-substitution",
                                path = %self.weights_path.display(),
                                "model artifact loaded with substituted input layer"
                            );
                            return Ok(LoadedArtifact {
                                predictor: Arc::new(model),
                                provenance: ModelProvenance::Real,
                            });
                        }
                        Err(e) => {
                            warn!(error = %e, "input-substitution load failed");
                        }
                    }
                }
            }
        }

        let model = self.synthesize_placeholder()?;
        info!(tier = "placeholder", "serving synthesized placeholder model");
        Ok(LoadedArtifact {
            predictor: Arc::new(model),
            provenance: ModelProvenance::SyntheticPlaceholder,
        })
    }

    /// Tier 1: strict load of the checkpoint with the configured shape.
    fn try_strict(&self) -> Result<LstmClassifier> {
        if !self.weights_path.exists() {
            return Err(Error::artifact_missing(format!(
                "model file not found: {}",
                self.weights_path.display()
            )));
        }

        let vb = self.checkpoint_builder()?;
        LstmClassifier::build(
            vb,
            self.hyperparams.vocab_size,
            self.hyperparams.embedding_dim,
            &self.device,
        )
    }

    /// Tier 2: rebuild with the input-layer shape read back from the
    /// checkpoint itself. All other structure is unchanged.
    fn try_input_substitution(&self) -> Result<LstmClassifier> {
        let tensors = candle_core::safetensors::load(&self.weights_path, &self.device)
            .map_err(|e| Error::artifact_incompatible(e.to_string()))?;
        let embedding = tensors.get("embedding.weight").ok_or_else(|| {
            Error::artifact_incompatible("checkpoint has no embedding.weight tensor")
        })?;
        let (vocab_size, embedding_dim) = embedding
            .dims2()
            .map_err(|e| Error::artifact_incompatible(e.to_string()))?;

        let vb = self.checkpoint_builder()?;
        LstmClassifier::build(vb, vocab_size, embedding_dim, &self.device)
    }

    /// Tier 3: synthesize a structurally equivalent placeholder and exercise
    /// it with one pass of synthetic data so it is known to be callable.
    fn synthesize_placeholder(&self) -> Result<LstmClassifier> {
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &self.device);
        let model = LstmClassifier::build(
            vb,
            self.hyperparams.vocab_size,
            self.hyperparams.embedding_dim,
            &self.device,
        )?;

        let mut rng = rand::thread_rng();
        let batch: Vec<Vec<u32>> = (0..4)
            .map(|_| {
                (0..self.hyperparams.max_sequence_length)
                    .map(|_| rng.gen_range(0..self.hyperparams.vocab_size as u32))
                    .collect()
            })
            .collect();

        let probabilities = model.infer(&batch)?;
        let well_formed = probabilities.len() == batch.len()
            && probabilities
                .iter()
                .all(|p| p.is_finite() && (0.0..=1.0).contains(p));
        if !well_formed {
            return Err(Error::internal(
                "placeholder model produced malformed probabilities",
            ));
        }

        Ok(model)
    }

    fn checkpoint_builder(&self) -> Result<VarBuilder<'static>> {
        unsafe {
            VarBuilder::from_mmaped_safetensors(
                &[self.weights_path.clone()],
                DType::F32,
                &self.device,
            )
        }
        .map_err(|e| Error::artifact_incompatible(e.to_string()))
    }
}

/// Whether a strict-load failure points at an input-layer shape mismatch.
fn is_input_shape_mismatch(error: &Error) -> bool {
    if !matches!(error, Error::ArtifactIncompatible(_)) {
        return false;
    }
    let message = error.to_string();
    message.contains("shape") && message.contains("embedding")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperparam_defaults() {
        let hp = ModelHyperparams::default();
        assert_eq!(hp.max_sequence_length, 50);
        assert_eq!(hp.vocab_size, 10_000);
        assert_eq!(hp.embedding_dim, 300);
    }

    #[test]
    fn test_hyperparams_partial_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_config.json");
        std::fs::write(&path, r#"{"max_sequence_length": 25}"#).unwrap();

        let hp = ModelHyperparams::load(&path).unwrap();
        assert_eq!(hp.max_sequence_length, 25);
        assert_eq!(hp.vocab_size, 10_000);
    }

    #[test]
    fn test_hyperparams_absent_blob() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ModelHyperparams::load(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn test_missing_artifact_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let hyperparams = ModelHyperparams {
            max_sequence_length: 10,
            vocab_size: 200,
            embedding_dim: 16,
        };
        let loader = ArtifactLoader::new(dir.path().join("absent.safetensors"), hyperparams);

        let artifact = loader.load().unwrap();
        assert_eq!(artifact.provenance, ModelProvenance::SyntheticPlaceholder);

        let probabilities = artifact.predictor.infer(&[vec![1, 2, 3, 0, 0]]).unwrap();
        assert_eq!(probabilities.len(), 1);
        assert!((0.0..=1.0).contains(&probabilities[0]));
    }

    #[test]
    fn test_strict_load_of_saved_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.safetensors");
        let hyperparams = ModelHyperparams {
            max_sequence_length: 10,
            vocab_size: 200,
            embedding_dim: 16,
        };

        // Build a random model and persist its variables as a checkpoint.
        let device = Device::Cpu;
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        LstmClassifier::build(vb, 200, 16, &device).unwrap();
        varmap.save(&path).unwrap();

        let loader = ArtifactLoader::new(&path, hyperparams);
        let artifact = loader.load().unwrap();
        assert_eq!(artifact.provenance, ModelProvenance::Real);
    }

    #[test]
    fn test_input_substitution_recovers_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.safetensors");

        // Checkpoint written with a smaller input layer than configured.
        let device = Device::Cpu;
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        LstmClassifier::build(vb, 100, 8, &device).unwrap();
        varmap.save(&path).unwrap();

        let hyperparams = ModelHyperparams {
            max_sequence_length: 10,
            vocab_size: 200,
            embedding_dim: 8,
        };
        let loader = ArtifactLoader::new(&path, hyperparams);
        let artifact = loader.load().unwrap();

        // The declared shape wins over the configured one.
        assert_eq!(artifact.provenance, ModelProvenance::Real);
        assert!(artifact.predictor.infer(&[vec![1, 2, 3]]).is_ok());
    }

    #[test]
    fn test_corrupt_artifact_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.safetensors");
        std::fs::write(&path, b"not a checkpoint").unwrap();

        let hyperparams = ModelHyperparams {
            max_sequence_length: 10,
            vocab_size: 200,
            embedding_dim: 16,
        };
        let loader = ArtifactLoader::new(&path, hyperparams);
        let artifact = loader.load().unwrap();
        assert_eq!(artifact.provenance, ModelProvenance::SyntheticPlaceholder);
    }

    #[test]
    fn test_mismatch_signature_detection() {
        let mismatch = Error::artifact_incompatible("shape mismatch for embedding.weight");
        assert!(is_input_shape_mismatch(&mismatch));

        let missing = Error::artifact_missing("no such file");
        assert!(!is_input_shape_mismatch(&missing));

        let other = Error::artifact_incompatible("cannot find tensor encoder.weight_ih_l0");
        assert!(!is_input_shape_mismatch(&other));
    }
}
