//! Predictor capability and the LSTM sentiment classifier
//!
//! Both the trained artifact and the synthesized placeholder share the same
//! network structure (embedding, LSTM encoder, dense classifier head) and are
//! invoked through the single [`Predictor`] capability.

use candle_core::{Device, Tensor};
use candle_nn::{Embedding, LSTMConfig, Linear, Module, VarBuilder, LSTM, RNN};
use sentiq_core::{Error, Result};

/// Hidden size of the LSTM encoder
pub const ENCODER_HIDDEN_DIM: usize = 128;

/// Width of the intermediate dense layer
pub const DENSE_HIDDEN_DIM: usize = 64;

/// Capability exposed by every model artifact: a batch of token sequences in,
/// one positive-class probability per sequence out.
pub trait Predictor: Send + Sync {
    fn infer(&self, batch: &[Vec<u32>]) -> Result<Vec<f32>>;
}

/// LSTM sequence classifier.
///
/// Topology: embedding, LSTM encoder, dense(relu), dense(sigmoid). The
/// sigmoid head keeps every output inside `[0, 1]`.
pub struct LstmClassifier {
    embedding: Embedding,
    encoder: LSTM,
    hidden: Linear,
    output: Linear,
    device: Device,
}

impl LstmClassifier {
    /// Build the network from a `VarBuilder`.
    ///
    /// With a checkpoint-backed builder this loads the trained weights; with
    /// a fresh `VarMap` it creates a randomly initialized placeholder of the
    /// same shape.
    pub fn build(
        vb: VarBuilder,
        vocab_size: usize,
        embedding_dim: usize,
        device: &Device,
    ) -> Result<Self> {
        let embedding = candle_nn::embedding(vocab_size, embedding_dim, vb.pp("embedding"))
            .map_err(build_err)?;
        let encoder = candle_nn::lstm(
            embedding_dim,
            ENCODER_HIDDEN_DIM,
            LSTMConfig::default(),
            vb.pp("encoder"),
        )
        .map_err(build_err)?;
        let hidden =
            candle_nn::linear(ENCODER_HIDDEN_DIM, DENSE_HIDDEN_DIM, vb.pp("hidden")).map_err(build_err)?;
        let output = candle_nn::linear(DENSE_HIDDEN_DIM, 1, vb.pp("output")).map_err(build_err)?;

        Ok(Self {
            embedding,
            encoder,
            hidden,
            output,
            device: device.clone(),
        })
    }
}

impl Predictor for LstmClassifier {
    fn infer(&self, batch: &[Vec<u32>]) -> Result<Vec<f32>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        let seq_len = batch[0].len();
        if seq_len == 0 || batch.iter().any(|sequence| sequence.len() != seq_len) {
            return Err(Error::inference(
                "batch sequences must share a non-zero length",
            ));
        }

        let flat: Vec<u32> = batch.iter().flatten().copied().collect();
        let input =
            Tensor::from_vec(flat, (batch.len(), seq_len), &self.device).map_err(invoke_err)?;

        let embedded = self.embedding.forward(&input).map_err(invoke_err)?;
        let states = self.encoder.seq(&embedded).map_err(invoke_err)?;
        let last = states
            .last()
            .ok_or_else(|| Error::inference("encoder produced no states"))?;

        let hidden = self
            .hidden
            .forward(last.h())
            .map_err(invoke_err)?
            .relu()
            .map_err(invoke_err)?;
        let logits = self.output.forward(&hidden).map_err(invoke_err)?;
        let probabilities = candle_nn::ops::sigmoid(&logits).map_err(invoke_err)?;

        probabilities
            .squeeze(1)
            .map_err(invoke_err)?
            .to_vec1::<f32>()
            .map_err(invoke_err)
    }
}

fn build_err(e: candle_core::Error) -> Error {
    Error::artifact_incompatible(e.to_string())
}

fn invoke_err(e: candle_core::Error) -> Error {
    Error::inference(e.to_string())
}
