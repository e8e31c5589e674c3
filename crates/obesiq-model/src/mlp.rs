//! MLP classifier backend loaded from a safetensors artifact.
//!
//! The artifact is a pair of files: a JSON manifest describing the layer
//! dimensions and a safetensors file holding `fc1`/`fc2` weights exported
//! by the training pipeline. Loaded once, immutable afterwards.

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use obesiq_common::{ObesiqError, Result};
use obesiq_core::FeatureRecord;
use serde::Deserialize;
use tracing::info;

use crate::encode::{encode, INPUT_DIM};
use crate::{Classifier, Prediction, NUM_CLASSES};

/// Layer dimensions as exported next to the weights.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactManifest {
    pub input_dim: usize,
    pub hidden_dim: usize,
    pub num_classes: usize,
}

#[derive(Debug)]
pub struct MlpClassifier {
    fc1: Linear,
    fc2: Linear,
    device: Device,
}

impl MlpClassifier {
    /// Load the artifact from disk. Any failure here is
    /// `ModelUnavailable`: fatal to the request that needed it, never to
    /// the process.
    pub fn load(manifest_path: &Path, weights_path: &Path, use_gpu: bool) -> Result<Self> {
        let manifest_raw = std::fs::read_to_string(manifest_path).map_err(|e| {
            ObesiqError::ModelUnavailable(format!(
                "cannot read manifest {}: {e}",
                manifest_path.display()
            ))
        })?;
        let manifest: ArtifactManifest = serde_json::from_str(&manifest_raw)
            .map_err(|e| ObesiqError::ModelUnavailable(format!("bad manifest: {e}")))?;

        if manifest.input_dim != INPUT_DIM || manifest.num_classes != NUM_CLASSES {
            return Err(ObesiqError::ModelUnavailable(format!(
                "artifact schema mismatch: expects {}x{}, artifact is {}x{}",
                INPUT_DIM, NUM_CLASSES, manifest.input_dim, manifest.num_classes
            )));
        }

        let device = if use_gpu {
            Device::cuda_if_available(0).unwrap_or(Device::Cpu)
        } else {
            Device::Cpu
        };

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, &device)
                .map_err(|e| ObesiqError::ModelUnavailable(format!("weights load: {e}")))?
        };

        let fc1 = candle_nn::linear(manifest.input_dim, manifest.hidden_dim, vb.pp("fc1"))
            .map_err(|e| ObesiqError::ModelUnavailable(format!("fc1: {e}")))?;
        let fc2 = candle_nn::linear(manifest.hidden_dim, manifest.num_classes, vb.pp("fc2"))
            .map_err(|e| ObesiqError::ModelUnavailable(format!("fc2: {e}")))?;

        info!(
            manifest = %manifest_path.display(),
            hidden = manifest.hidden_dim,
            device = ?device,
            "classifier artifact loaded"
        );

        Ok(Self { fc1, fc2, device })
    }

    /// Assemble from already-built layers. Used by tests.
    pub fn from_layers(fc1: Linear, fc2: Linear, device: Device) -> Self {
        Self { fc1, fc2, device }
    }

    fn forward(&self, input: Tensor) -> candle_core::Result<Vec<f32>> {
        let hidden = self.fc1.forward(&input)?.relu()?;
        let logits = self.fc2.forward(&hidden)?;
        let probs = candle_nn::ops::softmax(&logits, 1)?;
        Ok(probs.to_vec2::<f32>()?.remove(0))
    }
}

impl Classifier for MlpClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<Prediction> {
        let features = encode(record);
        let input = Tensor::from_vec(features, (1, INPUT_DIM), &self.device)
            .map_err(|e| ObesiqError::Other(anyhow::anyhow!(e)))?;

        let probabilities = self
            .forward(input)
            .map_err(|e| ObesiqError::Other(anyhow::anyhow!(e)))?;

        let class_index = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);

        Ok(Prediction {
            class_index,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obesiq_core::{normalize, UserProfile};

    fn fixed_logit_classifier(hot_class: usize) -> MlpClassifier {
        // Zero weights throughout; fc2 bias puts all mass on one class.
        let device = Device::Cpu;
        let hidden = 4;
        let w1 = Tensor::zeros((hidden, INPUT_DIM), DType::F32, &device).unwrap();
        let b1 = Tensor::zeros(hidden, DType::F32, &device).unwrap();
        let mut bias = vec![0.0f32; NUM_CLASSES];
        bias[hot_class] = 8.0;
        let w2 = Tensor::zeros((NUM_CLASSES, hidden), DType::F32, &device).unwrap();
        let b2 = Tensor::from_vec(bias, NUM_CLASSES, &device).unwrap();
        MlpClassifier::from_layers(
            Linear::new(w1, Some(b1)),
            Linear::new(w2, Some(b2)),
            device,
        )
    }

    #[test]
    fn test_predict_returns_seven_probabilities_summing_to_one() {
        let classifier = fixed_logit_classifier(3);
        let record = normalize(&UserProfile::default());
        let prediction = classifier.predict(&record).unwrap();
        assert_eq!(prediction.probabilities.len(), NUM_CLASSES);
        let total: f32 = prediction.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_predict_argmax_follows_logits() {
        let classifier = fixed_logit_classifier(5);
        let record = normalize(&UserProfile::default());
        let prediction = classifier.predict(&record).unwrap();
        assert_eq!(prediction.class_index, 5);
        assert!(prediction.confidence() > 0.9);
    }

    #[test]
    fn test_missing_artifact_is_model_unavailable() {
        let err = MlpClassifier::load(
            Path::new("/nonexistent/manifest.json"),
            Path::new("/nonexistent/weights.safetensors"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ObesiqError::ModelUnavailable(_)));
    }
}
