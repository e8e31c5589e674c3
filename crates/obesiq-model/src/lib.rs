//! obesiq-model — the classifier seam.
//!
//! The dashboard treats the predictive model as an opaque function from a
//! normalized feature record to an integer class index plus a probability
//! vector. The [`Classifier`] trait is that contract; implementations own
//! their categorical encoding and artifact format.

pub mod encode;
pub mod mlp;
pub mod mock;

use obesiq_common::Result;
use obesiq_core::FeatureRecord;
use serde::{Deserialize, Serialize};

pub use mlp::MlpClassifier;
pub use mock::MockClassifier;

/// The classifier's fixed output width.
pub const NUM_CLASSES: usize = 7;

/// One inference result: class index in [0, 6] and the per-class
/// probability vector (7 floats summing to 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class_index: usize,
    pub probabilities: Vec<f32>,
}

impl Prediction {
    /// Probability mass at the predicted index.
    pub fn confidence(&self) -> f32 {
        self.probabilities
            .get(self.class_index)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Contract every classifier backend implements.
///
/// Implementations are immutable after construction and safe to share
/// across request handlers without synchronization.
pub trait Classifier: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<Prediction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_reads_predicted_index() {
        let prediction = Prediction {
            class_index: 2,
            probabilities: vec![0.1, 0.1, 0.6, 0.1, 0.05, 0.03, 0.02],
        };
        assert!((prediction.confidence() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_out_of_range_index_is_zero() {
        let prediction = Prediction {
            class_index: 9,
            probabilities: vec![1.0; NUM_CLASSES],
        };
        assert_eq!(prediction.confidence(), 0.0);
    }
}
