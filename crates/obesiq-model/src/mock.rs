//! Deterministic BMI-threshold classifier for tests and artifact-less
//! development runs.

use obesiq_common::Result;
use obesiq_core::{bmi, FeatureRecord};

use crate::{Classifier, Prediction, NUM_CLASSES};

/// Maps BMI straight onto the seven severity classes using the WHO cut
/// points. Probability mass is concentrated on the chosen class with the
/// remainder spread evenly, so vectors still sum to 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockClassifier;

impl MockClassifier {
    pub fn new() -> Self {
        Self
    }

    fn class_for_bmi(value: f64) -> usize {
        if value < 18.5 {
            0
        } else if value < 25.0 {
            1
        } else if value < 27.5 {
            2
        } else if value < 30.0 {
            3
        } else if value < 35.0 {
            4
        } else if value < 40.0 {
            5
        } else {
            6
        }
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<Prediction> {
        let value = bmi(record.weight_kg, record.height_m)?;
        let class_index = Self::class_for_bmi(value);

        let mut probabilities = vec![0.05f32; NUM_CLASSES];
        probabilities[class_index] = 0.70;

        Ok(Prediction {
            class_index,
            probabilities,
        })
    }
}
