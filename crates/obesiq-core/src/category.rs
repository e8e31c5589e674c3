//! Class-index → category and label translation.
//!
//! The classifier contract is integer-index only; every string label the
//! rest of the system displays is derived here, at a single boundary.

use serde::{Deserialize, Serialize};

/// Coarse weight bucket derived from the predicted class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl WeightCategory {
    /// Total over the classifier's 7-class output: 0 → Underweight,
    /// 1 → NormalWeight, {2,3} → Overweight, {4,5,6} → Obese.
    pub fn from_class_index(index: usize) -> Self {
        match index {
            0 => WeightCategory::Underweight,
            1 => WeightCategory::NormalWeight,
            2 | 3 => WeightCategory::Overweight,
            _ => WeightCategory::Obese,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightCategory::Underweight => "Underweight",
            WeightCategory::NormalWeight => "Normal weight",
            WeightCategory::Overweight => "Overweight",
            WeightCategory::Obese => "Obesity",
        }
    }
}

/// Coarse risk level shown next to the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// One of the seven obesity-severity classes the model predicts.
///
/// `identifier()` is the stable model-side class name; `display()` is the
/// human-readable string. Both tables are a fixed bijection with the
/// integer class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObesityClass {
    InsufficientWeight,
    NormalWeight,
    OverweightLevelI,
    OverweightLevelII,
    ObesityTypeI,
    ObesityTypeII,
    ObesityTypeIII,
}

impl ObesityClass {
    pub const ALL: [ObesityClass; 7] = [
        ObesityClass::InsufficientWeight,
        ObesityClass::NormalWeight,
        ObesityClass::OverweightLevelI,
        ObesityClass::OverweightLevelII,
        ObesityClass::ObesityTypeI,
        ObesityClass::ObesityTypeII,
        ObesityClass::ObesityTypeIII,
    ];

    /// Returns None for indices outside the fixed 7-class output.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Stable class identifier used by the model artifact.
    pub fn identifier(&self) -> &'static str {
        match self {
            ObesityClass::InsufficientWeight => "Insufficient_Weight",
            ObesityClass::NormalWeight => "Normal_Weight",
            ObesityClass::OverweightLevelI => "Overweight_Level_I",
            ObesityClass::OverweightLevelII => "Overweight_Level_II",
            ObesityClass::ObesityTypeI => "Obesity_Type_I",
            ObesityClass::ObesityTypeII => "Obesity_Type_II",
            ObesityClass::ObesityTypeIII => "Obesity_Type_III",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            ObesityClass::InsufficientWeight => "Insufficient weight",
            ObesityClass::NormalWeight => "Normal weight",
            ObesityClass::OverweightLevelI => "Overweight level I",
            ObesityClass::OverweightLevelII => "Overweight level II",
            ObesityClass::ObesityTypeI => "Obesity type I",
            ObesityClass::ObesityTypeII => "Obesity type II",
            ObesityClass::ObesityTypeIII => "Obesity type III",
        }
    }

    /// Display color for the severity gauge, green through violet.
    pub fn risk_color(&self) -> &'static str {
        match self {
            ObesityClass::InsufficientWeight => "#4CAF50",
            ObesityClass::NormalWeight => "#8BC34A",
            ObesityClass::OverweightLevelI => "#FFC107",
            ObesityClass::OverweightLevelII => "#FF9800",
            ObesityClass::ObesityTypeI => "#FF5722",
            ObesityClass::ObesityTypeII => "#F44336",
            ObesityClass::ObesityTypeIII => "#9C27B0",
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self.index() {
            0 | 1 => RiskLevel::Low,
            2 | 3 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    pub fn weight_category(&self) -> WeightCategory {
        WeightCategory::from_class_index(self.index())
    }
}
