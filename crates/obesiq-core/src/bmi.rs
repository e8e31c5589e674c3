//! Body Mass Index computation and the clinical 4-way partition.

use obesiq_common::{ObesiqError, Result};
use serde::{Deserialize, Serialize};

/// BMI = weight(kg) / height(m)².
///
/// A non-positive height makes the quotient undefined and is rejected as a
/// domain error rather than silently returning 0 or infinity.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if height_m <= 0.0 {
        return Err(ObesiqError::Domain(format!(
            "invalid height: {height_m} m"
        )));
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Clinical BMI bucket. Partition is total: no gaps, no overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// <18.5 → Underweight, [18.5, 25) → Normal, [25, 30) → Overweight,
    /// ≥30 → Obese.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal_example() {
        // 1.70 m / 70 kg → 24.22, Normal weight
        let value = bmi(70.0, 1.70).unwrap();
        assert!((value - 24.22).abs() < 0.01);
        assert_eq!(BmiCategory::classify(value), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_obese_example() {
        // 1.70 m / 90 kg → 31.14, Obesity
        let value = bmi(90.0, 1.70).unwrap();
        assert!((value - 31.14).abs() < 0.01);
        assert_eq!(BmiCategory::classify(value), BmiCategory::Obese);
    }

    #[test]
    fn test_zero_height_is_domain_error() {
        let err = bmi(70.0, 0.0).unwrap_err();
        assert!(matches!(err, ObesiqError::Domain(_)));
    }

    #[test]
    fn test_negative_height_is_domain_error() {
        assert!(bmi(70.0, -1.7).is_err());
    }

    #[test]
    fn test_partition_boundaries() {
        assert_eq!(BmiCategory::classify(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }
}
