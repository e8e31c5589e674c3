//! Risk and protective factor identification.
//!
//! Same declarative shape as the advice rules: fixed-order tables of
//! independent predicates, each mapping to a distinct label, so no dedup
//! pass is needed. The BMI pair at the head of the risk list is the one
//! mutually exclusive check.

use obesiq_common::Result;
use serde::{Deserialize, Serialize};

use crate::bmi::bmi;
use crate::normalize::coerce_yes_no;
use crate::profile::{Frequency, UserProfile};

/// Factor labels for one assessment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskProfile {
    pub risk_factors: Vec<String>,
    pub protective_factors: Vec<String>,
}

struct FactorRule {
    label: &'static str,
    applies: fn(&UserProfile) -> bool,
}

const RISK_RULES: [FactorRule; 5] = [
    FactorRule {
        label: "Family history of obesity",
        applies: |p| coerce_yes_no(&p.family_history) == 1,
    },
    FactorRule {
        label: "Sedentary lifestyle",
        applies: |p| p.activity_freq < 1,
    },
    FactorRule {
        label: "Frequent snacking",
        applies: |p| p.snacking == Frequency::Always,
    },
    FactorRule {
        label: "Low vegetable consumption",
        applies: |p| p.vegetable_freq < 1,
    },
    FactorRule {
        label: "High stress level",
        applies: |p| p.stress > 2,
    },
];

const PROTECTIVE_RULES: [FactorRule; 6] = [
    FactorRule {
        label: "Regular physical activity",
        applies: |p| p.activity_freq >= 3,
    },
    FactorRule {
        label: "High vegetable consumption",
        applies: |p| p.vegetable_freq >= 3,
    },
    FactorRule {
        label: "Adequate hydration",
        applies: |p| p.water_intake >= 2,
    },
    FactorRule {
        label: "Calorie tracking",
        applies: |p| coerce_yes_no(&p.calorie_tracking) == 1,
    },
    FactorRule {
        label: "Non-smoker",
        applies: |p| coerce_yes_no(&p.smoker) == 0,
    },
    FactorRule {
        label: "Active transport",
        applies: |p| p.transport.is_active(),
    },
];

/// Identify the main risk factors.
///
/// The BMI check comes first and is the only mutually exclusive pair:
/// ≥30 contributes the high-BMI label, [25, 30) the overweight label,
/// below 25 nothing. A degenerate height is a domain error.
pub fn risk_factors(profile: &UserProfile) -> Result<Vec<String>> {
    let mut factors = Vec::new();

    let value = bmi(profile.weight_kg, profile.height_m)?;
    if value >= 30.0 {
        factors.push("High BMI (>=30)".to_string());
    } else if value >= 25.0 {
        factors.push("Overweight (BMI 25-30)".to_string());
    }

    for rule in &RISK_RULES {
        if (rule.applies)(profile) {
            factors.push(rule.label.to_string());
        }
    }

    tracing::debug!(bmi = format!("{value:.1}"), count = factors.len(), "risk factors identified");

    Ok(factors)
}

/// Identify protective factors. Pure over the profile; no BMI involved.
pub fn protective_factors(profile: &UserProfile) -> Vec<String> {
    PROTECTIVE_RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| rule.label.to_string())
        .collect()
}

/// Both factor lists for one assessment.
pub fn risk_profile(profile: &UserProfile) -> Result<RiskProfile> {
    Ok(RiskProfile {
        risk_factors: risk_factors(profile)?,
        protective_factors: protective_factors(profile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Transport;

    #[test]
    fn test_high_bmi_is_flagged() {
        // 1.70 m / 90 kg → BMI 31.14
        let profile = UserProfile {
            weight_kg: 90.0,
            ..UserProfile::default()
        };
        let factors = risk_factors(&profile).unwrap();
        assert_eq!(factors[0], "High BMI (>=30)");
    }

    #[test]
    fn test_bmi_pair_is_mutually_exclusive() {
        // 1.70 m / 80 kg → BMI 27.7, overweight band only
        let profile = UserProfile {
            weight_kg: 80.0,
            ..UserProfile::default()
        };
        let factors = risk_factors(&profile).unwrap();
        assert!(factors.contains(&"Overweight (BMI 25-30)".to_string()));
        assert!(!factors.contains(&"High BMI (>=30)".to_string()));
    }

    #[test]
    fn test_normal_bmi_contributes_nothing() {
        let factors = risk_factors(&UserProfile::default()).unwrap();
        assert!(!factors.iter().any(|f| f.contains("BMI")));
    }

    #[test]
    fn test_zero_height_is_domain_error() {
        // Bypasses validation on purpose: risk computation must still
        // refuse to divide by zero.
        let profile = UserProfile {
            height_m: 0.0,
            ..UserProfile::default()
        };
        assert!(risk_factors(&profile).is_err());
        assert!(risk_profile(&profile).is_err());
    }

    #[test]
    fn test_snacking_always_is_a_risk_factor() {
        let profile = UserProfile {
            snacking: Frequency::Always,
            ..UserProfile::default()
        };
        let factors = risk_factors(&profile).unwrap();
        assert!(factors.contains(&"Frequent snacking".to_string()));
    }

    #[test]
    fn test_risk_factors_fixed_order() {
        let profile = UserProfile {
            weight_kg: 95.0,
            family_history: "Yes".to_string(),
            activity_freq: 0,
            snacking: Frequency::Always,
            vegetable_freq: 0,
            stress: 4,
            ..UserProfile::default()
        };
        let factors = risk_factors(&profile).unwrap();
        assert_eq!(
            factors,
            [
                "High BMI (>=30)",
                "Family history of obesity",
                "Sedentary lifestyle",
                "Frequent snacking",
                "Low vegetable consumption",
                "High stress level",
            ]
        );
    }

    #[test]
    fn test_all_protective_factors() {
        let profile = UserProfile {
            activity_freq: 4,
            vegetable_freq: 3,
            water_intake: 2,
            calorie_tracking: "Yes".to_string(),
            smoker: "No".to_string(),
            transport: Transport::Bicycle,
            ..UserProfile::default()
        };
        assert_eq!(
            protective_factors(&profile),
            [
                "Regular physical activity",
                "High vegetable consumption",
                "Adequate hydration",
                "Calorie tracking",
                "Non-smoker",
                "Active transport",
            ]
        );
    }

    #[test]
    fn test_smoker_is_not_protective() {
        let profile = UserProfile {
            smoker: "Yes".to_string(),
            ..UserProfile::default()
        };
        assert!(!protective_factors(&profile).contains(&"Non-smoker".to_string()));
    }
}
