//! User-provided health and lifestyle attributes.
//!
//! Every field is required at construction time; missing form data is a
//! deserialization error upstream, never a silent zero. Range checks live
//! in [`UserProfile::validate`] and run before normalization or inference.

use obesiq_common::{ObesiqError, Result};
use serde::{Deserialize, Serialize};

/// Biological sex as recorded in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Wire string for the classifier's categorical `sex` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// Consumption frequency scale shared by the snacking and alcohol fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Never,
    Sometimes,
    Frequently,
    Always,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Never => "Never",
            Frequency::Sometimes => "Sometimes",
            Frequency::Frequently => "Frequently",
            Frequency::Always => "Always",
        }
    }
}

/// Primary transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    Walking,
    Bicycle,
    /// Also accepted under its wire spelling, as emitted by the form.
    #[serde(alias = "Public_Transit")]
    PublicTransit,
    Car,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Walking => "Walking",
            Transport::Bicycle => "Bicycle",
            Transport::PublicTransit => "Public_Transit",
            Transport::Car => "Car",
        }
    }

    /// Walking and cycling count as active transport for the rule tables.
    pub fn is_active(&self) -> bool {
        matches!(self, Transport::Walking | Transport::Bicycle)
    }
}

/// One respondent's answers, as collected by the assessment form.
///
/// The three yes/no questions are kept as the raw answer strings; the
/// normalizer applies the fail-open binary coercion documented in
/// [`crate::normalize::coerce_yes_no`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    /// Years, valid range 10–100.
    pub age: u32,
    /// Metres, valid range 1.0–2.5.
    pub height_m: f64,
    /// Kilograms, valid range 30–300.
    pub weight_kg: f64,
    /// Family history of overweight (yes/no answer).
    pub family_history: String,
    /// Smoking status (yes/no answer).
    pub smoker: String,
    /// Whether the respondent tracks calories (yes/no answer).
    pub calorie_tracking: String,
    /// Vegetable servings per day, 0–5.
    pub vegetable_freq: u8,
    /// Main meals per day, 1–5.
    pub meals_per_day: u8,
    /// Litres of water per day, 0–5.
    pub water_intake: u8,
    pub snacking: Frequency,
    pub alcohol: Frequency,
    /// Physical activity days per week, 0–7.
    pub activity_freq: u8,
    /// Screen time hours per day, 0–12.
    pub screen_time: u8,
    /// Self-reported stress level, 0–5.
    pub stress: u8,
    pub transport: Transport,
}

impl UserProfile {
    /// Check the documented numeric ranges. Runs before normalization and
    /// inference; out-of-range values are reported, never coerced.
    pub fn validate(&self) -> Result<()> {
        if !(10..=100).contains(&self.age) {
            return Err(ObesiqError::Validation(format!(
                "age must be between 10 and 100 years (got {})",
                self.age
            )));
        }
        if !(1.0..=2.5).contains(&self.height_m) {
            return Err(ObesiqError::Validation(format!(
                "height must be between 1.0 and 2.5 metres (got {})",
                self.height_m
            )));
        }
        if !(30.0..=300.0).contains(&self.weight_kg) {
            return Err(ObesiqError::Validation(format!(
                "weight must be between 30 and 300 kg (got {})",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

impl Default for UserProfile {
    /// Mirrors the assessment form's initial values.
    fn default() -> Self {
        Self {
            sex: Sex::Female,
            age: 30,
            height_m: 1.70,
            weight_kg: 70.0,
            family_history: "No".to_string(),
            smoker: "No".to_string(),
            calorie_tracking: "No".to_string(),
            vegetable_freq: 2,
            meals_per_day: 3,
            water_intake: 2,
            snacking: Frequency::Sometimes,
            alcohol: Frequency::Sometimes,
            activity_freq: 2,
            screen_time: 4,
            stress: 1,
            transport: Transport::Walking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(UserProfile::default().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let profile = UserProfile {
            age: 9,
            ..UserProfile::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_height_out_of_range() {
        let profile = UserProfile {
            height_m: 2.6,
            ..UserProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_weight_bounds_inclusive() {
        let low = UserProfile {
            weight_kg: 30.0,
            ..UserProfile::default()
        };
        let high = UserProfile {
            weight_kg: 300.0,
            ..UserProfile::default()
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_transport_accepts_wire_spelling() {
        // The assessment form posts option values in wire spelling.
        let transport: Transport = serde_json::from_str(r#""Public_Transit""#).unwrap();
        assert_eq!(transport, Transport::PublicTransit);
        let transport: Transport = serde_json::from_str(r#""PublicTransit""#).unwrap();
        assert_eq!(transport, Transport::PublicTransit);
    }

    #[test]
    fn test_active_transport() {
        assert!(Transport::Walking.is_active());
        assert!(Transport::Bicycle.is_active());
        assert!(!Transport::Car.is_active());
        assert!(!Transport::PublicTransit.is_active());
    }
}
