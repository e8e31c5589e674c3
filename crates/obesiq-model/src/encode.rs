//! Categorical encoding for the MLP backend.
//!
//! The normalizer hands over raw category strings; encoding them is the
//! classifier's own concern. Vocabularies are fixed by the artifact's
//! training pipeline. An unknown category encodes as an all-zero block,
//! consistent with the fail-open policy of the rest of the input path.

use obesiq_core::FeatureRecord;

pub const SEX_VALUES: [&str; 2] = ["Female", "Male"];
pub const FREQUENCY_VALUES: [&str; 4] = ["Never", "Sometimes", "Frequently", "Always"];
pub const TRANSPORT_VALUES: [&str; 4] = ["Walking", "Bicycle", "Public_Transit", "Car"];

/// 12 numeric columns plus one-hot blocks for sex (2), snacking (4),
/// alcohol (4) and transport (4). The identifier column is a schema
/// placeholder and is dropped here.
pub const INPUT_DIM: usize = 12 + SEX_VALUES.len() + 2 * FREQUENCY_VALUES.len() + TRANSPORT_VALUES.len();

fn push_one_hot(out: &mut Vec<f32>, value: &str, vocab: &[&str]) {
    for candidate in vocab {
        out.push(f32::from(u8::from(*candidate == value)));
    }
}

/// Flatten a feature record into the MLP's input vector.
pub fn encode(record: &FeatureRecord) -> Vec<f32> {
    let mut out = Vec::with_capacity(INPUT_DIM);
    out.push(record.age as f32);
    out.push(record.height_m as f32);
    out.push(record.weight_kg as f32);
    out.push(f32::from(record.family_history_overweight));
    out.push(f32::from(record.frequent_caloric_consumption));
    out.push(f32::from(record.vegetable_frequency));
    out.push(f32::from(record.meals_per_day));
    out.push(f32::from(record.smoker));
    out.push(f32::from(record.water_liters_per_day));
    out.push(f32::from(record.calorie_tracking));
    out.push(f32::from(record.weekly_activity));
    out.push(f32::from(record.screen_time));
    push_one_hot(&mut out, &record.sex, &SEX_VALUES);
    push_one_hot(&mut out, &record.snacking, &FREQUENCY_VALUES);
    push_one_hot(&mut out, &record.alcohol, &FREQUENCY_VALUES);
    push_one_hot(&mut out, &record.transport, &TRANSPORT_VALUES);
    debug_assert_eq!(out.len(), INPUT_DIM);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use obesiq_core::{normalize, UserProfile};

    #[test]
    fn test_encoded_length_matches_input_dim() {
        let record = normalize(&UserProfile::default());
        assert_eq!(encode(&record).len(), INPUT_DIM);
    }

    #[test]
    fn test_one_hot_blocks_are_exclusive() {
        let record = normalize(&UserProfile::default());
        let v = encode(&record);
        // sex block
        assert_eq!(v[12..14].iter().sum::<f32>(), 1.0);
        // snacking / alcohol / transport blocks
        assert_eq!(v[14..18].iter().sum::<f32>(), 1.0);
        assert_eq!(v[18..22].iter().sum::<f32>(), 1.0);
        assert_eq!(v[22..26].iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_unknown_category_encodes_as_zeros() {
        let mut record = normalize(&UserProfile::default());
        record.transport = "Teleporter".to_string();
        let v = encode(&record);
        assert!(v[22..26].iter().all(|&x| x == 0.0));
    }
}
