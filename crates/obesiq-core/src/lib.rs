//! obesiq-core — domain logic for the obesity-risk dashboard.
//!
//! Everything in this crate is a pure, synchronous function over its
//! arguments:
//!   - typed user profile with range validation
//!   - BMI computation and the 4-way BMI partition
//!   - class-index → category/label translation (single boundary)
//!   - input normalization into the classifier's feature record
//!   - declarative advice and risk/protective factor rule tables

pub mod advice;
pub mod bmi;
pub mod category;
pub mod normalize;
pub mod profile;
pub mod risk;

pub use advice::{
    advise, base_nutrition, base_physical_activity, AdviceBundle, AdviceCategory, LIFESTYLE_BASE,
};
pub use bmi::{bmi, BmiCategory};
pub use category::{ObesityClass, RiskLevel, WeightCategory};
pub use normalize::{normalize, FeatureRecord};
pub use profile::{Frequency, Sex, Transport, UserProfile};
pub use risk::{protective_factors, risk_factors, risk_profile, RiskProfile};
