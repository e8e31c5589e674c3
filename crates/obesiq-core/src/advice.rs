//! Personalized advice: category-keyed base tables plus a declarative,
//! ordered table of independent conditional rules.
//!
//! `advise` is deterministic and pure. Base items come first in
//! declaration order, then conditional items in rule-declaration order.
//! No rule depends on another's outcome, so each is testable in isolation.

use serde::{Deserialize, Serialize};

use crate::category::WeightCategory;
use crate::profile::{Frequency, UserProfile};

/// Advice display category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceCategory {
    Nutrition,
    PhysicalActivity,
    Lifestyle,
}

/// The three ordered advice lists produced per assessment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdviceBundle {
    pub nutrition: Vec<String>,
    pub physical_activity: Vec<String>,
    pub lifestyle: Vec<String>,
}

impl AdviceBundle {
    fn list_mut(&mut self, category: AdviceCategory) -> &mut Vec<String> {
        match category {
            AdviceCategory::Nutrition => &mut self.nutrition,
            AdviceCategory::PhysicalActivity => &mut self.physical_activity,
            AdviceCategory::Lifestyle => &mut self.lifestyle,
        }
    }
}

/// Base nutrition advice per weight category.
pub fn base_nutrition(category: WeightCategory) -> &'static [&'static str] {
    match category {
        WeightCategory::Underweight => &[
            "Increase your caloric intake with nutrient-dense foods",
            "Eat more protein (lean meat, legumes, nuts)",
            "Add healthy snacks between meals",
            "Drink calorie- and nutrient-rich smoothies",
        ],
        WeightCategory::NormalWeight => &[
            "Maintain a balanced and varied diet",
            "Eat 5 servings of fruit and vegetables per day",
            "Favor lean proteins and oily fish",
            "Drink enough water (1.5-2 L per day)",
        ],
        WeightCategory::Overweight => &[
            "Reduce portion sizes and favor vegetables",
            "Limit processed and sugary foods",
            "Eat slowly and listen to your satiety",
            "Replace sugary drinks with water",
        ],
        WeightCategory::Obese => &[
            "Consult a nutritionist for a personalized plan",
            "Keep a food diary to identify habits",
            "Fill half of your plate with vegetables",
            "Keep regular meal times",
        ],
    }
}

/// Base physical-activity advice per weight category.
pub fn base_physical_activity(category: WeightCategory) -> &'static [&'static str] {
    match category {
        WeightCategory::Underweight => &[
            "Favor strength training to build muscle mass",
            "Start with 20-30 minutes of moderate exercise",
            "Include strengthening and stretching exercises",
        ],
        WeightCategory::NormalWeight => &[
            "Maintain 150 minutes of moderate activity per week",
            "Add 2 strength-training sessions per week",
            "Build more walking into your daily routine",
        ],
        WeightCategory::Overweight => &[
            "Increase your physical activity progressively",
            "Favor cardio activities (cycling, swimming, walking)",
            "Aim for 45-60 minutes of exercise 5 times per week",
        ],
        WeightCategory::Obese => &[
            "Consult a doctor before starting an exercise program",
            "Start with daily walking (10-15 minutes)",
            "Favor low-impact activities (swimming, aqua aerobics)",
        ],
    }
}

/// Lifestyle advice does not vary by weight category.
pub const LIFESTYLE_BASE: [&str; 4] = [
    "Sleep 7-9 hours per night to regulate hormones",
    "Practice stress management (meditation, yoga)",
    "Limit screen time, especially before bed",
    "Surround yourself with social support for your health goals",
];

struct ConditionalRule {
    category: AdviceCategory,
    message: &'static str,
    applies: fn(&UserProfile) -> bool,
}

/// Evaluated unconditionally and independently, in declaration order.
const CONDITIONAL_RULES: [ConditionalRule; 7] = [
    ConditionalRule {
        category: AdviceCategory::Nutrition,
        message: "Increase vegetable consumption at every meal",
        applies: |p| p.vegetable_freq < 2,
    },
    ConditionalRule {
        category: AdviceCategory::PhysicalActivity,
        message: "Increase your physical activity step by step",
        applies: |p| p.activity_freq < 2,
    },
    ConditionalRule {
        category: AdviceCategory::Lifestyle,
        message: "Drink more water throughout the day",
        applies: |p| p.water_intake < 2,
    },
    ConditionalRule {
        category: AdviceCategory::Nutrition,
        message: "Replace snacking with healthy alternatives (fruit, nuts)",
        applies: |p| p.snacking == Frequency::Always,
    },
    ConditionalRule {
        category: AdviceCategory::Lifestyle,
        message: "Practice relaxation techniques to manage stress",
        applies: |p| p.stress > 2,
    },
    ConditionalRule {
        category: AdviceCategory::Lifestyle,
        message: "Reduce screen time and move more during breaks",
        applies: |p| p.screen_time > 2,
    },
    ConditionalRule {
        category: AdviceCategory::PhysicalActivity,
        message: "Build more walking or cycling into your commute",
        applies: |p| !p.transport.is_active(),
    },
];

/// Build the advice bundle for a predicted class index and profile.
pub fn advise(class_index: usize, profile: &UserProfile) -> AdviceBundle {
    let category = WeightCategory::from_class_index(class_index);

    let mut bundle = AdviceBundle {
        nutrition: base_nutrition(category).iter().map(|s| s.to_string()).collect(),
        physical_activity: base_physical_activity(category)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        lifestyle: LIFESTYLE_BASE.iter().map(|s| s.to_string()).collect(),
    };

    let mut matched = 0usize;
    for rule in &CONDITIONAL_RULES {
        if (rule.applies)(profile) {
            bundle.list_mut(rule.category).push(rule.message.to_string());
            matched += 1;
        }
    }

    tracing::debug!(class_index, category = category.label(), matched, "advice bundle built");

    bundle
}
