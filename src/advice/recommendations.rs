//! Recommendation Generator
//!
//! Fixed advisory lists. Every lookup returns a `'static` slice, so repeated
//! calls with the same key yield the same strings in the same order.

use super::category::DiseaseCategory;
use crate::risk::{DiseaseLabel, RiskTier};

// ============================================================================
// Environmental risk (heuristic scorer)
// ============================================================================

const HIGH_RISK: &[&str] = &[
    "High disease risk detected",
    "Apply preventive fungicide",
    "Improve drainage",
    "Reduce irrigation frequency",
];

const MEDIUM_RISK: &[&str] = &[
    "Moderate disease risk",
    "Monitor plants closely",
    "Ensure good air circulation",
    "Consider preventive measures",
];

const LOW_RISK: &[&str] = &[
    "Low disease risk",
    "Continue current practices",
    "Regular monitoring advised",
];

// ============================================================================
// Disease categories (image detection)
// ============================================================================

const HEALTHY: &[&str] = &[
    "Continue current care routine",
    "Monitor regularly for any changes",
];

const LATE_BLIGHT: &[&str] = &[
    "Remove affected leaves immediately",
    "Apply copper-based fungicide",
    "Improve air circulation",
    "Reduce watering frequency",
];

const EARLY_BLIGHT: &[&str] = &[
    "Remove infected plant material",
    "Apply preventive fungicide spray",
    "Ensure proper plant spacing",
    "Avoid overhead irrigation",
];

const RUST: &[&str] = &[
    "Apply fungicides containing triazoles or strobilurins",
    "Remove severely infected leaves",
    "Improve air circulation between plants",
    "Avoid overhead irrigation",
];

const SPOT: &[&str] = &[
    "Remove and destroy infected leaves",
    "Apply appropriate fungicide",
    "Avoid wetting leaves during irrigation",
    "Ensure proper plant spacing",
];

const MOLD_OR_MILDEW: &[&str] = &[
    "Improve air circulation around plants",
    "Apply fungicides containing sulfur or potassium bicarbonate",
    "Reduce humidity levels",
    "Space plants properly",
];

const CONSULT_SPECIALIST: &[&str] = &[
    "Consult with a plant pathologist for accurate diagnosis",
    "Isolate affected plants to prevent spread",
    "Remove severely affected plant parts",
    "Consider appropriate fungicide or pesticide after identification",
];

/// Advice for an environmental risk tier
pub fn tier_recommendations(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::High => HIGH_RISK,
        RiskTier::Medium => MEDIUM_RISK,
        RiskTier::Low => LOW_RISK,
    }
}

/// Advice for a disease category
pub fn category_recommendations(category: DiseaseCategory) -> &'static [&'static str] {
    match category {
        DiseaseCategory::Healthy => HEALTHY,
        DiseaseCategory::LateBlight => LATE_BLIGHT,
        DiseaseCategory::EarlyBlight => EARLY_BLIGHT,
        DiseaseCategory::Rust => RUST,
        DiseaseCategory::Spot => SPOT,
        DiseaseCategory::MoldOrMildew => MOLD_OR_MILDEW,
        DiseaseCategory::Other => CONSULT_SPECIALIST,
    }
}

/// Advice keyed by (label, tier).
///
/// The three pairs the threshold classifier emits map to the risk-tier lists.
/// Any other pairing falls back to the label's category list, which ends in
/// the consult-a-specialist advice for labels outside the known categories.
pub fn recommend(label: DiseaseLabel, tier: RiskTier) -> &'static [&'static str] {
    match (label, tier) {
        (DiseaseLabel::LateBlight, RiskTier::High)
        | (DiseaseLabel::EarlyBlight, RiskTier::Medium)
        | (DiseaseLabel::Healthy, RiskTier::Low) => tier_recommendations(tier),
        _ => category_recommendations(label.category()),
    }
}

/// Own a static list for an output record
pub fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
