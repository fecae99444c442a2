//! Threshold Classifier
//!
//! Maps an accumulated [`RiskScore`] to a risk tier, a disease label and an
//! ad hoc confidence value. Thresholds are checked highest first; a score
//! sitting exactly on a threshold falls into the lower bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accumulator::RiskScore;
use crate::advice::DiseaseCategory;

/// score > 0.6 → High / Late Blight
pub const HIGH_RISK_THRESHOLD: u32 = 6;
/// 0.4 < score ≤ 0.6 → Medium / Early Blight
pub const MEDIUM_RISK_THRESHOLD: u32 = 4;

/// Confidence floor and cap (tenths)
pub const CONFIDENCE_FLOOR: u32 = 6;
pub const CONFIDENCE_CAP: u32 = 9;
/// Offset added to the score before clamping (tenths)
pub const CONFIDENCE_OFFSET: u32 = 3;

/// Disease risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn display_text(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Closed set of environmental disease labels.
///
/// Declaration order matches the class order of the environmental model
/// output vector (see [`DiseaseLabel::MODEL_CLASSES`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiseaseLabel {
    #[serde(rename = "Late Blight")]
    LateBlight,
    #[serde(rename = "Early Blight")]
    EarlyBlight,
    #[serde(rename = "Black Rot")]
    BlackRot,
    #[serde(rename = "Common Scab")]
    CommonScab,
    Healthy,
    /// Model predicted a class index outside the known label list
    Unknown,
}

impl DiseaseLabel {
    /// Class order used by the environmental model
    pub const MODEL_CLASSES: [DiseaseLabel; 5] = [
        DiseaseLabel::LateBlight,
        DiseaseLabel::EarlyBlight,
        DiseaseLabel::BlackRot,
        DiseaseLabel::CommonScab,
        DiseaseLabel::Healthy,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            DiseaseLabel::LateBlight => "Late Blight",
            DiseaseLabel::EarlyBlight => "Early Blight",
            DiseaseLabel::BlackRot => "Black Rot",
            DiseaseLabel::CommonScab => "Common Scab",
            DiseaseLabel::Healthy => "Healthy",
            DiseaseLabel::Unknown => "Unknown",
        }
    }

    /// Label for a model output index ("Unknown" past the end of the list)
    pub fn from_model_index(index: usize) -> Self {
        Self::MODEL_CLASSES
            .get(index)
            .copied()
            .unwrap_or(DiseaseLabel::Unknown)
    }

    /// Recommendation category, fixed per label
    pub fn category(&self) -> DiseaseCategory {
        match self {
            DiseaseLabel::LateBlight => DiseaseCategory::LateBlight,
            DiseaseLabel::EarlyBlight => DiseaseCategory::EarlyBlight,
            DiseaseLabel::Healthy => DiseaseCategory::Healthy,
            DiseaseLabel::BlackRot | DiseaseLabel::CommonScab | DiseaseLabel::Unknown => {
                DiseaseCategory::Other
            }
        }
    }
}

impl fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Result of thresholding a risk score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: DiseaseLabel,
    pub tier: RiskTier,
    /// min(0.9, max(0.6, score + 0.3)) - not a calibrated probability
    pub confidence: f64,
}

/// Bucket a score into tier + label
pub fn classify_score(score: RiskScore) -> Classification {
    let tenths = score.tenths();

    let (label, tier) = if tenths > HIGH_RISK_THRESHOLD {
        (DiseaseLabel::LateBlight, RiskTier::High)
    } else if tenths > MEDIUM_RISK_THRESHOLD {
        (DiseaseLabel::EarlyBlight, RiskTier::Medium)
    } else {
        (DiseaseLabel::Healthy, RiskTier::Low)
    };

    Classification {
        label,
        tier,
        confidence: heuristic_confidence(score),
    }
}

/// Affine clamp of the score into [0.6, 0.9]
pub fn heuristic_confidence(score: RiskScore) -> f64 {
    let tenths = (score.tenths() + CONFIDENCE_OFFSET).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CAP);
    tenths as f64 / 10.0
}
