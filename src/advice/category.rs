//! Disease Category
//!
//! Recommendation category decided once, when a prediction is made, and carried
//! with the result. Free-text labels (image classifier output such as
//! "Tomato - Late blight") are bucketed here by case-insensitive keyword
//! matching; everything downstream works on the enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    Healthy,
    LateBlight,
    EarlyBlight,
    Rust,
    Spot,
    MoldOrMildew,
    /// No keyword matched: generic "consult a specialist" advice
    Other,
}

impl DiseaseCategory {
    /// Categorise a free-text disease label.
    ///
    /// Keywords are tried in priority order: healthy, blight (late, otherwise
    /// early), rust, spot, mold/mildew. "Leaf spot with rust" is therefore Rust.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();

        if label.contains("healthy") {
            DiseaseCategory::Healthy
        } else if label.contains("blight") {
            if label.contains("late") {
                DiseaseCategory::LateBlight
            } else {
                DiseaseCategory::EarlyBlight
            }
        } else if label.contains("rust") {
            DiseaseCategory::Rust
        } else if label.contains("spot") {
            DiseaseCategory::Spot
        } else if label.contains("mold") || label.contains("mildew") {
            DiseaseCategory::MoldOrMildew
        } else {
            DiseaseCategory::Other
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, DiseaseCategory::Healthy)
    }

    /// "Low" for healthy plants, "Medium" otherwise
    pub fn severity(&self) -> &'static str {
        if self.is_healthy() { "Low" } else { "Medium" }
    }

    /// "Low" for healthy plants, "High" otherwise
    pub fn treatment_urgency(&self) -> &'static str {
        if self.is_healthy() { "Low" } else { "High" }
    }
}
