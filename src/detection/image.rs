//! Leaf image disease detection
//!
//! Wraps an injected [`ImageClassifier`] and falls back to a colour heuristic
//! over channel means when the classifier is absent or fails. Decoding and
//! resizing the upload is the caller's job; this module only sees the
//! preprocessed tensor and the per-channel means of the resized image.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::{argmax, ImageClassifier};
use crate::advice::{category_recommendations, to_owned_list, DiseaseCategory};
use crate::error::{AdvisorError, AdvisorResult};

// ============================================================================
// Class Index
// ============================================================================

/// Model output index → raw class label (e.g. "Potato___Late_blight")
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    labels: FxHashMap<usize, String>,
}

impl ClassIndex {
    pub fn new(labels: FxHashMap<usize, String>) -> Self {
        Self { labels }
    }

    /// Parse the `{"0": "Apple___Apple_scab", ...}` mapping shipped with the model
    pub fn from_json(json: &str) -> AdvisorResult<Self> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| AdvisorError::ClassIndex(e.to_string()))?;

        let labels = raw
            .into_iter()
            .map(|(key, label)| {
                key.parse::<usize>()
                    .map(|index| (index, label))
                    .map_err(|_| AdvisorError::ClassIndex(format!("non-numeric class key '{}'", key)))
            })
            .collect::<AdvisorResult<FxHashMap<_, _>>>()?;

        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Raw label for an index, "Unknown" when absent
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(&index).map(|s| s.as_str()).unwrap_or("Unknown")
    }
}

/// "Potato___Late_blight" → "Potato - Late blight"
///
/// The triple underscore is replaced first on purpose so the separator survives.
pub fn format_class_label(raw: &str) -> String {
    raw.replace("___", " - ").replace('_', " ")
}

// ============================================================================
// Colour Fallback
// ============================================================================

/// Mean channel intensities (0-255) of the resized image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMeans {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelMeans {
    /// Brown tone proxy: mean of red and blue
    pub fn brown(&self) -> f64 {
        (self.red + self.blue) / 2.0
    }
}

/// Colour heuristic: (label, confidence)
pub fn color_fallback(means: &ChannelMeans) -> (&'static str, f64) {
    let brown = means.brown();
    if means.green > 120.0 && brown < 100.0 {
        ("Healthy", 0.75)
    } else if brown > 120.0 {
        ("Late Blight", 0.65)
    } else {
        ("Early Blight", 0.60)
    }
}

// ============================================================================
// Detection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageDiagnosis {
    pub prediction: String,
    pub confidence: f64,
    pub category: DiseaseCategory,
    pub recommendations: Vec<String>,
    pub severity: &'static str,
    pub treatment_urgency: &'static str,
    pub using_fallback: bool,
}

impl ImageDiagnosis {
    fn new(prediction: String, confidence: f64, using_fallback: bool) -> Self {
        let category = DiseaseCategory::from_label(&prediction);
        Self {
            prediction,
            confidence,
            category,
            recommendations: to_owned_list(category_recommendations(category)),
            severity: category.severity(),
            treatment_urgency: category.treatment_urgency(),
            using_fallback,
        }
    }
}

/// Classify a leaf image
pub fn detect_disease(
    classifier: Option<&dyn ImageClassifier>,
    class_index: &ClassIndex,
    pixels: &[f32],
    means: &ChannelMeans,
) -> ImageDiagnosis {
    if let Some(classifier) = classifier {
        let result = classifier
            .predict(pixels)
            .and_then(|probabilities| argmax(&probabilities).ok_or(AdvisorError::EmptyOutput));

        match result {
            Ok((index, confidence)) => {
                let prediction = format_class_label(class_index.label(index));
                tracing::debug!(index, confidence, prediction = %prediction, "image classified");
                return ImageDiagnosis::new(prediction, confidence, false);
            }
            Err(e) => tracing::warn!("Image classifier failed, using colour analysis: {}", e),
        }
    }

    let (label, confidence) = color_fallback(means);
    tracing::debug!(green = means.green, brown = means.brown(), label, "colour analysis fallback");
    ImageDiagnosis::new(label.to_string(), confidence, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier(Vec<f64>);

    impl ImageClassifier for FixedClassifier {
        fn predict(&self, _pixels: &[f32]) -> AdvisorResult<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    fn class_index() -> ClassIndex {
        ClassIndex::from_json(
            r#"{"0": "Corn_(maize)___Common_rust_", "1": "Potato___Late_blight", "2": "Tomato___healthy"}"#,
        )
        .unwrap()
    }

    const GREEN_LEAF: ChannelMeans = ChannelMeans { red: 60.0, green: 150.0, blue: 50.0 };

    #[test]
    fn test_label_formatting() {
        assert_eq!(format_class_label("Potato___Late_blight"), "Potato - Late blight");
        assert_eq!(format_class_label("Tomato___healthy"), "Tomato - healthy");
        assert_eq!(format_class_label("Healthy"), "Healthy");
    }

    #[test]
    fn test_class_index_parsing() {
        let index = class_index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.label(1), "Potato___Late_blight");
        assert_eq!(index.label(9), "Unknown");

        assert!(ClassIndex::from_json(r#"{"zero": "x"}"#).is_err());
        assert!(ClassIndex::from_json("not json").is_err());
    }

    #[test]
    fn test_classifier_prediction() {
        let classifier = FixedClassifier(vec![0.1, 0.8, 0.1]);
        let diagnosis = detect_disease(Some(&classifier), &class_index(), &[], &GREEN_LEAF);

        assert!(!diagnosis.using_fallback);
        assert_eq!(diagnosis.prediction, "Potato - Late blight");
        assert_eq!(diagnosis.category, DiseaseCategory::LateBlight);
        assert_eq!(diagnosis.recommendations[1], "Apply copper-based fungicide");
        assert_eq!(diagnosis.severity, "Medium");
        assert_eq!(diagnosis.treatment_urgency, "High");
    }

    #[test]
    fn test_rust_prediction() {
        let classifier = FixedClassifier(vec![0.9, 0.05, 0.05]);
        let diagnosis = detect_disease(Some(&classifier), &class_index(), &[], &GREEN_LEAF);
        assert_eq!(diagnosis.prediction, "Corn (maize) - Common rust ");
        assert_eq!(diagnosis.category, DiseaseCategory::Rust);
    }

    #[test]
    fn test_healthy_prediction() {
        let classifier = FixedClassifier(vec![0.0, 0.1, 0.9]);
        let diagnosis = detect_disease(Some(&classifier), &class_index(), &[], &GREEN_LEAF);
        assert_eq!(diagnosis.category, DiseaseCategory::Healthy);
        assert_eq!(diagnosis.severity, "Low");
        assert_eq!(diagnosis.treatment_urgency, "Low");
    }

    #[test]
    fn test_color_fallback_bands() {
        assert_eq!(color_fallback(&GREEN_LEAF), ("Healthy", 0.75));
        assert_eq!(
            color_fallback(&ChannelMeans { red: 160.0, green: 100.0, blue: 90.0 }),
            ("Late Blight", 0.65)
        );
        assert_eq!(
            color_fallback(&ChannelMeans { red: 110.0, green: 100.0, blue: 100.0 }),
            ("Early Blight", 0.60)
        );
    }

    #[test]
    fn test_no_classifier_uses_colour() {
        let diagnosis = detect_disease(None, &ClassIndex::default(), &[], &GREEN_LEAF);
        assert!(diagnosis.using_fallback);
        assert_eq!(diagnosis.prediction, "Healthy");
        assert_eq!(diagnosis.confidence, 0.75);
    }
}
