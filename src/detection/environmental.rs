//! Model-backed environmental disease prediction
//!
//! Uses an injected [`EnvironmentalModel`] when one is available and falls
//! back to the band heuristic in [`crate::risk`] when it is absent or fails.

use serde::Serialize;

use super::models::{argmax, EnvironmentalModel};
use crate::error::{AdvisorError, AdvisorResult};
use crate::reading::EnvironmentalReading;
use crate::risk::{assess_environmental_risk, DiseaseAssessment, DiseaseLabel, RiskTier};

/// Model confidence above which a non-healthy prediction is High risk
pub const HIGH_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalPrediction {
    #[serde(flatten)]
    pub assessment: DiseaseAssessment,
    /// True when the heuristic scorer produced the result
    pub using_fallback: bool,
}

/// Interpret model probabilities as a disease assessment
pub fn assessment_from_probabilities(
    reading: &EnvironmentalReading,
    probabilities: &[f64],
) -> AdvisorResult<DiseaseAssessment> {
    let (index, confidence) = argmax(probabilities).ok_or(AdvisorError::EmptyOutput)?;
    let disease = DiseaseLabel::from_model_index(index);
    let name = disease.display_text();

    let (risk_level, recommendations) = if disease == DiseaseLabel::Healthy {
        (
            RiskTier::Low,
            vec![
                "Current conditions are favorable".to_string(),
                "Continue monitoring".to_string(),
            ],
        )
    } else if confidence > HIGH_CONFIDENCE {
        (
            RiskTier::High,
            vec![
                format!("High risk of {} detected", name),
                "Take immediate preventive measures".to_string(),
                "Monitor plants closely".to_string(),
                "Consider fungicide application".to_string(),
            ],
        )
    } else {
        (
            RiskTier::Medium,
            vec![
                format!("Moderate risk of {}", name),
                "Monitor environmental conditions".to_string(),
                "Ensure good plant hygiene".to_string(),
            ],
        )
    };

    Ok(DiseaseAssessment {
        disease,
        category: disease.category(),
        risk_level,
        confidence,
        score: None,
        recommendations,
        environmental_conditions: *reading,
    })
}

/// Predict disease risk, preferring the model when one is supplied
pub fn predict_environmental(
    model: Option<&dyn EnvironmentalModel>,
    reading: &EnvironmentalReading,
) -> EnvironmentalPrediction {
    if let Some(model) = model {
        let result = model
            .predict(reading)
            .and_then(|probabilities| assessment_from_probabilities(reading, &probabilities));

        match result {
            Ok(assessment) => {
                return EnvironmentalPrediction {
                    assessment,
                    using_fallback: false,
                }
            }
            Err(e) => tracing::warn!("Environmental model failed, using heuristic scorer: {}", e),
        }
    } else {
        tracing::debug!("No environmental model supplied, using heuristic scorer");
    }

    EnvironmentalPrediction {
        assessment: assess_environmental_risk(reading),
        using_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedModel(Vec<f64>);

    impl EnvironmentalModel for FixedModel {
        fn predict(&self, _reading: &EnvironmentalReading) -> AdvisorResult<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenModel;

    impl EnvironmentalModel for BrokenModel {
        fn predict(&self, _reading: &EnvironmentalReading) -> AdvisorResult<Vec<f64>> {
            Err(AdvisorError::Prediction("tensor shape mismatch".to_string()))
        }
    }

    #[test]
    fn test_confident_model_is_high_risk() {
        let model = FixedModel(vec![0.05, 0.85, 0.05, 0.03, 0.02]);
        let prediction = predict_environmental(Some(&model), &EnvironmentalReading::default());

        assert!(!prediction.using_fallback);
        assert_eq!(prediction.assessment.disease, DiseaseLabel::EarlyBlight);
        assert_eq!(prediction.assessment.risk_level, RiskTier::High);
        assert_eq!(prediction.assessment.confidence, 0.85);
        assert_eq!(prediction.assessment.recommendations[0], "High risk of Early Blight detected");
        assert!(prediction.assessment.score.is_none());
    }

    #[test]
    fn test_unsure_model_is_medium_risk() {
        let model = FixedModel(vec![0.6, 0.1, 0.1, 0.1, 0.1]);
        let prediction = predict_environmental(Some(&model), &EnvironmentalReading::default());

        assert_eq!(prediction.assessment.risk_level, RiskTier::Medium);
        assert_eq!(prediction.assessment.recommendations[0], "Moderate risk of Late Blight");
    }

    #[test]
    fn test_healthy_is_low_regardless_of_confidence() {
        let model = FixedModel(vec![0.0, 0.0, 0.0, 0.05, 0.95]);
        let prediction = predict_environmental(Some(&model), &EnvironmentalReading::default());

        assert_eq!(prediction.assessment.disease, DiseaseLabel::Healthy);
        assert_eq!(prediction.assessment.risk_level, RiskTier::Low);
    }

    #[test]
    fn test_extra_class_is_unknown() {
        let model = FixedModel(vec![0.0, 0.0, 0.0, 0.0, 0.1, 0.9]);
        let prediction = predict_environmental(Some(&model), &EnvironmentalReading::default());
        assert_eq!(prediction.assessment.disease, DiseaseLabel::Unknown);
        assert_eq!(prediction.assessment.recommendations[0], "High risk of Unknown detected");
    }

    #[test]
    fn test_missing_model_falls_back() {
        let reading = EnvironmentalReading::with_core(25.0, 85.0, 50.0, 6.5);
        let prediction = predict_environmental(None, &reading);

        assert!(prediction.using_fallback);
        assert_eq!(prediction.assessment, assess_environmental_risk(&reading));
    }

    #[test]
    fn test_failing_model_falls_back() {
        let prediction = predict_environmental(Some(&BrokenModel), &EnvironmentalReading::default());
        assert!(prediction.using_fallback);
        assert!(prediction.assessment.score.is_some());
    }

    #[test]
    fn test_empty_output_falls_back() {
        let model = FixedModel(Vec::new());
        let prediction = predict_environmental(Some(&model), &EnvironmentalReading::default());
        assert!(prediction.using_fallback);
    }
}
