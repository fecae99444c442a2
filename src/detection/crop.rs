//! Crop and yield predictors
//!
//! Thin wrappers over injected tabular models. Unlike the disease predictors
//! there is no heuristic to fall back on, so a missing model is an error.

use serde::{Deserialize, Serialize};

use super::models::{CropModel, YieldModel};
use crate::error::{AdvisorError, AdvisorResult};
use crate::reading::EnvironmentalReading;

pub const NO_PREFERRED_CROP: &str = "No preferred crop available for the given conditions.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRecommendation {
    pub recommended_crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Feature vector in training order: N, P, K, temperature, humidity, pH, rainfall, ozone
pub fn crop_features(reading: &EnvironmentalReading) -> [f64; 8] {
    [
        reading.nitrogen,
        reading.phosphorus,
        reading.potassium,
        reading.temperature,
        reading.humidity,
        reading.ph,
        reading.rainfall,
        reading.ozone,
    ]
}

/// Recommend a crop, accepting the prediction only if it names a known class
pub fn recommend_crop(
    model: Option<&dyn CropModel>,
    reading: &EnvironmentalReading,
) -> AdvisorResult<CropRecommendation> {
    let model = model.ok_or(AdvisorError::ModelUnavailable("crop"))?;
    let predicted = model.predict(&crop_features(reading))?;

    let wanted = predicted.trim().to_lowercase();
    let known = model
        .classes()
        .iter()
        .any(|class| class.trim().to_lowercase() == wanted);

    if known {
        Ok(CropRecommendation {
            recommended_crop: Some(predicted),
            message: None,
        })
    } else {
        tracing::debug!(predicted = %predicted, "crop prediction not among known classes");
        Ok(CropRecommendation {
            recommended_crop: None,
            message: Some(NO_PREFERRED_CROP.to_string()),
        })
    }
}

/// Yield model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldInput {
    pub ozone: f64,
    pub temperature: f64,
    pub rain: f64,
    pub soil: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldPrediction {
    /// tonnes/hectare
    pub tonnes_per_hectare: f64,
}

impl YieldPrediction {
    /// "Predicted Potato Yield: 23.46 tonnes/hectare"
    pub fn result_text(&self) -> String {
        format!("Predicted Potato Yield: {:.2} tonnes/hectare", self.tonnes_per_hectare)
    }
}

pub fn predict_yield(model: Option<&dyn YieldModel>, input: &YieldInput) -> AdvisorResult<YieldPrediction> {
    let model = model.ok_or(AdvisorError::ModelUnavailable("yield"))?;
    let tonnes_per_hectare = model.predict(&[input.ozone, input.temperature, input.rain, input.soil])?;
    Ok(YieldPrediction { tonnes_per_hectare })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubCrop {
        answer: &'static str,
        classes: Vec<String>,
    }

    impl CropModel for StubCrop {
        fn predict(&self, _features: &[f64; 8]) -> AdvisorResult<String> {
            Ok(self.answer.to_string())
        }

        fn classes(&self) -> &[String] {
            &self.classes
        }
    }

    struct LinearYield;

    impl YieldModel for LinearYield {
        fn predict(&self, features: &[f64; 4]) -> AdvisorResult<f64> {
            Ok(20.0 + features[3] * 10.0 - features[0] * 0.01)
        }
    }

    fn classes() -> Vec<String> {
        vec!["rice".to_string(), "Potato".to_string()]
    }

    #[test]
    fn test_known_crop_case_insensitive() {
        let model = StubCrop { answer: " potato", classes: classes() };
        let rec = recommend_crop(Some(&model), &EnvironmentalReading::default()).unwrap();
        assert_eq!(rec.recommended_crop.as_deref(), Some(" potato"));
        assert!(rec.message.is_none());
    }

    #[test]
    fn test_unknown_crop() {
        let model = StubCrop { answer: "quinoa", classes: classes() };
        let rec = recommend_crop(Some(&model), &EnvironmentalReading::default()).unwrap();
        assert!(rec.recommended_crop.is_none());
        assert_eq!(rec.message.as_deref(), Some(NO_PREFERRED_CROP));
    }

    #[test]
    fn test_missing_models_error() {
        assert!(matches!(
            recommend_crop(None, &EnvironmentalReading::default()),
            Err(AdvisorError::ModelUnavailable("crop"))
        ));
        let input = YieldInput { ozone: 30.0, temperature: 22.0, rain: 1.0, soil: 0.3 };
        assert!(predict_yield(None, &input).is_err());
    }

    #[test]
    fn test_feature_order() {
        let reading = EnvironmentalReading { nitrogen: 1.0, phosphorus: 2.0, potassium: 3.0, ..Default::default() };
        let features = crop_features(&reading);
        assert_eq!(&features[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(features[3], reading.temperature);
        assert_eq!(features[7], reading.ozone);
    }

    #[test]
    fn test_yield_text() {
        let input = YieldInput { ozone: 0.0, temperature: 22.0, rain: 1.0, soil: 0.35 };
        let prediction = predict_yield(Some(&LinearYield), &input).unwrap();
        assert_eq!(prediction.result_text(), "Predicted Potato Yield: 23.50 tonnes/hectare");
    }
}
