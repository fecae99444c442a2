//! Advisor - coordinator for all scoring and prediction entry points
//!
//! Holds configuration and whichever pre-trained models the host process
//! managed to load. Every model slot is optional: disease predictors fall back
//! to their heuristics, crop/yield report [`AdvisorError::ModelUnavailable`].
//!
//! Includes both per-call entry points and a JSON request dispatcher used by
//! the `score_reading` binary.

use anyhow::Result;
use chrono::Timelike;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::alerts::{current_conditions_alerts, forecast_alerts, CurrentWeather, DailyForecast};
use crate::config::AdvisorConfig;
use crate::detection::{
    detect_disease, predict_environmental, predict_yield, recommend_crop, ChannelMeans, ClassIndex,
    CropModel, CropRecommendation, EnvironmentalModel, EnvironmentalPrediction, ImageClassifier,
    ImageDiagnosis, YieldInput, YieldModel, YieldPrediction,
};
use crate::error::AdvisorResult;
use crate::fertilizer::{recommend_fertilizer, FertilizerAdvice, FertilizerInput};
use crate::reading::EnvironmentalReading;
use crate::spray::{spray_report, synthetic_forecast, HourlySlot, SprayReport};
use crate::stress::{estimate_stress, StressAssessment, StressInput};

/// Main advisory coordinator
#[derive(Default)]
pub struct Advisor {
    config: AdvisorConfig,
    environmental_model: Option<Box<dyn EnvironmentalModel>>,
    image_classifier: Option<Box<dyn ImageClassifier>>,
    class_index: ClassIndex,
    crop_model: Option<Box<dyn CropModel>>,
    yield_model: Option<Box<dyn YieldModel>>,
}

impl Advisor {
    /// Advisor without any models (heuristics only)
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_environmental_model(mut self, model: Box<dyn EnvironmentalModel>) -> Self {
        self.environmental_model = Some(model);
        self
    }

    pub fn with_image_classifier(mut self, classifier: Box<dyn ImageClassifier>, class_index: ClassIndex) -> Self {
        self.image_classifier = Some(classifier);
        self.class_index = class_index;
        self
    }

    pub fn with_crop_model(mut self, model: Box<dyn CropModel>) -> Self {
        self.crop_model = Some(model);
        self
    }

    pub fn with_yield_model(mut self, model: Box<dyn YieldModel>) -> Self {
        self.yield_model = Some(model);
        self
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    // ========================================================================
    // Entry Points
    // ========================================================================

    pub fn assess_disease(&self, reading: &EnvironmentalReading) -> EnvironmentalPrediction {
        predict_environmental(self.environmental_model.as_deref(), reading)
    }

    /// Assess many readings in parallel (Rayon), preserving order
    pub fn assess_disease_batch(&self, readings: &[EnvironmentalReading]) -> Vec<EnvironmentalPrediction> {
        readings.par_iter().map(|r| self.assess_disease(r)).collect()
    }

    pub fn diagnose_image(&self, pixels: &[f32], means: &ChannelMeans) -> ImageDiagnosis {
        detect_disease(self.image_classifier.as_deref(), &self.class_index, pixels, means)
    }

    pub fn estimate_stress(&self, input: &StressInput) -> StressAssessment {
        estimate_stress(input)
    }

    pub fn recommend_fertilizer(&self, input: &FertilizerInput) -> FertilizerAdvice {
        recommend_fertilizer(input)
    }

    /// Best spray window over a supplied forecast
    pub fn spray_window(&self, slots: &[HourlySlot]) -> Option<SprayReport> {
        spray_report(slots, self.config.spray_window_hours)
    }

    /// Best spray window over a seeded synthetic forecast starting at `start_hour`
    pub fn synthetic_spray_window(&self, start_hour: u32) -> Option<SprayReport> {
        let slots = synthetic_forecast(start_hour, self.config.forecast_hours, self.config.forecast_seed);
        self.spray_window(&slots)
    }

    pub fn recommend_crop(&self, reading: &EnvironmentalReading) -> AdvisorResult<CropRecommendation> {
        recommend_crop(self.crop_model.as_deref(), reading)
    }

    pub fn predict_yield(&self, input: &YieldInput) -> AdvisorResult<YieldPrediction> {
        predict_yield(self.yield_model.as_deref(), input)
    }

    // ========================================================================
    // JSON Dispatch
    // ========================================================================

    /// Run one JSON request and return the JSON response body
    pub fn handle(&self, request: AdvisoryRequest) -> Result<Value> {
        let response = match request {
            AdvisoryRequest::Disease(reading) => serde_json::to_value(self.assess_disease(&reading))?,
            AdvisoryRequest::DiseaseBatch { readings } => {
                serde_json::to_value(self.assess_disease_batch(&readings))?
            }
            AdvisoryRequest::Image { means } => serde_json::to_value(self.diagnose_image(&[], &means))?,
            AdvisoryRequest::Stress(input) => {
                let assessment = self.estimate_stress(&input);
                serde_json::json!({
                    "result": assessment.result_text(),
                    "explanation": assessment.explanation,
                    "level": assessment.level,
                    "points": assessment.points,
                })
            }
            AdvisoryRequest::Fertilizer(input) => {
                let advice = self.recommend_fertilizer(&input);
                serde_json::json!({
                    "result": advice.result_text(),
                    "advice": advice,
                })
            }
            AdvisoryRequest::Spray { slots, start_hour } => {
                let report = match slots {
                    Some(slots) => self.spray_window(&slots),
                    None => {
                        let hour = start_hour.unwrap_or_else(|| chrono::Local::now().hour());
                        self.synthetic_spray_window(hour)
                    }
                };
                let report = report.ok_or_else(|| {
                    anyhow::anyhow!(
                        "forecast shorter than the {}-hour spray window",
                        self.config.spray_window_hours
                    )
                })?;
                serde_json::to_value(report)?
            }
            AdvisoryRequest::Alerts { current, forecast } => {
                let mut alerts = Vec::new();
                if let Some(current) = &current {
                    alerts.extend(current_conditions_alerts(current));
                }
                if !forecast.is_empty() || current.is_none() {
                    alerts.extend(forecast_alerts(&forecast));
                }
                serde_json::json!({ "alerts": alerts })
            }
            AdvisoryRequest::Crop(reading) => serde_json::to_value(self.recommend_crop(&reading)?)?,
            AdvisoryRequest::Yield(input) => {
                let prediction = self.predict_yield(&input)?;
                serde_json::json!({
                    "result": prediction.result_text(),
                    "tonnes_per_hectare": prediction.tonnes_per_hectare,
                })
            }
        };

        Ok(response)
    }
}

/// One advisory request, tagged by `operation`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AdvisoryRequest {
    Disease(EnvironmentalReading),
    DiseaseBatch {
        readings: Vec<EnvironmentalReading>,
    },
    Image {
        means: ChannelMeans,
    },
    Stress(StressInput),
    Fertilizer(FertilizerInput),
    Spray {
        #[serde(default)]
        slots: Option<Vec<HourlySlot>>,
        #[serde(default)]
        start_hour: Option<u32>,
    },
    Alerts {
        #[serde(default)]
        current: Option<CurrentWeather>,
        #[serde(default)]
        forecast: Vec<DailyForecast>,
    },
    Crop(EnvironmentalReading),
    Yield(YieldInput),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{DiseaseLabel, RiskTier};

    #[test]
    fn test_heuristic_only_advisor() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let prediction = advisor.assess_disease(&EnvironmentalReading::with_core(25.0, 85.0, 50.0, 6.5));

        assert!(prediction.using_fallback);
        assert_eq!(prediction.assessment.disease, DiseaseLabel::LateBlight);
        assert_eq!(prediction.assessment.risk_level, RiskTier::High);
    }

    #[test]
    fn test_missing_crop_model() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let err = advisor.recommend_crop(&EnvironmentalReading::default()).unwrap_err();
        assert_eq!(err.to_string(), "crop model not available");
    }

    #[test]
    fn test_dispatch_disease_defaults() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest =
            serde_json::from_str(r#"{"operation": "disease", "humidity": 85}"#).unwrap();

        let response = advisor.handle(request).unwrap();
        assert_eq!(response["disease"], "Late Blight");
        assert_eq!(response["risk_level"], "High");
        assert_eq!(response["confidence"], 0.9);
        assert_eq!(response["using_fallback"], true);
        assert_eq!(response["environmental_conditions"]["ph"], 6.5);
    }

    #[test]
    fn test_dispatch_synthetic_spray() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest =
            serde_json::from_str(r#"{"operation": "spray", "start_hour": 6}"#).unwrap();

        let first = advisor.handle(request.clone()).unwrap();
        let second = advisor.handle(request).unwrap();
        assert_eq!(first, second);
        assert!(first["window"].as_str().unwrap().contains(":00 to "));
    }

    #[test]
    fn test_dispatch_spray_defaults_to_current_hour() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest = serde_json::from_str(r#"{"operation": "spray"}"#).unwrap();

        let response = advisor.handle(request).unwrap();
        let window = response["window"].as_str().unwrap();
        assert!(window.contains(":00 to "));
        assert!(response["result"].as_str().unwrap().contains(window));
    }

    #[test]
    fn test_dispatch_spray_huge_start_hour() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest =
            serde_json::from_str(r#"{"operation": "spray", "start_hour": 4294967295}"#).unwrap();

        let response = advisor.handle(request).unwrap();
        assert_eq!(response["conditions"]["hour"], 15);
    }

    #[test]
    fn test_dispatch_stress_with_missing_fields() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest =
            serde_json::from_str(r#"{"operation": "stress", "color": "brown"}"#).unwrap();

        let response = advisor.handle(request).unwrap();
        assert_eq!(response["points"], 3);
        assert_eq!(response["result"], "Stress Level: Moderate");
    }

    #[test]
    fn test_dispatch_short_forecast_errors() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let request: AdvisoryRequest = serde_json::from_str(
            r#"{"operation": "spray", "slots": [{"hour": 1, "temperature": 25, "humidity": 60, "wind": 2, "rain_probability": 0}]}"#,
        )
        .unwrap();
        assert!(advisor.handle(request).is_err());
    }
}
