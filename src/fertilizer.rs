//! Fertilizer Recommender
//!
//! Rule-based product and timing advice from current weather and soil state.
//! Rain above 5 mm holds any application; otherwise soil moisture picks the
//! product and air temperature picks the time of day.

use serde::{Deserialize, Serialize};

use crate::reading::{DEFAULT_OZONE, DEFAULT_PH, DEFAULT_SOIL_MOISTURE, DEFAULT_TEMPERATURE};

/// Rain (mm) above which application is held
pub const HOLD_RAIN_MM: f64 = 5.0;
/// Soil moisture fraction below which a water-soluble product is advised
pub const DRY_SOIL_FRACTION: f64 = 0.2;
/// Soil moisture fraction above which a slow-release product is advised
pub const WET_SOIL_FRACTION: f64 = 0.4;
/// Temperature (°C) above which application moves to cool hours
pub const HOT_APPLICATION_TEMP: f64 = 30.0;

/// Rain (mm) assumed when the caller omits it
pub const DEFAULT_RAIN_MM: f64 = 0.0;

/// Fertilizer recommender input; absent fields take their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FertilizerInput {
    pub temperature: f64,
    /// Rain (mm)
    pub rain: f64,
    /// Volumetric soil moisture as a fraction (0-1)
    pub soil: f64,
    pub ozone: f64,
    pub ph: f64,
    /// Growth stage as reported by the farmer (informational)
    pub stage: String,
}

impl Default for FertilizerInput {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            rain: DEFAULT_RAIN_MM,
            soil: DEFAULT_SOIL_MOISTURE / 100.0,
            ozone: DEFAULT_OZONE,
            ph: DEFAULT_PH,
            stage: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerProduct {
    WaterSolubleHighNitrogen,
    SlowReleaseGranular,
    BalancedNpk,
}

impl FertilizerProduct {
    pub fn display_text(&self) -> &'static str {
        match self {
            FertilizerProduct::WaterSolubleHighNitrogen => {
                "Water soluble fertilizer with higher nitrogen content"
            }
            FertilizerProduct::SlowReleaseGranular => "Slow-release granular fertilizer",
            FertilizerProduct::BalancedNpk => "Balanced NPK fertilizer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationTiming {
    EarlyMorningOrEvening,
    Daytime,
}

impl ApplicationTiming {
    pub fn display_text(&self) -> &'static str {
        match self {
            ApplicationTiming::EarlyMorningOrEvening => "Apply in early morning or evening",
            ApplicationTiming::Daytime => "Apply during daytime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FertilizerAdvice {
    /// Rain forecast: do not apply
    Hold,
    Apply {
        product: FertilizerProduct,
        timing: ApplicationTiming,
    },
}

impl FertilizerAdvice {
    /// "Balanced NPK fertilizer. Apply during daytime"
    pub fn text(&self) -> String {
        match self {
            FertilizerAdvice::Hold => "Hold application due to rain forecast".to_string(),
            FertilizerAdvice::Apply { product, timing } => {
                format!("{}. {}", product.display_text(), timing.display_text())
            }
        }
    }

    /// "Recommended Fertilizer: ..."
    pub fn result_text(&self) -> String {
        format!("Recommended Fertilizer: {}", self.text())
    }
}

pub fn recommend_fertilizer(input: &FertilizerInput) -> FertilizerAdvice {
    if input.rain > HOLD_RAIN_MM {
        return FertilizerAdvice::Hold;
    }

    let product = if input.soil < DRY_SOIL_FRACTION {
        FertilizerProduct::WaterSolubleHighNitrogen
    } else if input.soil > WET_SOIL_FRACTION {
        FertilizerProduct::SlowReleaseGranular
    } else {
        FertilizerProduct::BalancedNpk
    };

    let timing = if input.temperature > HOT_APPLICATION_TEMP {
        ApplicationTiming::EarlyMorningOrEvening
    } else {
        ApplicationTiming::Daytime
    };

    FertilizerAdvice::Apply { product, timing }
}
