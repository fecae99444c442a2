//! Environmental Reading and Feature Normalizer
//!
//! The typed boundary record for every scoring call. Each recognised feature has
//! a documented default that is applied when the caller omits it.
//!
//! Values are passed through untouched: there is no clamping or range
//! validation, so a humidity of 140% or a pH of -3 is scored as given.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Feature Defaults
// ============================================================================

pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 60.0;
pub const DEFAULT_RAINFALL: f64 = 100.0;
pub const DEFAULT_CLOUD_COVER: f64 = 0.0;
pub const DEFAULT_WIND_SPEED: f64 = 0.0;
pub const DEFAULT_LEAF_WETNESS: f64 = 0.0;
pub const DEFAULT_SOIL_MOISTURE: f64 = 50.0;
pub const DEFAULT_PH: f64 = 6.5;
pub const DEFAULT_NUTRIENT_INDEX: f64 = 50.0;
pub const DEFAULT_OZONE: f64 = 0.0;

/// Full set of defaulted environmental features for one scoring call.
///
/// Deserialising from JSON fills any absent field with its default, so
/// `{"humidity": 85}` is a valid reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalReading {
    /// Air temperature (°C)
    pub temperature: f64,

    /// Relative humidity (%)
    pub humidity: f64,

    /// Rainfall (mm)
    pub rainfall: f64,

    /// Cloud cover (%)
    pub cloud_cover: f64,

    /// Wind speed (km/h)
    pub wind_speed: f64,

    /// Leaf wetness duration (hours)
    pub leaf_wetness: f64,

    /// Soil moisture (%)
    pub soil_moisture: f64,

    /// Soil pH
    pub ph: f64,

    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,

    /// Ground-level ozone (ppb)
    pub ozone: f64,
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            rainfall: DEFAULT_RAINFALL,
            cloud_cover: DEFAULT_CLOUD_COVER,
            wind_speed: DEFAULT_WIND_SPEED,
            leaf_wetness: DEFAULT_LEAF_WETNESS,
            soil_moisture: DEFAULT_SOIL_MOISTURE,
            ph: DEFAULT_PH,
            nitrogen: DEFAULT_NUTRIENT_INDEX,
            phosphorus: DEFAULT_NUTRIENT_INDEX,
            potassium: DEFAULT_NUTRIENT_INDEX,
            ozone: DEFAULT_OZONE,
        }
    }
}

impl EnvironmentalReading {
    /// Build a reading from a loose name → value mapping.
    ///
    /// Missing keys take their default, unknown keys are ignored. Keys are
    /// matched exactly (`soil_moisture`, `ph`, ...).
    pub fn from_fields(fields: &HashMap<String, f64>) -> Self {
        let get = |key: &str, default: f64| fields.get(key).copied().unwrap_or(default);

        Self {
            temperature: get("temperature", DEFAULT_TEMPERATURE),
            humidity: get("humidity", DEFAULT_HUMIDITY),
            rainfall: get("rainfall", DEFAULT_RAINFALL),
            cloud_cover: get("cloud_cover", DEFAULT_CLOUD_COVER),
            wind_speed: get("wind_speed", DEFAULT_WIND_SPEED),
            leaf_wetness: get("leaf_wetness", DEFAULT_LEAF_WETNESS),
            soil_moisture: get("soil_moisture", DEFAULT_SOIL_MOISTURE),
            ph: get("ph", DEFAULT_PH),
            nitrogen: get("nitrogen", DEFAULT_NUTRIENT_INDEX),
            phosphorus: get("phosphorus", DEFAULT_NUTRIENT_INDEX),
            potassium: get("potassium", DEFAULT_NUTRIENT_INDEX),
            ozone: get("ozone", DEFAULT_OZONE),
        }
    }

    /// Convenience constructor for the four features the heuristic scorer reads
    pub fn with_core(temperature: f64, humidity: f64, soil_moisture: f64, ph: f64) -> Self {
        Self {
            temperature,
            humidity,
            soil_moisture,
            ph,
            ..Self::default()
        }
    }
}
