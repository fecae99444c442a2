//! Weighted Risk Accumulator
//!
//! Sums independent per-feature band contributions into a disease risk score.
//!
//! **Bands** (first match wins per feature, no cross-feature terms):
//!
//! | Feature       | Condition             | Contribution |
//! |---------------|-----------------------|--------------|
//! | Temperature   | 20 ≤ t ≤ 30           | +0.3         |
//! | Temperature   | t > 35 or t < 10      | +0.1         |
//! | Humidity      | h > 80                | +0.4         |
//! | Humidity      | 60 < h ≤ 80           | +0.2         |
//! | Soil moisture | s > 80                | +0.2         |
//! | Soil moisture | s < 30                | +0.1         |
//! | pH            | ph < 5.5 or ph > 8    | +0.1         |
//!
//! The weights are hand-picked and kept verbatim. The sum is not normalised
//! (maximum reachable is 1.0).

use serde::{Deserialize, Serialize};

use crate::reading::EnvironmentalReading;

// ============================================================================
// Band Weights (tenths of a risk point)
// ============================================================================
//
// Contributions are tracked in tenths so that band sums compare exactly against
// the classifier thresholds: 0.2 + 0.4 must land on 0.6, not 0.6000000000000001.

/// 20 ≤ t ≤ 30 → +0.3
pub const TEMP_FAVOURABLE: u32 = 3;
/// t > 35 or t < 10 → +0.1
pub const TEMP_EXTREME: u32 = 1;
/// h > 80 → +0.4
pub const HUMIDITY_HIGH: u32 = 4;
/// 60 < h ≤ 80 → +0.2
pub const HUMIDITY_ELEVATED: u32 = 2;
/// s > 80 → +0.2
pub const SOIL_WATERLOGGED: u32 = 2;
/// s < 30 → +0.1
pub const SOIL_DRY: u32 = 1;
/// ph < 5.5 or ph > 8 → +0.1
pub const PH_EXTREME: u32 = 1;

/// Bounded risk scalar derived from a single reading.
///
/// Stored as whole tenths; [`RiskScore::value`] gives the decimal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RiskScore {
    tenths: u32,
}

impl RiskScore {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    pub fn tenths(&self) -> u32 {
        self.tenths
    }

    /// Decimal score (0.0 - 1.0 for every reachable band combination)
    pub fn value(&self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl Serialize for RiskScore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Which feature a band belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFeature {
    Temperature,
    Humidity,
    SoilMoisture,
    Ph,
}

/// One triggered band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandContribution {
    pub feature: RiskFeature,
    /// Human-readable band condition, e.g. "20 ≤ t ≤ 30"
    pub band: &'static str,
    /// Contribution to the score (decimal)
    pub weight: f64,
}

/// Score plus the bands that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBreakdown {
    pub score: RiskScore,
    pub contributions: Vec<BandContribution>,
}

/// Temperature band: (weight, band description)
fn temperature_band(t: f64) -> Option<(u32, &'static str)> {
    if (20.0..=30.0).contains(&t) {
        Some((TEMP_FAVOURABLE, "20 ≤ t ≤ 30"))
    } else if t > 35.0 || t < 10.0 {
        Some((TEMP_EXTREME, "t > 35 or t < 10"))
    } else {
        None
    }
}

fn humidity_band(h: f64) -> Option<(u32, &'static str)> {
    if h > 80.0 {
        Some((HUMIDITY_HIGH, "h > 80"))
    } else if h > 60.0 {
        Some((HUMIDITY_ELEVATED, "60 < h ≤ 80"))
    } else {
        None
    }
}

fn soil_moisture_band(s: f64) -> Option<(u32, &'static str)> {
    if s > 80.0 {
        Some((SOIL_WATERLOGGED, "s > 80"))
    } else if s < 30.0 {
        Some((SOIL_DRY, "s < 30"))
    } else {
        None
    }
}

fn ph_band(ph: f64) -> Option<(u32, &'static str)> {
    if ph < 5.5 || ph > 8.0 {
        Some((PH_EXTREME, "ph < 5.5 or ph > 8"))
    } else {
        None
    }
}

/// Accumulate the risk score, keeping the list of triggered bands
pub fn accumulate_risk(reading: &EnvironmentalReading) -> RiskBreakdown {
    let bands = [
        (RiskFeature::Temperature, temperature_band(reading.temperature)),
        (RiskFeature::Humidity, humidity_band(reading.humidity)),
        (RiskFeature::SoilMoisture, soil_moisture_band(reading.soil_moisture)),
        (RiskFeature::Ph, ph_band(reading.ph)),
    ];

    let mut tenths = 0;
    let mut contributions = Vec::with_capacity(bands.len());

    for (feature, band) in bands {
        if let Some((weight, band)) = band {
            tenths += weight;
            contributions.push(BandContribution {
                feature,
                band,
                weight: weight as f64 / 10.0,
            });
        }
    }

    RiskBreakdown {
        score: RiskScore::from_tenths(tenths),
        contributions,
    }
}

/// Score only, without the band list
pub fn risk_score(reading: &EnvironmentalReading) -> RiskScore {
    accumulate_risk(reading).score
}
