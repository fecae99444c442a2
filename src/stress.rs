//! Plant Stress Estimator
//!
//! Integer severity points from environmental bands plus visual symptoms,
//! bucketed into Low (≤ 2) / Moderate (≤ 5) / High (> 5).
//!
//! | Indicator          | Condition          | Points |
//! |--------------------|--------------------|--------|
//! | Temperature        | t > 32 or t < 10   | 2      |
//! | Humidity           | h > 85 or h < 30   | 1      |
//! | Ozone              | o > 50             | 2      |
//! | Leaf colour        | yellow / brown     | 2 / 3  |
//! | Symptom            | wilting / spots    | 2 / 3  |
//!
//! Unrecognised colours or symptoms contribute nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reading::{DEFAULT_HUMIDITY, DEFAULT_OZONE, DEFAULT_TEMPERATURE};

pub const LOW_STRESS_MAX: u32 = 2;
pub const MODERATE_STRESS_MAX: u32 = 5;

/// Observed leaf colour. Parsing never fails: anything other than an exact
/// lowercase match is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LeafColor {
    Green,
    Yellow,
    Brown,
    Other,
}

impl LeafColor {
    pub fn parse(value: &str) -> Self {
        match value {
            "green" => LeafColor::Green,
            "yellow" => LeafColor::Yellow,
            "brown" => LeafColor::Brown,
            _ => LeafColor::Other,
        }
    }
}

impl From<String> for LeafColor {
    fn from(value: String) -> Self {
        LeafColor::parse(&value)
    }
}

/// Observed visual symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Symptom {
    None,
    Wilting,
    Spots,
    Other,
}

impl Symptom {
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Symptom::None,
            "wilting" => Symptom::Wilting,
            "spots" => Symptom::Spots,
            _ => Symptom::Other,
        }
    }
}

impl From<String> for Symptom {
    fn from(value: String) -> Self {
        Symptom::parse(&value)
    }
}

/// Stress estimator input; absent fields take their defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressInput {
    pub temperature: f64,
    pub humidity: f64,
    pub ozone: f64,
    pub color: LeafColor,
    pub symptom: Symptom,
}

impl Default for StressInput {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            ozone: DEFAULT_OZONE,
            color: LeafColor::Other,
            symptom: Symptom::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn from_points(points: u32) -> Self {
        if points <= LOW_STRESS_MAX {
            StressLevel::Low
        } else if points <= MODERATE_STRESS_MAX {
            StressLevel::Moderate
        } else {
            StressLevel::High
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Stress estimate with the indicators that fired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressAssessment {
    pub level: StressLevel,
    pub points: u32,
    pub indicators: Vec<&'static str>,
    /// Indicators joined with " | ", or a no-stress message
    pub explanation: String,
}

impl StressAssessment {
    /// "Stress Level: High"
    pub fn result_text(&self) -> String {
        format!("Stress Level: {}", self.level)
    }
}

pub fn estimate_stress(input: &StressInput) -> StressAssessment {
    let mut points = 0;
    let mut indicators = Vec::new();

    let mut add = |p: u32, why: &'static str| {
        points += p;
        indicators.push(why);
    };

    // Temperature
    if input.temperature > 32.0 {
        add(2, "High temperature stress");
    } else if input.temperature < 10.0 {
        add(2, "Cold stress");
    }

    // Humidity
    if input.humidity > 85.0 {
        add(1, "High humidity conditions");
    } else if input.humidity < 30.0 {
        add(1, "Low humidity stress");
    }

    if input.ozone > 50.0 {
        add(2, "High ground-level ozone");
    }

    // Visual indicators
    match input.color {
        LeafColor::Yellow => add(2, "Yellowing leaves indicate nutrient deficiency"),
        LeafColor::Brown => add(3, "Browning indicates severe stress or disease"),
        LeafColor::Green | LeafColor::Other => {}
    }

    match input.symptom {
        Symptom::Wilting => add(2, "Wilting indicates water stress"),
        Symptom::Spots => add(3, "Spots indicate potential disease"),
        Symptom::None | Symptom::Other => {}
    }

    let explanation = if indicators.is_empty() {
        "No significant stress indicators".to_string()
    } else {
        indicators.join(" | ")
    };

    let level = StressLevel::from_points(points);
    tracing::debug!(points, level = %level, "stress estimated");

    StressAssessment {
        level,
        points,
        indicators,
        explanation,
    }
}
