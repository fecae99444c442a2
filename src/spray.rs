//! Spray Window Scorer
//!
//! Scores hourly forecast slots for pesticide/fertilizer spraying and picks the
//! contiguous window (3 hours by default) with the highest mean slot score.
//!
//! **Slot bands** (all bounds inclusive, contributions independent):
//!   - 20 ≤ temperature ≤ 30 → +0.3
//!   - 50 ≤ humidity ≤ 70 → +0.3
//!   - wind ≤ 10 → +0.2
//!   - rain probability ≤ 0.1 → +0.2
//!
//! Scores are kept in tenths so window sums compare exactly. On equal means the
//! earliest window wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const SLOT_TEMP_WEIGHT: u32 = 3;
pub const SLOT_HUMIDITY_WEIGHT: u32 = 3;
pub const SLOT_WIND_WEIGHT: u32 = 2;
pub const SLOT_RAIN_WEIGHT: u32 = 2;

pub const DEFAULT_WINDOW_HOURS: usize = 3;

/// Mean score at or above which conditions are ideal
pub const IDEAL_WINDOW_SCORE: f64 = 0.5;
/// Mean score at or above which conditions are acceptable
pub const ACCEPTABLE_WINDOW_SCORE: f64 = 0.3;

/// One hour of forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySlot {
    /// Hour of day (0-23)
    pub hour: u32,
    pub temperature: f64,
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind: f64,
    /// Probability of rain (0-1)
    pub rain_probability: f64,
}

/// Slot score in tenths (0-10)
pub fn slot_score_tenths(slot: &HourlySlot) -> u32 {
    let mut tenths = 0;
    if (20.0..=30.0).contains(&slot.temperature) {
        tenths += SLOT_TEMP_WEIGHT;
    }
    if (50.0..=70.0).contains(&slot.humidity) {
        tenths += SLOT_HUMIDITY_WEIGHT;
    }
    if slot.wind <= 10.0 {
        tenths += SLOT_WIND_WEIGHT;
    }
    if slot.rain_probability <= 0.1 {
        tenths += SLOT_RAIN_WEIGHT;
    }
    tenths
}

/// Slot score (0.0 - 1.0)
pub fn slot_score(slot: &HourlySlot) -> f64 {
    slot_score_tenths(slot) as f64 / 10.0
}

/// Best contiguous window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SprayWindow {
    /// Index of the first slot in the forecast
    pub start_index: usize,
    /// Hour of day the window opens
    pub start_hour: u32,
    pub hours: usize,
    /// Mean slot score over the window
    pub score: f64,
}

impl SprayWindow {
    /// "14:00 to 17:00"
    pub fn label(&self) -> String {
        format!("{}:00 to {}:00", self.start_hour, self.end_hour())
    }

    /// Hour of day the window closes, wrapping past midnight. Inputs are
    /// reduced modulo 24 before adding.
    pub fn end_hour(&self) -> u32 {
        (self.start_hour % 24 + (self.hours % 24) as u32) % 24
    }
}

/// Find the window of `hours` consecutive slots with the highest mean score.
///
/// Returns `None` when the forecast is shorter than the window (or `hours` is 0).
pub fn best_window(slots: &[HourlySlot], hours: usize) -> Option<SprayWindow> {
    if hours == 0 || slots.len() < hours {
        return None;
    }

    let scores: Vec<u32> = slots.iter().map(slot_score_tenths).collect();

    let mut best: Option<(usize, u32)> = None;
    for (start, window) in scores.windows(hours).enumerate() {
        let sum: u32 = window.iter().sum();
        if best.map_or(true, |(_, best_sum)| sum > best_sum) {
            best = Some((start, sum));
        }
    }

    best.map(|(start_index, sum)| SprayWindow {
        start_index,
        start_hour: slots[start_index].hour,
        hours,
        score: sum as f64 / (hours as f64 * 10.0),
    })
}

/// Spray advice for a forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprayReport {
    pub result: String,
    pub window: String,
    pub confidence: f64,
    pub recommendation: &'static str,
    /// Conditions in the first forecast hour
    pub conditions: Option<HourlySlot>,
}

/// Pick the best window and phrase the advice
pub fn spray_report(slots: &[HourlySlot], hours: usize) -> Option<SprayReport> {
    let window = best_window(slots, hours)?;
    let label = window.label();
    let score = window.score;

    let (result, recommendation) = if score >= IDEAL_WINDOW_SCORE {
        (
            format!("Best {}-hour window to spray: {} (Confidence: {:.2})", hours, label, score),
            "Ideal conditions for spraying",
        )
    } else if score >= ACCEPTABLE_WINDOW_SCORE {
        (
            format!("Acceptable window: {} (Confidence: {:.2})", label, score),
            "Moderate conditions - proceed with caution",
        )
    } else {
        (
            format!("Poor conditions today. Best available: {} (Confidence: {:.2})", label, score),
            "Consider postponing spray application",
        )
    };

    tracing::debug!(window = %label, score, "spray window selected");

    Some(SprayReport {
        result,
        window: label,
        confidence: score,
        recommendation,
        conditions: slots.first().copied(),
    })
}

/// Synthetic hourly forecast for callers without a weather feed.
///
/// Uniform draws: temperature 20-35 °C, humidity 40-80 %, wind 0-15 km/h,
/// rain probability 0-0.3. Hours wrap past midnight. Seeded, so the same
/// seed always yields the same forecast.
pub fn synthetic_forecast(start_hour: u32, hours: usize, seed: u64) -> Vec<HourlySlot> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..hours as u32)
        .map(|offset| HourlySlot {
            hour: (start_hour % 24 + offset % 24) % 24,
            temperature: rng.gen_range(20.0..35.0),
            humidity: rng.gen_range(40.0..80.0),
            wind: rng.gen_range(0.0..15.0),
            rain_probability: rng.gen_range(0.0..0.3),
        })
        .collect()
}
