//! Agricultural Risk Scorer
//!
//! Rule-based and model-backed crop advisory scoring: environmental disease
//! risk, plant stress, fertilizer timing, spray windows and weather alerts.
//!
//! ## Architecture
//! - `reading.rs` - Environmental reading with documented defaults
//! - `risk/` - Additive risk accumulation and threshold classification
//! - `advice/` - Disease categories and recommendation lists
//! - `stress.rs` - Point-based plant stress estimation
//! - `fertilizer.rs` - Fertilizer product and timing rules
//! - `spray.rs` - Hourly slot scoring and best spray window search
//! - `alerts.rs` - Current and multi-day weather alerts
//! - `detection/` - Injected model wrappers with heuristic fallbacks
//! - `advisor.rs` - Coordinator and JSON request dispatch
//! - `config.rs` - Operational configuration
//!
//! Every scoring function is pure and deterministic; models are passed in
//! explicitly rather than held in process-wide state.

pub mod error;
pub mod reading;
pub mod risk;
pub mod advice;
pub mod stress;
pub mod fertilizer;
pub mod spray;
pub mod alerts;
pub mod detection;
pub mod config;
pub mod advisor;

// Re-export commonly used types
pub use error::{AdvisorError, AdvisorResult};
pub use reading::EnvironmentalReading;
pub use risk::{
    accumulate_risk, assess_environmental_risk, classify_score, score_batch, Classification,
    DiseaseAssessment, DiseaseLabel, RiskScore, RiskTier,
};
pub use advice::{recommend, DiseaseCategory};
pub use stress::{estimate_stress, StressAssessment, StressInput, StressLevel};
pub use fertilizer::{recommend_fertilizer, FertilizerAdvice, FertilizerInput};
pub use spray::{best_window, spray_report, synthetic_forecast, HourlySlot, SprayReport, SprayWindow};
pub use alerts::{current_conditions_alerts, forecast_alerts, CurrentWeather, DailyForecast};
pub use config::AdvisorConfig;
pub use advisor::{Advisor, AdvisoryRequest};
