//! Environmental Disease Risk Scorer
//!
//! Reading → band accumulation → threshold classification → advice.
//!
//! ## Architecture
//! - `accumulator.rs` - Per-feature band weights summed into a [`RiskScore`]
//! - `classifier.rs` - Score thresholds, disease labels, confidence clamp
//!
//! Every call is a pure function of its reading; the batch entry point fans
//! readings out across the Rayon pool.

pub mod accumulator;
pub mod classifier;

pub use accumulator::{accumulate_risk, risk_score, BandContribution, RiskBreakdown, RiskFeature, RiskScore};
pub use classifier::{classify_score, heuristic_confidence, Classification, DiseaseLabel, RiskTier};

use rayon::prelude::*;
use serde::Serialize;

use crate::advice::{recommend, to_owned_list, DiseaseCategory};
use crate::reading::EnvironmentalReading;

/// Output record of an environmental disease assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseAssessment {
    pub disease: DiseaseLabel,
    pub category: DiseaseCategory,
    pub risk_level: RiskTier,
    pub confidence: f64,
    /// Accumulated score (absent for model-backed predictions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<RiskScore>,
    pub recommendations: Vec<String>,
    pub environmental_conditions: EnvironmentalReading,
}

/// Score a reading with the band heuristic and attach advice
pub fn assess_environmental_risk(reading: &EnvironmentalReading) -> DiseaseAssessment {
    let breakdown = accumulate_risk(reading);
    let classification = classify_score(breakdown.score);

    tracing::debug!(
        score = breakdown.score.value(),
        bands = breakdown.contributions.len(),
        tier = %classification.tier,
        "environmental risk scored"
    );

    DiseaseAssessment {
        disease: classification.label,
        category: classification.label.category(),
        risk_level: classification.tier,
        confidence: classification.confidence,
        score: Some(breakdown.score),
        recommendations: to_owned_list(recommend(classification.label, classification.tier)),
        environmental_conditions: *reading,
    }
}

/// Assess many readings in parallel, preserving input order
pub fn score_batch(readings: &[EnvironmentalReading]) -> Vec<DiseaseAssessment> {
    readings.par_iter().map(assess_environmental_risk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_scenario() {
        let reading = EnvironmentalReading::with_core(25.0, 85.0, 50.0, 6.5);
        let assessment = assess_environmental_risk(&reading);

        assert_eq!(assessment.score, Some(RiskScore::from_tenths(7)));
        assert_eq!(assessment.disease, DiseaseLabel::LateBlight);
        assert_eq!(assessment.risk_level, RiskTier::High);
        assert_eq!(assessment.confidence, 0.9);
        assert_eq!(assessment.recommendations[0], "High disease risk detected");
    }

    #[test]
    fn test_cold_dry_scenario() {
        let reading = EnvironmentalReading::with_core(5.0, 50.0, 50.0, 7.0);
        let assessment = assess_environmental_risk(&reading);

        assert_eq!(assessment.score, Some(RiskScore::from_tenths(1)));
        assert_eq!(assessment.disease, DiseaseLabel::Healthy);
        assert_eq!(assessment.risk_level, RiskTier::Low);
        assert_eq!(assessment.confidence, 0.6);
    }

    #[test]
    fn test_deterministic() {
        let reading = EnvironmentalReading::with_core(27.3, 72.0, 85.0, 5.1);
        assert_eq!(assess_environmental_risk(&reading), assess_environmental_risk(&reading));
    }

    #[test]
    fn test_batch_preserves_order() {
        let readings = vec![
            EnvironmentalReading::with_core(25.0, 85.0, 50.0, 6.5),
            EnvironmentalReading::with_core(5.0, 50.0, 50.0, 7.0),
            EnvironmentalReading::with_core(25.0, 65.0, 50.0, 6.5),
        ];

        let results = score_batch(&readings);
        let tiers: Vec<RiskTier> = results.iter().map(|r| r.risk_level).collect();
        assert_eq!(tiers, vec![RiskTier::High, RiskTier::Low, RiskTier::Medium]);
    }
}
