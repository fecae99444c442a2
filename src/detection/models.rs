//! Injected model interfaces
//!
//! Pre-trained models are loaded by the host process and handed in by
//! reference. Nothing in this crate loads or caches a model.

use crate::error::AdvisorResult;
use crate::reading::EnvironmentalReading;

/// Sequence model over environmental readings.
///
/// Returns class probabilities in [`crate::risk::DiseaseLabel::MODEL_CLASSES`]
/// order.
pub trait EnvironmentalModel: Send + Sync {
    fn predict(&self, reading: &EnvironmentalReading) -> AdvisorResult<Vec<f64>>;
}

/// Leaf image classifier.
///
/// Receives the preprocessed image (224×224 RGB scaled to 0-1, row-major,
/// channel-last) and returns one probability per class index.
pub trait ImageClassifier: Send + Sync {
    fn predict(&self, pixels: &[f32]) -> AdvisorResult<Vec<f64>>;
}

/// Crop recommendation classifier over
/// `[N, P, K, temperature, humidity, ph, rainfall, ozone]`.
pub trait CropModel: Send + Sync {
    fn predict(&self, features: &[f64; 8]) -> AdvisorResult<String>;

    /// Crop names the model was trained on
    fn classes(&self) -> &[String];
}

/// Potato yield regressor over `[ozone, temp, rain, soil]` (tonnes/hectare)
pub trait YieldModel: Send + Sync {
    fn predict(&self, features: &[f64; 4]) -> AdvisorResult<f64>;
}

/// Index of the highest probability with that probability.
///
/// First maximum wins on ties. `None` for an empty vector.
pub fn argmax(probabilities: &[f64]) -> Option<(usize, f64)> {
    probabilities
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, p)| match best {
            Some((_, best_p)) if p <= best_p => best,
            _ => Some((i, p)),
        })
}
