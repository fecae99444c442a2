//! Model-backed predictors
//!
//! ## Architecture
//! - `models.rs` - Traits for injected pre-trained models
//! - `environmental.rs` - Environmental disease prediction (heuristic fallback)
//! - `image.rs` - Leaf image detection (colour-analysis fallback)
//! - `crop.rs` - Crop recommendation and yield wrappers

pub mod models;
pub mod environmental;
pub mod image;
pub mod crop;

pub use models::{argmax, CropModel, EnvironmentalModel, ImageClassifier, YieldModel};
pub use environmental::{predict_environmental, EnvironmentalPrediction};
pub use image::{detect_disease, ChannelMeans, ClassIndex, ImageDiagnosis};
pub use crop::{predict_yield, recommend_crop, CropRecommendation, YieldInput, YieldPrediction};
