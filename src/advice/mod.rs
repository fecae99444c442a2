//! Advice generation: disease categories and fixed recommendation lists

pub mod category;
pub mod recommendations;

pub use category::DiseaseCategory;
pub use recommendations::{category_recommendations, recommend, tier_recommendations, to_owned_list};
