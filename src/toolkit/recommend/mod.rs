

pub mod engine;
pub mod models;
pub mod routine;

pub use engine::RecommendationEngine;
pub use models::RecommendationResult;
pub use routine::{directions, morning_routine, night_routine};
