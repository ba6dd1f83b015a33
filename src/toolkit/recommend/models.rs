use serde::{Deserialize, Serialize};

use crate::utils::title_case;


/// Consolidated answer for one description. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Detected canonical concerns, first-detected first. Never empty.
    pub concerns: Vec<String>,
    /// Sorted, deduplicated ingredient names.
    pub ingredients: Vec<String>,
    pub benefits: String,
    /// Sorted brand names joined with ", ", capped by `AdvisorConfig::max_brands`.
    pub brands: String,
    pub directions: String,
    /// Safety notes joined with " | ".
    pub notes: String,
    pub morning_routine: String,
    pub night_routine: String,
}

impl RecommendationResult {
    pub fn brand_list(&self) -> Vec<&str> {
        self.brands
            .split(", ")
            .filter(|brand| !brand.is_empty())
            .collect()
    }

    pub fn concern_titles(&self) -> Vec<String> {
        self.concerns.iter().map(|c| title_case(c)).collect()
    }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|i| i == name)
    }
}
