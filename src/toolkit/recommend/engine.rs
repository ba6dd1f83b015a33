use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, warn};

use super::models::RecommendationResult;
use super::routine::{directions, morning_routine, night_routine};
use crate::GENERAL_SKIN_CARE;
use crate::core::config::{AdvisorConfig, SkinTypePolicy};
use crate::core::error::Result;
use crate::toolkit::concerns::ConcernDictionary;
use crate::toolkit::dataset::{ConcernEntry, Dataset, SkinType};
use crate::utils::safe_truncate_ellipsis;


/// Maps free-text skin descriptions to aggregated recommendations.
///
/// Immutable after construction; share one instance by reference or `Arc`.
pub struct RecommendationEngine {
    dataset: Dataset,
    dictionary: ConcernDictionary,
    config: AdvisorConfig,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::with_config(AdvisorConfig::default())
    }

    /// Loads the table from `config.dataset_path`, or the embedded table if that fails.
    pub fn with_config(config: AdvisorConfig) -> Self {
        let dataset = Dataset::load_or_embedded(&config.dataset_path);
        Self::from_dataset(dataset, config)
    }

    pub fn from_entries(entries: Vec<ConcernEntry>, config: AdvisorConfig) -> Self {
        Self::from_dataset(Dataset::from_entries(entries), config)
    }

    pub fn from_dataset(dataset: Dataset, config: AdvisorConfig) -> Self {
        info!(
            "Recommendation engine ready: {} rows ({:?}), {} matching",
            dataset.len(),
            dataset.source(),
            config.match_mode
        );

        Self {
            dictionary: ConcernDictionary::with_mode(config.match_mode),
            dataset,
            config,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dictionary(&self) -> &ConcernDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn extract_concerns(&self, text: &str) -> Vec<String> {
        self.dictionary.extract(text)
    }

    /// Never fails. An unrecognized `skin_type` is logged and treated as no filter.
    pub fn get_recommendations(&self, text: &str, skin_type: Option<&str>) -> RecommendationResult {
        let facet = skin_type.and_then(|raw| {
            SkinType::parse_facet(raw).unwrap_or_else(|e| {
                warn!("{} - ignoring skin type filter", e);
                None
            })
        });

        self.recommend(text, facet)
    }

    /// Like [`get_recommendations`](Self::get_recommendations), but honours
    /// `SkinTypePolicy::Reject` for unrecognized skin types.
    pub fn try_recommendations(
        &self,
        text: &str,
        skin_type: Option<&str>,
    ) -> Result<RecommendationResult> {
        let facet = match (skin_type, self.config.skin_type_policy) {
            (None, _) => None,
            (Some(raw), SkinTypePolicy::Reject) => SkinType::parse_facet(raw)?,
            (Some(raw), SkinTypePolicy::Ignore) => {
                return Ok(self.get_recommendations(text, Some(raw)));
            }
        };

        Ok(self.recommend(text, facet))
    }

    pub fn recommend(&self, text: &str, skin_type: Option<SkinType>) -> RecommendationResult {
        let concerns = self.dictionary.extract(text);
        let rows = self.select_rows(&concerns, skin_type);

        debug!(
            "'{}' -> concerns {:?}, skin type {:?}, {} rows",
            safe_truncate_ellipsis(text, 60),
            concerns,
            skin_type,
            rows.len()
        );

        self.aggregate(concerns, &rows)
    }

    fn select_rows(&self, concerns: &[String], skin_type: Option<SkinType>) -> Vec<&ConcernEntry> {
        let entries = self.dataset.entries();

        let matched: Vec<&ConcernEntry> = entries
            .iter()
            .filter(|entry| concerns.iter().any(|c| *c == entry.concern))
            .filter(|entry| skin_type.is_none_or(|s| entry.skin_type == s))
            .collect();
        if !matched.is_empty() {
            return matched;
        }

        let general: Vec<&ConcernEntry> = entries
            .iter()
            .filter(|entry| entry.concern == GENERAL_SKIN_CARE)
            .collect();
        if !general.is_empty() {
            debug!("No rows matched - using {} general skin care rows", general.len());
            return general;
        }

        debug!("No rows matched and no general skin care rows - using first row");
        entries.iter().take(1).collect()
    }

    fn aggregate(&self, concerns: Vec<String>, rows: &[&ConcernEntry]) -> RecommendationResult {
        let ingredient_set: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.ingredients.iter().map(String::as_str))
            .collect();
        let brand_set: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.brands.iter().map(String::as_str))
            .collect();

        let ingredients: Vec<String> = ingredient_set.into_iter().map(str::to_string).collect();
        let brands = brand_set
            .into_iter()
            .take(self.config.max_brands)
            .collect::<Vec<_>>()
            .join(", ");
        let benefits = unique_in_order(rows.iter().map(|row| row.benefits.as_str())).join(" ");
        let notes = unique_in_order(rows.iter().map(|row| row.notes.as_str())).join(" | ");

        RecommendationResult {
            concerns,
            benefits,
            brands,
            directions: directions(),
            notes,
            morning_routine: morning_routine(&ingredients),
            night_routine: night_routine(&ingredients),
            ingredients,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AdvisorError;
    use crate::toolkit::concerns::MatchMode;
    use crate::toolkit::dataset::{DatasetSource, embedded_entries};

    fn engine() -> RecommendationEngine {
        RecommendationEngine::from_entries(embedded_entries().to_vec(), AdvisorConfig::default())
    }

    fn entry(concern: &str, skin_type: SkinType, ingredients: &[&str], brands: &[&str]) -> ConcernEntry {
        ConcernEntry::new(
            concern,
            skin_type,
            ingredients.iter().map(|s| s.to_string()).collect(),
            format!("{concern} benefits"),
            brands.iter().map(|s| s.to_string()).collect(),
            format!("{concern} notes"),
        )
    }

    fn assert_sorted_unique(items: &[String]) {
        assert!(items.windows(2).all(|w| w[0] < w[1]), "not sorted/unique: {items:?}");
    }

    #[test]
    fn test_sample_input() {
        let result = engine().get_recommendations(
            "I have oily, acne-prone skin with blackheads and enlarged pores",
            None,
        );

        for concern in ["acne", "oily skin", "blackheads", "enlarged pores"] {
            assert!(result.concerns.contains(&concern.to_string()), "missing {concern}");
        }
        assert!(result.has_ingredient("salicylic acid"));
        assert!(result.has_ingredient("niacinamide"));
        assert_eq!(result.ingredients.iter().filter(|i| *i == "niacinamide").count(), 1);
        assert_sorted_unique(&result.ingredients);
        assert!(result.night_routine.contains("2. **Exfoliant**"));
    }

    #[test]
    fn test_facet_wipeout_falls_back_to_first_row() {
        let engine = engine();
        let result = engine.get_recommendations("wrinkles and fine lines", Some("Oily"));

        assert_eq!(result.concerns, vec!["wrinkles"]);
        assert_eq!(
            result.ingredients,
            vec!["niacinamide", "salicylic acid", "tea tree oil"]
        );
        assert_eq!(result.notes, embedded_entries()[0].notes);
    }

    #[test]
    fn test_facet_wipeout_prefers_general_rows() {
        let engine = RecommendationEngine::from_entries(
            vec![
                entry("wrinkles", SkinType::Normal, &["retinol"], &["Murad"]),
                entry(GENERAL_SKIN_CARE, SkinType::Normal, &["glycerin"], &["CeraVe"]),
                entry(GENERAL_SKIN_CARE, SkinType::Dry, &["ceramides"], &["Aveeno"]),
            ],
            AdvisorConfig::default(),
        );

        let result = engine.get_recommendations("wrinkles", Some("oily"));
        assert_eq!(result.ingredients, vec!["ceramides", "glycerin"]);
        assert_eq!(result.brands, "Aveeno, CeraVe");
        assert_eq!(result.notes, "general skin care notes");
    }

    #[test]
    fn test_no_match_uses_sentinel() {
        let result = engine().get_recommendations("", None);

        assert_eq!(result.concerns, vec![GENERAL_SKIN_CARE]);
        assert!(!result.ingredients.is_empty());
        assert!(!result.brand_list().is_empty());
    }

    #[test]
    fn test_facet_intersection() {
        let result = engine().get_recommendations("my dry skin", Some("Dry"));

        assert_eq!(result.concerns, vec!["dry skin", "dehydrated skin"]);
        assert_eq!(
            result.ingredients,
            vec!["glycerin", "hyaluronic acid", "panthenol"]
        );
    }

    #[test]
    fn test_brands_sorted_and_capped() {
        let engine = engine();
        let result = engine.get_recommendations(
            "acne, oily skin, dark spots, wrinkles, redness, rosacea and dull skin",
            None,
        );

        let brands = result.brand_list();
        assert_eq!(brands.len(), 8);
        assert!(brands.windows(2).all(|w| w[0] < w[1]));

        let capped = RecommendationEngine::from_entries(
            embedded_entries().to_vec(),
            AdvisorConfig::default().with_max_brands(3),
        );
        let result = capped.get_recommendations("acne and rosacea", None);
        assert_eq!(result.brand_list().len(), 3);
    }

    #[test]
    fn test_duplicate_rows_aggregate() {
        let engine = engine();
        let result = engine.get_recommendations("rosacea", None);

        assert_eq!(result.concerns, vec!["rosacea"]);
        assert!(result.has_ingredient("calendula"));
        assert!(result.has_ingredient("centella asiatica"));
        assert!(result.has_ingredient("azelaic acid"));
        assert_eq!(result.notes.split(" | ").count(), 2);
    }

    #[test]
    fn test_repeated_text_deduplicated() {
        let engine = RecommendationEngine::from_entries(
            vec![
                entry("acne", SkinType::Oily, &["clay"], &["Cosrx"]),
                entry("acne", SkinType::Oily, &["clay", "AHA"], &["Cosrx"]),
            ],
            AdvisorConfig::default(),
        );

        let result = engine.get_recommendations("acne", None);
        assert_eq!(result.benefits, "acne benefits");
        assert_eq!(result.notes, "acne notes");
        assert_eq!(result.ingredients, vec!["AHA", "clay"]);
        assert!(result.night_routine.contains("3. **AHA**"));
    }

    #[test]
    fn test_invalid_skin_type_ignored() {
        let engine = engine();
        assert_eq!(
            engine.get_recommendations("acne", Some("leathery")),
            engine.get_recommendations("acne", None)
        );
        assert_eq!(
            engine.get_recommendations("acne", Some("Any")),
            engine.get_recommendations("acne", None)
        );
        assert!(engine.try_recommendations("acne", Some("leathery")).is_ok());
    }

    #[test]
    fn test_invalid_skin_type_rejected() {
        let engine = RecommendationEngine::from_entries(
            embedded_entries().to_vec(),
            AdvisorConfig::default().with_skin_type_policy(SkinTypePolicy::Reject),
        );

        assert!(matches!(
            engine.try_recommendations("acne", Some("leathery")),
            Err(AdvisorError::InvalidSkinType(_))
        ));
        assert!(engine.try_recommendations("acne", Some("oily")).is_ok());
    }

    #[test]
    fn test_repeatable() {
        let engine = engine();
        let text = "I have combination skin - oily T-zone but dry cheeks with dark spots";
        assert_eq!(
            engine.get_recommendations(text, Some("Combination")),
            engine.get_recommendations(text, Some("Combination"))
        );
    }

    #[test]
    fn test_word_boundary_engine() {
        let engine = RecommendationEngine::from_entries(
            embedded_entries().to_vec(),
            AdvisorConfig::default().with_match_mode(MatchMode::WordBoundary),
        );

        assert_eq!(engine.extract_concerns("oilyness"), vec![GENERAL_SKIN_CARE]);
    }

    #[test]
    fn test_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecommendationEngine>();
    }

    #[test]
    fn test_itemless_csv_lists_never_reach_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skincare_dataset.csv");
        std::fs::write(
            &path,
            "concern,skin_type,ingredients,benefits,brands,notes\n\
             acne,oily,\", ,\",Clears,\",\",Note\n",
        )
        .unwrap();

        let engine = RecommendationEngine::with_config(AdvisorConfig::new(&path));
        assert_eq!(engine.dataset().source(), &DatasetSource::Embedded);

        let result = engine.get_recommendations("acne", None);
        assert!(!result.ingredients.is_empty());
        assert!(!result.brands.is_empty());
    }
}
