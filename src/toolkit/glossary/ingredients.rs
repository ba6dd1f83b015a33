//! Reference descriptions for common active ingredients.

pub const GLOSSARY_SEARCH_LIMIT: usize = 8;

pub static INGREDIENT_GLOSSARY: &[(&str, &str)] = &[
    ("Salicylic Acid", "BHA that exfoliates pores and reduces acne; ideal for oily, congested skin"),
    ("AHA", "Alpha Hydroxy Acid; chemical exfoliant that removes dead skin cells; improves texture"),
    ("Glycolic Acid", "Type of AHA; gentle exfoliation; brightens and smooths skin"),
    ("Azelaic Acid", "Treats acne, rosacea, and hyperpigmentation; antibacterial and anti-inflammatory"),
    ("Benzoyl Peroxide", "Kills acne-causing bacteria; reduces inflammation; use cautiously as it can be drying"),
    ("Hyaluronic Acid", "Humectant that holds 1000x its weight in water; deeply hydrates skin"),
    ("Glycerin", "Draws moisture to skin; humectant; suitable for all skin types"),
    ("Panthenol", "Provitamin B5; soothes irritation; strengthens skin barrier"),
    ("Squalane", "Lightweight oil; mimics skin's natural oils; non-comedogenic"),
    ("Ceramides", "Lipids that repair skin barrier; essential for dry skin"),
    ("Cholesterol", "Barrier-repairing lipid; strengthens skin barrier; reduces irritation"),
    ("Vitamin C", "Antioxidant; boosts collagen; brightens skin and fades dark spots"),
    ("Niacinamide", "Vitamin B3; controls oil; reduces redness; strengthens skin barrier"),
    ("Kojic Acid", "Natural brightener; inhibits melanin; fades dark spots and hyperpigmentation"),
    ("Arbutin", "Plant-derived ingredient; inhibits tyrosinase; fades hyperpigmentation"),
    ("Vitamin E", "Antioxidant; protects against environmental damage; moisturizes"),
    ("Green Tea", "Antioxidant; calms inflammation; reduces sebum production"),
    ("Retinol", "Vitamin A derivative; stimulates collagen; reduces wrinkles and fine lines"),
    ("Retinoid", "Family of vitamin A compounds; powerful anti-aging; requires gradual introduction"),
    ("Coenzyme Q10", "Antioxidant; boosts energy in cells; reduces fine lines"),
    ("Peptides", "Amino acid chains; stimulate collagen; improve skin firmness"),
    ("Collagen", "Protein; plumps skin; improves elasticity; large molecules (stays on surface)"),
    ("Centella Asiatica", "Cica; heals skin; reduces redness; strengthens barrier"),
    ("Allantoin", "Soothes irritation; promotes healing; calms reactive skin"),
    ("Aloe Vera", "Cooling; hydrating; reduces inflammation; soothes burns"),
    ("Calendula", "Promotes healing; reduces inflammation; suitable for sensitive skin"),
    ("Tea Tree Oil", "Antibacterial; antifungal; acne-fighting; use cautiously to avoid irritation"),
    ("Colloidal Oatmeal", "Soothes itching; repairs barrier; gentle exfoliation"),
    ("Lanolin", "Emollient; deeply moisturizing; occlusive; may cause irritation in some"),
    ("Fatty Acids", "Essential for barrier function; deeply nourishing; anti-inflammatory"),
    ("Tranexamic Acid", "Reduces redness; prevents vascular dilation; brightens skin"),
    ("Licorice Root", "Brightens skin; reduces irritation; calms redness"),
];


/// Entries whose name contains `query` (case-insensitive), in glossary order.
pub fn search_ingredients(query: &str, limit: usize) -> Vec<(&'static str, &'static str)> {
    let query = query.trim().to_lowercase();

    INGREDIENT_GLOSSARY
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&query))
        .take(limit)
        .copied()
        .collect()
}


pub fn describe_ingredient(name: &str) -> Option<&'static str> {
    let name = name.trim();
    INGREDIENT_GLOSSARY
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_partial() {
        let results = search_ingredients("acid", 100);
        assert_eq!(results.len(), 7);
        assert_eq!(results[0].0, "Salicylic Acid");
        assert_eq!(search_ingredients("acid", 3).len(), 3);
        assert!(results.iter().all(|(name, _)| name.to_lowercase().contains("acid")));
    }

    #[test]
    fn test_search_case_insensitive() {
        let results = search_ingredients("RETIN", GLOSSARY_SEARCH_LIMIT);
        let names: Vec<_> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Retinol", "Retinoid"]);
    }

    #[test]
    fn test_empty_query_lists_all() {
        assert_eq!(search_ingredients("", 100).len(), INGREDIENT_GLOSSARY.len());
        assert!(search_ingredients("unobtainium", 8).is_empty());
    }

    #[test]
    fn test_describe() {
        assert!(describe_ingredient("niacinamide").unwrap().starts_with("Vitamin B3"));
        assert!(describe_ingredient("clay").is_none());
    }
}
