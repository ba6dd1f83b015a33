//! Built-in recommendation table, used when no external dataset is available.

use lazy_static::lazy_static;

use super::models::{ConcernEntry, SkinType};
use crate::utils::split_list;

// (concern, skin type, ingredients, benefits, brands, notes)
type Row = (&'static str, SkinType, &'static str, &'static str, &'static str, &'static str);

static EMBEDDED_ROWS: &[Row] = &[
    (
        "acne",
        SkinType::Oily,
        "salicylic acid, niacinamide, tea tree oil",
        "Unclogs pores, kills acne-causing bacteria, reduces acne scars, controls oil",
        "The Ordinary, Cosrx, Paula's Choice, Minimalist, Neutrogena",
        "May cause initial purging. Avoid mixing with vitamin C. Use SPF 30+ daily. Start 1-2x per week.",
    ),
    (
        "oily skin",
        SkinType::Oily,
        "niacinamide, glycerin, clay",
        "Controls sebum, reduces shine, minimizes pore appearance, prevents congestion",
        "CeraVe, Olay, The Ordinary, Cosrx, Good Molecules",
        "Suitable for oily skin types. Use SPF 50+ daily. Can cause initial dryness.",
    ),
    (
        "dry skin",
        SkinType::Dry,
        "panthenol, hyaluronic acid, glycerin",
        "Deep hydration, restores moisture barrier, reduces flaking, soothes skin",
        "Aveeno, LANEIGE, Tatcha, SK-II, StriVectin",
        "Results take 2-3 weeks. Patch test first. Do not skip moisturizer.",
    ),
    (
        "hyperpigmentation",
        SkinType::Combination,
        "niacinamide, vitamin C, azelaic acid",
        "Inhibits melanin production, fades dark marks, evens skin tone",
        "Peach & Lily, Neutrogena, Allies of Skin, The Ordinary, LANEIGE",
        "Use SPF 50+ during day. Results visible after 4-6 weeks. Avoid direct sun.",
    ),
    (
        "blackheads",
        SkinType::Oily,
        "salicylic acid, tea tree oil, benzoyl peroxide",
        "Exfoliates, unclogs comedones, antibacterial, prevents future blackheads",
        "Olay, First Aid Beauty, Kiehl's, Cosrx, The Ordinary",
        "Can cause initial dryness. Introduce gradually. Start 2-3x per week.",
    ),
    (
        "wrinkles",
        SkinType::Normal,
        "retinol, coenzyme Q10, peptides",
        "Reduces fine lines, boosts collagen production, improves elasticity",
        "The Ordinary, Vichy, Sunday Riley, Murad, Estee Lauder",
        "Use at night 2-3x per week initially. Increases sun sensitivity. Avoid mixing with actives.",
    ),
    (
        "dull skin",
        SkinType::Oily,
        "vitamin C, AHA, glycolic acid, azelaic acid",
        "Brightens dull complexion, removes dead cells, improves radiance, smooths texture",
        "Vichy, Ren Clean Skincare, Minimalist, The Ordinary, CeraVe",
        "Start with once weekly. Build up frequency gradually. Use SPF 50+.",
    ),
    (
        "dark spots",
        SkinType::Combination,
        "arbutin, AHA, kojic acid, vitamin C",
        "Fades hyperpigmentation, removes dead skin, promotes cell turnover",
        "Krave Beauty, Augustinus Bader, Clarins, The Ordinary, Murad",
        "Use with SPF 50+ during day. Avoid direct sun. Results after 4-8 weeks.",
    ),
    (
        "enlarged pores",
        SkinType::Combination,
        "panthenol, hyaluronic acid, niacinamide",
        "Minimizes appearance, hydrates, improves skin texture, refines surface",
        "Estee Lauder, Dermalogica, Drunk Elephant, Tatcha, The Ordinary",
        "Hydrating formula works best. Use daily after cleansing. Pair with moisturizer.",
    ),
    (
        "sensitivity",
        SkinType::Sensitive,
        "green tea, allantoin, centella asiatica",
        "Calms irritation, reduces sensitivity, strengthens barrier",
        "Avene, Peter Thomas Roth, Good Molecules, Youth to the People, The Ordinary",
        "For sensitive skin. Do not combine with strong actives. Patch test.",
    ),
    (
        "redness",
        SkinType::Combination,
        "centella asiatica, allantoin, green tea",
        "Reduces inflammation, calms redness, provides antioxidant protection",
        "Olay, Biossance, Clinique, The Ordinary, Allies of Skin",
        "Calming formula suitable for reactive skin. Use AM and PM. Very gentle.",
    ),
    (
        "bumpy skin",
        SkinType::Dry,
        "ceramides, colloidal oatmeal, squalane",
        "Smooths texture, repairs barrier, reduces bumpy appearance",
        "Ren Clean Skincare, Cosrx, StriVectin, Olay, CeraVe",
        "Moisture-rich ingredients recommended. Use daily. Results in 2-4 weeks.",
    ),
    (
        "textured skin",
        SkinType::Sensitive,
        "azelaic acid, benzoyl peroxide, salicylic acid",
        "Improves uneven surface, reduces congestion, smooths rough areas",
        "Obagi, Cosrx, Simple, The Ordinary, Paula's Choice",
        "May cause slight dryness. Start slowly. Use 3-4x per week.",
    ),
    (
        "rosacea",
        SkinType::Normal,
        "calendula, allantoin, azelaic acid",
        "Reduces vascular redness, calms inflammation, strengthens barrier",
        "La Roche Posay, CeraVe, Estee Lauder, Krave Beauty, The Ordinary",
        "Calming ingredients essential. Avoid hot water. Use gentle products.",
    ),
    (
        "cystic acne",
        SkinType::Oily,
        "tea tree oil, benzoyl peroxide, salicylic acid",
        "Clears cystic acne, reduces deep inflammation, prevents future breakouts",
        "La Roche Posay, Ren Clean Skincare, Inkey List, Clinique, Paula's Choice",
        "Potent formula. Use every 2-3 nights initially. Build tolerance slowly.",
    ),
    (
        "under-eye circles",
        SkinType::Sensitive,
        "coenzyme Q10, retinol, caffeine",
        "Brightens under-eye area, reduces puffiness, diminishes circles",
        "Vichy, The Ordinary, Shiseido, Olay, First Aid Beauty",
        "Apply around eye area. Use night and morning. Results in 4 weeks.",
    ),
    (
        "puffy eyes",
        SkinType::Oily,
        "caffeine, centella asiatica, peptides",
        "Reduces puffiness, depuffs under-eye area, refreshes appearance",
        "LANEIGE, Olay, Cosrx, The Ordinary, Peach & Lily",
        "Apply under eyes. Use morning and night. Refrigerate for extra depuffing.",
    ),
    (
        "uneven texture",
        SkinType::Normal,
        "AHA, azelaic acid, vitamin C, kojic acid",
        "Smooths texture, evens tone, improves overall appearance",
        "Glow Recipe, Allies of Skin, Peter Thomas Roth, The Ordinary, Murad",
        "Use consistently. Results visible after 4-8 weeks. Pair with sun protection.",
    ),
    (
        "sun damage",
        SkinType::Sensitive,
        "AHA, peptides, sunscreen protection",
        "Reverses UV damage, promotes healing, prevents future damage",
        "SK-II, Sunday Riley, Peter Thomas Roth, Glow Recipe, Olay",
        "Essential to use SPF 50+ daily. Results after 8 weeks. Build tolerance.",
    ),
    (
        "age spots",
        SkinType::Combination,
        "peptides, retinol, age spots treatment",
        "Fades age spots, promotes cell renewal, improves skin tone",
        "Biossance, Murad, Dermalogica, Tatcha, Estee Lauder",
        "Use SPF 50+. Results after 6-8 weeks. Use consistently for best results.",
    ),
    (
        "melasma",
        SkinType::Combination,
        "vitamin C, azelaic acid, niacinamide",
        "Targets stubborn melasma, inhibits melanin, fades patches",
        "Naturium, Sunday Riley, SK-II, The Ordinary, Paula's Choice",
        "Use SPF 50+ daily. Results after 6-8 weeks. Very important for stubborn melasma.",
    ),
    (
        "back acne",
        SkinType::Oily,
        "salicylic acid, benzoyl peroxide, tea tree oil",
        "Clears back acne, prevents bacteria buildup, reduces inflammation",
        "Kiehl's, La Roche Posay, Ren Clean Skincare, Cosrx, Paula's Choice",
        "Can cause dryness. Start 1-2x per week. Gradually increase frequency.",
    ),
    (
        "body acne",
        SkinType::Dry,
        "salicylic acid, azelaic acid, benzoyl peroxide",
        "Treats body acne, clears congestion, prevents recurring breakouts",
        "Guerlain, Babor, Peter Thomas Roth, The Ordinary, Clinique",
        "Apply to affected areas. Start slowly. May cause initial irritation.",
    ),
    (
        "razor bumps",
        SkinType::Combination,
        "aloe vera, allantoin, azelaic acid",
        "Heals irritation, smooths bumps, prevents ingrown hairs",
        "Vichy, Dermalogica, Allies of Skin, Aloe-based brands, The Ordinary",
        "Use post-hair removal. Prevents ingrown hairs. Very soothing.",
    ),
    (
        "flaky skin",
        SkinType::Dry,
        "panthenol, hyaluronic acid, glycerin",
        "Restores hydration, removes dead skin, reveals smooth texture",
        "Inkey List, Naturium, Aveeno, Tatcha, La Roche Posay",
        "Use daily AM and PM. Results in 1-2 weeks. Keep skin hydrated.",
    ),
    (
        "peeling skin",
        SkinType::Dry,
        "glycerin, panthenol, ceramides",
        "Exfoliates gently, hydrates, reveals fresh skin beneath",
        "Aveeno, Cetaphil, Drunk Elephant, Farmacy, Simple",
        "Use 1-2x per week initially. Can be drying. Follow with rich moisturizer.",
    ),
    (
        "makeup irritation",
        SkinType::Oily,
        "allantoin, green tea, calendula",
        "Calms irritation, soothes sensitivity, reduces redness",
        "First Aid Beauty, Clinique, Youth to the People, The Ordinary, Allantoin-based brands",
        "Very gentle formula. Use as needed. Good for sensitive skin types.",
    ),
    (
        "damaged skin barrier",
        SkinType::Combination,
        "ceramides, lanolin, fatty acids",
        "Repairs barrier, restores lipids, strengthens skin protection",
        "Versed, StriVectin, Sulwhasoo, SK-II, La Roche Posay",
        "Essential for damaged barrier. Use 2x daily. Avoid strong actives initially.",
    ),
    (
        "large pores",
        SkinType::Combination,
        "hyaluronic acid, niacinamide, peptides",
        "Refines pores, hydrates, improves skin smoothness",
        "Estee Lauder, Dermalogica, Drunk Elephant, Tatcha, Olay",
        "Use consistently. Results after 2-4 weeks. Pair with hydrating serum.",
    ),
    (
        "clogged pores",
        SkinType::Sensitive,
        "benzoyl peroxide, salicylic acid, niacinamide",
        "Unclogs pores, prevents congestion, clears comedones",
        "Youth to the People, Peter Thomas Roth, Sisley Paris, The Ordinary, Cosrx",
        "Use 2-3x per week. Can cause dryness. Build tolerance gradually.",
    ),
    (
        "stress acne",
        SkinType::Normal,
        "tea tree oil, salicylic acid, azelaic acid",
        "Manages stress-related breakouts, calms inflammation, reduces redness",
        "Inkey List, Babor, Cetaphil, The Ordinary, Ren Clean Skincare",
        "Manage stress levels. Use consistently. Results after 4 weeks.",
    ),
    (
        "hormonal acne",
        SkinType::Combination,
        "niacinamide, hormonal support, salicylic acid",
        "Targets hormonal breakouts, regulates sebum, reduces acne",
        "StriVectin, Clinique, Minimalist, The Ordinary, Cosrx",
        "Consistency is key. Use 4-8 weeks for results. May regulate after adjustment.",
    ),
    (
        "whiteheads",
        SkinType::Combination,
        "benzoyl peroxide, niacinamide, salicylic acid",
        "Clears whiteheads, controls oil, prevents new breakouts",
        "Peach & Lily, Cosrx, La Mer, The Ordinary, Minimalist",
        "Use 3-4x per week. Can cause dryness. Follow with rich moisturizer.",
    ),
    (
        "blotchiness",
        SkinType::Normal,
        "glycerin, hyaluronic acid, niacinamide",
        "Evens tone, improves texture, reduces blotchy appearance",
        "Tatcha, Sulwhasoo, Peach & Lily, Farmacy, CeraVe",
        "Use consistently. Results after 4-6 weeks. Avoid strong actives simultaneously.",
    ),
    (
        "rough patches",
        SkinType::Dry,
        "kojic acid, azelaic acid, rough patch treatment",
        "Softens patches, improves texture, calms irritation",
        "Sisley Paris, Paula's Choice, Youth to the People, The Ordinary, Inkey List",
        "Use gently. May cause initial dryness. Pair with hydrating serum.",
    ),
    (
        "itchy skin",
        SkinType::Combination,
        "ceramides, cholesterol, lanolin",
        "Soothes itching, hydrates, calms irritation",
        "Avene, Inkey List, Sisley Paris, The Ordinary, Naturium",
        "Use with hydrating products. Can cause slight dryness. Very soothing.",
    ),
    (
        "psoriasis",
        SkinType::Dry,
        "ceramides, colloidal oatmeal, cholesterol",
        "Treats psoriasis scales, hydrates, reduces inflammation",
        "Krave Beauty, LANEIGE, Tatcha, La Roche Posay, CeraVe",
        "Use carefully. May require medical supervision. Consult dermatologist.",
    ),
    (
        "rosacea",
        SkinType::Combination,
        "centella asiatica, calendula, allantoin",
        "Treats rosacea, reduces flushing, calms inflammation",
        "La Roche Posay, CeraVe, Estee Lauder, SK-II, The Ordinary",
        "Consult dermatologist for proper treatment. Gentle formulas recommended.",
    ),
    (
        "seborrheic dermatitis",
        SkinType::Normal,
        "tea tree oil, niacinamide, panthenol",
        "Treats seborrheic dermatitis, reduces flaking, calms scalp",
        "Krave Beauty, LANEIGE, Tatcha, Versed, StriVectin",
        "Long-term management. Use consistently. Dermatologist guidance helpful.",
    ),
    (
        "pollution damage",
        SkinType::Normal,
        "ceramides, squalane, antioxidants",
        "Protects against pollution damage, detoxifies, improves clarity",
        "Biossance, Minimalist, Sulwhasoo, The Ordinary, Vichy",
        "Use antioxidant products. Pair with sun protection. Prevention is key.",
    ),
    (
        "tanning damage",
        SkinType::Normal,
        "arbutin, AHA, kojic acid",
        "Reverses tanning damage, brightens tone, restores health",
        "Glow Recipe, Peter Thomas Roth, SK-II, Youth to the People, The Ordinary",
        "Use SPF 50+. Prevention is important. Reverse damage gradually over time.",
    ),
    (
        "inflamed acne",
        SkinType::Sensitive,
        "kojic acid, azelaic acid, tranexamic acid",
        "Reduces inflammation, clears acne, prevents scarring",
        "Babor, Glow Recipe, Guerlain, The Ordinary, Paula's Choice",
        "Very potent. Start slowly. Can cause initial irritation. Increase gradually.",
    ),
    (
        "deep acne",
        SkinType::Combination,
        "azelaic acid, benzoyl peroxide, salicylic acid",
        "Deep treatment for cystic acne, reduces severe breakouts",
        "Inkey List, Ren Clean Skincare, Minimalist, Paula's Choice, The Ordinary",
        "Requires patience. Results after 6-8 weeks. Professional guidance recommended.",
    ),
    (
        "inflammatory acne",
        SkinType::Oily,
        "tea tree oil, benzoyl peroxide, salicylic acid",
        "Manages inflammatory responses, reduces redness, treats severe acne",
        "Inkey List, Babor, Cetaphil, The Ordinary, Cosrx",
        "Very effective for severe acne. Start low. Build up concentration.",
    ),
    (
        "breakouts",
        SkinType::Oily,
        "niacinamide, salicylic acid, azelaic acid",
        "Prevents future breakouts, clears existing, maintains clear skin",
        "Sunday Riley, Minimalist, The Ordinary, CeraVe, Olay",
        "Consistency is key. Results after 4-8 weeks. Maintain routine.",
    ),
    (
        "combination skin",
        SkinType::Combination,
        "niacinamide, glycerin, hyaluronic acid",
        "Balances skin type, manages oil and dry zones, harmonizes skin",
        "Tatcha, LANEIGE, Sulwhasoo, Peach & Lily, SK-II",
        "Balance oil and dry zones. Use targeted products. Customize routine.",
    ),
    (
        "dehydrated skin",
        SkinType::Combination,
        "hyaluronic acid, glycerin, ceramides",
        "Hydrates deeply, restores moisture, plumps skin",
        "Tatcha, Sulwhasoo, Peach & Lily, SK-II, Estee Lauder",
        "Deep hydration essential. Use rich moisturizer. Avoid over-exfoliation.",
    ),
    (
        "mature skin",
        SkinType::Normal,
        "retinol, peptides, vitamin C",
        "Anti-aging treatment, targets mature skin concerns, reduces wrinkles",
        "Tatcha, The Ordinary, Murad, Sunday Riley, SK-II",
        "Use anti-aging routine. Consistent application important. Results after 8 weeks.",
    ),
    (
        "oily t-zone",
        SkinType::Combination,
        "niacinamide, glycerin, salicylic acid",
        "Controls T-zone oil, hydrates cheeks, balances skin",
        "The Ordinary, LANEIGE, Cosrx, Olay, CeraVe",
        "Target T-zone with oil control. Hydrate cheeks separately. Customize approach.",
    ),
];

lazy_static! {
    static ref EMBEDDED_ENTRIES: Vec<ConcernEntry> = EMBEDDED_ROWS
        .iter()
        .map(|(concern, skin_type, ingredients, benefits, brands, notes)| {
            ConcernEntry::new(
                *concern,
                *skin_type,
                split_list(ingredients),
                *benefits,
                split_list(brands),
                *notes,
            )
        })
        .collect();
}


pub fn embedded_entries() -> &'static [ConcernEntry] {
    &EMBEDDED_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let entries = embedded_entries();
        assert_eq!(entries.len(), 49);
        assert_eq!(entries[0].concern, "acne");
        assert_eq!(entries[0].skin_type, SkinType::Oily);
        assert_eq!(
            entries[0].ingredients,
            vec!["salicylic acid", "niacinamide", "tea tree oil"]
        );
        assert!(entries.iter().all(|e| !e.ingredients.is_empty() && !e.brands.is_empty()));
    }

    #[test]
    fn test_wrinkles_row_is_normal() {
        let wrinkles: Vec<_> = embedded_entries()
            .iter()
            .filter(|e| e.concern == "wrinkles")
            .collect();
        assert_eq!(wrinkles.len(), 1);
        assert_eq!(wrinkles[0].skin_type, SkinType::Normal);
    }

    #[test]
    fn test_duplicate_concern_rows_kept() {
        let rosacea = embedded_entries()
            .iter()
            .filter(|e| e.concern == "rosacea")
            .count();
        assert_eq!(rosacea, 2);
    }

    #[test]
    fn test_reconciled_tail() {
        let entries = embedded_entries();
        let find = |name: &str| entries.iter().find(|e| e.concern == name).unwrap();
        assert_eq!(find("mature skin").skin_type, SkinType::Normal);
        assert!(find("mature skin").ingredients.contains(&"retinol".to_string()));
        assert_eq!(find("oily t-zone").skin_type, SkinType::Combination);
        assert_eq!(find("dehydrated skin").skin_type, SkinType::Combination);
    }
}
