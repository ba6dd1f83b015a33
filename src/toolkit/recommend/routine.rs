//! Usage directions and time-of-day routines.
//!
//! Branch checks look for a phrase anywhere in the joined ingredient list, case-sensitively,
//! so "vitamin c" does not fire on "vitamin C" but does fire inside a longer name.

const BRIGHTENING: &[&str] = &["vitamin c", "azelaic acid"];
const EXFOLIANTS: &[&str] = &["salicylic acid", "benzoyl peroxide"];
const RETINOIDS: &[&str] = &["retinol"];
const AHAS: &[&str] = &["AHA"];


fn mentions_any(ingredients: &[String], phrases: &[&str]) -> bool {
    let joined = ingredients.join(", ");
    phrases.iter().any(|phrase| joined.contains(phrase))
}


/// Generic application guidance. Does not depend on the matched ingredients.
pub fn directions() -> String {
    [
        "• **Frequency**: Use as directed on product packaging",
        "• **Application**: Apply to cleansed, dry skin",
        "• **Layering**: Wait 1-2 minutes between product applications",
        "• **SPF**: Always use SPF 30+ during the day",
        "• **Patch Test**: Test on small area for 24-48 hours first",
    ]
    .join("\n")
}


pub fn morning_routine(ingredients: &[String]) -> String {
    let serum = if mentions_any(ingredients, BRIGHTENING) {
        "3. **Serum**: Vitamin C or brightening serum (2-3 drops)"
    } else {
        "3. **Serum**: Lightweight serum (2-3 drops)"
    };

    [
        "1. **Cleanser**: Gentle cleanser suitable for your skin type",
        "2. **Toner** (Optional): Hydrating or exfoliating toner",
        serum,
        "4. **Moisturizer**: Suitable for your skin type",
        "5. **SPF**: Broad-spectrum SPF 30+ sunscreen",
    ]
    .join("\n")
}


pub fn night_routine(ingredients: &[String]) -> String {
    let second = if mentions_any(ingredients, EXFOLIANTS) {
        "2. **Exfoliant**: Salicylic acid or BHA (2-3x per week)"
    } else {
        "2. **Toner** (Optional): Hydrating or treatment toner"
    };

    // Retinoid takes priority over AHA when both are present.
    let third = if mentions_any(ingredients, RETINOIDS) {
        "3. **Retinoid**: Start with 1-2x per week, build up gradually"
    } else if mentions_any(ingredients, AHAS) {
        "3. **AHA**: 2-3x per week for exfoliation"
    } else {
        "3. **Treatment**: Target serum or treatment (as needed)"
    };

    [
        "1. **Cleanser**: Gentle cleanser to remove impurities",
        second,
        third,
        "4. **Moisturizer**: Richer formula for overnight hydration",
    ]
    .join("\n")
}
