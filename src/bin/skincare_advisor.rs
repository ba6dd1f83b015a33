

use std::io::Read;

use anyhow::Context;
use skincare_advisor::toolkit::glossary::{
    GLOSSARY_SEARCH_LIMIT, brand_info, describe_ingredient, search_ingredients,
};
use skincare_advisor::{AdvisorConfig, RecommendationEngine, RecommendationResult, title_case};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
                .add_directive("skincare_advisor=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().is_some_and(|arg| arg == "--search") {
        print_search(&args[1..].join(" "));
        return Ok(());
    }

    let config = AdvisorConfig::load().context("Failed to load configuration")?;
    let engine = RecommendationEngine::with_config(config);

    let mut text = args.join(" ");
    if text.trim().is_empty() {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read description from stdin")?;
    }

    let skin_type = std::env::var("SKINCARE_SKIN_TYPE").ok();
    let result = engine.try_recommendations(text.trim(), skin_type.as_deref())?;

    if std::env::var("SKINCARE_OUTPUT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &RecommendationResult) {
    println!("Your Skin Concerns: {}", result.concern_titles().join(", "));

    println!("\nRecommended Ingredients:");
    for ingredient in &result.ingredients {
        match describe_ingredient(ingredient) {
            Some(description) => println!("  - {}: {}", title_case(ingredient), description),
            None => println!("  - {}", title_case(ingredient)),
        }
    }

    println!("\nWhy These Ingredients:\n{}", result.benefits);
    println!("\nHow to Use:\n{}", result.directions);
    println!("\nRecommended Brands: {}", result.brands);
    for brand in result.brand_list() {
        if let Some(info) = brand_info(brand) {
            println!("  - {}: {} ({})", brand, info.specialty, info.price_range);
        }
    }
    println!("\nMorning:\n{}", result.morning_routine);
    println!("\nNight:\n{}", result.night_routine);

    if !result.notes.is_empty() {
        println!("\nSafety Notes: {}", result.notes);
    }
}

fn print_search(query: &str) {
    let matches = search_ingredients(query.trim(), GLOSSARY_SEARCH_LIMIT);
    if matches.is_empty() {
        println!("No ingredients match '{}'", query.trim());
        return;
    }

    for (name, description) in matches {
        println!("{name}: {description}");
    }
}
