use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandInfo {
    pub price_range: &'static str,
    pub specialty: &'static str,
    pub best_for: &'static str,
}

lazy_static! {
    static ref BRAND_INFO: HashMap<&'static str, BrandInfo> = {
        let mut m = HashMap::new();
        m.insert(
            "The Ordinary",
            BrandInfo {
                price_range: "$",
                specialty: "Affordable, science-backed formulations",
                best_for: "Budget-conscious users seeking effective actives",
            },
        );
        m.insert(
            "CeraVe",
            BrandInfo {
                price_range: "$",
                specialty: "Barrier repair, ceramides, hypoallergenic",
                best_for: "Sensitive and dry skin types",
            },
        );
        m.insert(
            "Cosrx",
            BrandInfo {
                price_range: "$$",
                specialty: "Korean skincare, gentle formulations",
                best_for: "Sensitive and acne-prone skin",
            },
        );
        m.insert(
            "Paula's Choice",
            BrandInfo {
                price_range: "$$",
                specialty: "Dermatologist-founded, research-based",
                best_for: "Acne and rosacea",
            },
        );
        m.insert(
            "Tatcha",
            BrandInfo {
                price_range: "$$$",
                specialty: "Japanese beauty, premium ingredients",
                best_for: "Luxury skincare seekers",
            },
        );
        m
    };
}


pub fn brand_info(name: &str) -> Option<&'static BrandInfo> {
    let name = name.trim();
    BRAND_INFO
        .iter()
        .find(|(brand, _)| brand.eq_ignore_ascii_case(name))
        .map(|(_, info)| info)
}
