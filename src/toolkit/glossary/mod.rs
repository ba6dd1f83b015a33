

pub mod brands;
pub mod ingredients;

pub use brands::{BrandInfo, brand_info};
pub use ingredients::{
    GLOSSARY_SEARCH_LIMIT, INGREDIENT_GLOSSARY, describe_ingredient, search_ingredients,
};
