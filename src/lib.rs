

pub mod core;
pub mod toolkit;
pub mod utils;

pub use utils::{safe_truncate_ellipsis, split_list, title_case};


pub use crate::core::config::{AdvisorConfig, SkinTypePolicy};
pub use crate::core::error::{AdvisorError, Result};
pub use crate::toolkit::concerns::{ConcernDictionary, MatchMode};
pub use crate::toolkit::dataset::{ConcernEntry, Dataset, DatasetSource, SkinType};
pub use crate::toolkit::recommend::{RecommendationEngine, RecommendationResult};


pub const GENERAL_SKIN_CARE: &str = "general skin care";


pub const DEFAULT_DATASET_PATH: &str = "skincare_dataset.csv";


pub const DEFAULT_MAX_BRANDS: usize = 8;


pub const SAMPLE_INPUTS: [&str; 5] = [
    "I have oily, acne-prone skin with blackheads and enlarged pores",
    "My skin is dry, sensitive, and gets irritated easily with rough patches",
    "I have combination skin - oily T-zone but dry cheeks with dark spots",
    "I'm concerned about wrinkles, fine lines, and aging on my mature skin",
    "I have hyperpigmentation and dark spots from sun damage",
];
