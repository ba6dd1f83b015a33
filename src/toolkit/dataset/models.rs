use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::core::error::{AdvisorError, Result};


#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkinType {
    Dry,
    Oily,
    Normal,
    Sensitive,
    Combination,
}

impl SkinType {
    /// Label for the "no filter" choice offered alongside the skin types.
    pub const ANY: &'static str = "Any";

    /// Parses a user-facing facet. `"Any"` and blank input mean no filter.
    pub fn parse_facet(value: &str) -> Result<Option<Self>> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ANY) {
            return Ok(None);
        }

        Self::from_str(value)
            .map(Some)
            .map_err(|_| AdvisorError::InvalidSkinType(value.to_string()))
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Oily => "Oily",
            Self::Normal => "Normal",
            Self::Sensitive => "Sensitive",
            Self::Combination => "Combination",
        }
    }

    /// Selector options in display order, starting with "Any".
    #[must_use]
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(Self::ANY)
            .chain(Self::iter().map(|skin_type| skin_type.label()))
            .collect()
    }
}


/// One row of the recommendation table. Several rows may share a concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcernEntry {
    pub concern: String,
    pub skin_type: SkinType,
    pub ingredients: Vec<String>,
    pub benefits: String,
    pub brands: Vec<String>,
    pub notes: String,
}

impl ConcernEntry {
    pub fn new(
        concern: impl Into<String>,
        skin_type: SkinType,
        ingredients: Vec<String>,
        benefits: impl Into<String>,
        brands: Vec<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            concern: concern.into(),
            skin_type,
            ingredients,
            benefits: benefits.into(),
            brands,
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facet() {
        assert_eq!(SkinType::parse_facet("Oily").unwrap(), Some(SkinType::Oily));
        assert_eq!(SkinType::parse_facet("COMBINATION").unwrap(), Some(SkinType::Combination));
        assert_eq!(SkinType::parse_facet(" dry ").unwrap(), Some(SkinType::Dry));
        assert_eq!(SkinType::parse_facet("Any").unwrap(), None);
        assert_eq!(SkinType::parse_facet("").unwrap(), None);
        assert!(matches!(
            SkinType::parse_facet("leathery"),
            Err(AdvisorError::InvalidSkinType(_))
        ));
    }

    #[test]
    fn test_lowercase_forms() {
        assert_eq!(SkinType::Sensitive.to_string(), "sensitive");
        let name: &'static str = SkinType::Normal.into();
        assert_eq!(name, "normal");
        assert_eq!(serde_json::to_string(&SkinType::Dry).unwrap(), "\"dry\"");
    }

    #[test]
    fn test_choices() {
        assert_eq!(
            SkinType::choices(),
            vec!["Any", "Dry", "Oily", "Normal", "Sensitive", "Combination"]
        );
    }
}
