

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::error::{AdvisorError, Result};
use crate::toolkit::concerns::MatchMode;
use crate::{DEFAULT_DATASET_PATH, DEFAULT_MAX_BRANDS};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkinTypePolicy {
    /// Unknown skin types are logged and treated as "no filter".
    #[default]
    Ignore,
    /// Unknown skin types are reported as `AdvisorError::InvalidSkinType`.
    Reject,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    
    pub dataset_path: PathBuf,
    
    pub max_brands: usize,
    
    pub match_mode: MatchMode,
    
    pub skin_type_policy: SkinTypePolicy,
}

impl AdvisorConfig {
    
    pub fn new(dataset_path: impl AsRef<Path>) -> Self {
        Self {
            dataset_path: dataset_path.as_ref().to_path_buf(),
            max_brands: DEFAULT_MAX_BRANDS,
            match_mode: MatchMode::default(),
            skin_type_policy: SkinTypePolicy::default(),
        }
    }

    /// Layers `config/advisor.*` (optional) and `SKINCARE_*` environment variables
    /// over the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(
            Path::new("config/advisor"),
            Environment::with_prefix("SKINCARE").try_parsing(true),
        )
    }

    pub fn load_from(file: &Path, environment: Environment) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(file).required(false))
            .add_source(environment)
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_brands == 0 {
            return Err(AdvisorError::Config(
                "max_brands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    #[must_use]
    pub fn with_skin_type_policy(mut self, policy: SkinTypePolicy) -> Self {
        self.skin_type_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_brands(mut self, max_brands: usize) -> Self {
        self.max_brands = max_brands;
        self
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}
