

use thiserror::Error;

use crate::toolkit::dataset::LoaderError;


#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] LoaderError),

    #[error("Invalid skin type: {0}")]
    InvalidSkinType(String),
}

impl From<config::ConfigError> for AdvisorError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_converts() {
        let err: AdvisorError = LoaderError::NoRows.into();
        assert!(matches!(err, AdvisorError::Dataset(LoaderError::NoRows)));
        assert_eq!(err.to_string(), "Dataset error: Dataset has no rows");
    }
}
