

pub mod embedded;
pub mod loader;
pub mod models;

pub use embedded::embedded_entries;
pub use loader::{DatasetLoader, LoaderError, REQUIRED_COLUMNS};
pub use models::{ConcernEntry, SkinType};

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::error::Result;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    External(PathBuf),
    Provided,
}


/// The recommendation table. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<ConcernEntry>,
    source: DatasetSource,
}

impl Dataset {
    pub fn embedded() -> Self {
        Self {
            entries: embedded_entries().to_vec(),
            source: DatasetSource::Embedded,
        }
    }

    /// Strict load of the CSV at `path`.
    pub fn try_load(path: &Path) -> Result<Self> {
        let entries = DatasetLoader::load(path)?;
        info!("Loaded {} dataset rows from {}", entries.len(), path.display());

        Ok(Self {
            entries,
            source: DatasetSource::External(path.to_path_buf()),
        })
    }

    /// Uses the CSV at `path` when it is present and valid, the built-in table otherwise.
    pub fn load_or_embedded(path: &Path) -> Self {
        if !path.exists() {
            debug!("No dataset at {} - using embedded table", path.display());
            return Self::embedded();
        }

        Self::try_load(path).unwrap_or_else(|e| {
            warn!("Failed to load dataset {}: {} - using embedded table", path.display(), e);
            Self::embedded()
        })
    }

    pub fn from_entries(entries: Vec<ConcernEntry>) -> Self {
        if entries.is_empty() {
            warn!("Empty dataset provided - using embedded table");
            return Self::embedded();
        }

        Self {
            entries,
            source: DatasetSource::Provided,
        }
    }

    pub fn entries(&self) -> &[ConcernEntry] {
        &self.entries
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset::load_or_embedded(&dir.path().join("skincare_dataset.csv"));

        assert_eq!(dataset.source(), &DatasetSource::Embedded);
        assert_eq!(dataset.len(), 49);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skincare_dataset.csv");
        std::fs::write(&path, "concern,benefits\nacne,Clears pores\n").unwrap();

        let dataset = Dataset::load_or_embedded(&path);
        assert_eq!(dataset.source(), &DatasetSource::Embedded);
    }

    #[test]
    fn test_valid_file_replaces_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skincare_dataset.csv");
        std::fs::write(
            &path,
            "concern,skin_type,ingredients,benefits,brands,notes\n\
             acne,oily,clay,Clears pores,Cosrx,Patch test.\n",
        )
        .unwrap();

        let dataset = Dataset::load_or_embedded(&path);
        assert_eq!(dataset.source(), &DatasetSource::External(path.clone()));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_try_load_surfaces_loader_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skincare_dataset.csv");
        std::fs::write(
            &path,
            "concern,skin_type,ingredients,benefits,brands,notes\n\
             acne,oily,\", ,\",Clears pores,\",\",Patch test.\n",
        )
        .unwrap();

        assert!(matches!(
            Dataset::try_load(&path),
            Err(crate::AdvisorError::Dataset(LoaderError::EmptyCell { .. }))
        ));

        let dataset = Dataset::load_or_embedded(&path);
        assert_eq!(dataset.source(), &DatasetSource::Embedded);
        assert!(dataset.entries().iter().all(|e| !e.ingredients.is_empty() && !e.brands.is_empty()));
    }

    #[test]
    fn test_empty_entries_fall_back() {
        let dataset = Dataset::from_entries(Vec::new());
        assert!(!dataset.is_empty());
        assert_eq!(dataset.source(), &DatasetSource::Embedded);
    }
}
