use std::path::Path;
use std::str::FromStr;

use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::models::{ConcernEntry, SkinType};
use crate::utils::split_list;


pub const REQUIRED_COLUMNS: [&str; 6] = [
    "concern",
    "skin_type",
    "ingredients",
    "benefits",
    "brands",
    "notes",
];

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Dataset file not found: {0}")]
    NotFound(String),
    #[error("Missing required columns: {0}")]
    MissingColumns(String),
    #[error("Column '{0}' is not text")]
    NotText(String),
    #[error("Empty value in column '{column}' at row {row}")]
    EmptyCell { column: String, row: usize },
    #[error("Unknown skin type '{value}' at row {row}")]
    UnknownSkinType { value: String, row: usize },
    #[error("Dataset has no rows")]
    NoRows,
    #[error("CSV error: {0}")]
    Polars(#[from] PolarsError),
}


pub struct DatasetLoader;

impl DatasetLoader {
    /// Reads a recommendation table from CSV.
    ///
    /// Extra columns are ignored; any missing required column fails the load.
    pub fn load(path: &Path) -> Result<Vec<ConcernEntry>, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.display().to_string()));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        debug!("Read {} rows from {}", df.height(), path.display());
        Self::entries_from_frame(&df)
    }

    pub fn entries_from_frame(df: &DataFrame) -> Result<Vec<ConcernEntry>, LoaderError> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| df.column(name).is_err())
            .collect();
        if !missing.is_empty() {
            return Err(LoaderError::MissingColumns(missing.join(", ")));
        }

        if df.height() == 0 {
            return Err(LoaderError::NoRows);
        }

        let concerns = text_column(df, "concern")?;
        let skin_types = text_column(df, "skin_type")?;
        let ingredients = text_column(df, "ingredients")?;
        let benefits = text_column(df, "benefits")?;
        let brands = text_column(df, "brands")?;
        let notes = text_column(df, "notes")?;

        let mut entries = Vec::with_capacity(df.height());

        for row in 0..df.height() {
            let skin_raw = text_cell(skin_types, "skin_type", row)?;
            let skin_type = SkinType::from_str(skin_raw.trim()).map_err(|_| {
                LoaderError::UnknownSkinType {
                    value: skin_raw.to_string(),
                    row,
                }
            })?;

            entries.push(ConcernEntry::new(
                text_cell(concerns, "concern", row)?,
                skin_type,
                list_cell(ingredients, "ingredients", row)?,
                text_cell(benefits, "benefits", row)?,
                list_cell(brands, "brands", row)?,
                text_cell(notes, "notes", row)?,
            ));
        }

        Ok(entries)
    }
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, LoaderError> {
    df.column(name)?
        .str()
        .map_err(|_| LoaderError::NotText(name.to_string()))
}

fn text_cell<'a>(column: &'a StringChunked, name: &str, row: usize) -> Result<&'a str, LoaderError> {
    column.get(row).ok_or_else(|| LoaderError::EmptyCell {
        column: name.to_string(),
        row,
    })
}

/// A list cell must hold at least one item after splitting.
fn list_cell(column: &StringChunked, name: &str, row: usize) -> Result<Vec<String>, LoaderError> {
    let items = split_list(text_cell(column, name, row)?);
    if items.is_empty() {
        return Err(LoaderError::EmptyCell {
            column: name.to_string(),
            row,
        });
    }
    Ok(items)
}
