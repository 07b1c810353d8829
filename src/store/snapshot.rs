use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{Catalog, MetadataTable, SimilarityMatrix};
use crate::models::{BookMetadata, PopularBookRow};

/// Errors raised while loading a snapshot at startup
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Inconsistent snapshot: {0}")]
    Shape(String),
}

/// One entry of a title table: a bare string or a record with a `title` field
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TitleRow {
    Plain(String),
    Record { title: String },
}

impl From<TitleRow> for String {
    fn from(row: TitleRow) -> Self {
        match row {
            TitleRow::Plain(title) | TitleRow::Record { title } => title,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|source| SnapshotError::Io {
        path: path_str.clone(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| SnapshotError::Json {
        path: path_str,
        source,
    })
}

/// Loads a title table and its similarity matrix into a [`Catalog`]
pub fn load_catalog(titles_path: &Path, similarity_path: &Path) -> Result<Catalog, SnapshotError> {
    let rows: Vec<TitleRow> = read_json(titles_path)?;
    let titles: Vec<String> = rows.into_iter().map(String::from).collect();

    let matrix: Vec<Vec<f32>> = read_json(similarity_path)?;
    let similarity = SimilarityMatrix::from_rows(matrix)?;

    let catalog = Catalog::new(titles, similarity)?;

    tracing::debug!(
        titles = %titles_path.display(),
        similarity = %similarity_path.display(),
        size = catalog.size(),
        "Catalog snapshot loaded"
    );

    Ok(catalog)
}

/// Loads the popular books CSV into a [`MetadataTable`]
pub fn load_metadata(path: &Path) -> Result<MetadataTable, SnapshotError> {
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|source| SnapshotError::Io {
        path: path_str.clone(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();
    for row in reader.deserialize::<PopularBookRow>() {
        let row = row.map_err(|source| SnapshotError::Csv {
            path: path_str.clone(),
            source,
        })?;
        records.push(BookMetadata::from(row));
    }

    tracing::debug!(path = %path_str, rows = records.len(), "Metadata snapshot loaded");

    Ok(MetadataTable::new(records))
}
