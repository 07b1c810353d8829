//! Read-only tables loaded from static snapshots at startup.

pub mod catalog;
pub mod metadata;
pub mod snapshot;

pub use catalog::{Catalog, CatalogError, SimilarityMatrix};
pub use metadata::MetadataTable;
pub use snapshot::{load_catalog, load_metadata, SnapshotError};
