use serde::{Deserialize, Serialize};

/// Author reported for a book missing from the metadata table
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Descriptive metadata for a book, as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    pub avg_rating: Option<f64>,
    pub num_ratings: Option<i64>,
}

impl BookMetadata {
    /// Record synthesized when a title has no metadata row
    pub fn unknown(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: UNKNOWN_AUTHOR.to_string(),
            image_url: None,
            avg_rating: None,
            num_ratings: None,
        }
    }
}

/// Raw row of the popular books CSV snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct PopularBookRow {
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Image-URL-M", default)]
    pub image_url: Option<String>,
    #[serde(rename = "num-ratings", default)]
    pub num_ratings: Option<f64>,
    #[serde(rename = "avg-rating", default)]
    pub avg_rating: Option<f64>,
}

/// NaN and infinities carry no information; treat them as absent
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl From<PopularBookRow> for BookMetadata {
    fn from(row: PopularBookRow) -> Self {
        Self {
            title: row.title,
            author: row
                .author
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            image_url: row.image_url.filter(|url| !url.is_empty()),
            avg_rating: finite(row.avg_rating),
            num_ratings: finite(row.num_ratings).map(|n| n.trunc() as i64),
        }
    }
}
