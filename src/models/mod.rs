use serde::{Deserialize, Deserializer, Serialize};

pub mod book;
pub mod movie;

pub use book::{BookMetadata, PopularBookRow, UNKNOWN_AUTHOR};
pub use movie::{MovieRecommendation, Poster, TmdbMovie, TmdbSearchResponse};

/// Number of recommendations returned when the request omits `count`
pub const DEFAULT_COUNT: i64 = 5;

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// Accepts any JSON number for a count so range checks happen in the handler.
///
/// Fractions are truncated and values outside `i64` saturate.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(serde::de::Error::custom(format!("invalid count: {}", number))),
    }
}

/// Request for movie recommendations, e.g. `{"movie": "Avatar", "count": 10}`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub movie: String,
    #[serde(default = "default_count", deserialize_with = "lenient_count")]
    pub count: i64,
}

/// Request for book recommendations, e.g. `{"book": "1984", "count": 5}`
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecommendationRequest {
    pub book: String,
    #[serde(default = "default_count", deserialize_with = "lenient_count")]
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub movie: String,
    pub recommendations: Vec<MovieRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct BookRecommendationResponse {
    pub success: bool,
    pub book: String,
    pub recommendations: Vec<BookMetadata>,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub success: bool,
    pub count: usize,
    pub movies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub success: bool,
    pub count: usize,
    pub books: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PopularBooksResponse {
    pub success: bool,
    pub count: usize,
    pub books: Vec<BookMetadata>,
}
