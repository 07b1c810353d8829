use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{BookMetadata, MovieRecommendation},
    services::{
        providers::{attach_posters, PosterProvider},
        ranker::{Ranker, MAX_RECOMMENDATIONS},
    },
    store::{Catalog, CatalogError, MetadataTable},
};

/// Checks a requested count against `1..=MAX_RECOMMENDATIONS`
pub fn validate_count(count: i64) -> AppResult<usize> {
    if count < 1 {
        return Err(AppError::InvalidInput("Count must be at least 1".to_string()));
    }
    if count > MAX_RECOMMENDATIONS as i64 {
        return Err(AppError::InvalidInput(format!(
            "Count cannot exceed {}",
            MAX_RECOMMENDATIONS
        )));
    }
    Ok(count as usize)
}

fn not_found(kind: &str, title: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' not found in database", kind, title))
}

/// Content-based movie recommendations
///
/// Posters are attached only when a provider is supplied.
pub async fn recommend_movies(
    movies: &Catalog,
    posters: Option<Arc<dyn PosterProvider>>,
    title: &str,
    count: i64,
) -> AppResult<Vec<MovieRecommendation>> {
    let count = validate_count(count)?;

    if !movies.contains(title) {
        return Err(not_found("Movie", title));
    }

    let recommendations: Vec<MovieRecommendation> = Ranker::new(movies)
        .recommend(title, count)
        .map_err(|e| match e {
            CatalogError::NotFound(_) => not_found("Movie", title),
        })?
        .into_iter()
        .map(|rec| MovieRecommendation::new(rec.title))
        .collect();

    match posters {
        Some(provider) => Ok(attach_posters(provider, recommendations).await),
        None => Ok(recommendations),
    }
}

/// Collaborative-filtering book recommendations joined onto book metadata
pub fn recommend_books(
    books: &Catalog,
    metadata: &MetadataTable,
    title: &str,
    count: i64,
) -> AppResult<Vec<BookMetadata>> {
    let count = validate_count(count)?;

    if !books.contains(title) {
        return Err(not_found("Book", title));
    }

    let recommendations = Ranker::new(books)
        .recommend(title, count)
        .map_err(|e| match e {
            CatalogError::NotFound(_) => not_found("Book", title),
        })?
        .into_iter()
        .map(|rec| metadata.enrich(&rec.title))
        .collect();

    Ok(recommendations)
}
