use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::services::{PosterProvider, TmdbPosterProvider};
use crate::store::{load_catalog, load_metadata, Catalog, MetadataTable};

/// Shared application state
///
/// Everything here is loaded once at startup and only read afterwards, so
/// handlers share it through an `Arc` without locking.
pub struct AppState {
    pub movies: Catalog,
    pub books: Catalog,
    pub book_metadata: MetadataTable,
    /// Set when posters should decorate movie recommendations
    pub posters: Option<Arc<dyn PosterProvider>>,
}

impl AppState {
    pub fn new(movies: Catalog, books: Catalog, book_metadata: MetadataTable) -> Self {
        Self {
            movies,
            books,
            book_metadata,
            posters: None,
        }
    }

    pub fn with_posters(mut self, provider: Arc<dyn PosterProvider>) -> Self {
        self.posters = Some(provider);
        self
    }

    /// Loads every snapshot named by `config`; any failure is fatal
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let movies = load_catalog(&config.movie_list_path(), &config.movie_similarity_path())
            .context("Failed to load movie snapshot")?;
        tracing::info!(movies = movies.size(), "Loaded movie data");

        let books = load_catalog(&config.book_titles_path(), &config.book_similarity_path())
            .context("Failed to load book snapshot")?;
        let book_metadata = load_metadata(&config.popular_books_path())
            .context("Failed to load popular books")?;
        tracing::info!(
            books = books.size(),
            popular_books = book_metadata.len(),
            "Loaded book data"
        );

        let mut state = Self::new(movies, books, book_metadata);

        match (config.enable_posters, &config.tmdb_api_key) {
            (true, Some(api_key)) => {
                let provider = TmdbPosterProvider::new(
                    api_key.clone(),
                    config.tmdb_api_url.clone(),
                    config.tmdb_image_base_url.clone(),
                    config.poster_timeout(),
                )
                .context("Failed to build TMDB client")?;
                tracing::info!(
                    timeout_ms = config.poster_timeout_ms,
                    "Poster lookups enabled"
                );
                state = state.with_posters(Arc::new(provider));
            }
            (true, None) => {
                tracing::warn!("ENABLE_POSTERS is set but TMDB_API_KEY is missing; posters disabled");
            }
            (false, _) => {}
        }

        Ok(state)
    }
}
