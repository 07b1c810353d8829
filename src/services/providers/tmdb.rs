/// TMDB poster provider
///
/// Resolves posters through TMDB's movie search: the first search result is
/// taken as the match and its `poster_path` is joined onto the image base URL.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Poster, TmdbSearchResponse},
    services::providers::PosterProvider,
};

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbPosterProvider {
    /// Creates a provider whose requests are bounded by `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search TMDB and turn the top hit into a poster
    async fn search(&self, title: &str) -> AppResult<Option<Poster>> {
        let url = format!("{}/search/movie", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}",
                response.status()
            )));
        }

        let search: TmdbSearchResponse = response.json().await?;
        let top = search.top_result().map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse TMDB search result: {}", e))
        })?;

        Ok(top.and_then(|movie| {
            movie.poster_path.map(|path| Poster {
                url: format!("{}{}", self.image_base_url, path),
                tmdb_id: movie.id,
            })
        }))
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn fetch_poster(&self, title: &str) -> Option<Poster> {
        match self.search(title).await {
            Ok(poster) => poster,
            Err(AppError::HttpClient(e)) if e.is_timeout() => {
                tracing::warn!(title = %title, "Timeout fetching poster");
                None
            }
            Err(AppError::HttpClient(e)) if e.is_connect() => {
                tracing::warn!(title = %title, error = %e, "Connection error fetching poster");
                None
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Error fetching poster");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
