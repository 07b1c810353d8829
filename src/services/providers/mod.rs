/// Poster provider abstraction
///
/// Posters are decoration: a provider resolves a movie title to an image on a
/// best-effort basis and never fails the recommendation it decorates.
use std::sync::Arc;

use crate::models::{MovieRecommendation, Poster};

pub mod tmdb;

pub use tmdb::TmdbPosterProvider;

/// Trait for poster image providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve a poster for a movie title
    ///
    /// Timeouts, connection failures and malformed responses all yield `None`.
    async fn fetch_poster(&self, title: &str) -> Option<Poster>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Fetch posters for a batch of recommendations in parallel
///
/// Output order matches input order. A lookup task that fails to join leaves
/// its recommendation without a poster.
pub async fn attach_posters(
    provider: Arc<dyn PosterProvider>,
    recommendations: Vec<MovieRecommendation>,
) -> Vec<MovieRecommendation> {
    let mut tasks = Vec::with_capacity(recommendations.len());

    for recommendation in &recommendations {
        let provider = provider.clone();
        let title = recommendation.title.clone();
        let task = tokio::spawn(async move { provider.fetch_poster(&title).await });
        tasks.push(task);
    }

    let mut decorated = Vec::with_capacity(recommendations.len());
    let mut missing = 0;

    for (recommendation, task) in recommendations.into_iter().zip(tasks) {
        match task.await {
            Ok(Some(poster)) => decorated.push(recommendation.with_poster(poster)),
            Ok(None) => {
                missing += 1;
                decorated.push(recommendation);
            }
            Err(e) => {
                tracing::error!(error = %e, "Poster task join error");
                missing += 1;
                decorated.push(recommendation);
            }
        }
    }

    if missing > 0 {
        tracing::debug!(
            provider = provider.name(),
            missing,
            total = decorated.len(),
            "Some posters unavailable"
        );
    }

    decorated
}
