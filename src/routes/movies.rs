use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{MoviesResponse, RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::recommendations,
};

/// Handler listing every movie title available for recommendations
pub async fn list(State(state): State<Arc<AppState>>) -> Json<MoviesResponse> {
    let movies = state.movies.titles().to_vec();

    Json(MoviesResponse {
        success: true,
        count: movies.len(),
        movies,
    })
}

/// Handler for movie recommendations
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        movie = %request.movie,
        count = request.count,
        "Processing movie recommendation request"
    );

    let recommendations = recommendations::recommend_movies(
        &state.movies,
        state.posters.clone(),
        &request.movie,
        request.count,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        results = recommendations.len(),
        "Movie recommendations completed"
    );

    Ok(Json(RecommendationResponse {
        success: true,
        movie: request.movie,
        recommendations,
    }))
}
