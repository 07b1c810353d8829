use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{
        BookRecommendationRequest, BookRecommendationResponse, BooksResponse, PopularBooksResponse,
    },
    routes::AppState,
    services::recommendations,
};

/// Handler listing every book title available for collaborative filtering
pub async fn list(State(state): State<Arc<AppState>>) -> Json<BooksResponse> {
    let books = state.books.titles().to_vec();

    Json(BooksResponse {
        success: true,
        count: books.len(),
        books,
    })
}

/// Handler for the popular books table, in snapshot order
pub async fn popular(State(state): State<Arc<AppState>>) -> Json<PopularBooksResponse> {
    let books = state.book_metadata.records().to_vec();

    Json(PopularBooksResponse {
        success: true,
        count: books.len(),
        books,
    })
}

/// Handler for book recommendations
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<BookRecommendationRequest>,
) -> AppResult<Json<BookRecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        book = %request.book,
        count = request.count,
        "Processing book recommendation request"
    );

    let recommendations = recommendations::recommend_books(
        &state.books,
        &state.book_metadata,
        &request.book,
        request.count,
    )?;

    tracing::info!(
        request_id = %request_id,
        results = recommendations.len(),
        "Book recommendations completed"
    );

    Ok(Json(BookRecommendationResponse {
        success: true,
        book: request.book,
        recommendations,
    }))
}
