//! Book review API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{review::CreateReviewForm, BookReviewResponse, ReviewResponse},
    validation::validate_id,
    AppState,
};

use super::{response::PrettyJson, FormParams};

/// List reviews of a book
#[utoipa::path(
    get,
    path = "/books/{id}/reviews",
    tag = "reviews",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Reviews of the book", body = Vec<BookReviewResponse>),
        (status = 404, description = "No reviews", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_book_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<Vec<BookReviewResponse>>> {
    let book_id = validate_id(Some(&id))?;
    let reviews = state.services.reviews.find_by_book(book_id).await?;
    Ok(PrettyJson(reviews))
}

/// Review a book
#[utoipa::path(
    post,
    path = "/books/{id}/reviews",
    tag = "reviews",
    params(("id" = i64, Path, description = "Book ID")),
    request_body(content = CreateReviewForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Reader or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Reader already reviewed this book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormParams(form): FormParams<CreateReviewForm>,
) -> AppResult<(StatusCode, PrettyJson<ReviewResponse>)> {
    let request = form.into_request(&id)?;
    let review = state.services.reviews.create(request).await?;
    Ok((StatusCode::CREATED, PrettyJson(review)))
}
