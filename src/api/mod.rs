//! API handlers for the library REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;
pub mod readers;
pub mod response;
pub mod reviews;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request parameters taken from the query string and, for urlencoded
/// requests, the body. Keys may repeat.
pub struct FormParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = req.uri().query().unwrap_or_default().to_string();

        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with(FORM_CONTENT_TYPE))
            .unwrap_or(false);

        if is_form {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let body = std::str::from_utf8(&body)
                .map_err(|_| AppError::BadRequest("Request body must be valid UTF-8".to_string()))?;

            if !body.is_empty() {
                if !params.is_empty() {
                    params.push('&');
                }
                params.push_str(body);
            }
        }

        serde_html_form::from_str(&params)
            .map(FormParams)
            .map_err(|e| AppError::BadRequest(format!("Invalid parameters: {}", e)))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route(
            "/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/authors/:id",
            get(authors::get_author)
                .patch(authors::update_author)
                .delete(authors::delete_author),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book).delete(books::delete_book))
        .route(
            "/books/:id/reviews",
            get(reviews::list_book_reviews).post(reviews::create_review),
        )
        // Readers
        .route(
            "/readers",
            get(readers::list_readers).post(readers::create_reader),
        )
        .route(
            "/readers/:id",
            get(readers::get_reader)
                .patch(readers::update_reader_phone)
                .delete(readers::delete_reader),
        )
        .route("/readers/:id/books/:book_id", post(readers::add_reader_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
