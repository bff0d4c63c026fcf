//! Book API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{book::CreateBookForm, BookResponse},
    validation::validate_id,
    AppState,
};

use super::{response::PrettyJson, FormParams};

/// List all books with their authors
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<BookResponse>),
        (status = 404, description = "No books", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<BookResponse>>> {
    let books = state.services.books.find_all().await?;
    Ok(PrettyJson(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book with authors", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<BookResponse>> {
    let id = validate_id(Some(&id))?;
    let book = state.services.books.find_by_id(id).await?;
    Ok(PrettyJson(book))
}

/// Create book
///
/// `authors` is repeated once per author id.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body(content = CreateBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    FormParams(form): FormParams<CreateBookForm>,
) -> AppResult<(StatusCode, PrettyJson<BookResponse>)> {
    let request = form.into_request()?;
    let book = state.services.books.create(request).await?;
    Ok((StatusCode::CREATED, PrettyJson(book)))
}

/// Delete book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(Some(&id))?;
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
