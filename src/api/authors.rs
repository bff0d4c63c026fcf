//! Author API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{author::AuthorNameForm, Author, AuthorResponse},
    validation::validate_id,
    AppState,
};

use super::{response::PrettyJson, FormParams};

/// List all authors with their books
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = Vec<AuthorResponse>),
        (status = 404, description = "No authors", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<PrettyJson<Vec<AuthorResponse>>> {
    let authors = state.services.authors.find_all().await?;
    Ok(PrettyJson(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author with books", body = AuthorResponse),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<AuthorResponse>> {
    let id = validate_id(Some(&id))?;
    let author = state.services.authors.find_by_id(id).await?;
    Ok(PrettyJson(author))
}

/// Create author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body(content = AuthorNameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    FormParams(form): FormParams<AuthorNameForm>,
) -> AppResult<(StatusCode, PrettyJson<Author>)> {
    let request = form.into_create()?;
    let author = state.services.authors.create(request).await?;
    Ok((StatusCode::CREATED, PrettyJson(author)))
}

/// Rename author
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body(content = AuthorNameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormParams(form): FormParams<AuthorNameForm>,
) -> AppResult<PrettyJson<Author>> {
    let id = validate_id(Some(&id))?;
    let request = form.into_update(id)?;
    let author = state.services.authors.update_name(request).await?;
    Ok(PrettyJson(author))
}

/// Delete author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(Some(&id))?;
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
