//! Reader API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{
        reader::{CreateReaderForm, UpdatePhoneForm},
        Reader, ReaderPhone, ReaderResponse,
    },
    validation::validate_id,
    AppState,
};

use super::{response::PrettyJson, FormParams};

/// List all readers with the books they hold
#[utoipa::path(
    get,
    path = "/readers",
    tag = "readers",
    responses(
        (status = 200, description = "Reader list", body = Vec<ReaderResponse>),
        (status = 404, description = "No readers", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_readers(
    State(state): State<AppState>,
) -> AppResult<PrettyJson<Vec<ReaderResponse>>> {
    let readers = state.services.readers.find_all().await?;
    Ok(PrettyJson(readers))
}

/// Get reader by ID
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Reader with books", body = ReaderResponse),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reader(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<ReaderResponse>> {
    let id = validate_id(Some(&id))?;
    let reader = state.services.readers.find_by_id(id).await?;
    Ok(PrettyJson(reader))
}

/// Register reader
#[utoipa::path(
    post,
    path = "/readers",
    tag = "readers",
    request_body(content = CreateReaderForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Reader created", body = Reader),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 409, description = "Phone already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    FormParams(form): FormParams<CreateReaderForm>,
) -> AppResult<(StatusCode, PrettyJson<Reader>)> {
    let request = form.into_request()?;
    let reader = state.services.readers.create(request).await?;
    Ok((StatusCode::CREATED, PrettyJson(reader)))
}

/// Change reader phone
#[utoipa::path(
    patch,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    request_body(content = UpdatePhoneForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Phone updated", body = ReaderPhone),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Phone already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_reader_phone(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormParams(form): FormParams<UpdatePhoneForm>,
) -> AppResult<PrettyJson<ReaderPhone>> {
    let id = validate_id(Some(&id))?;
    let request = form.into_request(id)?;
    let updated = state.services.readers.update_phone(request).await?;
    Ok(PrettyJson(updated))
}

/// Delete reader
#[utoipa::path(
    delete,
    path = "/readers/{id}",
    tag = "readers",
    params(("id" = i64, Path, description = "Reader ID")),
    responses(
        (status = 204, description = "Reader deleted"),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_reader(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(Some(&id))?;
    state.services.readers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Give a book to a reader
#[utoipa::path(
    post,
    path = "/readers/{id}/books/{book_id}",
    tag = "readers",
    params(
        ("id" = i64, Path, description = "Reader ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 201, description = "Book given", body = ReaderResponse),
        (status = 404, description = "Reader or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Reader already has this book", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_reader_book(
    State(state): State<AppState>,
    Path((id, book_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, PrettyJson<ReaderResponse>)> {
    let id = validate_id(Some(&id))?;
    let book_id = validate_id(Some(&book_id))?;
    let reader = state.services.readers.add_book(id, book_id).await?;
    Ok((StatusCode::CREATED, PrettyJson(reader)))
}
