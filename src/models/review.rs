//! Review model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;

use super::{book::Book, reader::Reader};
use crate::{error::AppResult, validation};

/// Review row; at most one per (reader, book)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub reader_id: i64,
    pub book_id: i64,
    pub content: String,
    pub date: NaiveDate,
}

impl PartialEq for Review {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Review {}

impl Hash for Review {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Values for a new review row; the date is assigned on insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub reader_id: i64,
    pub book_id: i64,
    pub content: String,
}

/// Created review with its reader and book
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub reader: Reader,
    pub book: Book,
    pub content: String,
    /// Creation date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Review as listed under a book
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookReviewResponse {
    pub id: i64,
    pub reader: Reader,
    pub content: String,
    pub date: NaiveDate,
}

impl ReviewResponse {
    pub fn new(review: Review, reader: Reader, book: Book) -> Self {
        Self {
            id: review.id,
            reader,
            book,
            content: review.content,
            date: review.date,
        }
    }
}

impl BookReviewResponse {
    pub fn new(review: Review, reader: Reader) -> Self {
        Self {
            id: review.id,
            reader,
            content: review.content,
            date: review.date,
        }
    }
}

/// Raw create review parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReviewForm {
    #[serde(rename = "reader-id", default, deserialize_with = "super::first_value")]
    pub reader_id: Option<String>,
    #[serde(default, deserialize_with = "super::first_value")]
    pub content: Option<String>,
}

/// Validated create review request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewRequest {
    pub reader_id: i64,
    pub book_id: i64,
    pub content: String,
}

impl CreateReviewForm {
    /// `book_id` is the raw path segment; it is checked after `reader-id`
    pub fn into_request(self, book_id: &str) -> AppResult<CreateReviewRequest> {
        let reader_id = validation::validate_id(self.reader_id.as_deref())?;
        let book_id = validation::validate_id(Some(book_id))?;
        let content = validation::validate_content("content", self.content.as_deref())?;

        Ok(CreateReviewRequest {
            reader_id,
            book_id,
            content,
        })
    }
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        Self {
            reader_id: request.reader_id,
            book_id: request.book_id,
            content: request.content,
        }
    }
}
