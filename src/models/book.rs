//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;

use super::author::Author;
use crate::{error::AppResult, validation};

/// Book row; identity is the id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub publish_year: i32,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Values for a new book row. `author_ids` is used for the duplicate check;
/// links are written separately.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub publish_year: i32,
    pub author_ids: BTreeSet<i64>,
}

/// Book with its authors
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub publish_year: i32,
    pub authors: Vec<Author>,
}

impl BookResponse {
    pub fn new(book: Book, authors: Vec<Author>) -> Self {
        Self {
            id: book.id,
            title: book.title,
            publish_year: book.publish_year,
            authors,
        }
    }
}

/// Raw create book parameters; `authors` may repeat
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookForm {
    #[serde(default, deserialize_with = "super::first_value")]
    pub title: Option<String>,
    #[serde(rename = "publish-year", default, deserialize_with = "super::first_value")]
    pub publish_year: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

/// Validated create book request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookRequest {
    pub title: String,
    pub publish_year: i32,
    pub author_ids: BTreeSet<i64>,
}

impl CreateBookForm {
    pub fn into_request(self) -> AppResult<CreateBookRequest> {
        let title = validation::validate_title("title", self.title.as_deref())?;
        let publish_year = validation::validate_year("publish-year", self.publish_year.as_deref())?;
        let author_ids = validation::validate_id_values(&self.authors)?;

        Ok(CreateBookRequest {
            title,
            publish_year,
            author_ids,
        })
    }
}

impl From<CreateBookRequest> for NewBook {
    fn from(request: CreateBookRequest) -> Self {
        Self {
            title: request.title,
            publish_year: request.publish_year,
            author_ids: request.author_ids,
        }
    }
}
