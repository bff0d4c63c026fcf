//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;

use super::book::Book;
use crate::{error::AppResult, validation};

/// Author row; identity is the id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Values for a new author row
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
}

/// Author with the books they wrote
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<Book>,
}

impl AuthorResponse {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            books,
        }
    }
}

/// Raw `first-name` / `last-name` parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AuthorNameForm {
    #[serde(rename = "first-name", default, deserialize_with = "super::first_value")]
    pub first_name: Option<String>,
    #[serde(rename = "last-name", default, deserialize_with = "super::first_value")]
    pub last_name: Option<String>,
}

/// Validated create author request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAuthorRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Validated rename request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAuthorName {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorNameForm {
    pub fn into_create(self) -> AppResult<CreateAuthorRequest> {
        let (first_name, last_name) = self.validated()?;
        Ok(CreateAuthorRequest { first_name, last_name })
    }

    pub fn into_update(self, id: i64) -> AppResult<UpdateAuthorName> {
        let (first_name, last_name) = self.validated()?;
        Ok(UpdateAuthorName { id, first_name, last_name })
    }

    fn validated(&self) -> AppResult<(String, String)> {
        let first_name = validation::validate_name("first-name", self.first_name.as_deref())?;
        let last_name = validation::validate_name("last-name", self.last_name.as_deref())?;
        Ok((first_name, last_name))
    }
}

impl From<CreateAuthorRequest> for NewAuthor {
    fn from(request: CreateAuthorRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

impl From<UpdateAuthorName> for Author {
    fn from(request: UpdateAuthorName) -> Self {
        Self {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}
