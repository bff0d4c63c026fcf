//! Reader model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;

use super::book::Book;
use crate::{error::AppResult, validation};

/// Reader row; identity is the id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reader {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique, formatted as +7(xxx)-xxx-xx-xx
    pub phone: String,
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reader {}

impl Hash for Reader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Values for a new reader row
#[derive(Debug, Clone, PartialEq)]
pub struct NewReader {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Reader with the books they hold
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReaderResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub books: Vec<Book>,
}

impl ReaderResponse {
    pub fn new(reader: Reader, books: Vec<Book>) -> Self {
        Self {
            id: reader.id,
            first_name: reader.first_name,
            last_name: reader.last_name,
            phone: reader.phone,
            books,
        }
    }
}

/// Result of a phone change
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReaderPhone {
    pub id: i64,
    pub phone: String,
}

/// Raw create reader parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReaderForm {
    #[serde(rename = "first-name", default, deserialize_with = "super::first_value")]
    pub first_name: Option<String>,
    #[serde(rename = "last-name", default, deserialize_with = "super::first_value")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "super::first_value")]
    pub phone: Option<String>,
}

/// Raw phone change parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePhoneForm {
    #[serde(default, deserialize_with = "super::first_value")]
    pub phone: Option<String>,
}

/// Validated create reader request
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReaderRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Validated phone change request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReaderPhone {
    pub id: i64,
    pub phone: String,
}

impl CreateReaderForm {
    pub fn into_request(self) -> AppResult<CreateReaderRequest> {
        let first_name = validation::validate_name("first-name", self.first_name.as_deref())?;
        let last_name = validation::validate_name("last-name", self.last_name.as_deref())?;
        let phone = validation::validate_phone("phone", self.phone.as_deref())?;

        Ok(CreateReaderRequest {
            first_name,
            last_name,
            phone,
        })
    }
}

impl UpdatePhoneForm {
    pub fn into_request(self, id: i64) -> AppResult<UpdateReaderPhone> {
        let phone = validation::validate_phone("phone", self.phone.as_deref())?;
        Ok(UpdateReaderPhone { id, phone })
    }
}

impl From<CreateReaderRequest> for NewReader {
    fn from(request: CreateReaderRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }
}

impl From<Reader> for ReaderPhone {
    fn from(reader: Reader) -> Self {
        Self {
            id: reader.id,
            phone: reader.phone,
        }
    }
}
