//! Data models for the library

pub mod author;
pub mod book;
pub mod reader;
pub mod review;

// Re-export commonly used types
pub use author::{Author, AuthorResponse, NewAuthor};
pub use book::{Book, BookResponse, NewBook};
pub use reader::{NewReader, Reader, ReaderPhone, ReaderResponse};
pub use review::{BookReviewResponse, NewReview, Review, ReviewResponse};

use serde::{Deserialize, Deserializer};

/// Keep the first value of a parameter that may be sent more than once
pub(crate) fn first_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(values.into_iter().next())
}
