//! Repository layer for database operations
//!
//! Each repository implements a store trait; services only see the traits.

pub mod authors;
pub mod books;
pub mod readers;
pub mod reviews;

pub use authors::{AuthorStore, AuthorsRepository};
pub use books::{BookStore, BooksRepository};
pub use readers::{ReaderStore, ReadersRepository};
pub use reviews::{ReviewStore, ReviewsRepository};

use sqlx::{Pool, Postgres};

/// One repository per entity, all sharing the connection pool
#[derive(Clone)]
pub struct Repository {
    pub authors: AuthorsRepository,
    pub books: BooksRepository,
    pub readers: ReadersRepository,
    pub reviews: ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: AuthorsRepository::new(pool.clone()),
            books: BooksRepository::new(pool.clone()),
            readers: ReadersRepository::new(pool.clone()),
            reviews: ReviewsRepository::new(pool),
        }
    }
}
