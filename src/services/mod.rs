//! Business logic services

pub mod authors;
pub mod books;
pub mod readers;
pub mod reviews;

use std::sync::Arc;

use crate::repository::{AuthorStore, BookStore, ReaderStore, Repository, ReviewStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub readers: readers::ReadersService,
    pub reviews: reviews::ReviewsService,
}

impl Services {
    /// Create all services backed by the database repositories
    pub fn new(repository: Repository) -> Self {
        Self::from_stores(
            Arc::new(repository.authors),
            Arc::new(repository.books),
            Arc::new(repository.readers),
            Arc::new(repository.reviews),
        )
    }

    /// Create all services over arbitrary store implementations
    pub fn from_stores(
        authors: Arc<dyn AuthorStore>,
        books: Arc<dyn BookStore>,
        readers: Arc<dyn ReaderStore>,
        reviews: Arc<dyn ReviewStore>,
    ) -> Self {
        Self {
            authors: authors::AuthorsService::new(authors.clone()),
            books: books::BooksService::new(books.clone(), authors),
            readers: readers::ReadersService::new(readers.clone(), books.clone()),
            reviews: reviews::ReviewsService::new(reviews, readers, books),
        }
    }
}
