//! Book service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{book::CreateBookRequest, BookResponse, NewBook},
    repository::{AuthorStore, BookStore},
};

#[derive(Clone)]
pub struct BooksService {
    books: Arc<dyn BookStore>,
    authors: Arc<dyn AuthorStore>,
}

impl BooksService {
    pub fn new(books: Arc<dyn BookStore>, authors: Arc<dyn AuthorStore>) -> Self {
        Self { books, authors }
    }

    /// Resolve the authors, insert the book, then link it to each author
    pub async fn create(&self, request: CreateBookRequest) -> AppResult<BookResponse> {
        let mut authors = Vec::with_capacity(request.author_ids.len());
        for author_id in &request.author_ids {
            authors.push(self.authors.find_by_id(*author_id).await?);
        }

        let book = self.books.create(NewBook::from(request)).await?;

        for author in &authors {
            self.books.add_author(book.id, author.id).await?;
        }

        tracing::info!("Created book id={} with {} author(s)", book.id, authors.len());
        Ok(BookResponse::new(book, authors))
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookResponse>> {
        let books = self.books.find_all().await?;

        let mut result = Vec::with_capacity(books.len());
        for book in books {
            let authors = self.books.find_authors(book.id).await?;
            result.push(BookResponse::new(book, authors));
        }
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<BookResponse> {
        let book = self.books.find_by_id(id).await?;
        let authors = self.books.find_authors(id).await?;
        Ok(BookResponse::new(book, authors))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{Author, Book},
        repository::{authors::MockAuthorStore, books::MockBookStore},
    };
    use mockall::{predicate::eq, Sequence};
    use std::collections::BTreeSet;

    fn request(author_ids: &[i64]) -> CreateBookRequest {
        CreateBookRequest {
            title: "Dune".into(),
            publish_year: 1965,
            author_ids: author_ids.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn author(id: i64) -> Author {
        Author {
            id,
            first_name: "Frank".into(),
            last_name: "Herbert".into(),
        }
    }

    #[tokio::test]
    async fn test_create_links_every_author_after_insert() {
        let mut authors = MockAuthorStore::new();
        authors.expect_find_by_id().times(2).returning(|id| Ok(author(id)));

        let mut seq = Sequence::new();
        let mut books = MockBookStore::new();
        books
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new| {
                Ok(Book {
                    id: 50,
                    title: new.title,
                    publish_year: new.publish_year,
                })
            });
        books
            .expect_add_author()
            .with(eq(50), eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        books
            .expect_add_author()
            .with(eq(50), eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = BooksService::new(Arc::new(books), Arc::new(authors));
        let response = service.create(request(&[2, 1])).await.unwrap();

        assert_eq!(response.id, 50);
        assert_eq!(response.publish_year, 1965);
        assert_eq!(
            response.authors.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_create_with_unknown_author_inserts_nothing() {
        let mut authors = MockAuthorStore::new();
        authors
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Err(AppError::NotFound("Author not found".into())));

        let mut books = MockBookStore::new();
        books.expect_create().never();
        books.expect_add_author().never();

        let service = BooksService::new(Arc::new(books), Arc::new(authors));
        assert!(matches!(
            service.create(request(&[7])).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_duplicate_book() {
        let mut authors = MockAuthorStore::new();
        authors.expect_find_by_id().returning(|id| Ok(author(id)));

        let mut books = MockBookStore::new();
        books
            .expect_create()
            .returning(|_| Err(AppError::AlreadyExists("Book already exists".into())));
        books.expect_add_author().never();

        let service = BooksService::new(Arc::new(books), Arc::new(authors));
        match service.create(request(&[1])).await {
            Err(AppError::AlreadyExists(msg)) => assert_eq!(msg, "Book already exists"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_all_attaches_authors() {
        let mut books = MockBookStore::new();
        books.expect_find_all().returning(|| {
            Ok(vec![
                Book { id: 1, title: "Dune".into(), publish_year: 1965 },
                Book { id: 2, title: "Solaris".into(), publish_year: 1961 },
            ])
        });
        books
            .expect_find_authors()
            .times(2)
            .returning(|book_id| Ok(vec![author(book_id + 10)]));

        let service = BooksService::new(Arc::new(books), Arc::new(MockAuthorStore::new()));
        let all = service.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[1].authors[0].id, 12);
    }
}
