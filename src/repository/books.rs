//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, NewBook},
};

const BOOK_NOT_FOUND: &str = "Book not found";

/// Persistence operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a book unless one with the same title, year and authors exists
    async fn create(&self, book: NewBook) -> AppResult<Book>;

    /// Link a book to one of its authors
    async fn add_author(&self, book_id: i64, author_id: i64) -> AppResult<()>;

    /// All books; an empty table is `NotFound`
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Book>;

    async fn find_authors(&self, book_id: i64) -> AppResult<Vec<Author>>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// A book matches when title (case-insensitive) and year are equal and
    /// its authors include every requested author.
    async fn duplicate_exists(&self, book: &NewBook) -> AppResult<bool> {
        let author_ids: Vec<i64> = book.author_ids.iter().copied().collect();

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM books b
                WHERE LOWER(b.title) = LOWER($1)
                  AND b.publish_year = $2
                  AND NOT EXISTS (
                      SELECT 1 FROM UNNEST($3::BIGINT[]) AS requested(author_id)
                      WHERE NOT EXISTS (
                          SELECT 1 FROM authors_books ab
                          WHERE ab.book_id = b.id
                            AND ab.author_id = requested.author_id
                      )
                  )
            )
            "#,
        )
        .bind(&book.title)
        .bind(book.publish_year)
        .bind(&author_ids)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn create(&self, book: NewBook) -> AppResult<Book> {
        if self.duplicate_exists(&book).await? {
            return Err(AppError::AlreadyExists("Book already exists".to_string()));
        }

        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, publish_year)
            VALUES ($1, $2)
            RETURNING id, title, publish_year
            "#,
        )
        .bind(&book.title)
        .bind(book.publish_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn add_author(&self, book_id: i64, author_id: i64) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO authors_books (author_id, book_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(author_id)
        .bind(book_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, publish_year FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        if books.is_empty() {
            return Err(AppError::NotFound("Books not found".to_string()));
        }

        Ok(books)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, publish_year FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    async fn find_authors(&self, book_id: i64) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.id, a.first_name, a.last_name
            FROM authors a
            JOIN authors_books ab ON a.id = ab.author_id
            WHERE ab.book_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
