//! Readers repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewReader, Reader},
};

const READER_NOT_FOUND: &str = "Reader not found";

/// Persistence operations on readers and the books they hold
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReaderStore: Send + Sync {
    /// Insert a reader; the phone must not be in use
    async fn create(&self, reader: NewReader) -> AppResult<Reader>;

    /// All readers; an empty table is `NotFound`
    async fn find_all(&self) -> AppResult<Vec<Reader>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Reader>;

    /// Books linked to the reader through `readers_books`
    async fn find_books(&self, reader_id: i64) -> AppResult<Vec<Book>>;

    /// Change the phone of an existing reader; a number already on file,
    /// the reader's own included, is `AlreadyExists`
    async fn update_phone(&self, id: i64, phone: String) -> AppResult<Reader>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Link a book to a reader; linking twice is `AlreadyExists`
    async fn add_book(&self, reader_id: i64, book_id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Check if a phone is already used by any reader
    async fn phone_exists(&self, phone: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readers WHERE phone = $1)")
            .bind(phone)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn book_linked(&self, reader_id: i64, book_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM readers_books WHERE reader_id = $1 AND book_id = $2)",
        )
        .bind(reader_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

#[async_trait]
impl ReaderStore for ReadersRepository {
    async fn create(&self, reader: NewReader) -> AppResult<Reader> {
        if self.phone_exists(&reader.phone).await? {
            return Err(AppError::AlreadyExists("Reader already exists".to_string()));
        }

        let row = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (first_name, last_name, phone)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, phone
            "#,
        )
        .bind(&reader.first_name)
        .bind(&reader.last_name)
        .bind(&reader.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Reader>> {
        let readers = sqlx::query_as::<_, Reader>(
            "SELECT id, first_name, last_name, phone FROM readers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        if readers.is_empty() {
            return Err(AppError::NotFound("Readers not found".to_string()));
        }

        Ok(readers)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>(
            "SELECT id, first_name, last_name, phone FROM readers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(READER_NOT_FOUND.to_string()))
    }

    async fn find_books(&self, reader_id: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.publish_year
            FROM books b
            JOIN readers_books rb ON b.id = rb.book_id
            WHERE rb.reader_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(reader_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn update_phone(&self, id: i64, phone: String) -> AppResult<Reader> {
        if !self.exists(id).await? {
            return Err(AppError::NotFound(READER_NOT_FOUND.to_string()));
        }

        if self.phone_exists(&phone).await? {
            return Err(AppError::AlreadyExists("This number is already taken".to_string()));
        }

        sqlx::query_as::<_, Reader>(
            r#"
            UPDATE readers
            SET phone = $1
            WHERE id = $2
            RETURNING id, first_name, last_name, phone
            "#,
        )
        .bind(&phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(READER_NOT_FOUND.to_string()))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM readers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(READER_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    async fn add_book(&self, reader_id: i64, book_id: i64) -> AppResult<()> {
        if self.book_linked(reader_id, book_id).await? {
            return Err(AppError::AlreadyExists("Reader already has this book".to_string()));
        }

        sqlx::query("INSERT INTO readers_books (reader_id, book_id) VALUES ($1, $2)")
            .bind(reader_id)
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
