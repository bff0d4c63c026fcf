//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, NewAuthor},
};

const AUTHOR_NOT_FOUND: &str = "Author not found";

/// Persistence operations on authors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn create(&self, author: NewAuthor) -> AppResult<Author>;

    /// All authors; an empty table is `NotFound`
    async fn find_all(&self) -> AppResult<Vec<Author>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Author>;

    /// Books linked to the author through `authors_books`
    async fn find_books(&self, author_id: i64) -> AppResult<Vec<Book>>;

    /// Overwrite both names of an existing author
    async fn update(&self, author: Author) -> AppResult<Author>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn create(&self, author: NewAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        if authors.is_empty() {
            return Err(AppError::NotFound("Authors not found".to_string()));
        }

        Ok(authors)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT id, first_name, last_name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND.to_string()))
    }

    async fn find_books(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.publish_year
            FROM books b
            JOIN authors_books ab ON b.id = ab.book_id
            WHERE ab.author_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET first_name = $1, last_name = $2
            WHERE id = $3
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND.to_string()))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(AUTHOR_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
