//! Reviews repository for database operations

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{NewReview, Review},
};

/// Persistence operations on reviews
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert a review dated today; one review per reader and book
    async fn create(&self, review: NewReview) -> AppResult<Review>;

    /// Reviews of a book; none is `NotFound`
    async fn find_by_book(&self, book_id: i64) -> AppResult<Vec<Review>>;
}

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn exists(&self, reader_id: i64, book_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE reader_id = $1 AND book_id = $2)",
        )
        .bind(reader_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

#[async_trait]
impl ReviewStore for ReviewsRepository {
    async fn create(&self, review: NewReview) -> AppResult<Review> {
        if self.exists(review.reader_id, review.book_id).await? {
            return Err(AppError::AlreadyExists(
                "There is already a review for this book".to_string(),
            ));
        }

        let today = Utc::now().date_naive();

        let row = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (reader_id, book_id, content, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, reader_id, book_id, content, date
            "#,
        )
        .bind(review.reader_id)
        .bind(review.book_id)
        .bind(&review.content)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_book(&self, book_id: i64) -> AppResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, reader_id, book_id, content, date
            FROM reviews
            WHERE book_id = $1
            ORDER BY id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        if reviews.is_empty() {
            return Err(AppError::NotFound("Reviews not found".to_string()));
        }

        Ok(reviews)
    }
}
