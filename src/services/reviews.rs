//! Review service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        review::CreateReviewRequest, BookReviewResponse, NewReview, ReviewResponse,
    },
    repository::{BookStore, ReaderStore, ReviewStore},
};

#[derive(Clone)]
pub struct ReviewsService {
    reviews: Arc<dyn ReviewStore>,
    readers: Arc<dyn ReaderStore>,
    books: Arc<dyn BookStore>,
}

impl ReviewsService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        readers: Arc<dyn ReaderStore>,
        books: Arc<dyn BookStore>,
    ) -> Self {
        Self {
            reviews,
            readers,
            books,
        }
    }

    pub async fn create(&self, request: CreateReviewRequest) -> AppResult<ReviewResponse> {
        let reader = self.readers.find_by_id(request.reader_id).await?;
        let book = self.books.find_by_id(request.book_id).await?;

        let review = self.reviews.create(NewReview::from(request)).await?;
        tracing::info!(
            "Reader id={} reviewed book id={} (review id={})",
            reader.id,
            book.id,
            review.id
        );

        Ok(ReviewResponse::new(review, reader, book))
    }

    pub async fn find_by_book(&self, book_id: i64) -> AppResult<Vec<BookReviewResponse>> {
        let reviews = self.reviews.find_by_book(book_id).await?;

        let mut result = Vec::with_capacity(reviews.len());
        for review in reviews {
            let reader = self.readers.find_by_id(review.reader_id).await?;
            result.push(BookReviewResponse::new(review, reader));
        }
        Ok(result)
    }
}
