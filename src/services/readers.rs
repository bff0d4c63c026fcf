//! Reader service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        reader::{CreateReaderRequest, UpdateReaderPhone},
        NewReader, Reader, ReaderPhone, ReaderResponse,
    },
    repository::{BookStore, ReaderStore},
};

#[derive(Clone)]
pub struct ReadersService {
    readers: Arc<dyn ReaderStore>,
    books: Arc<dyn BookStore>,
}

impl ReadersService {
    pub fn new(readers: Arc<dyn ReaderStore>, books: Arc<dyn BookStore>) -> Self {
        Self { readers, books }
    }

    pub async fn create(&self, request: CreateReaderRequest) -> AppResult<Reader> {
        let reader = self.readers.create(NewReader::from(request)).await?;
        tracing::info!("Created reader id={}", reader.id);
        Ok(reader)
    }

    pub async fn find_all(&self) -> AppResult<Vec<ReaderResponse>> {
        let readers = self.readers.find_all().await?;

        let mut result = Vec::with_capacity(readers.len());
        for reader in readers {
            let books = self.readers.find_books(reader.id).await?;
            result.push(ReaderResponse::new(reader, books));
        }
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<ReaderResponse> {
        let reader = self.readers.find_by_id(id).await?;
        let books = self.readers.find_books(id).await?;
        Ok(ReaderResponse::new(reader, books))
    }

    pub async fn update_phone(&self, request: UpdateReaderPhone) -> AppResult<ReaderPhone> {
        let reader = self
            .readers
            .update_phone(request.id, request.phone)
            .await?;
        Ok(ReaderPhone::from(reader))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.readers.delete(id).await?;
        tracing::info!("Deleted reader id={}", id);
        Ok(())
    }

    /// Give a book to a reader and return the reader with every book held
    pub async fn add_book(&self, reader_id: i64, book_id: i64) -> AppResult<ReaderResponse> {
        let reader = self.readers.find_by_id(reader_id).await?;
        let mut books = self.readers.find_books(reader_id).await?;
        let book = self.books.find_by_id(book_id).await?;

        self.readers.add_book(reader_id, book_id).await?;
        tracing::info!("Reader id={} took book id={}", reader_id, book_id);

        books.push(book);
        Ok(ReaderResponse::new(reader, books))
    }
}
