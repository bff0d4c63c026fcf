//! Author service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        author::{CreateAuthorRequest, UpdateAuthorName},
        Author, AuthorResponse, NewAuthor,
    },
    repository::AuthorStore,
};

#[derive(Clone)]
pub struct AuthorsService {
    authors: Arc<dyn AuthorStore>,
}

impl AuthorsService {
    pub fn new(authors: Arc<dyn AuthorStore>) -> Self {
        Self { authors }
    }

    pub async fn create(&self, request: CreateAuthorRequest) -> AppResult<Author> {
        let author = self.authors.create(NewAuthor::from(request)).await?;
        tracing::info!("Created author id={}", author.id);
        Ok(author)
    }

    pub async fn find_all(&self) -> AppResult<Vec<AuthorResponse>> {
        let authors = self.authors.find_all().await?;

        let mut result = Vec::with_capacity(authors.len());
        for author in authors {
            let books = self.authors.find_books(author.id).await?;
            result.push(AuthorResponse::new(author, books));
        }
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<AuthorResponse> {
        let author = self.authors.find_by_id(id).await?;
        let books = self.authors.find_books(id).await?;
        Ok(AuthorResponse::new(author, books))
    }

    pub async fn update_name(&self, request: UpdateAuthorName) -> AppResult<Author> {
        self.authors.update(Author::from(request)).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.authors.delete(id).await?;
        tracing::info!("Deleted author id={}", id);
        Ok(())
    }
}
