//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health, readers, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "Authors, books, readers and reviews REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::delete_book,
        // Reviews
        reviews::list_book_reviews,
        reviews::create_review,
        // Readers
        readers::list_readers,
        readers::get_reader,
        readers::create_reader,
        readers::update_reader_phone,
        readers::delete_reader,
        readers::add_reader_book,
    ),
    components(
        schemas(
            crate::models::Author,
            crate::models::AuthorResponse,
            crate::models::author::AuthorNameForm,
            crate::models::Book,
            crate::models::BookResponse,
            crate::models::book::CreateBookForm,
            crate::models::Reader,
            crate::models::ReaderResponse,
            crate::models::ReaderPhone,
            crate::models::reader::CreateReaderForm,
            crate::models::reader::UpdatePhoneForm,
            crate::models::ReviewResponse,
            crate::models::BookReviewResponse,
            crate::models::review::CreateReviewForm,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog"),
        (name = "reviews", description = "Book reviews"),
        (name = "readers", description = "Readers and the books they hold")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
