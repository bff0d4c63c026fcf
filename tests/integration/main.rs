//! Integration tests; both suites need a live PostgreSQL and are ignored by default

mod api_tests;
mod repository_tests;
