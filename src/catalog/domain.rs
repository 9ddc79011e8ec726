pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    // replaces every mutable field after full validation
    async fn update_book(&self, isbn: &str, draft: &BookDraft) -> LibraryResult<BookDto>;
    // overwrites only the non-empty fields present in the draft, unvalidated
    async fn patch_book(&self, isbn: &str, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
}
