use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_PATCHED: &str = "Book partially updated successfully.";

pub struct PatchBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl PatchBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct PatchBookCommandRequest {
    pub isbn: String,
    pub book: BookDraft,
}

impl PatchBookCommandRequest {
    pub fn new(isbn: &str, book: BookDraft) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct PatchBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl PatchBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: BOOK_PATCHED.to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<PatchBookCommandRequest, PatchBookCommandResponse> for PatchBookCommand {
    async fn execute(&self, req: PatchBookCommandRequest) -> Result<PatchBookCommandResponse, CommandError> {
        self.catalog_service.patch_book(req.isbn.as_str(), &req.book)
            .await.map_err(CommandError::from).map(PatchBookCommandResponse::new)
    }
}
