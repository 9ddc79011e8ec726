use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_UPDATED: &str = "Book updated successfully.";

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub book: BookDraft,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, book: BookDraft) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: BOOK_UPDATED.to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.isbn.as_str(), &req.book)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDraft;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::add_book_cmd::tests::{random_book, SUT_SVC};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, BOOK_UPDATED};
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_update_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.clone());
        let update_cmd = UpdateBookCommand::new(SUT_SVC.clone());

        let res = add_cmd.execute(AddBookCommandRequest::new(random_book()))
                                    .await.expect("should add book");
        let isbn = res.book.isbn.as_str();
        let req = UpdateBookCommandRequest::new(isbn, BookDraft::new("new title", "new author", "new publisher", "2021-01-01", isbn));
        let updated = update_cmd.execute(req).await.expect("should update book");
        assert_eq!(BOOK_UPDATED, updated.message.as_str());
        assert_eq!("new title", updated.book.title.as_str());
        assert_eq!(isbn, updated.book.isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_not_run_invalid_update() {
        let add_cmd = AddBookCommand::new(SUT_SVC.clone());
        let update_cmd = UpdateBookCommand::new(SUT_SVC.clone());

        let res = add_cmd.execute(AddBookCommandRequest::new(random_book()))
                                    .await.expect("should add book");
        let mut draft = random_book();
        draft.title = None;
        let updated = update_cmd.execute(UpdateBookCommandRequest::new(res.book.isbn.as_str(), draft)).await;
        assert!(matches!(updated, Err(CommandError::Validation { .. })));
    }
}
