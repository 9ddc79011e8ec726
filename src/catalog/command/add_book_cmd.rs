use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_ADDED: &str = "Book added successfully.";

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub book: BookDraft,
}

impl AddBookCommandRequest {
    pub fn new(book: BookDraft) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: BOOK_ADDED.to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use rand::Rng;
    use crate::books::dto::BookDraft;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, BOOK_ADDED};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    lazy_static! {
        pub(crate) static ref SUT_SVC: Arc<dyn CatalogService> = factory::create_catalog_service();
    }

    pub(crate) fn random_isbn() -> String {
        let mut rng = rand::thread_rng();
        (0..13).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
    }

    pub(crate) fn random_book() -> BookDraft {
        BookDraft::new("test book", "test author", "test publisher", "2020-02-20", random_isbn().as_str())
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(SUT_SVC.clone());

        let book = random_book();
        let res = cmd.execute(AddBookCommandRequest::new(book.clone()))
            .await.expect("should add book");
        assert_eq!(BOOK_ADDED, res.message.as_str());
        assert_eq!(book.isbn, Some(res.book.isbn));
    }

    #[tokio::test]
    async fn test_should_not_add_book_twice() {
        let cmd = AddBookCommand::new(SUT_SVC.clone());

        let book = random_book();
        let _ = cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new(book)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
