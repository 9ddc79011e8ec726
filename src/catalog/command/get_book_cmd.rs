use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::add_book_cmd::tests::{random_book, random_isbn, SUT_SVC};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_get_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.clone());
        let get_cmd = GetBookCommand::new(SUT_SVC.clone());

        let book = random_book();
        let res = add_cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.isbn.to_string())).await.expect("should get book");
        assert_eq!(book.isbn, Some(loaded.book.isbn));
        assert_eq!(book.title, Some(loaded.book.title));
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let get_cmd = GetBookCommand::new(SUT_SVC.clone());
        let res = get_cmd.execute(GetBookCommandRequest::new(format!("x{}", random_isbn()))).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
