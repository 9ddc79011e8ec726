use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::books::domain::validation::validate_book;
use crate::books::dto::{BookDraft, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    // serializes every read-modify-write sequence against the repository
    write_lock: Mutex<()>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            write_lock: Mutex::new(()),
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = validate_book(draft).map_err(|err| {
            debug!(error = %err, "rejected new book");
            err
        })?;
        let _guard = self.write_lock.lock().await;
        self.book_repository.create(&book).await?;
        let total = self.book_repository.count().await?;
        info!(isbn = %book.isbn, total, "book added");
        Ok(BookDto::from(&book))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn update_book(&self, isbn: &str, draft: &BookDraft) -> LibraryResult<BookDto> {
        let _guard = self.write_lock.lock().await;
        let existing = self.book_repository.get(isbn).await?;
        let book = validate_book(&draft.with_isbn(existing.isbn.as_str())).map_err(|err| {
            debug!(isbn, error = %err, "rejected book update");
            err
        })?;
        self.book_repository.update(&book).await?;
        info!(isbn, "book updated");
        Ok(BookDto::from(&book))
    }

    async fn patch_book(&self, isbn: &str, draft: &BookDraft) -> LibraryResult<BookDto> {
        let _guard = self.write_lock.lock().await;
        let mut book = self.book_repository.get(isbn).await?;
        if let Some(title) = supplied(&draft.title) {
            book.title = title.to_string();
        }
        if let Some(author) = supplied(&draft.author) {
            book.author = author.to_string();
        }
        if let Some(publisher) = supplied(&draft.publisher) {
            book.publisher = publisher.to_string();
        }
        if let Some(published_date) = supplied(&draft.published_date) {
            book.published_date = published_date.to_string();
        }
        self.book_repository.update(&book).await?;
        info!(isbn, "book partially updated");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let _guard = self.write_lock.lock().await;
        self.book_repository.delete(isbn).await?;
        info!(isbn, "book deleted");
        Ok(())
    }
}
