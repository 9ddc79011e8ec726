use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::{BookEntity, BOOK_NOT_FOUND, DUPLICATE_ISBN};
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Process-local book store. Books stay in insertion order and are lost when
/// the process exits.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

fn position(books: &[BookEntity], id: &str) -> Option<usize> {
    books.iter().position(|b| b.id() == id)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if position(&books, entity.id().as_str()).is_some() {
            return Err(LibraryError::duplicate_key(DUPLICATE_ISBN));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let ndx = position(&books, entity.id().as_str())
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        books[ndx] = entity.clone();
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        position(&books, id)
            .map(|ndx| books[ndx].clone())
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let ndx = position(&books, id)
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        books.remove(ndx);
        Ok(1)
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.books.read().await.len())
    }
}
