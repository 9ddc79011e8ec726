use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::parse_calendar_date;

pub const INVALID_TITLE: &str = "Title is required and must be a non-empty string.";
pub const INVALID_AUTHOR: &str = "Author is required and must be a non-empty string.";
pub const INVALID_PUBLISHER: &str = "Publisher is required and must be a non-empty string.";
pub const INVALID_PUBLISHED_DATE: &str = "Published Date is required and must be a valid date.";
pub const INVALID_ISBN: &str = "ISBN is required and must be a 13-digit number.";

pub const ISBN_LENGTH: usize = 13;

pub fn is_valid_isbn(isbn: &str) -> bool {
    isbn.len() == ISBN_LENGTH && isbn.bytes().all(|b| b.is_ascii_digit())
}

/// Checks the draft field by field in a fixed order and reports only the
/// first failure. On success the entity keeps the submitted values untouched.
pub fn validate_book(draft: &BookDraft) -> LibraryResult<BookEntity> {
    let title = required_text(draft.title.as_deref(), INVALID_TITLE, "title")?;
    let author = required_text(draft.author.as_deref(), INVALID_AUTHOR, "author")?;
    let publisher = required_text(draft.publisher.as_deref(), INVALID_PUBLISHER, "publisher")?;
    let published_date = match draft.published_date.as_deref() {
        Some(date) if parse_calendar_date(date).is_some() => date,
        _ => return Err(LibraryError::validation(INVALID_PUBLISHED_DATE, Some("publishedDate".to_string()))),
    };
    let isbn = match draft.isbn.as_deref() {
        Some(isbn) if is_valid_isbn(isbn) => isbn,
        _ => return Err(LibraryError::validation(INVALID_ISBN, Some("ISBN".to_string()))),
    };
    Ok(BookEntity::new(title, author, publisher, published_date, isbn))
}

fn required_text<'a>(value: Option<&'a str>, message: &str, field: &str) -> LibraryResult<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LibraryError::validation(message, Some(field.to_string()))),
    }
}
