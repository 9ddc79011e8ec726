use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::books::domain::model::BookEntity;

// BookDto is the wire shape of a book for the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub publisher: String,
    #[serde(rename = "publishedDate")]
    pub published_date: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, publisher: &str, published_date: &str, isbn: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            published_date: published_date.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            published_date: other.published_date.to_string(),
            isbn: other.isbn.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            publisher: other.publisher.to_string(),
            published_date: other.published_date.to_string(),
            isbn: other.isbn.to_string(),
        }
    }
}

// BookDraft carries book fields as submitted in a request body. A field is
// `Some` only when the body held a JSON string for it; unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookDraft {
    #[serde(default, deserialize_with = "text_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub publisher: Option<String>,
    #[serde(default, rename = "publishedDate", deserialize_with = "text_or_none")]
    pub published_date: Option<String>,
    #[serde(default, rename = "ISBN", deserialize_with = "text_or_none")]
    pub isbn: Option<String>,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, publisher: &str, published_date: &str, isbn: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            publisher: Some(publisher.to_string()),
            published_date: Some(published_date.to_string()),
            isbn: Some(isbn.to_string()),
        }
    }

    // same fields, keyed to an existing book
    pub fn with_isbn(&self, isbn: &str) -> Self {
        Self {
            isbn: Some(isbn.to_string()),
            ..self.clone()
        }
    }
}

const DRAFT_FIELDS: [&str; 5] = ["title", "author", "publisher", "publishedDate", "ISBN"];

// draft fields present in the body with a value that is neither a string nor null
pub fn ignored_fields(json: &Value) -> Vec<&'static str> {
    DRAFT_FIELDS
        .iter()
        .copied()
        .filter(|field| matches!(json.get(field), Some(value) if !value.is_string() && !value.is_null()))
        .collect()
}

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}
