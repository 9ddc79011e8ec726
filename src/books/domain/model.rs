use crate::core::domain::Identifiable;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const DUPLICATE_ISBN: &str = "A book with this ISBN already exists.";

// BookEntity is a catalogued title keyed by its 13-digit ISBN. Fields hold
// the submitted text verbatim, including whatever date format was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, publisher: &str, published_date: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            published_date: published_date.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Herbert", "Chilton", "1965-06-01", "1234567890123");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!("1965-06-01", book.published_date.as_str());
        assert_eq!("1234567890123", book.id().as_str());
    }
}
