use serde::{Deserialize, Serialize};

/// An author. `author_id` is supplied by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub author_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(
        author_id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            author_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A book with its author embedded by value.
///
/// Only `author.author_id` is persisted on the book row; the names are
/// joined back in from the `author` table on reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the store on insert.
    pub id: Option<i64>,
    pub title: String,
    pub author: Author,
}

impl Book {
    /// Build a book that has not been stored yet.
    pub fn new(title: impl Into<String>, author: Author) -> Self {
        Self {
            id: None,
            title: title.into(),
            author,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Rows written by a fresh bootstrap when seeding is enabled.
pub fn default_seed() -> Vec<Book> {
    vec![
        Book::new("A Byte of Python", Author::new(1, "Swaroop", "C. H.")),
        Book::new(
            "Moby-Dick; or, The Whale",
            Author::new(2, "Herman", "Melville"),
        ),
        Book::new("War and Peace", Author::new(3, "Leo", "Tolstoy")),
    ]
}
