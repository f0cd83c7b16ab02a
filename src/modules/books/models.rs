use serde::{Deserialize, Serialize};

/// Wire shape of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPayload {
    /// Output only; absent until the store has assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: AuthorPayload,
}

/// Wire shape of an author, also nested under a book's `author` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub author_id: i64,
    pub first_name: String,
    pub last_name: String,
}
