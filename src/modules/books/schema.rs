//! Conversion between wire payloads and domain entities.
//!
//! Decoding happens in two phases. [`decode_book`] and [`decode_author`] are
//! pure structural checks over the JSON body. [`ensure_unique_title`] is the
//! store-consulting phase that handlers run before writing a book.

use bookshelf_db::{Author, Book, Store};
use bookshelf_http::AppError;
use serde_json::{Map, Value};

use super::models::{AuthorPayload, BookPayload};
use super::validation::{FieldErrors, ValidationError, SCHEMA_FIELD};

const AUTHOR_FIELDS: &[&str] = &["author_id", "first_name", "last_name"];
const BOOK_FIELDS: &[&str] = &["title", "author"];

/// Decode an author payload. Every field is required and must be non-zero
/// or non-empty.
pub fn decode_author(payload: &Value) -> Result<Author, FieldErrors> {
    let Some(object) = payload.as_object() else {
        return Err(FieldErrors::single(
            SCHEMA_FIELD,
            ValidationError::InvalidInput,
        ));
    };

    let mut errors = FieldErrors::new();
    reject_unknown(object, AUTHOR_FIELDS, &mut errors);
    let author_id = required_int(object, "author_id", &mut errors);
    let first_name = required_str(object, "first_name", &mut errors);
    let last_name = required_str(object, "last_name", &mut errors);

    match (author_id, first_name, last_name) {
        (Some(author_id), Some(first_name), Some(last_name)) if errors.is_empty() => Ok(Author {
            author_id,
            first_name,
            last_name,
        }),
        _ => Err(errors),
    }
}

/// Decode a book payload. `id` is output only and rejected on input; the
/// nested author is validated with [`decode_author`].
pub fn decode_book(payload: &Value) -> Result<Book, FieldErrors> {
    let Some(object) = payload.as_object() else {
        return Err(FieldErrors::single(
            SCHEMA_FIELD,
            ValidationError::InvalidInput,
        ));
    };

    let mut errors = FieldErrors::new();
    reject_unknown(object, BOOK_FIELDS, &mut errors);
    let title = required_str(object, "title", &mut errors);
    let author = match object.get("author") {
        None | Some(Value::Null) => {
            errors.add(
                "author",
                ValidationError::MissingField {
                    field: "author",
                    blank: false,
                },
            );
            None
        }
        Some(nested) => match decode_author(nested) {
            Ok(author) => Some(author),
            Err(nested_errors) => {
                errors.nest("author", nested_errors);
                None
            }
        },
    };

    match (title, author) {
        (Some(title), Some(author)) if errors.is_empty() => Ok(Book::new(title, author)),
        _ => Err(errors),
    }
}

/// Fail with a duplicate-title error when a book other than `exclude`
/// already holds `title`. Blocking: call from a blocking context.
pub fn ensure_unique_title(
    store: &Store,
    title: &str,
    exclude: Option<i64>,
) -> Result<(), AppError> {
    match store.get_book_by_title(title)? {
        Some(existing) if existing.id != exclude => {
            tracing::debug!(title, existing_id = ?existing.id, "duplicate book title");
            Err(FieldErrors::single(
                "title",
                ValidationError::DuplicateTitle {
                    title: title.to_string(),
                },
            )
            .into())
        }
        _ => Ok(()),
    }
}

pub fn encode_author(author: &Author) -> AuthorPayload {
    AuthorPayload {
        author_id: author.author_id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
    }
}

pub fn encode_book(book: &Book) -> BookPayload {
    BookPayload {
        id: book.id,
        title: book.title.clone(),
        author: encode_author(&book.author),
    }
}

fn reject_unknown(object: &Map<String, Value>, known: &[&str], errors: &mut FieldErrors) {
    for key in object.keys() {
        if !known.contains(&key.as_str()) {
            errors.add(key.clone(), ValidationError::UnknownField);
        }
    }
}

fn required_int(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, ValidationError::MissingField { field, blank: false });
            None
        }
        Some(value) => match value.as_i64() {
            Some(0) => {
                errors.add(field, ValidationError::MissingField { field, blank: true });
                None
            }
            Some(number) => Some(number),
            None => {
                errors.add(field, ValidationError::InvalidType { expected: "integer" });
                None
            }
        },
    }
}

fn required_str(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, ValidationError::MissingField { field, blank: false });
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            errors.add(field, ValidationError::MissingField { field, blank: true });
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.add(field, ValidationError::InvalidType { expected: "string" });
            None
        }
    }
}
