use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookshelf_db::{Book, Store};
use bookshelf_http::AppError;
use serde_json::Value;

use super::models::BookPayload;
use super::schema;
use crate::utils::blocking;

/// HTTP routes for the Books module.
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .with_state(store)
}

async fn list_books(State(store): State<Store>) -> Result<Json<Vec<BookPayload>>, AppError> {
    let books = blocking(move || store.list_books()).await?;
    Ok(Json(books.iter().map(schema::encode_book).collect()))
}

/// Create a book. The nested author is upserted, so posting a known
/// `author_id` with new names renames that author on all of their books.
async fn create_book(
    State(store): State<Store>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<BookPayload>), AppError> {
    let book = schema::decode_book(&payload)?;

    let created = blocking(move || -> Result<Book, AppError> {
        schema::ensure_unique_title(&store, &book.title, None)?;
        Ok(store.insert_book_with_author(&book)?)
    })
    .await?;

    tracing::info!(book_id = ?created.id, title = %created.title, "book created");
    Ok((StatusCode::CREATED, Json(schema::encode_book(&created))))
}

async fn get_book(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<BookPayload>, AppError> {
    match blocking(move || store.get_book_by_id(id)).await? {
        Some(book) => Ok(Json(schema::encode_book(&book))),
        None => Err(AppError::not_found(format!("book {id} not found"))),
    }
}

/// Replace a book's title and author. Patching an unknown id changes
/// nothing, the author table included, and echoes the payload without an id.
async fn update_book(
    State(store): State<Store>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<Json<BookPayload>, AppError> {
    let mut book = schema::decode_book(&payload)?;

    let updated = blocking(move || -> Result<Book, AppError> {
        schema::ensure_unique_title(&store, &book.title, Some(id))?;
        if store.update_book_with_author(&book, id)? {
            book.id = Some(id);
        }
        Ok(book)
    })
    .await?;

    tracing::info!(book_id = id, applied = updated.id.is_some(), "book patched");
    Ok(Json(schema::encode_book(&updated)))
}

async fn delete_book(
    State(store): State<Store>,
    Path(id): Path<i64>,
) -> Result<Json<BookPayload>, AppError> {
    match blocking(move || store.delete_book_by_id(id)).await? {
        Some(book) => {
            tracing::info!(book_id = id, "book deleted");
            Ok(Json(schema::encode_book(&book)))
        }
        None => Err(AppError::not_found(format!("book {id} not found"))),
    }
}
