use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use bookshelf_db::Store;
use bookshelf_http::AppError;
use serde_json::Value;

use crate::modules::books::models::{AuthorPayload, BookPayload};
use crate::modules::books::schema;
use crate::utils::blocking;

/// HTTP routes for the Authors module. Creation answers on both
/// `/api/authors` and `/api/authors/`.
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/api/authors", post(create_author))
        .route("/api/authors/", post(create_author))
        .route(
            "/api/authors/{id}",
            get(books_by_author).delete(delete_author),
        )
        .with_state(store)
}

async fn books_by_author(
    State(store): State<Store>,
    Path(author_id): Path<i64>,
) -> Result<Json<Vec<BookPayload>>, AppError> {
    let books = blocking(move || store.get_books_by_author(author_id)).await?;
    Ok(Json(books.iter().map(schema::encode_book).collect()))
}

async fn create_author(
    State(store): State<Store>,
    Json(payload): Json<Value>,
) -> Result<Json<AuthorPayload>, AppError> {
    let author = schema::decode_author(&payload)?;

    let author = blocking(move || {
        store.insert_author(&author)?;
        Ok::<_, AppError>(author)
    })
    .await?;

    tracing::info!(author_id = author.author_id, "author stored");
    Ok(Json(schema::encode_author(&author)))
}

async fn delete_author(
    State(store): State<Store>,
    Path(author_id): Path<i64>,
) -> Result<Json<AuthorPayload>, AppError> {
    let author = blocking(move || store.delete_author_with_books(author_id)).await?;

    tracing::info!(author_id, "author deleted with books");
    Ok(Json(schema::encode_author(&author)))
}
