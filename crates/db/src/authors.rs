use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{DbError, DbResult};
use crate::models::Author;
use crate::store::Store;

impl Store {
    /// Store `author` under its explicit `author_id`.
    ///
    /// An existing row with the same id has its names overwritten, so the
    /// book creation path can call this for authors that already exist.
    pub fn insert_author(&self, author: &Author) -> DbResult<()> {
        let conn = self.connect()?;
        upsert_author(&conn, author)?;

        tracing::debug!(author_id = author.author_id, "stored author");
        Ok(())
    }

    /// Fails with [`DbError::NotFound`] when no author has this id.
    pub fn get_author_by_id(&self, author_id: i64) -> DbResult<Author> {
        let conn = self.connect()?;
        select_author(&conn, author_id)?.ok_or_else(|| DbError::author_not_found(author_id))
    }

    /// Delete the author and every book that references it in one
    /// transaction, returning the author as it was.
    pub fn delete_author_with_books(&self, author_id: i64) -> DbResult<Author> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let author =
            select_author(&tx, author_id)?.ok_or_else(|| DbError::author_not_found(author_id))?;
        let books = tx.execute("DELETE FROM books WHERE author = ?1", params![author_id])?;
        tx.execute("DELETE FROM author WHERE author_id = ?1", params![author_id])?;
        tx.commit()?;

        tracing::debug!(author_id, books, "deleted author with books");
        Ok(author)
    }
}

pub(crate) fn upsert_author(conn: &Connection, author: &Author) -> DbResult<()> {
    conn.execute(
        "INSERT INTO author (author_id, first_name, last_name) VALUES (?1, ?2, ?3)
         ON CONFLICT(author_id) DO UPDATE SET
            first_name = excluded.first_name,
            last_name = excluded.last_name",
        params![author.author_id, author.first_name, author.last_name],
    )?;
    Ok(())
}

fn select_author(conn: &Connection, author_id: i64) -> DbResult<Option<Author>> {
    let author = conn
        .query_row(
            "SELECT author_id, first_name, last_name FROM author WHERE author_id = ?1",
            params![author_id],
            author_from_row,
        )
        .optional()?;
    Ok(author)
}

fn author_from_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        author_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}
