use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::authors::upsert_author;
use crate::error::DbResult;
use crate::models::{Author, Book};
use crate::store::Store;

/// Book columns joined with the owning author's names.
///
/// A book whose author row is missing keeps its stored reference and gets
/// empty names; a non-numeric reference reads as author 0.
const BOOK_SELECT_SQL: &str = "
    SELECT b.id, b.title,
           COALESCE(a.author_id, CAST(b.author AS INTEGER), 0),
           COALESCE(a.first_name, ''),
           COALESCE(a.last_name, '')
    FROM books b
    LEFT JOIN author a ON a.author_id = b.author";

impl Store {
    /// Every book, ordered by id.
    pub fn list_books(&self) -> DbResult<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} ORDER BY b.id"))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<Book>>>()?;

        tracing::debug!(count = books.len(), "listed books");
        Ok(books)
    }

    /// Insert the title and author reference, returning the book with its
    /// assigned id. The referenced author row must already exist.
    pub fn insert_book(&self, book: &Book) -> DbResult<Book> {
        let conn = self.connect()?;
        let id = insert_book_row(&conn, book)?;

        tracing::debug!(book_id = id, author_id = book.author.author_id, "inserted book");
        Ok(book.clone().with_id(id))
    }

    /// Store the book's author (upsert) and then the book, in one
    /// transaction. A failed book insert leaves the author table untouched.
    pub fn insert_book_with_author(&self, book: &Book) -> DbResult<Book> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        upsert_author(&tx, &book.author)?;
        let id = insert_book_row(&tx, book)?;
        tx.commit()?;

        tracing::debug!(
            book_id = id,
            author_id = book.author.author_id,
            "inserted book with author"
        );
        Ok(book.clone().with_id(id))
    }

    pub fn get_book_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let conn = self.connect()?;
        select_book_by_id(&conn, id)
    }

    pub fn get_book_by_title(&self, title: &str) -> DbResult<Option<Book>> {
        let conn = self.connect()?;
        let book = conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE b.title = ?1"),
                params![title],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    /// Overwrite title and author reference of book `id`.
    ///
    /// Returns `false` without error when no such book exists.
    pub fn update_book_by_id(&self, book: &Book, id: i64) -> DbResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![book.title, book.author.author_id, id],
        )?;

        tracing::debug!(book_id = id, changed, "updated book");
        Ok(changed > 0)
    }

    /// Upsert the author and overwrite book `id` in one transaction.
    ///
    /// Returns `false` and writes nothing, author included, when no such
    /// book exists.
    pub fn update_book_with_author(&self, book: &Book, id: i64) -> DbResult<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM books WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            tracing::debug!(book_id = id, "update skipped, no such book");
            return Ok(false);
        }

        upsert_author(&tx, &book.author)?;
        tx.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![book.title, book.author.author_id, id],
        )?;
        tx.commit()?;

        tracing::debug!(
            book_id = id,
            author_id = book.author.author_id,
            "updated book with author"
        );
        Ok(true)
    }

    /// Delete book `id`, returning the row as it was before deletion.
    pub fn delete_book_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let Some(book) = select_book_by_id(&tx, id)? else {
            return Ok(None);
        };
        tx.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        tx.commit()?;

        tracing::debug!(book_id = id, "deleted book");
        Ok(Some(book))
    }

    /// Books written by `author_id`, ordered by book id.
    pub fn get_books_by_author(&self, author_id: i64) -> DbResult<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{BOOK_SELECT_SQL} WHERE b.author = ?1 ORDER BY b.id"
        ))?;
        let books = stmt
            .query_map(params![author_id], book_from_row)?
            .collect::<rusqlite::Result<Vec<Book>>>()?;
        Ok(books)
    }
}

pub(crate) fn insert_book_row(conn: &Connection, book: &Book) -> DbResult<i64> {
    conn.execute(
        "INSERT INTO books (title, author) VALUES (?1, ?2)",
        params![book.title, book.author.author_id],
    )?;
    Ok(conn.last_insert_rowid())
}

fn select_book_by_id(conn: &Connection, id: i64) -> DbResult<Option<Book>> {
    let book = conn
        .query_row(
            &format!("{BOOK_SELECT_SQL} WHERE b.id = ?1"),
            params![id],
            book_from_row,
        )
        .optional()?;
    Ok(book)
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        author: Author {
            author_id: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
        },
    })
}
