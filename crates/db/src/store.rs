use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rusqlite::{params, Connection, OptionalExtension};

use crate::authors::upsert_author;
use crate::books::insert_book_row;
use crate::error::DbResult;
use crate::models::Book;

pub const BOOKS_TABLE: &str = "books";
pub const AUTHOR_TABLE: &str = "author";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const AUTHOR_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS author (
        author_id  INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL
    );";

const BOOKS_TABLE_SQL: &str = "
    CREATE TABLE books (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        title  TEXT NOT NULL UNIQUE,
        author INTEGER NOT NULL REFERENCES author(author_id) ON DELETE CASCADE
    );";

/// What [`Store::bootstrap`] did to the database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The books table was created and seeded with this many rows.
    Created { seeded: usize },
    /// The books table already existed; nothing was seeded.
    AlreadyPresent,
}

/// Handle to the single-file relational store.
///
/// Cloning is cheap; the handle only names the file. Connections are opened
/// per operation and dropped on every exit path.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn connect(&self) -> DbResult<Connection> {
        let conn = Connection::open(self.path.as_path())?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Create the schema and seed the books table.
    ///
    /// The author table is created whenever it is missing. The books table is
    /// created and seeded only when absent, so running this against an
    /// existing database leaves its rows untouched.
    pub fn bootstrap(&self, seed: &[Book]) -> DbResult<BootstrapOutcome> {
        let started_at = Instant::now();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute_batch(AUTHOR_TABLE_SQL)?;

        if table_exists(&tx, BOOKS_TABLE)? {
            tx.commit()?;
            tracing::info!(
                path = %self.path.display(),
                duration_ms = started_at.elapsed().as_millis() as u64,
                "books table already present, skipping seed"
            );
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        tx.execute_batch(BOOKS_TABLE_SQL)?;
        for book in seed {
            upsert_author(&tx, &book.author)?;
            insert_book_row(&tx, book)?;
        }
        tx.commit()?;

        tracing::info!(
            path = %self.path.display(),
            seeded = seed.len(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "database bootstrapped"
        );

        Ok(BootstrapOutcome::Created { seeded: seed.len() })
    }
}

fn table_exists(conn: &Connection, name: &str) -> DbResult<bool> {
    let found = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![name],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(found.is_some())
}
