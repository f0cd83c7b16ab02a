//! SQLite storage gateway for bookshelf.
//!
//! Every [`Store`] operation opens its own connection to the database file
//! and releases it before returning. Multi-statement writes run in a single
//! transaction per call.

mod authors;
mod books;
mod error;
mod models;
mod store;

pub use error::{DbError, DbResult};
pub use models::{default_seed, Author, Book};
pub use store::{BootstrapOutcome, Store, AUTHOR_TABLE, BOOKS_TABLE};
