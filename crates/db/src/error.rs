use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

/// Storage gateway failures.
///
/// Absence of a row is reported as `Option::None` by most lookups; only
/// operations that must return an entity fail with `NotFound`.
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl DbError {
    pub(crate) fn author_not_found(author_id: i64) -> Self {
        Self::NotFound {
            entity: "author",
            id: author_id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
