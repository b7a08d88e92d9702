use rusqlite::ErrorCode;
use thiserror::Error;

/// Failure of a store operation, classified by how a caller should react.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or is temporarily busy. Safe to retry.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// An integrity rule of the schema rejected the statement.
    #[error("constraint violated: {0}")]
    Constraint(String),
    /// A query that must yield a row yielded none.
    #[error("no data: {0}")]
    NoData(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Swiss pairing needs an even number of players.
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
    #[error("{0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        let message = format!("{err:#}");

        for cause in err.chain() {
            if let Some(sqlite_err) = cause.downcast_ref::<rusqlite::Error>() {
                return classify_sqlite(sqlite_err, message);
            }
            if cause.downcast_ref::<r2d2::Error>().is_some() {
                return StoreError::Unavailable(message);
            }
        }

        StoreError::Other(message)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let message = err.to_string();
        classify_sqlite(&err, message)
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

fn classify_sqlite(err: &rusqlite::Error, message: String) -> StoreError {
    if matches!(err, rusqlite::Error::QueryReturnedNoRows) {
        return StoreError::NoData(message);
    }

    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => StoreError::Constraint(message),
        Some(
            ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::CannotOpen
            | ErrorCode::SystemIoFailure
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied,
        ) => StoreError::Unavailable(message),
        _ => StoreError::Other(message),
    }
}
