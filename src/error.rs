use thiserror::Error;

/// User-facing validation failures. All of these are recoverable; the
/// caller surfaces a message and the session keeps running.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("unknown menu item: {0}")]
    UnknownItem(String),

    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("cannot finalize an empty bill")]
    EmptyBill,
}

/// Storage adapter failures. These never leave the persistence boundary:
/// the session logs them and continues on its in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage lock poisoned")]
    LockPoisoned,
}
