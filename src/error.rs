use thiserror::Error;

/// Reasons an order request is rejected before any side effect happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ordine vuoto")]
    EmptyOrder,
    #[error("Email cliente mancante")]
    MissingEmail,
    #[error("Nome cliente mancante")]
    MissingName,
    #[error("Prezzo non valido per {0}")]
    InvalidPrice(String),
    #[error("Quantità non valida per {0}")]
    InvalidQuantity(String),
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("Log error: {0}")]
    Log(#[source] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for OrderError {
    fn from(err: rocksdb::Error) -> Self {
        OrderError::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
