use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures raised by a record store while reading or writing orders.
///
/// Backend errors are kept as-is so callers can inspect the original cause.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
    #[error("Order {id} has unknown status '{value}'")]
    UnknownStatus { id: String, value: String },
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
