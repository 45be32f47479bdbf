use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{entity} {key:?} rejected: {reason}")]
    Rejected {
        entity: &'static str,
        key: String,
        reason: String,
    },
    #[error("Research center {0} does not exist")]
    MissingCenter(Uuid),
}
