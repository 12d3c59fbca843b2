use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid protocol specified: {0} (expected 4 or 6)")]
    InvalidProtocol(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("IRRDB lookup failed: {0}")]
    IrrdbLookupFailed(String),
}
