use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema creation failure.
    ///
    /// Raised when the in-memory SQLite database cannot be opened or one of the
    /// configured CREATE TABLE statements fails to execute.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
