use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The context was built without a database connection.
    #[error("test context has no database")]
    MissingDatabase,

    /// A session was requested from a context built without `with_session()`.
    #[error("test context was built without a session")]
    MissingSession,

    /// Migrating the session store or writing to the session failed.
    #[error("session error: {0}")]
    Session(String),
}
