use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Session key holding the id of the signed-in guest or administrator.
pub const AUTH_USER_KEY: &str = "auth:user";

/// Days of inactivity before a session expires, as configured on the server.
pub const SESSION_INACTIVITY_DAYS: i64 = 7;

/// In-memory hotel database with an optional session, produced by `TestBuilder::build()`.
///
/// The session store lives in the same SQLite database as the hotel tables, the way the
/// server keeps it, so a test can sign someone in and pass the session to `AuthGuard`.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub(crate) async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db: Some(db),
            session: None,
        })
    }

    fn database(&self) -> Result<&DatabaseConnection, TestError> {
        self.db.as_ref().ok_or(TestError::MissingDatabase)
    }

    /// Runs the CREATE TABLE statements in order; referenced tables must come first.
    pub(crate) async fn create_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database()?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the session table and a fresh session that nobody is signed into yet.
    pub(crate) async fn open_session(&mut self) -> Result<(), TestError> {
        let pool = self.database()?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);

        store
            .migrate()
            .await
            .map_err(|e| TestError::Session(e.to_string()))?;

        self.session = Some(Session::new(
            None,
            Arc::new(store),
            Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
        ));

        Ok(())
    }

    /// Borrows the database and the session together.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both are ready
    /// - `Err(TestError::MissingSession)` - The builder was not asked for `with_session()`
    pub fn db_and_session(&self) -> Result<(&DatabaseConnection, &Session), TestError> {
        let session = self.session.as_ref().ok_or(TestError::MissingSession)?;

        Ok((self.database()?, session))
    }

    /// Marks `user_id` as signed in on the test session.
    ///
    /// The id is written as-is; whether the user exists or is still active is left to the
    /// code under test.
    ///
    /// # Example
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_user_tables().with_session().build().await?;
    /// let session = test.sign_in(guest.id).await?;
    /// ```
    pub async fn sign_in(&self, user_id: i32) -> Result<&Session, TestError> {
        let (_, session) = self.db_and_session()?;

        session
            .insert(AUTH_USER_KEY, user_id)
            .await
            .map_err(|e| TestError::Session(e.to_string()))?;

        Ok(session)
    }
}
