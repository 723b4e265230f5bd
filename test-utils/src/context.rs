use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment holding the database a test runs against.
///
/// Wraps an in-memory SQLite connection that lives exactly as long as the
/// context does. Dropping the context drops the connection and with it the
/// whole database, which is what keeps tests isolated from each other.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance.
    ///
    /// `None` until `database()` is first called; the `Option` defers the
    /// connection until a test actually needs one.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context without a database connection.
    ///
    /// The connection is opened lazily by `database()`.
    ///
    /// # Returns
    /// - Fresh `TestContext` with nothing opened yet
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the in-memory database, opening it on first use.
    ///
    /// Later calls hand back the same connection, so every query in a test
    /// sees the same database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The live in-memory connection
    /// - `Err(TestError::Database)` - Could not open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Hand back an immutable borrow
            }
        }
    }

    /// Runs the given CREATE TABLE statements against the database.
    ///
    /// Statements execute in order. Usually called through
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - Every table was created
    /// - `Err(TestError::Database)` - Opening the database or one of the
    ///   statements failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
