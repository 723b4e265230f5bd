use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for assembling test contexts with the tables a test needs.
///
/// Every call to `with_table()` queues a CREATE TABLE statement derived from a
/// SeaORM entity; `build()` opens an in-memory SQLite database and runs them
/// all. The resulting schema matches what the real migrations produce, minus
/// anything the test did not ask for.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Student;
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements queued for execution during `build()`.
    ///
    /// Statements run in the order they were added, so tables referencing
    /// other tables must come after the tables they reference.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables queued.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty schema
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table for the given entity.
    ///
    /// The CREATE TABLE statement is derived from the entity definition using
    /// SQLite syntax and executed later by `build()`.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity whose table the test needs
    ///
    /// # Returns
    /// - `Self` - The builder, for further chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues the students table.
    ///
    /// Shorthand for `with_table(Student)`. The generated schema carries the
    /// same UNIQUE constraint on the student number column as the real
    /// migration, so uniqueness behavior can be exercised against the
    /// in-memory database.
    ///
    /// # Returns
    /// - `Self` - The builder, for further chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_student_table()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_student_table(self) -> Self {
        self.with_table(Student)
    }

    /// Opens the in-memory database and creates every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the ready database connection
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
