//! Shared test support for the studentboard workspace.
//!
//! Tests across the workspace need the same two things: a throwaway database
//! with the right tables, and realistic rows to put in it. [`TestBuilder`]
//! covers the first by opening an in-memory SQLite database and creating the
//! schema straight from the entity definitions, so no migration run is needed
//! and nothing leaks between tests. The [`factory`] module covers the second
//! with builders that insert plausible student rows and let a test override
//! only the fields it cares about.
//!
//! A typical data-layer test looks like:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn finds_inserted_row() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_student_table().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::student::create_student(db).await?;
//!     // Query and assert against `student`...
//!
//!     Ok(())
//! }
//! ```
//!
//! [`TestBuilder`]: builder::TestBuilder

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
