//! Factories that insert plausible test rows.
//!
//! A factory fills every column with a sensible default and hands back the
//! inserted model, so a test only spells out the fields its assertion depends
//! on. Identifying fields come from a shared counter (see [`helpers`]) and
//! stay unique across however many rows one test creates.
//!
//! The quickest path is the convenience function:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::student::create_student(&db).await?;
//! ```
//!
//! When a test needs specific values, the builder form overrides just those:
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("张三")
//!     .student_number("20210001")
//!     .major("软件工程")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

// Re-export the common entry points for shorter call sites
pub use student::{create_student, create_student_with_number};
