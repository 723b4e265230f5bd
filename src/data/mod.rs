//! Database repository layer.
//!
//! Repositories own every query, insert, update, and delete the application
//! performs. They work directly on SeaORM entity models and hand those to the
//! service layer, which converts them into domain models at the boundary.

pub mod student;
