//! Service layer for business rules and orchestration.
//!
//! Services sit between the controllers and the repositories. They own the
//! rules that span more than one query, such as keeping student numbers
//! unique, and they speak in domain models rather than DTOs or entity models.

pub mod student;
