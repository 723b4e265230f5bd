//! Domain models and operation parameter types.
//!
//! The types here are what the service layer thinks in: validated student
//! data, query parameters, and page results. Entity models convert into them
//! at the repository boundary and they convert into DTOs at the controller
//! boundary, keeping database and wire concerns out of the business rules.

pub mod student;
