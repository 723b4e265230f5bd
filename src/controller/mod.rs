//! HTTP API controllers for the application.
//!
//! This module contains the axum handler functions that make up the HTTP API. Handlers
//! validate incoming payloads, delegate to the service layer, and wrap every result in
//! the uniform response envelope before it goes out.

pub mod student;
