//! Wire-format DTOs for the HTTP API.
//!
//! These types define the JSON shapes exchanged with clients, kept separate from the
//! domain models so the wire contract can evolve independently of internal types.

pub mod api;
pub mod student;
