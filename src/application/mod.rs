//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change the visit board; query handlers read it.

pub mod handlers;

pub use handlers::*;
