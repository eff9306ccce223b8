//! Configuration modules, loaded from environment variables.
//!
//! - [`cors`]: CORS allowed-origins configuration
//! - [`database`]: PostgreSQL connection pool initialization and migrations

pub mod cors;
pub mod database;
