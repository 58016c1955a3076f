//! Configuration modules for the Aviobook API.
//!
//! Each submodule owns one aspect of configuration, loaded from environment
//! variables (a `.env` file is read at startup):
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`firebase`]: identity provider (Firebase Auth) settings
//! - [`cors`]: allowed cross-origin request origins

pub mod cors;
pub mod database;
pub mod firebase;
