//! Database connection pool initialization.
//!
//! The pool is created once at startup from the `DATABASE_URL` environment
//! variable and shared by every request handler. A connection failure here
//! is the one fatal error in the system: the process exits immediately and
//! leaves the restart to its supervisor.

use sqlx::PgPool;
use std::env;

/// Initializes the process-wide PostgreSQL connection pool.
///
/// # Panics
///
/// Panics (terminating the process) if `DATABASE_URL` is not set or the
/// database cannot be reached.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
