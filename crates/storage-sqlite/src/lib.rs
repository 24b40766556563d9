//! SQLite storage implementation for the IPO tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `ipotracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The repository implementation for IPO records
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The `core` crate is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod ipos;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export the repository
pub use ipos::IpoRepository;

// Re-export from ipotracker-core for convenience
pub use ipotracker_core::errors::{DatabaseError, Error, Result};
