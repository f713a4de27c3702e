//! Database integration for Cartify
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library, plus the order repository
//! built on top of it. It supports SQLite, PostgreSQL, and MySQL databases
//! through feature flags.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Cartify configuration system
//! - Support for SQLite, PostgreSQL, and MySQL
//!
//! # Example
//!
//! ```rust,no_run
//! use cartify_db::{DbClient, OrderRepository, SqlOrderRepository};
//!
//! async fn setup_orders() -> Result<SqlOrderRepository, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite:data/orders.db").await?;
//!     let repo = SqlOrderRepository::new(db_client);
//!     repo.init_schema().await?;
//!     Ok(repo)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

// Register the SQLite driver when the crate is loaded
#[cfg(feature = "sqlite")]
mod sqlite_driver {
    // This import ensures the SQLite driver is linked and registered
    #[allow(unused_imports)]
    use sqlx::sqlite::SqlitePoolOptions as _;
}

// Re-export the client and error type for ease of use
pub use client::DbClient;
pub use error::DbError;

// Re-export the repositories module components for ease of use
pub use repositories::{Order, OrderProduct, OrderRepository, SqlOrderRepository};
