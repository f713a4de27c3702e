//! Repository modules for database access
//!
//! This module contains repository traits and implementations for different
//! database entities.

pub mod orders;
pub mod orders_sql;
#[cfg(test)]
mod orders_sql_test;

// Re-export the order repository for ease of use
pub use orders::{Order, OrderProduct, OrderRepository};
pub use orders_sql::SqlOrderRepository;
