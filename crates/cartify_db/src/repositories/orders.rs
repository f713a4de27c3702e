//! Repository for customer orders
//!
//! This module defines the interface for storing and retrieving orders in
//! the database.

use crate::error::DbError;
use cartify_common::services::BoxFuture;
use uuid::Uuid;

// Re-export Order and OrderProduct from cartify_common for convenience
pub use cartify_common::models::{Order, OrderProduct};

/// Repository for customer orders.
///
/// The trait is object safe so the router can hold it as a trait object and
/// tests can substitute an in-memory fake. All write methods validate the
/// order before touching the store.
pub trait OrderRepository: Send + Sync {
    /// Initialize the database schema.
    ///
    /// Creates the orders table, including the uniqueness constraint on
    /// `order_id`, if it does not already exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Insert a new order.
    fn insert(&self, order: Order) -> BoxFuture<'_, Order, DbError>;

    /// Insert the order, or, when one with the same `order_id` already
    /// exists, update only its status and `updated_at`. The stored row is
    /// returned either way.
    ///
    /// This is a single atomic statement, so two concurrent confirmations
    /// of the same payment intent can never produce two orders.
    fn upsert_by_order_id(&self, order: Order) -> BoxFuture<'_, Order, DbError>;

    /// Find an order by its internal id.
    fn find_by_id(&self, id: Uuid) -> BoxFuture<'_, Option<Order>, DbError>;

    /// Find an order by its payment-intent id.
    fn find_by_order_id<'a>(&'a self, order_id: &'a str)
        -> BoxFuture<'a, Option<Order>, DbError>;

    /// Find all orders placed with the given customer email.
    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Vec<Order>, DbError>;

    /// Find all orders, newest first.
    fn find_all_newest_first(&self) -> BoxFuture<'_, Vec<Order>, DbError>;

    /// Set the status and `updated_at` of an existing order.
    ///
    /// Returns the updated order, or `None` when no order has the given id,
    /// in which case nothing was written.
    fn update_status<'a>(
        &'a self,
        id: Uuid,
        status: &'a str,
    ) -> BoxFuture<'a, Option<Order>, DbError>;

    /// Delete an order by its internal id.
    ///
    /// Returns the order as it existed immediately before deletion, or
    /// `None` when no order has the given id.
    fn delete(&self, id: Uuid) -> BoxFuture<'_, Option<Order>, DbError>;
}
