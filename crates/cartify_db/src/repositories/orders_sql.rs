//! SQL implementation of the order repository
//!
//! This module provides a SQL implementation of the OrderRepository trait
//! on top of the database-agnostic client.

use crate::error::DbError;
use crate::repositories::orders::{Order, OrderRepository};
use crate::DbClient;
use cartify_common::services::BoxFuture;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};
use uuid::Uuid;

/// SQL implementation of the order repository
#[derive(Debug, Clone)]
pub struct SqlOrderRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlOrderRepository {
    /// Create a new SQL order repository.
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

/// Encode a timestamp as fixed-width RFC3339 text (UTC, microseconds).
///
/// The fixed width keeps lexicographic comparison equal to chronological
/// comparison, which `find_all_newest_first` relies on for its ORDER BY.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::QueryError(format!("invalid timestamp column: {}", e)))
}

/// Map a database row onto an [`Order`].
///
/// The `products` column holds the product lines as a JSON document; the
/// timestamps are RFC3339 text. The DateTime columns are not decoded through
/// sqlx because DateTime<Utc> does not implement Decode for sqlx::Any.
fn order_from_row(row: &AnyRow) -> Result<Order, DbError> {
    let id: String = row.try_get("id")?;
    let order_id: String = row.try_get("order_id")?;
    let products_json: String = row.try_get("products")?;
    let amount: f64 = row.try_get("amount")?;
    let email: String = row.try_get("email")?;
    let status: String = row.try_get("status")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Order {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::QueryError(format!("invalid id column: {}", e)))?,
        order_id,
        products: serde_json::from_str(&products_json)
            .map_err(|e| DbError::QueryError(format!("invalid products column: {}", e)))?,
        amount,
        email,
        status,
        created_at: decode_timestamp(&created_at)?,
        updated_at: decode_timestamp(&updated_at)?,
    })
}

impl OrderRepository for SqlOrderRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing orders schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS orders (
                    id TEXT PRIMARY KEY,
                    order_id TEXT NOT NULL,
                    products TEXT NOT NULL,
                    amount DOUBLE PRECISION NOT NULL,
                    email TEXT NOT NULL,
                    status TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    UNIQUE(order_id)
                )
            "#;

            self.db_client.execute(query).await?;

            info!("Orders schema initialized successfully");
            Ok(())
        })
    }

    fn insert(&self, order: Order) -> BoxFuture<'_, Order, DbError> {
        Box::pin(async move {
            debug!("Inserting order for payment intent: {}", order.order_id);

            order
                .validate()
                .map_err(|e| DbError::ValidationError(e.to_string()))?;

            let products_json = serde_json::to_string(&order.products)
                .map_err(|e| DbError::QueryError(format!("failed to encode products: {}", e)))?;

            let query = r#"
                INSERT INTO orders (id, order_id, products, amount, email, status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, order_id, products, amount, email, status, created_at, updated_at
            "#;

            let row = sqlx::query(query)
                .bind(order.id.to_string())
                .bind(&order.order_id)
                .bind(&products_json)
                .bind(order.amount)
                .bind(&order.email)
                .bind(&order.status)
                .bind(encode_timestamp(&order.created_at))
                .bind(encode_timestamp(&order.updated_at))
                .fetch_one(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to insert order: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            let inserted = order_from_row(&row)?;
            info!("Order {} inserted successfully", inserted.id);
            Ok(inserted)
        })
    }

    fn upsert_by_order_id(&self, order: Order) -> BoxFuture<'_, Order, DbError> {
        Box::pin(async move {
            debug!("Upserting order for payment intent: {}", order.order_id);

            order
                .validate()
                .map_err(|e| DbError::ValidationError(e.to_string()))?;

            let products_json = serde_json::to_string(&order.products)
                .map_err(|e| DbError::QueryError(format!("failed to encode products: {}", e)))?;

            // On conflict only status and updated_at change; the original
            // row keeps its id, products, amount, email and created_at.
            let query = r#"
                INSERT INTO orders (id, order_id, products, amount, email, status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT(order_id) DO UPDATE
                SET status = excluded.status, updated_at = excluded.updated_at
                RETURNING id, order_id, products, amount, email, status, created_at, updated_at
            "#;

            let row = sqlx::query(query)
                .bind(order.id.to_string())
                .bind(&order.order_id)
                .bind(&products_json)
                .bind(order.amount)
                .bind(&order.email)
                .bind(&order.status)
                .bind(encode_timestamp(&order.created_at))
                .bind(encode_timestamp(&order.updated_at))
                .fetch_one(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to upsert order: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            let stored = order_from_row(&row)?;
            info!(
                "Order {} upserted successfully (status: {})",
                stored.id, stored.status
            );
            Ok(stored)
        })
    }

    fn find_by_id(&self, id: Uuid) -> BoxFuture<'_, Option<Order>, DbError> {
        Box::pin(async move {
            debug!("Finding order by id: {}", id);

            let query = r#"
                SELECT id, order_id, products, amount, email, status, created_at, updated_at
                FROM orders
                WHERE id = $1
            "#;

            let result = sqlx::query(query)
                .bind(id.to_string())
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find order by id: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.as_ref().map(order_from_row).transpose()
        })
    }

    fn find_by_order_id<'a>(
        &'a self,
        order_id: &'a str,
    ) -> BoxFuture<'a, Option<Order>, DbError> {
        Box::pin(async move {
            debug!("Finding order by payment intent: {}", order_id);

            let query = r#"
                SELECT id, order_id, products, amount, email, status, created_at, updated_at
                FROM orders
                WHERE order_id = $1
            "#;

            let result = sqlx::query(query)
                .bind(order_id)
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find order by payment intent: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.as_ref().map(order_from_row).transpose()
        })
    }

    fn find_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Vec<Order>, DbError> {
        Box::pin(async move {
            debug!("Finding orders for email: {}", email);

            let query = r#"
                SELECT id, order_id, products, amount, email, status, created_at, updated_at
                FROM orders
                WHERE email = $1
            "#;

            let rows = sqlx::query(query)
                .bind(email)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find orders by email: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            rows.iter().map(order_from_row).collect()
        })
    }

    fn find_all_newest_first(&self) -> BoxFuture<'_, Vec<Order>, DbError> {
        Box::pin(async move {
            debug!("Finding all orders, newest first");

            let query = r#"
                SELECT id, order_id, products, amount, email, status, created_at, updated_at
                FROM orders
                ORDER BY created_at DESC
            "#;

            let rows = sqlx::query(query)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find orders: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            rows.iter().map(order_from_row).collect()
        })
    }

    fn update_status<'a>(
        &'a self,
        id: Uuid,
        status: &'a str,
    ) -> BoxFuture<'a, Option<Order>, DbError> {
        Box::pin(async move {
            debug!("Updating status of order {} to '{}'", id, status);

            if status.is_empty() {
                return Err(DbError::ValidationError(
                    "status must not be empty".to_string(),
                ));
            }

            let query = r#"
                UPDATE orders
                SET status = $1, updated_at = $2
                WHERE id = $3
                RETURNING id, order_id, products, amount, email, status, created_at, updated_at
            "#;

            let result = sqlx::query(query)
                .bind(status)
                .bind(encode_timestamp(&Utc::now()))
                .bind(id.to_string())
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to update order status: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.as_ref().map(order_from_row).transpose()
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'_, Option<Order>, DbError> {
        Box::pin(async move {
            debug!("Deleting order: {}", id);

            let query = r#"
                DELETE FROM orders
                WHERE id = $1
                RETURNING id, order_id, products, amount, email, status, created_at, updated_at
            "#;

            let result = sqlx::query(query)
                .bind(id.to_string())
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to delete order: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.as_ref().map(order_from_row).transpose()
        })
    }
}
