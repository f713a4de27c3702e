// --- File: crates/cartify_orders/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

#[cfg(test)]
mod logic_test;

// Re-export for main backend
pub use error::OrderError; // Re-export the error type
pub use handlers::OrdersState; // For the backend to construct state
pub use routes::routes;
