//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST surface
//! - `memory` - in-memory repository for tests and local runs
//! - `postgres` - sqlx-backed repository

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemorySubscriptionRepository;
pub use postgres::{connect_pool, PostgresSubscriptionRepository};
