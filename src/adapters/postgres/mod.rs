//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSubscriptionRepository` - Subscription persistence and aggregation
//! - `connect_pool` - Builds the shared connection pool from configuration

mod pool;
mod subscription_repository;

pub use pool::connect_pool;
pub use subscription_repository::PostgresSubscriptionRepository;
