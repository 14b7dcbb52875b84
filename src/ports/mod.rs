//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubscriptionRepository` - Persistence and aggregation of subscriptions

mod subscription_repository;

pub use subscription_repository::SubscriptionRepository;
