//! In-memory adapters for testing and local development.

mod subscription_repository;

pub use subscription_repository::InMemorySubscriptionRepository;
