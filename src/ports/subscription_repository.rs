//! Subscription repository port.
//!
//! Defines the contract for persisting and querying subscriptions.
//! Implementations translate each call into a single store round trip
//! and enforce no business rules beyond what the store expresses.

use crate::domain::foundation::{DomainError, SubscriptionId, UserId};
use crate::domain::subscription::{SpendingQuery, Subscription, SubscriptionDetails};
use async_trait::async_trait;

/// Repository port for subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a new subscription and return the store-assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, details: &SubscriptionDetails) -> Result<SubscriptionId, DomainError>;

    /// Every stored subscription, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Subscription>, DomainError>;

    /// All subscriptions whose `user_id` matches exactly.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Subscription>, DomainError>;

    /// Replace every mutable field of the subscription with the same id.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if no row was updated, with a
    ///   `subscription_id` detail
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Remove the subscription with this id.
    ///
    /// Deleting an id that does not exist succeeds.
    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError>;

    /// Sum of `price * months_active` over subscriptions matching the query.
    ///
    /// Returns 0 when nothing matches.
    async fn total_price(&self, query: &SpendingQuery) -> Result<i64, DomainError>;
}
