//! In-Memory Subscription Repository
//!
//! Keeps subscriptions in insertion order with sequential ids, mirroring
//! the PostgreSQL adapter's observable behavior. Useful for testing and
//! local development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{SpendingQuery, Subscription, SubscriptionDetails};
use crate::ports::SubscriptionRepository;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Subscription>,
    last_id: i32,
}

/// In-memory storage for subscriptions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemorySubscriptionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored subscriptions
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the repository holds no subscriptions
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn create(&self, details: &SubscriptionDetails) -> Result<SubscriptionId, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = SubscriptionId::new(table.last_id);
        table.rows.push(Subscription::new(id, details.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, DomainError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Subscription>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|s| s.details().user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        match table.rows.iter_mut().find(|s| s.id() == subscription.id()) {
            Some(row) => {
                row.replace_details(subscription.details().clone());
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("No rows updated for subscription {}", subscription.id()),
            )
            .with_detail("subscription_id", subscription.id().to_string())),
        }
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        self.table.write().await.rows.retain(|s| s.id() != id);
        Ok(())
    }

    async fn total_price(&self, query: &SpendingQuery) -> Result<i64, DomainError> {
        let table = self.table.read().await;
        Ok(query.total(table.rows.iter().map(Subscription::details)))
    }
}
