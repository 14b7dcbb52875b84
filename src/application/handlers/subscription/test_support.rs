//! Repository doubles shared by the handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId, YearMonth};
use crate::domain::subscription::{SpendingQuery, Subscription, SubscriptionDetails};
use crate::ports::SubscriptionRepository;

use super::SubscriptionFields;

/// Fails every call with a database error and counts how often it was hit.
#[derive(Default)]
pub struct FailingRepository {
    calls: AtomicUsize,
}

impl FailingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::new(
            ErrorCode::DatabaseError,
            "Simulated store failure",
        ))
    }
}

#[async_trait]
impl SubscriptionRepository for FailingRepository {
    async fn create(&self, _details: &SubscriptionDetails) -> Result<SubscriptionId, DomainError> {
        self.fail()
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, DomainError> {
        self.fail()
    }

    async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Subscription>, DomainError> {
        self.fail()
    }

    async fn update(&self, _subscription: &Subscription) -> Result<(), DomainError> {
        self.fail()
    }

    async fn delete(&self, _id: SubscriptionId) -> Result<(), DomainError> {
        self.fail()
    }

    async fn total_price(&self, _query: &SpendingQuery) -> Result<i64, DomainError> {
        self.fail()
    }
}

pub fn fields(service: &str, user: &str, start: &str, end: Option<&str>) -> SubscriptionFields {
    SubscriptionFields {
        service_name: service.to_string(),
        price: Some(100),
        user_id: user.to_string(),
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
    }
}

pub fn month(raw: &str) -> YearMonth {
    YearMonth::parse("test", raw).unwrap()
}
