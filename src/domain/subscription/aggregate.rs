//! Subscription aggregate entity.
//!
//! A subscription records that a user pays a fixed monthly price for a
//! service over a range of months. The range is open-ended when no end
//! month is set.

use crate::domain::foundation::{SubscriptionId, UserId, ValidationError, YearMonth};

/// The replaceable fields of a subscription.
///
/// # Invariants
///
/// - `service_name` is non-blank
/// - `price` is positive
/// - `end`, when present, is not earlier than `start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDetails {
    service_name: String,
    price: i32,
    user_id: UserId,
    start: YearMonth,
    end: Option<YearMonth>,
}

impl SubscriptionDetails {
    /// Validates and assembles subscription fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the service name is blank
    /// - `NotPositive` if the price is zero or negative
    /// - `EndBeforeStart` if the end month precedes the start month
    pub fn new(
        service_name: String,
        price: i32,
        user_id: UserId,
        start: YearMonth,
        end: Option<YearMonth>,
    ) -> Result<Self, ValidationError> {
        if service_name.trim().is_empty() {
            return Err(ValidationError::empty_field("service_name"));
        }
        if price <= 0 {
            return Err(ValidationError::not_positive("price", i64::from(price)));
        }
        if let Some(end) = end {
            if end < start {
                return Err(ValidationError::end_before_start(start, end));
            }
        }

        Ok(Self {
            service_name,
            price,
            user_id,
            start,
            end,
        })
    }

    /// Reconstitute details from persistence (no validation).
    pub fn reconstitute(
        service_name: String,
        price: i32,
        user_id: UserId,
        start: YearMonth,
        end: Option<YearMonth>,
    ) -> Self {
        Self {
            service_name,
            price,
            user_id,
            start,
            end,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> Option<YearMonth> {
        self.end
    }

    /// Price multiplied by the inclusive number of active months.
    ///
    /// `None` for open-ended subscriptions.
    pub fn billed_amount(&self) -> Option<i64> {
        self.end
            .map(|end| i64::from(self.price) * self.start.months_through(&end))
    }
}

/// A persisted subscription: store-assigned id plus its details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
    details: SubscriptionDetails,
}

impl Subscription {
    pub fn new(id: SubscriptionId, details: SubscriptionDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn details(&self) -> &SubscriptionDetails {
        &self.details
    }

    /// Replaces every mutable field, keeping the id.
    pub fn replace_details(&mut self, details: SubscriptionDetails) {
        self.details = details;
    }
}
