//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the subscriptions domain.

mod errors;
mod ids;
mod year_month;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SubscriptionId, UserId};
pub use year_month::{YearMonth, YEAR_MONTH_FORMAT};
