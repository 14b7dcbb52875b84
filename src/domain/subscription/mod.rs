//! Subscription domain module.
//!
//! A subscription ties a user to a paid service over a range of months.
//! The module also owns the spending aggregation rule used by the
//! total-price endpoint.

mod aggregate;
mod errors;
mod spending;

pub use aggregate::{Subscription, SubscriptionDetails};
pub use errors::SubscriptionError;
pub use spending::SpendingQuery;
