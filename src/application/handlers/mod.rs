//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod subscription;

pub use subscription::{
    // Commands
    CreateSubscriptionCommand, DeleteSubscriptionCommand, UpdateSubscriptionCommand,
    // Queries
    GetTotalPriceQuery, ListUserSubscriptionsQuery,
    // Handlers
    CreateSubscriptionHandler, DeleteSubscriptionHandler, GetTotalPriceHandler,
    ListSubscriptionsHandler, ListUserSubscriptionsHandler, UpdateSubscriptionHandler,
    // Input
    SubscriptionFields,
};
