//! Subscription command and query handlers.

mod create_subscription;
mod delete_subscription;
mod fields;
mod get_total_price;
mod list_subscriptions;
mod list_user_subscriptions;
mod update_subscription;

#[cfg(test)]
mod test_support;

pub use create_subscription::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use delete_subscription::{DeleteSubscriptionCommand, DeleteSubscriptionHandler};
pub use fields::SubscriptionFields;
pub use get_total_price::{GetTotalPriceHandler, GetTotalPriceQuery};
pub use list_subscriptions::ListSubscriptionsHandler;
pub use list_user_subscriptions::{ListUserSubscriptionsHandler, ListUserSubscriptionsQuery};
pub use update_subscription::{UpdateSubscriptionCommand, UpdateSubscriptionHandler};
