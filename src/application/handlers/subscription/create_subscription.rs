//! CreateSubscriptionHandler - Command handler for recording new subscriptions.

use std::sync::Arc;

use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::SubscriptionFields;

/// Command to create a new subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub fields: SubscriptionFields,
}

/// Handler for creating subscriptions.
pub struct CreateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// Validates the fields, then inserts them.
    ///
    /// Returns the stored subscription including its generated id.
    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<Subscription, SubscriptionError> {
        let details = cmd.fields.into_details()?;
        let id = self.repository.create(&details).await?;

        tracing::debug!(subscription_id = %id, user_id = %details.user_id(), "subscription created");

        Ok(Subscription::new(id, details))
    }
}
