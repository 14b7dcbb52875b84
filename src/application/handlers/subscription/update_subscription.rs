//! UpdateSubscriptionHandler - Command handler for full-record replacement.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::SubscriptionFields;

/// Command to replace every mutable field of a subscription.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub id: SubscriptionId,
    pub fields: SubscriptionFields,
}

/// Handler for updating subscriptions.
pub struct UpdateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` for bad fields, before any store call
    /// - `NotFound` when the store updated zero rows
    /// - `Infrastructure` for any other store failure
    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
    ) -> Result<Subscription, SubscriptionError> {
        let details = cmd.fields.into_details()?;
        let subscription = Subscription::new(cmd.id, details);

        self.repository.update(&subscription).await?;

        Ok(subscription)
    }
}
