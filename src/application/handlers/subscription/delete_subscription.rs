//! DeleteSubscriptionHandler - Command handler for removing subscriptions.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

/// Command to delete a subscription by id.
#[derive(Debug, Clone, Copy)]
pub struct DeleteSubscriptionCommand {
    pub id: SubscriptionId,
}

/// Handler for deleting subscriptions.
///
/// The store treats deleting a missing id as success, so `NotFound` only
/// surfaces if a repository implementation chooses to report it.
pub struct DeleteSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl DeleteSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), SubscriptionError> {
        self.repository.delete(cmd.id).await?;
        tracing::debug!(subscription_id = %cmd.id, "subscription deleted");
        Ok(())
    }
}
