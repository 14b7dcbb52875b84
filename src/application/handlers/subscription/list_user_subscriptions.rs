//! ListUserSubscriptionsHandler - Query handler for one user's subscriptions.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for all subscriptions owned by a user.
#[derive(Debug, Clone)]
pub struct ListUserSubscriptionsQuery {
    pub user_id: String,
}

/// Handler for listing a user's subscriptions.
pub struct ListUserSubscriptionsHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ListUserSubscriptionsHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// A user with no subscriptions yields an empty list, not an error.
    pub async fn handle(
        &self,
        query: ListUserSubscriptionsQuery,
    ) -> Result<Vec<Subscription>, SubscriptionError> {
        let user_id = UserId::new(query.user_id)?;
        Ok(self.repository.find_by_user_id(&user_id).await?)
    }
}
