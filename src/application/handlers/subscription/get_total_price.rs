//! GetTotalPriceHandler - Query handler for the spending aggregation.

use std::sync::Arc;

use crate::domain::foundation::{UserId, YearMonth};
use crate::domain::subscription::{SpendingQuery, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Raw total-price parameters. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct GetTotalPriceQuery {
    pub user_id: String,
    pub service_name: String,
    pub from: String,
    pub to: String,
}

impl GetTotalPriceQuery {
    fn into_spending_query(self) -> Result<SpendingQuery, SubscriptionError> {
        let required = [
            ("user_id", &self.user_id),
            ("service_name", &self.service_name),
            ("from", &self.from),
            ("to", &self.to),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(SubscriptionError::validation(
                *field,
                format!("missing required parameter '{}'", field),
            ));
        }

        let from = YearMonth::parse("from", &self.from)?;
        let to = YearMonth::parse("to", &self.to)?;

        Ok(SpendingQuery {
            user_id: UserId::new(self.user_id)?,
            service_name: self.service_name,
            from,
            to,
        })
    }
}

/// Handler computing the total cost of a service for a user over a period.
pub struct GetTotalPriceHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl GetTotalPriceHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    /// Returns 0 when nothing matches.
    pub async fn handle(&self, query: GetTotalPriceQuery) -> Result<i64, SubscriptionError> {
        let query = query.into_spending_query()?;
        let total = self.repository.total_price(&query).await?;

        tracing::info!(
            user_id = %query.user_id,
            service_name = %query.service_name,
            from = %query.from,
            to = %query.to,
            total,
            "total price calculated"
        );

        Ok(total)
    }
}
