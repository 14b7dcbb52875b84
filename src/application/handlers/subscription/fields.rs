//! Raw subscription fields as received from a client.

use crate::domain::foundation::{UserId, ValidationError, YearMonth};
use crate::domain::subscription::{SubscriptionDetails, SubscriptionError};

/// Unvalidated subscription fields shared by create and update.
///
/// Missing text fields arrive as empty strings; a missing price as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFields {
    pub service_name: String,
    pub price: Option<i32>,
    pub user_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl SubscriptionFields {
    /// Checks presence, parses the months, and applies domain invariants.
    ///
    /// An empty `end_date` is treated as absent.
    pub fn into_details(self) -> Result<SubscriptionDetails, SubscriptionError> {
        if self.service_name.trim().is_empty() {
            return Err(ValidationError::empty_field("service_name").into());
        }
        let price = self
            .price
            .ok_or_else(|| ValidationError::empty_field("price"))?;
        let user_id = UserId::new(self.user_id)?;
        if self.start_date.is_empty() {
            return Err(ValidationError::empty_field("start_date").into());
        }

        let start = YearMonth::parse("start_date", &self.start_date)?;
        let end = match self.end_date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(YearMonth::parse("end_date", raw)?),
        };

        Ok(SubscriptionDetails::new(
            self.service_name,
            price,
            user_id,
            start,
            end,
        )?)
    }
}
