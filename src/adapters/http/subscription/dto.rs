//! HTTP DTOs for subscription endpoints.
//!
//! Request fields default when absent so that a missing field surfaces as a
//! 400 validation error with a readable message instead of a framework 422.

use serde::{Deserialize, Serialize};

use crate::application::handlers::subscription::{GetTotalPriceQuery, SubscriptionFields};
use crate::domain::foundation::YearMonth;
use crate::domain::subscription::Subscription;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<SubscriptionRequest> for SubscriptionFields {
    fn from(req: SubscriptionRequest) -> Self {
        Self {
            service_name: req.service_name,
            price: req.price,
            user_id: req.user_id,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Query string of `GET /subscriptions/total`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalPriceParams {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl From<TotalPriceParams> for GetTotalPriceQuery {
    fn from(params: TotalPriceParams) -> Self {
        Self {
            user_id: params.user_id.unwrap_or_default(),
            service_name: params.service_name.unwrap_or_default(),
            from: params.from.unwrap_or_default(),
            to: params.to.unwrap_or_default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored subscription. Months serialize as `YYYY-MM`.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: i32,
    pub service_name: String,
    pub price: i32,
    pub user_id: String,
    pub start_date: YearMonth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<YearMonth>,
}

impl From<&Subscription> for SubscriptionResponse {
    fn from(sub: &Subscription) -> Self {
        let details = sub.details();
        Self {
            id: sub.id().as_i32(),
            service_name: details.service_name().to_string(),
            price: details.price(),
            user_id: details.user_id().to_string(),
            start_date: details.start(),
            end_date: details.end(),
        }
    }
}

/// Acknowledgement for mutations.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl StatusResponse {
    pub fn created(id: i32) -> Self {
        Self {
            status: "created",
            id: Some(id),
        }
    }

    pub fn updated() -> Self {
        Self {
            status: "updated",
            id: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted",
            id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalPriceResponse {
    pub total: i64,
}

/// Error body. Every failure carries exactly one human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SubscriptionId, UserId};
    use crate::domain::subscription::SubscriptionDetails;

    #[test]
    fn request_with_missing_fields_deserializes_to_defaults() {
        let req: SubscriptionRequest = serde_json::from_str(r#"{"service_name":"Netflix"}"#).unwrap();
        assert_eq!(req.service_name, "Netflix");
        assert_eq!(req.price, None);
        assert!(req.start_date.is_empty());
        assert_eq!(req.end_date, None);
    }

    #[test]
    fn response_serializes_months_and_omits_open_end() {
        let details = SubscriptionDetails::new(
            "Netflix".to_string(),
            400,
            UserId::new("u1").unwrap(),
            YearMonth::new(2025, 7).unwrap(),
            None,
        )
        .unwrap();
        let sub = Subscription::new(SubscriptionId::new(3), details);

        let json = serde_json::to_value(SubscriptionResponse::from(&sub)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "service_name": "Netflix",
                "price": 400,
                "user_id": "u1",
                "start_date": "2025-07",
            })
        );
    }

    #[test]
    fn created_status_carries_id() {
        let json = serde_json::to_value(StatusResponse::created(7)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "created", "id": 7}));

        let json = serde_json::to_value(StatusResponse::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "deleted"}));
    }

    #[test]
    fn missing_total_params_become_empty_strings() {
        let query: GetTotalPriceQuery = TotalPriceParams {
            user_id: Some("u1".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(query.user_id, "u1");
        assert!(query.from.is_empty());
    }
}
