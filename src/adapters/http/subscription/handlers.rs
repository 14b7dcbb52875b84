//! HTTP handlers for subscription endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeleteSubscriptionCommand,
    DeleteSubscriptionHandler, GetTotalPriceHandler, ListSubscriptionsHandler,
    ListUserSubscriptionsHandler, ListUserSubscriptionsQuery, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

use super::dto::{
    ErrorResponse, StatusResponse, SubscriptionRequest, SubscriptionResponse, TotalPriceParams,
    TotalPriceResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SubscriptionHandlers {
    create_handler: Arc<CreateSubscriptionHandler>,
    list_handler: Arc<ListSubscriptionsHandler>,
    list_user_handler: Arc<ListUserSubscriptionsHandler>,
    update_handler: Arc<UpdateSubscriptionHandler>,
    delete_handler: Arc<DeleteSubscriptionHandler>,
    total_handler: Arc<GetTotalPriceHandler>,
}

impl SubscriptionHandlers {
    pub fn new(
        create_handler: Arc<CreateSubscriptionHandler>,
        list_handler: Arc<ListSubscriptionsHandler>,
        list_user_handler: Arc<ListUserSubscriptionsHandler>,
        update_handler: Arc<UpdateSubscriptionHandler>,
        delete_handler: Arc<DeleteSubscriptionHandler>,
        total_handler: Arc<GetTotalPriceHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            list_user_handler,
            update_handler,
            delete_handler,
            total_handler,
        }
    }

    /// Wires every handler to the same repository.
    pub fn from_repository(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self::new(
            Arc::new(CreateSubscriptionHandler::new(repository.clone())),
            Arc::new(ListSubscriptionsHandler::new(repository.clone())),
            Arc::new(ListUserSubscriptionsHandler::new(repository.clone())),
            Arc::new(UpdateSubscriptionHandler::new(repository.clone())),
            Arc::new(DeleteSubscriptionHandler::new(repository.clone())),
            Arc::new(GetTotalPriceHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /subscriptions - Create a subscription
pub async fn create_subscription(
    State(handlers): State<SubscriptionHandlers>,
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<Response, SubscriptionApiError> {
    let Json(req) = payload.map_err(SubscriptionApiError::malformed_body)?;

    let cmd = CreateSubscriptionCommand { fields: req.into() };
    let subscription = handlers
        .create_handler
        .handle(cmd)
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::Create, e))?;

    let response = StatusResponse::created(subscription.id().as_i32());
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// GET /subscriptions - List every subscription
pub async fn list_subscriptions(
    State(handlers): State<SubscriptionHandlers>,
) -> Result<Response, SubscriptionApiError> {
    let subscriptions = handlers
        .list_handler
        .handle()
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::List, e))?;

    let response: Vec<SubscriptionResponse> =
        subscriptions.iter().map(SubscriptionResponse::from).collect();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /subscriptions/:id - List a user's subscriptions
///
/// The path segment is the owning user's id, not a subscription id.
pub async fn list_user_subscriptions(
    State(handlers): State<SubscriptionHandlers>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, SubscriptionApiError> {
    let Path(user_id) =
        path.map_err(|r| SubscriptionApiError::rejected_path(Endpoint::ListByUser, r))?;

    let subscriptions = handlers
        .list_user_handler
        .handle(ListUserSubscriptionsQuery { user_id })
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::ListByUser, e))?;

    let response: Vec<SubscriptionResponse> =
        subscriptions.iter().map(SubscriptionResponse::from).collect();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// PUT /subscriptions/:id - Replace a subscription
pub async fn update_subscription(
    State(handlers): State<SubscriptionHandlers>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<Response, SubscriptionApiError> {
    let Path(raw_id) =
        path.map_err(|r| SubscriptionApiError::rejected_path(Endpoint::Update, r))?;
    let id = parse_id(&raw_id)?;
    let Json(req) = payload.map_err(SubscriptionApiError::malformed_body)?;

    let cmd = UpdateSubscriptionCommand {
        id,
        fields: req.into(),
    };
    handlers
        .update_handler
        .handle(cmd)
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::Update, e))?;

    Ok((StatusCode::OK, Json(StatusResponse::updated())).into_response())
}

/// DELETE /subscriptions/:id - Delete a subscription
pub async fn delete_subscription(
    State(handlers): State<SubscriptionHandlers>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, SubscriptionApiError> {
    let Path(raw_id) =
        path.map_err(|r| SubscriptionApiError::rejected_path(Endpoint::Delete, r))?;
    let id = parse_id(&raw_id)?;

    handlers
        .delete_handler
        .handle(DeleteSubscriptionCommand { id })
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::Delete, e))?;

    Ok((StatusCode::OK, Json(StatusResponse::deleted())).into_response())
}

/// GET /subscriptions/total - Sum a user's spending on one service
pub async fn get_total_price(
    State(handlers): State<SubscriptionHandlers>,
    params: Result<Query<TotalPriceParams>, QueryRejection>,
) -> Result<Response, SubscriptionApiError> {
    let Query(params) =
        params.map_err(|rejection| SubscriptionApiError::BadRequest(rejection.body_text()))?;

    let total = handlers
        .total_handler
        .handle(params.into())
        .await
        .map_err(|e| SubscriptionApiError::new(Endpoint::Total, e))?;

    Ok((StatusCode::OK, Json(TotalPriceResponse { total })).into_response())
}

fn parse_id(raw: &str) -> Result<SubscriptionId, SubscriptionApiError> {
    raw.parse::<SubscriptionId>()
        .map_err(|_| SubscriptionApiError::BadRequest("invalid id".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Which endpoint produced an error; selects status and generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Create,
    List,
    ListByUser,
    Update,
    Delete,
    Total,
}

impl Endpoint {
    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Create => "failed to create subscription",
            Endpoint::List => "failed to list subscriptions",
            Endpoint::ListByUser => "subscription not found",
            Endpoint::Update => "failed to update subscription",
            Endpoint::Delete => "failed to delete subscription",
            Endpoint::Total => "failed to calculate total",
        }
    }
}

/// API error wrapper that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum SubscriptionApiError {
    /// Request could not be decoded before reaching a handler.
    BadRequest(String),
    /// Lookup target could not be resolved.
    NotFound(String),
    /// Application handler failure.
    Handler {
        endpoint: Endpoint,
        error: SubscriptionError,
    },
}

impl SubscriptionApiError {
    pub fn new(endpoint: Endpoint, error: SubscriptionError) -> Self {
        SubscriptionApiError::Handler { endpoint, error }
    }

    fn malformed_body(rejection: JsonRejection) -> Self {
        SubscriptionApiError::BadRequest(rejection.body_text())
    }

    /// An undecodable path segment is an unknown user for the by-user
    /// listing and an invalid id everywhere else.
    fn rejected_path(endpoint: Endpoint, rejection: PathRejection) -> Self {
        tracing::debug!(?endpoint, reason = %rejection.body_text(), "path rejected");
        match endpoint {
            Endpoint::ListByUser => {
                SubscriptionApiError::NotFound(endpoint.failure_message().to_string())
            }
            _ => SubscriptionApiError::BadRequest("invalid id".to_string()),
        }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        let (endpoint, error) = match self {
            SubscriptionApiError::BadRequest(message) => {
                return (StatusCode::BAD_REQUEST, message.clone())
            }
            SubscriptionApiError::NotFound(message) => {
                return (StatusCode::NOT_FOUND, message.clone())
            }
            SubscriptionApiError::Handler { endpoint, error } => (*endpoint, error),
        };

        match (endpoint, error) {
            (_, SubscriptionError::ValidationFailed { message, .. }) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            // Lookup failures of any kind read as "not found" for the by-user listing.
            (Endpoint::ListByUser, _) => (
                StatusCode::NOT_FOUND,
                endpoint.failure_message().to_string(),
            ),
            (Endpoint::Delete, SubscriptionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "subscription not found".to_string())
            }
            // Update reports a missing row the same way as a store failure.
            (_, SubscriptionError::NotFound(_)) | (_, SubscriptionError::Infrastructure(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                endpoint.failure_message().to_string(),
            ),
        }
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            if let SubscriptionApiError::Handler { endpoint, error } = &self {
                tracing::error!(?endpoint, error = %error, "subscription request failed");
            }
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(endpoint: Endpoint, error: SubscriptionError) -> StatusCode {
        SubscriptionApiError::new(endpoint, error).into_response().status()
    }

    #[test]
    fn validation_failure_maps_to_400_everywhere() {
        for endpoint in [Endpoint::Create, Endpoint::Update, Endpoint::Total] {
            let error = SubscriptionError::validation("start_date", "bad month");
            assert_eq!(status_of(endpoint, error), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn store_failure_maps_to_500() {
        let error = SubscriptionError::infrastructure("connection refused");
        assert_eq!(status_of(Endpoint::Create, error), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn update_of_missing_row_maps_to_500() {
        let error = SubscriptionError::not_found(SubscriptionId::new(9));
        assert_eq!(status_of(Endpoint::Update, error), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn delete_not_found_maps_to_404() {
        let error = SubscriptionError::not_found(SubscriptionId::new(9));
        assert_eq!(status_of(Endpoint::Delete, error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn by_user_store_failure_maps_to_404() {
        let error = SubscriptionError::infrastructure("timeout");
        assert_eq!(status_of(Endpoint::ListByUser, error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_errors_hide_internal_details() {
        let error = SubscriptionError::infrastructure("password authentication failed");
        let (_, message) = SubscriptionApiError::new(Endpoint::Total, error).status_and_message();
        assert_eq!(message, "failed to calculate total");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.status_and_message().0, StatusCode::BAD_REQUEST);
        assert_eq!(parse_id("42").unwrap(), SubscriptionId::new(42));
    }
}
