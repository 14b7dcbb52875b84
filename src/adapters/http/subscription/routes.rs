//! HTTP routes for subscription endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_subscription, delete_subscription, get_total_price, list_subscriptions,
    list_user_subscriptions, update_subscription, SubscriptionHandlers,
};

/// Creates the subscription router.
///
/// # Routes
/// - `POST /subscriptions` - Create a subscription
/// - `GET /subscriptions` - List every subscription
/// - `GET /subscriptions/total` - Total spending for a user and service
/// - `GET /subscriptions/:id` - List subscriptions of user `:id`
/// - `PUT /subscriptions/:id` - Replace subscription `:id`
/// - `DELETE /subscriptions/:id` - Delete subscription `:id`
pub fn subscription_routes(handlers: SubscriptionHandlers) -> Router {
    Router::new()
        .route("/subscriptions", post(create_subscription).get(list_subscriptions))
        .route("/subscriptions/total", get(get_total_price))
        .route(
            "/subscriptions/:id",
            get(list_user_subscriptions)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repo = Arc::new(InMemorySubscriptionRepository::new());
        subscription_routes(SubscriptionHandlers::from_repository(repo))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn total_route_is_not_captured_by_id_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/subscriptions/total?user_id=u1&service_name=Netflix&from=2025-01&to=2025-12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"total": 0}));
    }

    #[tokio::test]
    async fn create_returns_201_with_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/subscriptions")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"service_name":"Yandex Plus","price":400,"user_id":"u1","start_date":"2025-07"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "created", "id": 1})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_400_with_error_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/subscriptions")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn delete_with_non_numeric_id_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/subscriptions/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, serde_json::json!({"error": "invalid id"}));
    }
}
