//! HTTP adapter for subscription endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, StatusResponse, SubscriptionRequest, SubscriptionResponse, TotalPriceParams,
    TotalPriceResponse,
};
pub use handlers::{Endpoint, SubscriptionApiError, SubscriptionHandlers};
pub use routes::subscription_routes;
