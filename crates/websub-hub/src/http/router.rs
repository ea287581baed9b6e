//! HTTP routes of the hub.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::{HubError, LimitsConfig};
use crate::ports::HubApi;

use super::binding::SubscriptionForm;

/// Body text of a successful subscription.
pub const SUBSCRIPTION_ADDED: &str = "Subscription added";
/// Body text of a successful publish.
pub const POSTED_TO_SUBSCRIBERS: &str = "Posted to subscribers";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<dyn HubApi>,
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Build the hub router over any `HubApi` implementation.
pub fn build_router(hub: Arc<dyn HubApi>, limits: &LimitsConfig) -> Router {
    Router::new()
        .route("/", post(handle_subscribe))
        .route("/publish", post(handle_publish))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(DefaultBodyLimit::max(limits.max_payload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { hub })
}

async fn handle_subscribe(
    State(state): State<AppState>,
    SubscriptionForm(intent): SubscriptionForm,
) -> Response {
    debug!(callback = %intent.callback, "Subscription request");

    match state.hub.subscribe(intent).await {
        Ok(_) => (StatusCode::OK, SUBSCRIPTION_ADDED).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_publish(State(state): State<AppState>, body: Bytes) -> Response {
    debug!(payload_len = body.len(), "Publish request");

    match state.hub.publish(body).await {
        Ok(_) => (StatusCode::OK, POSTED_TO_SUBSCRIBERS).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "websub-hub",
        "version": env!("CARGO_PKG_VERSION"),
        "subscribed": state.hub.current_subscriber().is_some(),
    }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.hub.metrics())
}
