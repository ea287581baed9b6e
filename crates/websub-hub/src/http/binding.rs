//! Binding of subscription requests.
//!
//! JSON bodies go through `Json`, everything else through `Form`. Any
//! rejection becomes the same 500 the subscription endpoint uses for every
//! other failure.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::warn;

use crate::domain::SubscriptionIntent;

/// Body text when a subscription request cannot be bound.
pub const BINDING_FAILED: &str = "Failed processing request";

/// Extractor for [`SubscriptionIntent`] from form or JSON bodies.
#[derive(Debug)]
pub struct SubscriptionForm(pub SubscriptionIntent);

/// Rejection of [`SubscriptionForm`]
#[derive(Debug)]
pub struct BindingRejection {
    reason: String,
}

impl IntoResponse for BindingRejection {
    fn into_response(self) -> Response {
        warn!(reason = %self.reason, "Failed processing subscription request");
        (StatusCode::INTERNAL_SERVER_ERROR, BINDING_FAILED).into_response()
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for SubscriptionForm
where
    S: Send + Sync,
{
    type Rejection = BindingRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let intent = if has_json_content_type(req.headers()) {
            Json::<SubscriptionIntent>::from_request(req, state)
                .await
                .map(|Json(intent)| intent)
                .map_err(|rejection| BindingRejection {
                    reason: rejection.body_text(),
                })?
        } else {
            Form::<SubscriptionIntent>::from_request(req, state)
                .await
                .map(|Form(intent)| intent)
                .map_err(|rejection| BindingRejection {
                    reason: rejection.body_text(),
                })?
        };

        Ok(Self(intent))
    }
}
