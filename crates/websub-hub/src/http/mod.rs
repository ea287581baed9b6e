//! HTTP Layer
//!
//! Inbound adapter: axum routes over the `HubApi` port.

pub mod binding;
pub mod router;
pub mod server;

pub use binding::{SubscriptionForm, BINDING_FAILED};
pub use router::{build_router, AppState, POSTED_TO_SUBSCRIBERS, SUBSCRIPTION_ADDED};
pub use server::HubServer;
