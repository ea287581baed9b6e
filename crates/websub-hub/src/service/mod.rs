//! Service Layer
//!
//! Orchestrates domain logic over the driven ports.

pub mod dispatcher;
pub mod hub_service;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::DeliveryDispatcher;
pub use hub_service::{DefaultHubService, HubService};
pub use verifier::SubscriptionVerifier;
