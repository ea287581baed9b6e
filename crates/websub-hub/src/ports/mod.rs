//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the HTTP layer
//! - Driven Ports (outbound) - callback HTTP client and subscriber store

pub mod inbound;
pub mod outbound;

pub use inbound::HubApi;
pub use outbound::{CallbackClient, SubscriberStore};
