//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the driven ports.
//!
//! ## Adapters
//!
//! - `ReqwestCallbackClient` - outbound GET/POST to subscriber callbacks
//! - `InMemorySubscriberStore` - process-lifetime, mutex-guarded slot

pub mod http_client;
pub mod memory_store;

pub use http_client::{ReqwestCallbackClient, DELIVERY_CONTENT_TYPE};
pub use memory_store::InMemorySubscriberStore;
