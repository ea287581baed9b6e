//! WebSub Hub - Single-subscriber publish/subscribe relay.
//!
//! Accepts one subscription at a time, proves the subscriber controls its
//! callback with a challenge echo, then relays published payloads to it
//! signed with the subscriber's secret.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        WEBSUB HUB                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │   POST /            POST /publish      GET /health /metrics  │
//! │      │                   │                    │              │
//! │  ┌───┴───────────────────┴────────────────────┴───┐          │
//! │  │                 HubApi (port)                  │          │
//! │  └───┬───────────────────┬────────────────────────┘          │
//! │      │                   │                                   │
//! │  ┌───┴────────┐    ┌─────┴──────┐                            │
//! │  │  Verifier  │    │ Dispatcher │                            │
//! │  └───┬────┬───┘    └──┬─────┬───┘                            │
//! │      │    └─── store ─┘     │                                │
//! │      │   (one subscriber)   │                                │
//! └──────┼──────────────────────┼────────────────────────────────┘
//!        ▼                      ▼
//!   GET callback?hub.*     POST callback + X-Hub-Signature
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use websub_hub::{HubConfig, HubServer};
//!
//! let server = HubServer::from_config(&HubConfig::default()).await?;
//! server.serve(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod http;
pub mod ports;
pub mod service;

pub use adapters::{InMemorySubscriberStore, ReqwestCallbackClient};
pub use domain::{
    verify_signature_header, CommittedSubscriber, ConfigError, DeliveryId, DeliveryReceipt,
    HubConfig, HubError, MetricsSnapshot, OutboundMethod, PayloadSignature, ServerError,
    SubscriptionIntent, SIGNATURE_HEADER,
};
pub use http::{build_router, HubServer};
pub use ports::{CallbackClient, HubApi, SubscriberStore};
pub use service::{DefaultHubService, HubService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
