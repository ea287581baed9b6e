//! Domain Layer - Pure hub logic
//!
//! This layer contains:
//! - Subscription records (intent and committed subscriber)
//! - Challenge generation
//! - Delivery signatures
//! - Configuration, errors and counters
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod challenge;
pub mod config;
pub mod delivery;
pub mod error;
pub mod metrics;
pub mod signature;
pub mod subscription;

pub use challenge::{Challenge, ChallengeGenerator, CHALLENGE_LENGTH};
pub use config::{HttpConfig, HubConfig, LimitsConfig, TimeoutConfig};
pub use delivery::{DeliveryId, DeliveryReceipt, SignedDelivery};
pub use error::{ConfigError, HubError, HubResult, OutboundMethod, ServerError};
pub use metrics::{HubMetrics, MetricsSnapshot};
pub use signature::{
    verify_signature_header, PayloadSignature, SIGNATURE_HEADER, SIGNATURE_PREFIX,
};
pub use subscription::{CommittedSubscriber, SubscriptionIntent, VerificationQuery};
