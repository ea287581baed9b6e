//! Outbound Ports (Driven Ports)
//!
//! Dependencies the hub needs from the outside world: an HTTP client that
//! talks to subscriber callbacks, and the single-slot subscriber store.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{CommittedSubscriber, HubError, SignedDelivery, VerificationQuery};

/// HTTP access to subscriber callbacks (Driven Port)
///
/// Each call performs exactly one outbound request and never retries.
#[async_trait]
pub trait CallbackClient: Send + Sync {
    /// `GET <callback>` with the verification query appended.
    ///
    /// Returns the full response body, whatever the status code.
    async fn request_echo(
        &self,
        callback: &str,
        query: &VerificationQuery,
    ) -> Result<Bytes, HubError>;

    /// `POST <callback>` with the signed payload.
    ///
    /// Returns the subscriber's status code without judging it.
    async fn deliver(&self, callback: &str, delivery: &SignedDelivery) -> Result<u16, HubError>;
}

/// Holder of the committed subscriber (Driven Port)
///
/// One slot today. Keyed by topic, this becomes the place where multiple
/// subscribers would live; the verifier and dispatcher only see `get`/`set`.
pub trait SubscriberStore: Send + Sync {
    /// Current subscriber, `None` until a verification has succeeded.
    fn get(&self) -> Option<CommittedSubscriber>;

    /// Replace whatever is stored.
    fn set(&self, subscriber: CommittedSubscriber);
}
