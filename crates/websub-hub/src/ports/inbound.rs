//! Inbound Ports (Driving Ports)
//!
//! The API the HTTP layer drives.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    CommittedSubscriber, DeliveryReceipt, HubError, MetricsSnapshot, SubscriptionIntent,
};

/// Primary hub API (Driving Port)
#[async_trait]
pub trait HubApi: Send + Sync {
    /// Run the challenge handshake against `intent.callback` and commit the
    /// subscriber if it echoes the challenge exactly.
    async fn subscribe(&self, intent: SubscriptionIntent) -> Result<CommittedSubscriber, HubError>;

    /// Sign `payload` with the committed subscriber's secret and POST it to
    /// its callback.
    async fn publish(&self, payload: Bytes) -> Result<DeliveryReceipt, HubError>;

    /// The committed subscriber, if any.
    fn current_subscriber(&self) -> Option<CommittedSubscriber>;

    fn metrics(&self) -> MetricsSnapshot;
}
