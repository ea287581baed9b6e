//! Delivery Dispatcher
//!
//! Signs a payload with the committed subscriber's secret and POSTs it to the
//! subscriber's callback. Fire-and-forget: the subscriber's answer is logged,
//! never judged, and nothing is retried.

use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{DeliveryReceipt, HubError, SignedDelivery};
use crate::ports::{CallbackClient, SubscriberStore};

/// Forwards published payloads to the committed subscriber.
pub struct DeliveryDispatcher<C: CallbackClient, S: SubscriberStore> {
    client: Arc<C>,
    store: Arc<S>,
}

impl<C: CallbackClient, S: SubscriberStore> DeliveryDispatcher<C, S> {
    pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
        Self { client, store }
    }

    /// One delivery attempt. No outbound request is made without a subscriber.
    pub async fn dispatch(&self, payload: Bytes) -> Result<DeliveryReceipt, HubError> {
        let subscriber = self.store.get().ok_or(HubError::NoSubscriber)?;

        let delivery = SignedDelivery::sign(subscriber.secret().as_bytes(), payload);
        debug!(
            delivery_id = %delivery.id,
            callback = %subscriber.callback(),
            payload_len = delivery.payload.len(),
            "Posting to subscriber"
        );

        let status = self.client.deliver(subscriber.callback(), &delivery).await?;

        info!(
            delivery_id = %delivery.id,
            callback = %subscriber.callback(),
            status,
            "Posted to subscriber"
        );

        Ok(DeliveryReceipt {
            delivery_id: delivery.id,
            callback: subscriber.callback().to_string(),
            payload_len: delivery.payload.len(),
            status,
        })
    }
}
