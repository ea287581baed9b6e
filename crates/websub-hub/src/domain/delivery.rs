//! Delivery records.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::signature::PayloadSignature;

/// Identifier of one dispatch attempt, for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryId(Uuid);

impl DeliveryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DeliveryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedDelivery {
    pub id: DeliveryId,
    pub payload: Bytes,
    pub signature: PayloadSignature,
}

impl SignedDelivery {
    pub fn sign(secret: &[u8], payload: Bytes) -> Self {
        let signature = PayloadSignature::compute(secret, &payload);
        Self {
            id: DeliveryId::new(),
            payload,
            signature,
        }
    }
}

/// Outcome of a successful dispatch.
///
/// `status` is whatever the subscriber answered; it is reported, not judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub delivery_id: DeliveryId,
    pub callback: String,
    pub payload_len: usize,
    pub status: u16,
}
