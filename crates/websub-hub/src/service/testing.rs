//! Mock callback client shared by the service tests.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::domain::{HubError, SignedDelivery, VerificationQuery};
use crate::ports::CallbackClient;

/// How the mock answers verification requests.
#[derive(Debug, Clone)]
pub enum EchoBehavior {
    Echo,
    /// Echo the challenge of the previous attempt (the current one on the first).
    EchoPrevious,
    Trailing(&'static str),
    Leading(&'static str),
    SwapCase,
    Truncated,
    Fixed(&'static str),
    Fail(HubError),
}

pub struct MockCallbackClient {
    behavior: Mutex<EchoBehavior>,
    previous_challenge: Mutex<Option<String>>,
    echo_requests: Mutex<Vec<(String, VerificationQuery)>>,
    deliveries: Mutex<Vec<(String, SignedDelivery)>>,
    delivery_status: Mutex<u16>,
    delivery_failure: Mutex<Option<HubError>>,
}

impl MockCallbackClient {
    pub fn new(behavior: EchoBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            previous_challenge: Mutex::new(None),
            echo_requests: Mutex::new(Vec::new()),
            deliveries: Mutex::new(Vec::new()),
            delivery_status: Mutex::new(200),
            delivery_failure: Mutex::new(None),
        }
    }

    pub fn set_behavior(&self, behavior: EchoBehavior) {
        *self.behavior.lock() = behavior;
    }

    pub fn set_delivery_status(&self, status: u16) {
        *self.delivery_status.lock() = status;
    }

    pub fn fail_deliveries(&self, err: HubError) {
        *self.delivery_failure.lock() = Some(err);
    }

    pub fn echo_requests(&self) -> Vec<(String, VerificationQuery)> {
        self.echo_requests.lock().clone()
    }

    pub fn deliveries(&self) -> Vec<(String, SignedDelivery)> {
        self.deliveries.lock().clone()
    }
}

#[async_trait]
impl CallbackClient for MockCallbackClient {
    async fn request_echo(
        &self,
        callback: &str,
        query: &VerificationQuery,
    ) -> Result<Bytes, HubError> {
        self.echo_requests
            .lock()
            .push((callback.to_string(), query.clone()));

        let challenge = query.challenge.as_str().to_string();
        let previous = self.previous_challenge.lock().replace(challenge.clone());

        let body = match self.behavior.lock().clone() {
            EchoBehavior::Echo => challenge,
            EchoBehavior::EchoPrevious => previous.unwrap_or(challenge),
            EchoBehavior::Trailing(suffix) => format!("{}{}", challenge, suffix),
            EchoBehavior::Leading(prefix) => format!("{}{}", prefix, challenge),
            EchoBehavior::SwapCase => challenge
                .chars()
                .map(|c| {
                    if c.is_ascii_lowercase() {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect(),
            EchoBehavior::Truncated => challenge[..challenge.len() - 1].to_string(),
            EchoBehavior::Fixed(body) => body.to_string(),
            EchoBehavior::Fail(err) => return Err(err),
        };

        Ok(Bytes::from(body))
    }

    async fn deliver(&self, callback: &str, delivery: &SignedDelivery) -> Result<u16, HubError> {
        if let Some(err) = self.delivery_failure.lock().clone() {
            return Err(err);
        }
        self.deliveries
            .lock()
            .push((callback.to_string(), delivery.clone()));
        Ok(*self.delivery_status.lock())
    }
}
