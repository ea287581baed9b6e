//! Hub Service
//!
//! Implements the `HubApi` port by composing the verifier and the dispatcher
//! over one shared store and one process-wide challenge generator.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::warn;

use crate::adapters::{InMemorySubscriberStore, ReqwestCallbackClient};
use crate::domain::{
    ChallengeGenerator, CommittedSubscriber, DeliveryReceipt, HubConfig, HubError, HubMetrics,
    MetricsSnapshot, ServerError, SubscriptionIntent,
};
use crate::ports::{CallbackClient, HubApi, SubscriberStore};

use super::dispatcher::DeliveryDispatcher;
use super::verifier::SubscriptionVerifier;

/// Production wiring: `reqwest` client and in-memory store.
pub type DefaultHubService = HubService<ReqwestCallbackClient, InMemorySubscriberStore>;

/// Hub service implementation
pub struct HubService<C: CallbackClient, S: SubscriberStore> {
    verifier: SubscriptionVerifier<C, S>,
    dispatcher: DeliveryDispatcher<C, S>,
    store: Arc<S>,
    metrics: Arc<HubMetrics>,
}

impl<C: CallbackClient, S: SubscriberStore> HubService<C, S> {
    /// Create a service whose challenge source is seeded from the clock now.
    pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
        Self::with_challenge_generator(client, store, ChallengeGenerator::from_time())
    }

    pub fn with_challenge_generator(
        client: Arc<C>,
        store: Arc<S>,
        challenges: ChallengeGenerator,
    ) -> Self {
        Self {
            verifier: SubscriptionVerifier::new(
                Arc::clone(&client),
                Arc::clone(&store),
                Arc::new(challenges),
            ),
            dispatcher: DeliveryDispatcher::new(client, Arc::clone(&store)),
            store,
            metrics: Arc::new(HubMetrics::new()),
        }
    }
}

impl DefaultHubService {
    /// Build the production service from configuration.
    pub fn from_config(config: &HubConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let client = Arc::new(ReqwestCallbackClient::new(&config.timeouts)?);
        let store = Arc::new(InMemorySubscriberStore::new());
        Ok(Self::new(client, store))
    }
}

#[async_trait]
impl<C, S> HubApi for HubService<C, S>
where
    C: CallbackClient + 'static,
    S: SubscriberStore + 'static,
{
    async fn subscribe(&self, intent: SubscriptionIntent) -> Result<CommittedSubscriber, HubError> {
        let callback = intent.callback.clone();
        let result = self.verifier.verify(intent).await;
        self.metrics.record_verification(result.is_ok());

        if let Err(ref e) = result {
            warn!(
                callback = %callback,
                error = %e,
                detail = e.detail().unwrap_or_default(),
                "Subscription verification failed"
            );
        }
        result
    }

    async fn publish(&self, payload: Bytes) -> Result<DeliveryReceipt, HubError> {
        let result = self.dispatcher.dispatch(payload).await;

        match &result {
            Ok(_) => self.metrics.record_delivery(true),
            Err(HubError::NoSubscriber) => {
                self.metrics.record_no_subscriber();
                warn!("Publish refused: no subscriber");
            }
            Err(e) => {
                self.metrics.record_delivery(false);
                warn!(
                    error = %e,
                    detail = e.detail().unwrap_or_default(),
                    "Delivery failed"
                );
            }
        }
        result
    }

    fn current_subscriber(&self) -> Option<CommittedSubscriber> {
        self.store.get()
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
