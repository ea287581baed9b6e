//! Subscription Verifier
//!
//! Challenge handshake: GET the callback with a fresh challenge, commit the
//! subscriber only if the body echoes it byte-for-byte.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    ChallengeGenerator, CommittedSubscriber, HubError, SubscriptionIntent, VerificationQuery,
};
use crate::ports::{CallbackClient, SubscriberStore};

/// Verifies subscription intents and commits them to the store.
pub struct SubscriptionVerifier<C: CallbackClient, S: SubscriberStore> {
    client: Arc<C>,
    store: Arc<S>,
    challenges: Arc<ChallengeGenerator>,
}

impl<C: CallbackClient, S: SubscriberStore> SubscriptionVerifier<C, S> {
    pub fn new(client: Arc<C>, store: Arc<S>, challenges: Arc<ChallengeGenerator>) -> Self {
        Self {
            client,
            store,
            challenges,
        }
    }

    /// One verification attempt. The store is only written on success.
    pub async fn verify(
        &self,
        intent: SubscriptionIntent,
    ) -> Result<CommittedSubscriber, HubError> {
        let challenge = self.challenges.generate();
        let query = VerificationQuery::new(&intent, challenge);

        debug!(
            callback = %intent.callback,
            mode = %intent.mode,
            topic = %intent.topic,
            "Sending verification request"
        );

        let body = self.client.request_echo(&intent.callback, &query).await?;

        if !query.challenge.matches(&body) {
            warn!(
                callback = %intent.callback,
                echoed_len = body.len(),
                "Subscriber echoed the wrong value"
            );
            return Err(HubError::ChallengeMismatch);
        }

        let subscriber = CommittedSubscriber::from_verified(intent);
        self.store.set(subscriber.clone());

        info!(
            callback = %subscriber.callback(),
            topic = %subscriber.topic(),
            "Subscription added"
        );
        Ok(subscriber)
    }
}
