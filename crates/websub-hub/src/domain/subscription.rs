//! Subscription records.
//!
//! A [`SubscriptionIntent`] is what a would-be subscriber asks for. A
//! [`CommittedSubscriber`] can only be produced from an intent whose callback
//! echoed the verification challenge exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::challenge::Challenge;

/// Subscription request as bound from the subscription endpoint.
///
/// Form bodies use the `hub.*` names. JSON bodies accept either the `hub.*`
/// names or the bare ones. Missing fields bind as empty strings; only the
/// callback is checked, and only when the verification request is built.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionIntent {
    #[serde(rename = "hub.callback", alias = "callback", default)]
    pub callback: String,
    #[serde(rename = "hub.mode", alias = "mode", default)]
    pub mode: String,
    #[serde(rename = "hub.topic", alias = "topic", default)]
    pub topic: String,
    #[serde(rename = "hub.secret", alias = "secret", default)]
    pub secret: String,
}

impl SubscriptionIntent {
    pub fn new(
        callback: impl Into<String>,
        mode: impl Into<String>,
        topic: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            callback: callback.into(),
            mode: mode.into(),
            topic: topic.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for SubscriptionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionIntent")
            .field("callback", &self.callback)
            .field("mode", &self.mode)
            .field("topic", &self.topic)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Subscriber whose callback passed verification.
#[derive(Clone, PartialEq, Eq)]
pub struct CommittedSubscriber {
    intent: SubscriptionIntent,
}

impl CommittedSubscriber {
    /// Only the verifier (and tests) may commit an intent.
    pub(crate) fn from_verified(intent: SubscriptionIntent) -> Self {
        Self { intent }
    }

    pub fn callback(&self) -> &str {
        &self.intent.callback
    }

    pub fn mode(&self) -> &str {
        &self.intent.mode
    }

    pub fn topic(&self) -> &str {
        &self.intent.topic
    }

    pub fn secret(&self) -> &str {
        &self.intent.secret
    }

    /// The fields this subscriber was committed with.
    pub fn intent(&self) -> &SubscriptionIntent {
        &self.intent
    }
}

impl fmt::Debug for CommittedSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedSubscriber")
            .field("callback", &self.intent.callback)
            .field("mode", &self.intent.mode)
            .field("topic", &self.intent.topic)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Query parameters of the outbound verification GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationQuery {
    pub mode: String,
    pub topic: String,
    pub challenge: Challenge,
}

impl VerificationQuery {
    pub fn new(intent: &SubscriptionIntent, challenge: Challenge) -> Self {
        Self {
            mode: intent.mode.clone(),
            topic: intent.topic.clone(),
            challenge,
        }
    }

    /// `(name, value)` pairs in the order they are appended to the callback.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("hub.mode", self.mode.as_str()),
            ("hub.topic", self.topic.as_str()),
            ("hub.challenge", self.challenge.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_accepts_hub_prefixed_names() {
        let intent: SubscriptionIntent = serde_json::from_str(
            concat!(
                r#"{"hub.callback":"http://sub/cb","hub.mode":"subscribe","#,
                r#""hub.topic":"news","hub.secret":"s3"}"#
            ),
        )
        .unwrap();
        assert_eq!(
            intent,
            SubscriptionIntent::new("http://sub/cb", "subscribe", "news", "s3")
        );
    }

    #[test]
    fn test_json_accepts_bare_names() {
        let intent: SubscriptionIntent = serde_json::from_str(
            r#"{"hub.callback":"http://sub/cb","mode":"subscribe","topic":"news","secret":"s3"}"#,
        )
        .unwrap();
        assert_eq!(intent.mode, "subscribe");
        assert_eq!(intent.topic, "news");
        assert_eq!(intent.secret, "s3");
    }

    #[test]
    fn test_missing_fields_bind_empty() {
        let intent: SubscriptionIntent = serde_json::from_str("{}").unwrap();
        assert_eq!(intent, SubscriptionIntent::default());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let intent = SubscriptionIntent::new("http://sub/cb", "subscribe", "news", "hunter2");
        assert!(!format!("{:?}", intent).contains("hunter2"));

        let committed = CommittedSubscriber::from_verified(intent);
        assert!(!format!("{:?}", committed).contains("hunter2"));
        assert_eq!(committed.secret(), "hunter2");
    }

    #[test]
    fn test_verification_query_pairs() {
        let intent = SubscriptionIntent::new("http://sub/cb", "subscribe", "news", "");
        let challenge = Challenge::from_token("abcDEF0123");
        let query = VerificationQuery::new(&intent, challenge);

        assert_eq!(
            query.pairs(),
            [
                ("hub.mode", "subscribe"),
                ("hub.topic", "news"),
                ("hub.challenge", "abcDEF0123"),
            ]
        );
    }
}
