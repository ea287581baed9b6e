//! `reqwest` implementation of the callback client.
//!
//! One pooled client; per-request timeouts bound the whole exchange so a
//! slow subscriber cannot stall a handler.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::domain::{
    HubError, OutboundMethod, ServerError, SignedDelivery, TimeoutConfig, VerificationQuery,
    SIGNATURE_HEADER,
};
use crate::ports::CallbackClient;

/// Content type of every delivery.
pub const DELIVERY_CONTENT_TYPE: &str = "application/json";

/// Callback client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestCallbackClient {
    client: Client,
    verification_timeout: Duration,
    delivery_timeout: Duration,
}

impl ReqwestCallbackClient {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, ServerError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ServerError::Client(e.to_string()))?;

        Ok(Self {
            client,
            verification_timeout: timeouts.verification(),
            delivery_timeout: timeouts.delivery(),
        })
    }
}

/// Parse a callback into an absolute http(s) URL.
fn parse_callback(callback: &str, method: OutboundMethod) -> Result<Url, HubError> {
    let url =
        Url::parse(callback).map_err(|e| HubError::request_construction(method, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HubError::request_construction(
            method,
            format!("unsupported scheme: {}", other),
        )),
    }
}

/// Error text without the request URL, which carries the challenge.
fn describe(e: reqwest::Error) -> String {
    e.without_url().to_string()
}

fn send_error(method: OutboundMethod, e: reqwest::Error) -> HubError {
    if e.is_builder() {
        HubError::request_construction(method, describe(e))
    } else {
        HubError::transport(method, describe(e))
    }
}

#[async_trait]
impl CallbackClient for ReqwestCallbackClient {
    async fn request_echo(
        &self,
        callback: &str,
        query: &VerificationQuery,
    ) -> Result<Bytes, HubError> {
        let method = OutboundMethod::Get;
        let mut url = parse_callback(callback, method)?;
        url.query_pairs_mut().extend_pairs(query.pairs());

        let response = self
            .client
            .get(url)
            .timeout(self.verification_timeout)
            .send()
            .await
            .map_err(|e| send_error(method, e))?;

        debug!(status = response.status().as_u16(), "Verification response received");

        response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HubError::transport(method, describe(e))
            } else {
                HubError::response_read(method, describe(e))
            }
        })
    }

    async fn deliver(&self, callback: &str, delivery: &SignedDelivery) -> Result<u16, HubError> {
        let method = OutboundMethod::Post;
        let url = parse_callback(callback, method)?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, DELIVERY_CONTENT_TYPE)
            .header(SIGNATURE_HEADER, delivery.signature.header_value())
            .body(delivery.payload.clone())
            .timeout(self.delivery_timeout)
            .send()
            .await
            .map_err(|e| send_error(method, e))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChallengeGenerator, SubscriptionIntent};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> ReqwestCallbackClient {
        ReqwestCallbackClient::new(&TimeoutConfig {
            verification_secs: 1,
            delivery_secs: 1,
            connect_secs: 1,
        })
        .unwrap()
    }

    fn query() -> VerificationQuery {
        let intent = SubscriptionIntent::new("", "subscribe", "news", "");
        VerificationQuery::new(&intent, ChallengeGenerator::from_seed(3).generate())
    }

    #[test]
    fn test_parse_callback_accepts_http_and_https() {
        assert!(parse_callback("http://localhost:9000/cb", OutboundMethod::Get).is_ok());
        assert!(parse_callback("https://example.com/cb?x=1", OutboundMethod::Get).is_ok());
    }

    #[test]
    fn test_parse_callback_rejects_malformed() {
        for bad in ["", "not a url", "/relative/cb", "ftp://example.com/cb"] {
            let err = parse_callback(bad, OutboundMethod::Get).unwrap_err();
            assert!(
                matches!(
                    err,
                    HubError::RequestConstruction {
                        method: OutboundMethod::Get,
                        ..
                    }
                ),
                "{:?} should be a construction error",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_callback_makes_no_request() {
        let err = client().request_echo("::nope::", &query()).await.unwrap_err();
        assert!(matches!(err, HubError::RequestConstruction { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client()
            .request_echo(&format!("http://{}/cb", addr), &query())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HubError::Transport {
                method: OutboundMethod::Get,
                ..
            }
        ));
        assert!(!err.detail().unwrap_or_default().contains("hub.challenge="));
    }

    /// One-connection server: reads the request, writes `reply`, then keeps
    /// the socket open for `hold` before closing it.
    async fn raw_callback(reply: &'static [u8], hold: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            if !reply.is_empty() {
                socket.write_all(reply).await.unwrap();
            }
            tokio::time::sleep(hold).await;
        });

        format!("http://{}/cb?token=abc", addr)
    }

    const STALL: Duration = Duration::from_secs(30);

    #[tokio::test]
    async fn test_silent_subscriber_times_out_as_transport_on_get() {
        let callback = raw_callback(b"", STALL).await;

        let err = client().request_echo(&callback, &query()).await.unwrap_err();

        assert!(matches!(
            err,
            HubError::Transport {
                method: OutboundMethod::Get,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Failed sending GET request");
    }

    #[tokio::test]
    async fn test_silent_subscriber_times_out_as_transport_on_post() {
        let callback = raw_callback(b"", STALL).await;
        let delivery = SignedDelivery::sign(b"abc", Bytes::from_static(b"{}"));

        let err = client().deliver(&callback, &delivery).await.unwrap_err();

        assert!(matches!(
            err,
            HubError::Transport {
                method: OutboundMethod::Post,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Error sending POST request");
    }

    #[tokio::test]
    async fn test_truncated_body_is_response_read_error() {
        let callback = raw_callback(
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nhello",
            Duration::ZERO,
        )
        .await;

        let err = client().request_echo(&callback, &query()).await.unwrap_err();

        assert!(matches!(
            err,
            HubError::ResponseRead {
                method: OutboundMethod::Get,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Failed reading GET response");
    }

    #[tokio::test]
    async fn test_stalled_body_times_out_as_transport() {
        let callback = raw_callback(
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nhello",
            STALL,
        )
        .await;

        let err = client().request_echo(&callback, &query()).await.unwrap_err();

        assert!(matches!(
            err,
            HubError::Transport {
                method: OutboundMethod::Get,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_error_detail_omits_request_url() {
        let callback = raw_callback(b"", STALL).await;

        let err = client().request_echo(&callback, &query()).await.unwrap_err();

        let detail = err.detail().unwrap();
        assert!(!detail.is_empty());
        assert!(!detail.contains("hub.challenge="));
        assert!(!detail.contains("token=abc"));
        assert!(!detail.contains("127.0.0.1"));
    }
}
