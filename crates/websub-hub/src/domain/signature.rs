//! Delivery signatures.
//!
//! `X-Hub-Signature: sha256=<hex>` where `<hex>` is the lower-case hex
//! HMAC-SHA256 of the raw payload keyed with the subscriber's secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Algorithm prefix of the header value.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Lower-case hex HMAC-SHA256 of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSignature(String);

impl PayloadSignature {
    /// Any secret length is valid, including empty and longer than a block.
    pub fn compute(secret: &[u8], payload: &[u8]) -> Self {
        let mut mac =
            HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
        mac.update(payload);
        Self(hex::encode(mac.finalize().into_bytes()))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Value for [`SIGNATURE_HEADER`].
    pub fn header_value(&self) -> String {
        format!("{}{}", SIGNATURE_PREFIX, self.0)
    }
}

/// Check an `X-Hub-Signature` header against a payload.
///
/// For subscribers. Comparison is constant-time.
pub fn verify_signature_header(secret: &[u8], payload: &[u8], header: &str) -> bool {
    let Some(hex_sig) = header.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let Ok(expected) = hex::decode(hex_sig) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(payload);
    mac.verify_slice(&expected).is_ok()
}
