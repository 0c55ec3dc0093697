use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest as Sha2Digest, Sha256};

/// Domain separator mixed into every payload digest.
const PAYLOAD_DOMAIN_SEPARATOR: &[u8] = b"menukit:payload:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + digest bytes, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm.
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    pub b64: String,
}

/// Error returned when a payload cannot be digested.
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    /// The payload could not be serialized.
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Digest {
    /// Computes `sha256(domain_separator || json_bytes(payload))`.
    ///
    /// Object members are hashed in source order, so two payloads that only
    /// differ in key order get different digests; they also normalize to
    /// differently ordered catalogs.
    pub fn of_payload(payload: &Value) -> Result<Self, DigestError> {
        let bytes = serde_json::to_vec(payload)?;
        let mut hasher = Sha256::new();
        hasher.update(PAYLOAD_DOMAIN_SEPARATOR);
        hasher.update(&bytes);
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hasher.finalize());
        Ok(Self {
            alg: DigestAlg::Sha256,
            b64,
        })
    }
}
