//! Best-effort credential claims decode.
//!
//! The credential is an opaque three-segment dot-separated token whose middle
//! segment is base64url-encoded JSON. This module decodes that payload for
//! diagnostics (who the token was issued to, when it expires) and nothing
//! else: no signature verification happens here and no authorization decision
//! may ever rest on it — the server is the sole authority.
//!
//! A decode failure ([`TokenError`]) means the input is not a well-formed
//! token. Expiry is a property of successfully decoded [`Claims`] and is
//! reported separately; the two are never conflated.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Not a three-segment dot-separated token.
    #[error("credential is not a three-segment token")]
    Malformed,

    /// The middle segment is not base64url JSON of the expected shape.
    #[error("credential payload did not decode: {0}")]
    Payload(String),
}

/// Claims carried in the credential payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to (the account name).
    pub sub: String,
    /// Issued-at, unix seconds.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expires-at, unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the claims say the token has expired at `now` (unix seconds).
    /// Tokens without an `exp` claim never report expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp < now)
    }

    /// Seconds of lifetime remaining at `now`; negative once expired, `None`
    /// when the token carries no expiry.
    pub fn expires_in(&self, now: i64) -> Option<i64> {
        self.exp.map(|exp| exp - now)
    }
}

/// Decode the payload segment of a credential.
pub fn decode_claims(credential: &str) -> Result<Claims, TokenError> {
    let mut segments = credential.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Payload(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
}
