//! Decoded credential claims for the session debug footer.
//!
//! Strictly informational: the decode performs no signature verification and
//! nothing here feeds an authorization decision. A credential that does not
//! decode is reported as such, distinct from one that decodes and has
//! expired.

use api::{decode_claims, TokenError};
use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn SessionDiagnostics() -> Element {
    let auth = use_auth();

    let Some(credential) = auth().session.credential else {
        return rsx! {};
    };

    let text = match decode_claims(&credential) {
        Ok(claims) => {
            let now = chrono::Utc::now().timestamp();
            let expiry = match claims.expires_in(now) {
                Some(seconds) if seconds < 0 => "credential expired".to_string(),
                Some(seconds) => format!("credential expires in {seconds}s"),
                None => "credential has no expiry claim".to_string(),
            };
            format!("Signed in as {} ({expiry})", claims.sub)
        }
        Err(TokenError::Malformed) => "Credential is not a decodable token".to_string(),
        Err(TokenError::Payload(_)) => "Credential payload did not decode".to_string(),
    };

    rsx! {
        p { class: "session-diagnostics", "{text}" }
    }
}
