//! Authorization credential decoding
//!
//! The `authorization` header carries `Nostr <base64(event JSON)>`. Any
//! failure between the raw header and a verified pubkey is an [`AuthError`];
//! HTTP callers must answer all of them with the same unauthenticated
//! response and must not echo the credential back or into logs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::AuthError;
use crate::event::SignedEvent;
use crate::pubkey::Pubkey;

/// Scheme prefix expected at the start of the header value.
pub const SCHEME_PREFIX: &str = "Nostr ";

/// Decode and verify a raw `authorization` header value.
pub fn verify_credential(header: &str) -> Result<Pubkey, AuthError> {
    let encoded = header.strip_prefix(SCHEME_PREFIX).ok_or(AuthError::Scheme)?;
    let raw = BASE64.decode(encoded.trim())?;
    let event: SignedEvent = serde_json::from_slice(&raw)?;
    event.verify()
}
