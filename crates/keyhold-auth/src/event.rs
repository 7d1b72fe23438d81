//! Signed event parsing and verification
//!
//! Events follow the Nostr wire shape: a JSON object whose `id` is the
//! SHA-256 of a canonical serialization of its fields, signed with a
//! BIP-340 Schnorr signature over that digest.

use std::sync::OnceLock;

use secp256k1::schnorr::Signature;
use secp256k1::{Message, Secp256k1, VerifyOnly, XOnlyPublicKey};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::pubkey::Pubkey;

fn secp() -> &'static Secp256k1<VerifyOnly> {
    static SECP: OnceLock<Secp256k1<VerifyOnly>> = OnceLock::new();
    SECP.get_or_init(Secp256k1::verification_only)
}

/// A decoded identity event.
///
/// Unknown fields are ignored; a missing required field is a parse error,
/// which callers treat the same as any other verification failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SignedEvent {
    pub id: String,
    pub pubkey: String,
    pub created_at: i64,
    pub kind: u32,
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
    pub sig: String,
}

impl SignedEvent {
    /// SHA-256 over the canonical serialization
    /// `[0, pubkey, created_at, kind, tags, content]` (compact JSON).
    pub fn canonical_digest(&self) -> [u8; 32] {
        let canonical = serde_json::json!([
            0,
            self.pubkey,
            self.created_at,
            self.kind,
            self.tags,
            self.content,
        ]);
        Sha256::digest(canonical.to_string().as_bytes()).into()
    }

    /// Verify the event and return the identity it asserts.
    ///
    /// Checks, in order: the pubkey is in canonical form, the claimed `id`
    /// matches the recomputed digest, and the Schnorr signature over the
    /// digest validates against the pubkey.
    pub fn verify(&self) -> Result<Pubkey, AuthError> {
        let pubkey: Pubkey = self.pubkey.parse()?;

        let digest = self.canonical_digest();
        if hex::encode(digest) != self.id {
            return Err(AuthError::IdMismatch);
        }

        let key = XOnlyPublicKey::from_slice(&pubkey.to_bytes())
            .map_err(|e| AuthError::Pubkey(e.to_string()))?;
        let sig_bytes = hex::decode(&self.sig).map_err(|_| AuthError::SignatureEncoding)?;
        let sig =
            Signature::from_slice(&sig_bytes).map_err(|_| AuthError::SignatureEncoding)?;

        secp()
            .verify_schnorr(&sig, &Message::from_digest(digest), &key)
            .map_err(|_| AuthError::SignatureInvalid)?;

        Ok(pubkey)
    }
}
