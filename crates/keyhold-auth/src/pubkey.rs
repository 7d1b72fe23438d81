//! Canonical identity type

use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// Length of an x-only secp256k1 public key in hex characters.
const PUBKEY_HEX_LEN: usize = 64;

/// A verified public key: 64 lowercase hex characters (32-byte x-only
/// secp256k1 point).
///
/// The string shape is validated on parse rather than left implicit in
/// signature verification, so a key that round-trips through storage paths
/// or logs is always in canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pubkey(String);

impl Pubkey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw key bytes for signature verification.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        // Infallible: the constructor enforced 64 hex characters.
        hex::decode_to_slice(&self.0, &mut out).expect("validated hex");
        out
    }
}

impl FromStr for Pubkey {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PUBKEY_HEX_LEN {
            return Err(AuthError::Pubkey(format!(
                "expected {PUBKEY_HEX_LEN} hex characters, got {}",
                s.len()
            )));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(AuthError::Pubkey(
                "expected lowercase hex characters".into(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", &self.0[..8])
    }
}

impl AsRef<str> for Pubkey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
