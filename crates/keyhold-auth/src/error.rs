//! Authorization error types

use thiserror::Error;

/// Why a credential failed to produce an identity.
///
/// Callers serving HTTP must collapse every variant into the same
/// unauthenticated response; the distinctions exist for logs and tests only.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credential does not carry the expected scheme prefix")]
    Scheme,

    #[error("invalid base64 in credential: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid public key: {0}")]
    Pubkey(String),

    #[error("invalid signature encoding")]
    SignatureEncoding,

    #[error("event id does not match its fields")]
    IdMismatch,

    #[error("signature verification failed")]
    SignatureInvalid,
}
