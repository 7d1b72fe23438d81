//! keyhold-auth: signed-event verification and namespace authorization
//!
//! The write path of a keyhold server is gated by two questions, answered
//! here and nowhere else:
//!
//! 1. *Who is asking?* [`verify_credential`] takes the raw `authorization`
//!    header value, decodes the Nostr event inside it, and checks the
//!    event's Schnorr signature. A [`Pubkey`] can only be obtained through
//!    successful verification, so holding one is proof the check ran.
//! 2. *May they write here?* [`owns_namespace`] is the pure namespace
//!    policy: an identity owns exactly the single-segment path equal to its
//!    public key, nothing else.
//!
//! Reads are public and never consult this crate.

mod credential;
mod error;
mod event;
mod namespace;
mod pubkey;

pub use credential::{verify_credential, SCHEME_PREFIX};
pub use error::AuthError;
pub use event::SignedEvent;
pub use namespace::owns_namespace;
pub use pubkey::Pubkey;
