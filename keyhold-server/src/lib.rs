//! keyhold-server: per-identity public file hosting over HTTP
//!
//! Clients PUT files into the single directory named by their Nostr pubkey,
//! authenticated by a signed event in the `authorization` header. Anyone may
//! GET any stored file by path.

pub mod config;
pub mod error;
pub mod media_type;
pub mod routes;
pub mod state;
