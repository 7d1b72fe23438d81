//! Namespace ownership policy
//!
//! The writable namespace is flat: each identity owns exactly one directory,
//! named by its public key, directly under the storage root. Nested paths
//! are not writable, even under the caller's own directory.

use crate::pubkey::Pubkey;

/// True iff `path`, after discarding empty `/`-separated segments, consists
/// of exactly one segment equal to `pubkey`.
///
/// Pure string policy; comparison is case-sensitive and the pubkey is
/// already canonical lowercase hex.
pub fn owns_namespace(path: &str, pubkey: &Pubkey) -> bool {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(first), None) => first == pubkey.as_str(),
        _ => false,
    }
}
