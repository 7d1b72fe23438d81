//! Extension to content-type mapping
//!
//! The mapping is deliberately closed: anything outside the known handful
//! is served as an opaque byte stream.

use std::path::Path;

pub fn from_path(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("txt") => "text/plain",
        Some("html") => "text/html",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
