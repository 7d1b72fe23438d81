use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::Response,
};
use futures_util::{StreamExt, TryStreamExt};
use keyhold_auth::{owns_namespace, verify_credential};
use keyhold_storage::StorageError;

use crate::error::{ServerError, ServerResult};
use crate::media_type;
use crate::state::AppState;

/// PUT /{*path}
///
/// Upload a file into the caller's namespace. The `authorization` header
/// must carry a signed event; the verified pubkey must own the target path.
pub async fn upload(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Body,
) -> ServerResult<StatusCode> {
    let credential = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ServerError::Unauthorized)?;

    // Log only the failure class, never the credential itself.
    let pubkey = verify_credential(credential).map_err(|err| {
        tracing::debug!(%err, "credential rejected");
        ServerError::Unauthorized
    })?;

    if !owns_namespace(&path, &pubkey) {
        return Err(ServerError::Forbidden(
            "pubkey does not own the target directory",
        ));
    }

    let stream = body
        .into_data_stream()
        .map_err(std::io::Error::other)
        .boxed();

    let written = state
        .store
        .put(&path, stream)
        .await
        .map_err(|err| ServerError::Internal(format!("Storage error: {err}")))?;

    tracing::debug!(%pubkey, %path, written, "file stored");
    Ok(StatusCode::CREATED)
}

/// GET /{*path}
///
/// Reads are public: any caller may fetch any stored file whose path they
/// know. Any storage failure is reported as 404.
pub async fn download(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> ServerResult<Response> {
    let data = state.store.get(&path).await.map_err(|err| {
        match err {
            StorageError::NotFound(_) | StorageError::InvalidPath(_) => {}
            StorageError::Io(ref e) => tracing::warn!(%path, error = %e, "read failed"),
        }
        ServerError::NotFound
    })?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, media_type::from_path(&path))
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    Ok(response)
}

/// OPTIONS any path
///
/// CORS preflight; the allow-* headers are attached by the router layers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
