//! The page served at `/`.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Read the configured index file and return it as HTML.
///
/// The file is read on every request; there is no in-process cache.
#[instrument(name = "index::page", skip(state, request_id))]
pub async fn page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<Vec<u8>>, AppErrorResponse> {
    let path = state.config.site.index_path();

    let body = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::from_read(&path, e))
        .with_request_id(&request_id)?;

    tracing::debug!(path = %path.display(), bytes = body.len(), "Served page");
    Ok(Html(body))
}
