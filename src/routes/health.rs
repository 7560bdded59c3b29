//! Health check endpoint for container orchestration.
//!
//! The Helm chart points both the liveness and readiness probes here.

/// Health check handler.
///
/// This only checks that the process can respond to HTTP; it does not touch the
/// page on disk, so a missing file shows up as 404s rather than pod restarts.
pub async fn health() -> &'static str {
    "ok"
}
