//! hello-gitops: a single-page web server.
//!
//! Serves one static HTML file at `/`, a liveness endpoint at `/health` and
//! optional assets under `/static`. Build, image publishing and rollout are
//! handled outside the binary by the CI workflow, the Helm chart and Argo CD.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{AppError, AppErrorResponse, ResultExt};
