//! HTTP server module.
//!
//! Plain HTTP only: TLS is terminated by the cluster ingress. The server
//! drains in-flight requests on SIGTERM/SIGINT so rolling updates do not drop
//! connections.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{serve, start_server, ServerError};
