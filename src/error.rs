//! Error types and their HTTP rendering.
//!
//! Handler errors are rendered as a minimal HTML page with a short-lived
//! Cache-Control header. `AppErrorResponse` carries the request id so the error
//! log line and the response can be correlated with the access log.

use std::io;
use std::path::Path;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        StatusCode,
    },
    response::{Html, IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_ERROR;
use crate::middleware::{RequestId, REQUEST_ID_HEADER};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Classify a failed read of `path`. A missing file is a 404, anything else
    /// (permissions, EISDIR) is an internal error.
    pub fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::PageNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Io(e) if e.kind() == io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Internal details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "The page you requested could not be found.",
            _ => "Internal server error",
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {code}</title>
</head>
<body>
    <h1>Error {code}</h1>
    <p>{message}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
        code = status.as_u16(),
        message = message,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request failed");
        }

        let body = Html(error_page(status, self.public_message()));
        let mut response = (status, body).into_response();
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_ERROR));
        response
    }
}

/// An `AppError` tagged with the id of the request that produced it.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: RequestId,
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let request_id = self.request_id;
        let span = tracing::error_span!("error", request_id = %request_id);
        let mut response = span.in_scope(|| self.error.into_response());
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
}

/// Attach a request id to any error convertible into `AppError`.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: request_id.clone(),
        })
    }
}
