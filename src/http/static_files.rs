//! Static asset serving.

use tower_http::services::ServeDir;

use crate::config::SiteConfig;

/// Create the service mounted at `/static`.
///
/// Directory requests do not fall back to an index file; the page is only
/// served at `/`.
pub fn create_static_service(site: &SiteConfig) -> ServeDir {
    ServeDir::new(&site.static_dir).append_index_html_on_directories(false)
}
