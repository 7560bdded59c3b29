//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, logging and default paths. Every section is optional, so an
//! empty file yields a server listening on 0.0.0.0:8080 and serving
//! `static/index.html`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Values are in seconds. The page is small and changes only on redeploy, but a
// rollout should become visible within a minute behind a CDN or the ingress.

/// Page served at `/`
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_PAGE_SWR: u32 = 30;

/// Static assets (CSS, images)
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Error responses - short TTL so a fixed deployment recovers quickly
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

/// Serve stale content during backend failures (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_PAGE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_PAGE_MAX_AGE,
    HTTP_CACHE_PAGE_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str = formatcp!("public, max-age={}", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "hello_gitops=info,tower_http=info";

/// Default listen address; the Helm chart's containerPort matches this port
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to wait for in-flight requests after SIGTERM
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_INDEX_FILE: &str = "static/index.html";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// What gets served
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "HttpConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpConfig::default_port")]
    pub port: u16,
    /// Drain window after a termination signal
    #[serde(default = "HttpConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Parse `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Content configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// HTML file returned for `/`
    #[serde(default = "SiteConfig::default_index_file")]
    pub index_file: String,
    /// Directory mounted at `/static`
    #[serde(default = "SiteConfig::default_static_dir")]
    pub static_dir: String,
    /// Set to false to serve only `/` and `/health`
    #[serde(default = "SiteConfig::default_serve_static")]
    pub serve_static: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_file: Self::default_index_file(),
            static_dir: Self::default_static_dir(),
            serve_static: Self::default_serve_static(),
        }
    }
}

impl SiteConfig {
    fn default_index_file() -> String {
        DEFAULT_INDEX_FILE.to_string()
    }

    fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    fn default_serve_static() -> bool {
        true
    }

    pub fn index_path(&self) -> PathBuf {
        PathBuf::from(&self.index_file)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object per line, for log shippers in the cluster
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.index_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.index_file must not be empty".to_string(),
            ));
        }
        if self.site.serve_static && self.site.static_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.static_dir must not be empty when site.serve_static is enabled".to_string(),
            ));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.shutdown_timeout_seconds, 30);
        assert_eq!(config.site.index_file, "static/index.html");
        assert_eq!(config.site.static_dir, "static");
        assert!(config.site.serve_static);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9090
            "#,
        )
        .unwrap();
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.site.index_file, "static/index.html");
    }

    #[test]
    fn test_json_log_format() {
        let config = AppConfig::from_toml(
            r#"
            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [logging]
            format = "xml"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_index_file_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [site]
            index_file = "  "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_static_dir_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [site]
            static_dir = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_static_dir_allowed_when_disabled() {
        let config = AppConfig::from_toml(
            r#"
            [site]
            static_dir = ""
            serve_static = false
            "#,
        )
        .unwrap();
        assert!(!config.site.serve_static);
    }

    #[test]
    fn test_invalid_host_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [http]
            host = "not a host"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("http.host"));
    }

    #[test]
    fn test_socket_addr() {
        let http = HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..HttpConfig::default()
        };
        assert_eq!(http.socket_addr().unwrap(), "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nindex_file = \"/srv/www/index.html\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.site.index_path(), PathBuf::from("/srv/www/index.html"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/hello-gitops.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_cache_control_values() {
        assert_eq!(
            CACHE_CONTROL_PAGE,
            "public, max-age=60, stale-while-revalidate=30, stale-if-error=300"
        );
        assert_eq!(CACHE_CONTROL_STATIC, "public, max-age=86400");
        assert_eq!(CACHE_CONTROL_ERROR, "public, max-age=5");
    }
}
