use std::path::PathBuf;

use campus_auth_types::session::DEFAULT_SESSION_TTL;

/// Records service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RecordsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for session tokens. Env var: `SESSION_SECRET`.
    pub session_secret: String,
    /// TCP port for the HTTP server (default 3201). Env var: `RECORDS_PORT`.
    pub records_port: u16,
    /// Directory uploads are written to (default `media`). Env var: `MEDIA_ROOT`.
    pub media_root: PathBuf,
    /// Serve `MEDIA_ROOT` under `/media` (default false). Env var: `SERVE_MEDIA`.
    pub serve_media: bool,
    /// Mark cookies `Secure` (default true). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Session lifetime in seconds (default two weeks). Env var: `SESSION_TTL_SECS`.
    pub session_ttl_secs: u64,
}

impl RecordsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            records_port: std::env::var("RECORDS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3201),
            media_root: std::env::var("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("media")),
            serve_media: std::env::var("SERVE_MEDIA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL),
        }
    }
}
