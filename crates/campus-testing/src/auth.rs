//! Mock session helpers for integration tests.
//!
//! Handlers behind the `SessionUser` extractor need a signed session cookie.
//! `MockSession` signs one with a test secret so no login round-trip is needed.

use axum::http::{HeaderName, HeaderValue, header};

use campus_auth_types::cookie::SESSION_COOKIE;
use campus_auth_types::session::{SessionSettings, issue_session};

/// Secret shared by `MockSession` and `MockSession::settings`.
pub const TEST_SESSION_SECRET: &str = "test-session-secret-for-tests-only";

/// Configurable identity injected into test requests.
pub struct MockSession {
    pub user_id: i32,
}

impl MockSession {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    /// Session settings matching the cookies this mock signs.
    pub fn settings(login_path: &str) -> SessionSettings {
        SessionSettings {
            secret: TEST_SESSION_SECRET.to_owned(),
            ttl_secs: 3600,
            login_path: login_path.to_owned(),
            secure_cookies: false,
        }
    }

    /// `Cookie` header as a browser would send it after logging in.
    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let (token, _) = issue_session(self.user_id, TEST_SESSION_SECRET, 3600)
            .expect("sign test session");
        (
            header::COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}"))
                .expect("session token is a valid header value"),
        )
    }
}
