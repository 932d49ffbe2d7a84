//! Session-token issuing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Default session lifetime in seconds (two weeks).
pub const DEFAULT_SESSION_TTL: u64 = 1_209_600;

/// Per-application session settings, exposed to the [`SessionUser`] extractor
/// through `FromRef`.
///
/// [`SessionUser`]: crate::identity::SessionUser
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// HMAC secret used to sign session tokens.
    pub secret: String,
    /// Session lifetime in seconds; also the cookie Max-Age.
    pub ttl_secs: u64,
    /// Where unauthenticated requests are redirected.
    pub login_path: String,
    /// Whether cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

/// Identity carried by a validated session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: i32,
    pub expires_at: u64,
}

/// Errors returned by [`validate_session`] and [`issue_session`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user id (decimal string) |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Sign a session token for `user_id`. Returns the token and its expiry.
pub fn issue_session(
    user_id: i32,
    secret: &str,
    ttl_secs: u64,
) -> Result<(String, u64), SessionError> {
    let exp = now_secs() + ttl_secs;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}

/// Validate a session cookie value, returning the bound user id.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
pub fn validate_session(token: &str, secret: &str) -> Result<SessionInfo, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| SessionError::Malformed)?;
    Ok(SessionInfo {
        user_id,
        expires_at: data.claims.exp,
    })
}
