//! Session-cookie identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use http::request::Parts;

use crate::cookie::SESSION_COOKIE;
use crate::session::{SessionSettings, validate_session};

/// The authenticated user bound to the request's session cookie.
///
/// Redirects (303) to [`SessionSettings::login_path`] if the cookie is absent,
/// expired or forged. Role checks are done by handlers after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for SessionUser
where
    SessionSettings: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    // Values are extracted synchronously and moved into a 'static future so the
    // returned future does not borrow `parts` or `state`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let settings = SessionSettings::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let outcome = jar
            .get(SESSION_COOKIE)
            .map(|c| validate_session(c.value(), &settings.secret));

        async move {
            match outcome {
                Some(Ok(info)) => Ok(Self {
                    user_id: info.user_id,
                }),
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "rejected session cookie");
                    Err(Redirect::to(&settings.login_path))
                }
                None => Err(Redirect::to(&settings.login_path)),
            }
        }
    }
}
