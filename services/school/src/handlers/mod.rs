pub mod auth;
pub mod hod;
pub mod profile;

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use campus_auth_types::cookie::clear_session_cookie;
use campus_auth_types::session::SessionSettings;
use campus_core::flash::{self, FlashMessage};

/// Message shown when a session outlives its user.
pub const SESSION_USER_GONE: &str = "Your account could not be found, please log in again";

/// Drop the session cookie and send the browser back to the login page.
pub(crate) fn end_session(jar: CookieJar, settings: &SessionSettings, message: &str) -> Response {
    let jar = clear_session_cookie(jar, settings.secure_cookies);
    let jar = flash::push(jar, FlashMessage::error(message));
    (jar, Redirect::to(&settings.login_path)).into_response()
}
