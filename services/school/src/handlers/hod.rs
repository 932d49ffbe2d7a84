use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use campus_auth_types::identity::SessionUser;
use campus_core::flash;

use crate::error::SchoolError;
use crate::handlers::{SESSION_USER_GONE, end_session};
use crate::state::AppState;
use crate::usecase::hod::HodHomeUseCase;
use crate::views;

// ── GET /Hod/home ────────────────────────────────────────────────────────────

pub async fn hod_home(
    session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, SchoolError> {
    let usecase = HodHomeUseCase {
        repo: state.user_repo(),
    };
    match usecase.execute(session.user_id).await {
        Ok(summary) => {
            let (jar, flashes) = flash::take(jar);
            Ok((jar, views::hod_home_page(&summary, &flashes)).into_response())
        }
        Err(SchoolError::UserNotFound) => Ok(end_session(jar, &state.session, SESSION_USER_GONE)),
        Err(e) => Err(e),
    }
}
