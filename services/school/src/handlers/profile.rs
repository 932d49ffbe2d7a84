use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use campus_auth_types::identity::SessionUser;
use campus_core::flash::{self, FlashMessage};
use campus_core::media::MultipartForm;

use crate::error::SchoolError;
use crate::handlers::{SESSION_USER_GONE, end_session};
use crate::state::AppState;
use crate::usecase::profile::{
    GetProfileUseCase, ProfileUpdateError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::views;

pub const PROFILE_UPDATED: &str = "Profile updated successfully";
pub const PROFILE_NOT_SAVED: &str = "Profile could not be saved, please try again";

// ── GET /profile ─────────────────────────────────────────────────────────────

pub async fn profile(
    session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, SchoolError> {
    let usecase = GetProfileUseCase {
        repo: state.user_repo(),
    };
    match usecase.execute(session.user_id).await {
        Ok(user) => {
            let (jar, flashes) = flash::take(jar);
            Ok((jar, views::profile_page(&user, &flashes)).into_response())
        }
        Err(SchoolError::UserNotFound) => Ok(end_session(jar, &state.session, SESSION_USER_GONE)),
        Err(e) => Err(e),
    }
}

// ── POST /profile/update ─────────────────────────────────────────────────────

pub async fn update_profile(
    session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, SchoolError> {
    let multipart = multipart.map_err(|e| SchoolError::InvalidForm(e.body_text()))?;
    let mut form = MultipartForm::read(multipart)
        .await
        .map_err(|e| SchoolError::InvalidForm(e.body_text()))?;
    let input = UpdateProfileInput {
        first_name: form.text("first_name"),
        last_name: form.text("last_name"),
        password: form.text("password"),
        profile_pic: form.take_file("profile_pic"),
    };

    let usecase = UpdateProfileUseCase {
        repo: state.user_repo(),
        media: state.media.clone(),
    };
    let message = match usecase.execute(session.user_id, input).await {
        Ok(()) => FlashMessage::success(PROFILE_UPDATED),
        Err(ProfileUpdateError::UserNotFound) => {
            return Ok(end_session(jar, &state.session, SESSION_USER_GONE));
        }
        Err(ProfileUpdateError::InvalidImage(e)) => {
            FlashMessage::error(format!("Invalid profile picture: {e}"))
        }
        Err(ProfileUpdateError::Storage(e)) => {
            tracing::error!(user_id = session.user_id, error = %format!("{e:#}"), "profile update failed");
            FlashMessage::error(PROFILE_NOT_SAVED)
        }
    };
    let jar = flash::push(jar, message);
    Ok((jar, Redirect::to("/profile")).into_response())
}
