use anyhow::Context as _;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use campus_auth_types::cookie::{clear_session_cookie, set_session_cookie};
use campus_auth_types::session::issue_session;
use campus_core::flash::{self, FlashMessage};
use campus_domain::user::Landing;

use crate::error::SchoolError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginOutcome, LoginUseCase};
use crate::views;

pub const LOGIN_FAILED: &str = "Username and password not Match";
pub const UNKNOWN_USER_TYPE: &str = "User Type Not Exist";

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = flash::take(jar);
    (jar, views::login_page(&flashes))
}

// ── POST /dologin ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn do_login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, SchoolError> {
    let Form(form) = form.map_err(|e| SchoolError::InvalidForm(e.body_text()))?;
    let usecase = LoginUseCase {
        repo: state.user_repo(),
    };
    let outcome = usecase
        .execute(LoginInput {
            email: form.email,
            password: form.password,
        })
        .await?;

    let (user, landing) = match outcome {
        LoginOutcome::LoggedIn { user, landing } => (user, landing),
        LoginOutcome::NoMatch => {
            let jar = flash::push(jar, FlashMessage::error(LOGIN_FAILED));
            return Ok((jar, Redirect::to("/")).into_response());
        }
        LoginOutcome::UnknownRole(_) => {
            let jar = flash::push(jar, FlashMessage::error(UNKNOWN_USER_TYPE));
            return Ok((jar, Redirect::to("/")).into_response());
        }
    };

    let settings = &state.session;
    let (token, _) =
        issue_session(user.id, &settings.secret, settings.ttl_secs).context("issue session")?;
    let jar = set_session_cookie(jar, token, settings.ttl_secs, settings.secure_cookies);
    tracing::info!(user_id = user.id, ?landing, "user logged in");

    let response = match landing {
        Landing::HodHome => (jar, Redirect::to("/Hod/home")).into_response(),
        Landing::StaffPanel => (jar, views::staff_panel()).into_response(),
        Landing::StudentPanel => (jar, views::student_panel()).into_response(),
    };
    Ok(response)
}

// ── GET /dologout ────────────────────────────────────────────────────────────

pub async fn do_logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.session.secure_cookies);
    (jar, Redirect::to("/"))
}
