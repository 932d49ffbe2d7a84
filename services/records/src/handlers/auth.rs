use anyhow::Context as _;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use campus_auth_types::cookie::{clear_session_cookie, set_session_cookie};
use campus_auth_types::session::issue_session;
use campus_core::flash::{self, FlashMessage};

use crate::error::RecordsError;
use crate::state::AppState;
use crate::usecase::account::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::views;

pub const LOGIN_FAILED: &str = "Username and password not Match";
pub const ACCOUNT_CREATED: &str = "User created successfully.";

// ── GET /login/ ──────────────────────────────────────────────────────────────

pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = flash::take(jar);
    (jar, views::login_page(&flashes))
}

// ── POST /login/ ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn do_login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, RecordsError> {
    let Form(form) = form.map_err(|e| RecordsError::InvalidForm(e.body_text()))?;
    let usecase = LoginUseCase {
        repo: state.account_repo(),
    };
    let account = usecase
        .execute(LoginInput {
            username: form.username,
            password: form.password,
        })
        .await?;
    let Some(account) = account else {
        let jar = flash::push(jar, FlashMessage::error(LOGIN_FAILED));
        return Ok((jar, Redirect::to("/login/")).into_response());
    };

    let settings = &state.session;
    let (token, _) =
        issue_session(account.id, &settings.secret, settings.ttl_secs).context("issue session")?;
    let jar = set_session_cookie(jar, token, settings.ttl_secs, settings.secure_cookies);
    tracing::info!(account_id = account.id, "account logged in");
    Ok((jar, Redirect::to("/receipes/")).into_response())
}

// ── GET /register/ ───────────────────────────────────────────────────────────

pub async fn register_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = flash::take(jar);
    (jar, views::register_page(&flashes))
}

// ── POST /register/ ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn do_register(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Response, RecordsError> {
    let Form(form) = form.map_err(|e| RecordsError::InvalidForm(e.body_text()))?;
    let usecase = RegisterUseCase {
        repo: state.account_repo(),
    };
    let message = match usecase
        .execute(RegisterInput {
            first_name: form.first_name,
            last_name: form.last_name,
            username: form.username,
            password: form.password,
        })
        .await
    {
        Ok(_) => FlashMessage::success(ACCOUNT_CREATED),
        Err(e @ (RecordsError::UsernameTaken | RecordsError::InvalidForm(_))) => {
            FlashMessage::error(e.to_string())
        }
        Err(e) => return Err(e),
    };
    let jar = flash::push(jar, message);
    Ok((jar, Redirect::to("/register/")).into_response())
}

// ── GET /logout/ ─────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.session.secure_cookies);
    (jar, Redirect::to("/login/"))
}
