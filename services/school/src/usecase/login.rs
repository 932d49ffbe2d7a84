use campus_auth_types::password;
use campus_domain::user::{Landing, UnknownRole};

use crate::domain::repository::UserRepository;
use crate::domain::types::SchoolUser;
use crate::error::SchoolError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Result of a credential check. Only `LoggedIn` may establish a session.
#[derive(Debug)]
pub enum LoginOutcome {
    LoggedIn { user: SchoolUser, landing: Landing },
    /// Credentials matched but the stored role code is not one we know.
    UnknownRole(UnknownRole),
    /// Unknown email or wrong password; callers must not tell them apart.
    NoMatch,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutcome, SchoolError> {
        let email = input.email.trim();
        if email.is_empty() {
            return Ok(LoginOutcome::NoMatch);
        }
        let Some(user) = self.repo.find_by_email(email).await? else {
            return Ok(LoginOutcome::NoMatch);
        };
        if !password::verify(input.password, user.password_hash.clone()).await {
            return Ok(LoginOutcome::NoMatch);
        }
        match user.role() {
            Ok(role) => Ok(LoginOutcome::LoggedIn {
                landing: role.landing(),
                user,
            }),
            Err(unknown) => {
                tracing::warn!(user_id = user.id, role_code = unknown.0, "unknown user type");
                Ok(LoginOutcome::UnknownRole(unknown))
            }
        }
    }
}
