use anyhow::Context as _;

use campus_auth_types::password;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, NewAccount};
use crate::error::RecordsError;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

pub struct RegisterUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Account, RecordsError> {
        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(RecordsError::InvalidForm(
                "Username and password are required.".to_owned(),
            ));
        }
        if self.repo.find_by_username(username).await?.is_some() {
            return Err(RecordsError::UsernameTaken);
        }
        let password_hash = password::hash(input.password.clone())
            .await
            .context("hash password")?;
        let account = self
            .repo
            .create(&NewAccount {
                username: username.to_owned(),
                password_hash,
                first_name: input.first_name.trim().to_owned(),
                last_name: input.last_name.trim().to_owned(),
            })
            .await?;
        tracing::info!(account_id = account.id, username = %account.username, "account registered");
        Ok(account)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct LoginUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> LoginUseCase<R> {
    /// `None` for an unknown username or a wrong password alike.
    pub async fn execute(&self, input: LoginInput) -> Result<Option<Account>, RecordsError> {
        let username = input.username.trim();
        if username.is_empty() {
            return Ok(None);
        }
        let Some(account) = self.repo.find_by_username(username).await? else {
            return Ok(None);
        };
        if !password::verify(input.password, account.password_hash.clone()).await {
            return Ok(None);
        }
        Ok(Some(account))
    }
}
