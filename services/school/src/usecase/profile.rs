use anyhow::Context as _;

use campus_auth_types::password;
use campus_core::media::{self, ImageError, MediaStore, Upload};

use crate::domain::repository::UserRepository;
use crate::domain::types::{ProfileChanges, SchoolUser};
use crate::error::SchoolError;

/// Media folder for profile pictures.
pub const PROFILE_PIC_FOLDER: &str = "profile_pic";

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<SchoolUser, SchoolError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(SchoolError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub first_name: String,
    pub last_name: String,
    /// Re-hashed and stored only when non-empty.
    pub password: String,
    pub profile_pic: Option<Upload>,
}

/// Why a profile update did not happen.
#[derive(Debug, thiserror::Error)]
pub enum ProfileUpdateError {
    /// The session refers to a user that no longer exists.
    #[error("user not found")]
    UserNotFound,
    #[error("{0}")]
    InvalidImage(#[from] ImageError),
    /// Hashing, file storage or the database write failed.
    #[error("profile could not be stored: {0:#}")]
    Storage(anyhow::Error),
}

impl From<SchoolError> for ProfileUpdateError {
    fn from(e: SchoolError) -> Self {
        match e {
            SchoolError::UserNotFound => Self::UserNotFound,
            SchoolError::Internal(e) => Self::Storage(e),
            other => Self::Storage(anyhow::Error::new(other)),
        }
    }
}

pub struct UpdateProfileUseCase<R: UserRepository, M: MediaStore> {
    pub repo: R,
    pub media: M,
}

impl<R: UserRepository, M: MediaStore> UpdateProfileUseCase<R, M> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: UpdateProfileInput,
    ) -> Result<(), ProfileUpdateError> {
        // Reject a bad picture before anything is written.
        let picture = match input.profile_pic {
            Some(upload) => Some((upload.image_format()?, upload)),
            None => None,
        };

        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(ProfileUpdateError::UserNotFound);
        }

        let password_hash = if input.password.is_empty() {
            None
        } else {
            let hash = password::hash(input.password.clone())
                .await
                .context("hash new password")
                .map_err(ProfileUpdateError::Storage)?;
            Some(hash)
        };

        let profile_pic = match picture {
            Some((format, upload)) => {
                let path = self
                    .media
                    .save(PROFILE_PIC_FOLDER, format, &upload)
                    .await
                    .context("store profile picture")
                    .map_err(ProfileUpdateError::Storage)?;
                Some(path)
            }
            None => None,
        };

        let changes = ProfileChanges {
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            profile_pic,
        };
        let written = self.repo.update_profile(user_id, &changes).await;
        if !matches!(written, Ok(true)) {
            media::discard(&self.media, changes.profile_pic.as_deref()).await;
            written?;
            return Err(ProfileUpdateError::UserNotFound);
        }
        tracing::info!(
            user_id,
            password_changed = changes.password_hash.is_some(),
            picture_changed = changes.profile_pic.is_some(),
            "profile updated"
        );
        Ok(())
    }
}
