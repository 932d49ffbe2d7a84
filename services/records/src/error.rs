use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campus_core::html::error_page;
use campus_core::media::ImageError;

/// Records service error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("recipe not found")]
    RecipeNotFound,
    #[error("Username already exist/taken.")]
    UsernameTaken,
    #[error("{0}")]
    InvalidForm(String),
    #[error("invalid image: {0}")]
    InvalidImage(#[from] ImageError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecordsError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::InvalidImage(_) => "INVALID_IMAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RecipeNotFound => StatusCode::NOT_FOUND,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidForm(_) | Self::InvalidImage(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_page(status, self.kind(), &self.to_string())
    }
}
