use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campus_core::html::error_page;

/// School service error variants.
#[derive(Debug, thiserror::Error)]
pub enum SchoolError {
    #[error("user not found")]
    UserNotFound,
    #[error("you do not have access to this page")]
    Forbidden,
    #[error("invalid form: {0}")]
    InvalidForm(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SchoolError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for SchoolError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_page(status, self.kind(), &self.to_string())
    }
}
