use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use campus_auth_types::session::SessionSettings;
use campus_core::media::FsMediaStore;

use crate::infra::db::DbUserRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub session: SessionSettings,
    pub media: FsMediaStore,
    /// Mount the media root under `/media`.
    #[from_ref(skip)]
    pub serve_media: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
