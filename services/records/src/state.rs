use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use campus_auth_types::session::SessionSettings;
use campus_core::media::FsMediaStore;

use crate::infra::db::{
    DbAccountRepository, DbMarksRepository, DbRecipeRepository, DbReportCardRepository,
    DbStudentRepository,
};

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
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn recipe_repo(&self) -> DbRecipeRepository {
        DbRecipeRepository {
            db: self.db.clone(),
        }
    }

    pub fn student_repo(&self) -> DbStudentRepository {
        DbStudentRepository {
            db: self.db.clone(),
        }
    }

    pub fn marks_repo(&self) -> DbMarksRepository {
        DbMarksRepository {
            db: self.db.clone(),
        }
    }

    pub fn report_card_repo(&self) -> DbReportCardRepository {
        DbReportCardRepository {
            db: self.db.clone(),
        }
    }
}
