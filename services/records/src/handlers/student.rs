use axum::extract::{Path, RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use campus_core::flash;

use crate::error::RecordsError;
use crate::handlers::parse_query;
use crate::state::AppState;
use crate::usecase::marks::SeeMarksUseCase;
use crate::usecase::student::{SearchStudentsInput, SearchStudentsUseCase};
use crate::views;

// ── GET /students/ ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct StudentListQuery {
    pub search: Option<String>,
    /// Kept as text so a malformed value falls back to page 1.
    pub page: Option<String>,
}

pub async fn list_students(
    State(state): State<AppState>,
    jar: CookieJar,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, RecordsError> {
    let query: StudentListQuery = parse_query(raw_query.as_deref());
    let usecase = SearchStudentsUseCase {
        repo: state.student_repo(),
    };
    let students = usecase
        .execute(SearchStudentsInput {
            search: query.search.clone(),
            page: query.page,
        })
        .await?;
    let (jar, flashes) = flash::take(jar);
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    Ok((jar, views::students_page(&students, search, &flashes)).into_response())
}

// ── GET /see_marks/{student_id} ──────────────────────────────────────────────

pub async fn see_marks(
    State(state): State<AppState>,
    Path(student_code): Path<String>,
) -> Result<Response, RecordsError> {
    let usecase = SeeMarksUseCase {
        repo: state.marks_repo(),
    };
    let sheet = usecase.execute(&student_code).await?;
    Ok(views::marks_page(&sheet).into_response())
}
