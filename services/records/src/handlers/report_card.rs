use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use campus_auth_types::identity::SessionUser;
use campus_core::flash;

use crate::error::RecordsError;
use crate::state::AppState;
use crate::usecase::report_card::ListReportCardsUseCase;
use crate::views;

// ── GET /report-cards/ ───────────────────────────────────────────────────────

pub async fn list_report_cards(
    _session: SessionUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, RecordsError> {
    let usecase = ListReportCardsUseCase {
        repo: state.report_card_repo(),
    };
    let cards = usecase.execute().await?;
    let (jar, flashes) = flash::take(jar);
    Ok((jar, views::report_cards_page(&cards, &flashes)).into_response())
}
