use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;

use campus_core::flash;

use crate::views;

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn home(jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = flash::take(jar);
    (jar, views::home_page(&flashes))
}
