use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use campus_core::error::{method_not_allowed, not_found};
use campus_core::health::{healthz, readyz};
use campus_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{do_login, do_logout, login_page},
    hod::hod_home,
    profile::{profile, update_profile},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login
        .route("/", get(login_page))
        .route("/dologin", post(do_login))
        .route("/dologout", get(do_logout))
        // Profile
        .route("/profile", get(profile))
        .route("/profile/update", post(update_profile))
        // HOD
        .route("/Hod/home", get(hod_home));
    if state.serve_media {
        router = router.nest_service("/media", ServeDir::new(&state.media.root));
    }
    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
