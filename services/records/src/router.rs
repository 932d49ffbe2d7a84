use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use campus_core::error::{method_not_allowed, not_found};
use campus_core::health::{healthz, readyz};
use campus_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{do_login, do_register, login_page, logout, register_page},
    home::home,
    recipe::{create_recipe, delete_recipe, edit_recipe, list_recipes, update_recipe},
    report_card::list_report_cards,
    student::{list_students, see_marks},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/", get(home))
        .route("/login/", get(login_page).post(do_login))
        .route("/register/", get(register_page).post(do_register))
        .route("/logout/", get(logout))
        // Recipes
        .route("/receipes/", get(list_recipes).post(create_recipe))
        .route("/delete-receipe/{id}", get(delete_recipe))
        .route("/update-receipe/{id}", get(edit_recipe).post(update_recipe))
        // Students
        .route("/students/", get(list_students))
        .route("/see_marks/{student_id}", get(see_marks))
        // Report cards
        .route("/report-cards/", get(list_report_cards));
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
