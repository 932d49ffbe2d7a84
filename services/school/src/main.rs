use sea_orm::Database;
use tracing::info;

use campus_auth_types::session::SessionSettings;
use campus_core::media::FsMediaStore;
use campus_core::tracing::init_tracing;

use campus_school::config::SchoolConfig;
use campus_school::router::build_router;
use campus_school::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing("campus_school");

    let config = SchoolConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        session: SessionSettings {
            secret: config.session_secret,
            ttl_secs: config.session_ttl_secs,
            login_path: "/".to_owned(),
            secure_cookies: config.cookie_secure,
        },
        media: FsMediaStore {
            root: config.media_root,
        },
        serve_media: config.serve_media,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.school_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("school service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
