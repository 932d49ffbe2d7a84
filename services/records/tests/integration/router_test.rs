use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use campus_core::media::FsMediaStore;
use campus_records::router::build_router;
use campus_records::state::AppState;
use campus_testing::auth::MockSession;

fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        session: MockSession::settings("/login/"),
        media: FsMediaStore {
            root: std::env::temp_dir().join("campus-records-test-media"),
        },
        serve_media: false,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_redirect_protected_pages_to_login() {
    let server = server();

    for path in [
        "/receipes/",
        "/update-receipe/1",
        "/delete-receipe/1",
        "/report-cards/",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login/", "{path}");
    }
}

#[tokio::test]
async fn should_redirect_recipe_post_without_session() {
    let response = server().post("/receipes/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login/");
}

#[tokio::test]
async fn should_reject_forged_session() {
    let response = server()
        .get("/receipes/")
        .add_header(
            axum::http::header::COOKIE,
            axum::http::HeaderValue::from_static("campus_session=not.a.jwt"),
        )
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login/");
}

#[tokio::test]
async fn should_render_public_pages() {
    let server = server();

    let home = server.get("/").await;
    home.assert_status_ok();
    assert!(home.text().contains(r#"href="/receipes/""#));

    let login = server.get("/login/").await;
    login.assert_status_ok();
    assert!(login.text().contains(r#"action="/login/""#));

    let register = server.get("/register/").await;
    register.assert_status_ok();
    assert!(register.text().contains(r#"name="first_name""#));
}

#[tokio::test]
async fn should_flash_generic_error_for_blank_login() {
    let response = server()
        .post("/login/")
        .form(&[("username", " "), ("password", "x")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login/");
    let flash = response.cookie("campus_flash");
    assert!(!flash.value().is_empty());
}

#[tokio::test]
async fn should_flash_blank_registration() {
    let response = server()
        .post("/register/")
        .form(&[("username", ""), ("password", "")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/register/");
}

#[tokio::test]
async fn should_clear_session_on_logout() {
    let (name, value) = MockSession::new(1).cookie_header();

    let response = server().get("/logout/").add_header(name, value).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login/");
    assert_eq!(response.cookie("campus_session").value(), "");
}

#[tokio::test]
async fn should_report_health() {
    let server = server();

    server.get("/healthz").await.assert_status_ok();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_render_not_found_page() {
    let response = server().get("/receipe/").await;

    response.assert_status_not_found();
    assert!(response.text().contains(r#"data-kind="NOT_FOUND""#));
}

#[tokio::test]
async fn should_treat_unparseable_recipe_id_as_not_found() {
    let server = server();
    let (name, value) = MockSession::new(1).cookie_header();

    for path in ["/delete-receipe/abc", "/update-receipe/1.5"] {
        let response = server
            .get(path)
            .add_header(name.clone(), value.clone())
            .await;
        response.assert_status_not_found();
        assert!(
            response.text().contains(r#"data-kind="RECIPE_NOT_FOUND""#),
            "{path}"
        );
    }
}

#[tokio::test]
async fn should_render_error_page_for_non_form_post() {
    let server = server();

    for path in ["/login/", "/register/"] {
        let response = server.post(path).text("username=x").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.text().contains(r#"data-kind="INVALID_FORM""#),
            "{path}"
        );
    }
}

#[tokio::test]
async fn should_render_error_page_for_non_multipart_recipe() {
    let (name, value) = MockSession::new(1).cookie_header();

    let response = server()
        .post("/receipes/")
        .add_header(name, value)
        .text("receipe_name=Poha")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains(r#"data-kind="INVALID_FORM""#));
}

#[tokio::test]
async fn should_render_error_page_for_wrong_method() {
    let response = server().delete("/receipes/").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.text().contains(r#"data-kind="METHOD_NOT_ALLOWED""#));
}
