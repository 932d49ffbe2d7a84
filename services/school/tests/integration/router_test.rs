use axum::http::{HeaderValue, StatusCode, header};
use axum_test::{TestResponse, TestServer};
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use campus_auth_types::password::hash_password;
use campus_auth_types::session::validate_session;
use campus_core::media::FsMediaStore;
use campus_school::handlers::auth::UNKNOWN_USER_TYPE;
use campus_school::router::build_router;
use campus_school::state::AppState;
use campus_school_schema::custom_users;
use campus_testing::auth::{MockSession, TEST_SESSION_SECRET};

use crate::helpers::TEST_PASSWORD;

fn server_with(db: DatabaseConnection) -> TestServer {
    let state = AppState {
        db,
        session: MockSession::settings("/"),
        media: FsMediaStore {
            root: std::env::temp_dir().join("campus-school-test-media"),
        },
        serve_media: false,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(DatabaseConnection::Disconnected)
}

/// A database whose single email lookup finds a user with `user_type`.
fn db_with_user(user_type: i16) -> DatabaseConnection {
    let model = custom_users::Model {
        id: 7,
        email: "asha@school.test".to_owned(),
        username: "asha".to_owned(),
        password: hash_password(TEST_PASSWORD).unwrap(),
        first_name: "Asha".to_owned(),
        last_name: "Rao".to_owned(),
        user_type,
        profile_pic: None,
        date_joined: Utc::now(),
    };
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model]])
        .into_connection()
}

fn set_cookie_value(response: &TestResponse, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|c| c.strip_prefix(&prefix))
        .map(|rest| rest.split(';').next().unwrap_or_default().to_owned())
}

async fn log_in(user_type: i16, password: &str) -> TestResponse {
    server_with(db_with_user(user_type))
        .post("/dologin")
        .form(&[("email", "asha@school.test"), ("password", password)])
        .await
}

fn assert_session_for(response: &TestResponse, user_id: i32) {
    let token = set_cookie_value(response, "campus_session").expect("session cookie set");
    let session = validate_session(&token, TEST_SESSION_SECRET).unwrap();
    assert_eq!(session.user_id, user_id);
}

#[tokio::test]
async fn should_send_hod_to_hod_home() {
    let response = log_in(1, TEST_PASSWORD).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/Hod/home");
    assert_session_for(&response, 7);
}

#[tokio::test]
async fn should_show_staff_panel_to_staff() {
    let response = log_in(2, TEST_PASSWORD).await;

    response.assert_status_ok();
    assert!(response.text().contains("This is STAFF Panel"));
    assert_session_for(&response, 7);
}

#[tokio::test]
async fn should_show_student_panel_to_student() {
    let response = log_in(3, TEST_PASSWORD).await;

    response.assert_status_ok();
    assert!(response.text().contains("This is STUDENT Panel"));
    assert_session_for(&response, 7);
}

#[tokio::test]
async fn should_refuse_unknown_user_type_without_session() {
    let response = log_in(9, TEST_PASSWORD).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert!(set_cookie_value(&response, "campus_session").is_none());

    let flash = set_cookie_value(&response, "campus_flash").expect("flash cookie set");
    let page = server()
        .get("/")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&format!("campus_flash={flash}")).unwrap(),
        )
        .await;
    assert!(page.text().contains(UNKNOWN_USER_TYPE), "{}", page.text());
}

#[tokio::test]
async fn should_not_log_in_with_wrong_password() {
    let response = log_in(1, "not the password").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert!(set_cookie_value(&response, "campus_session").is_none());
}

#[tokio::test]
async fn should_render_error_page_for_non_form_login() {
    let response = server().post("/dologin").text("email=a@b.c").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains(r#"data-kind="INVALID_FORM""#));
}

#[tokio::test]
async fn should_render_error_page_for_non_multipart_profile_update() {
    let (name, value) = MockSession::new(1).cookie_header();

    let response = server()
        .post("/profile/update")
        .add_header(name, value)
        .text("first_name=x")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains(r#"data-kind="INVALID_FORM""#));
}

#[tokio::test]
async fn should_render_error_page_for_wrong_method() {
    let response = server().delete("/profile").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.text().contains(r#"data-kind="METHOD_NOT_ALLOWED""#));
}

#[tokio::test]
async fn should_render_login_page() {
    let response = server().get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"action="/dologin""#));
}

#[tokio::test]
async fn should_redirect_protected_pages_to_login() {
    let server = server();

    for path in ["/profile", "/Hod/home"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/", "{path}");
    }
}

#[tokio::test]
async fn should_redirect_profile_update_without_session() {
    let response = server().post("/profile/update").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn should_flash_generic_error_for_blank_login() {
    let response = server()
        .post("/dologin")
        .form(&[("email", ""), ("password", "x")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    let set_cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect();
    assert!(set_cookies.iter().any(|c| c.starts_with("campus_flash=")));
    assert!(!set_cookies.iter().any(|c| c.starts_with("campus_session=")));
}

#[tokio::test]
async fn should_clear_session_on_logout() {
    let session = MockSession::new(1);
    let (name, value) = session.cookie_header();

    let response = server().get("/dologout").add_header(name, value).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    let cookie = response.cookie("campus_session");
    assert_eq!(cookie.value(), "");
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
    let response = server().get("/no/such/page").await;

    response.assert_status_not_found();
    assert!(response.text().contains(r#"data-kind="NOT_FOUND""#));
}

#[tokio::test]
async fn should_attach_request_id() {
    let response = server().get("/healthz").await;

    assert!(response.headers().contains_key("x-request-id"));
}
