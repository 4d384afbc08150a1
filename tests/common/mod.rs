//! Common test utilities
//!
//! Builds the full router around an in-memory account store, a low bcrypt
//! cost and a temporary static directory, and wraps it in an axum-test
//! `TestServer`. Cookies are not saved between requests; tests forward the
//! `sid` cookie explicitly.

#![allow(dead_code)]

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderValue;
use axum_test::{TestResponse, TestServer};
use tempfile::TempDir;

use boardgame_site::backend::auth::AccountStore;
use boardgame_site::backend::routes::create_router;
use boardgame_site::backend::server::init::build_state;
use boardgame_site::backend::server::{AppState, ServerConfig};

pub const INDEX_HTML: &str = "<!doctype html><title>board</title>";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _static_dir: TempDir,
}

pub async fn test_app() -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();

    let config = ServerConfig {
        bcrypt_cost: 4,
        static_dir: static_dir.path().to_path_buf(),
        ..ServerConfig::default()
    };

    let accounts = AccountStore::in_memory().await.unwrap();
    let state = build_state(accounts, &config);
    let router = create_router(state.clone(), &config.static_dir);

    TestApp {
        server: TestServer::new(router).unwrap(),
        state,
        _static_dir: static_dir,
    }
}

/// Full `Set-Cookie` header of the session cookie, if the response sent one
pub fn raw_session_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("sid="))
        .map(str::to_string)
}

/// Just the `sid=...` pair, ready to send back in a `Cookie` header
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    raw_session_cookie(response)
        .and_then(|raw| raw.split(';').next().map(str::to_string))
}

pub async fn signup(server: &TestServer, handle: &str, email: &str, pass: &str) -> TestResponse {
    server
        .post("/signup")
        .add_query_param("handle", handle)
        .add_query_param("email", email)
        .add_query_param("pass", pass)
        .await
}

pub async fn login(server: &TestServer, email: &str, pass: &str) -> TestResponse {
    server
        .post("/login")
        .add_query_param("email", email)
        .add_query_param("pass", pass)
        .await
}

pub async fn get_with_cookie(server: &TestServer, path: &str, cookie: &str) -> TestResponse {
    server
        .get(path)
        .add_header(COOKIE, HeaderValue::from_str(cookie).unwrap())
        .await
}

pub async fn post_with_cookie(server: &TestServer, path: &str, cookie: &str) -> TestResponse {
    server
        .post(path)
        .add_header(COOKIE, HeaderValue::from_str(cookie).unwrap())
        .await
}
