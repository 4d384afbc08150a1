//! Static asset serving tests

#[cfg(feature = "ssr")]
mod common;

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;

    use super::common::*;

    #[tokio::test]
    async fn test_index_served_at_root() {
        let app = test_app().await;

        let response = app.server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_static_request_gets_session_cookie() {
        let app = test_app().await;

        let response = app.server.get("/index.html").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(session_cookie(&response).is_some());
        assert_eq!(app.state.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let app = test_app().await;

        let response = app.server.get("/missing.js").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
