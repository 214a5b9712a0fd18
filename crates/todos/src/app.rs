use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::USER_ID_HEADER,
    handlers::{
        health::livez,
        todos::{create_todo, delete_todo, get_todo, list_todos, set_attachment, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Browser clients call the API cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(USER_ID_HEADER),
        ]);

    let api_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/todos/{todo_id}/attachment", put(set_attachment))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn request(method: &str, uri: &str, user: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, user: &str, name: &str) -> serde_json::Value {
        let body = format!(r#"{{"name": "{name}", "dueDate": "2024-01-05"}}"#);
        let response = app
            .clone()
            .oneshot(request("POST", "/api/todos", Some(user), Some(&body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["item"].clone()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("GET", "/livez", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("GET", "/api/todos", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_todos_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("GET", "/api/todos", Some("u1"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_todo() {
        let app = create_app(AppState::default());

        let item = create(&app, "u1", "Buy milk").await;
        assert_eq!(item["name"], "Buy milk");
        assert_eq!(item["userId"], "u1");
        assert_eq!(item["done"], false);
        assert!(item.get("attachmentUrl").is_none());

        let todo_id = item["todoId"].as_str().unwrap();
        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/todos/{todo_id}"),
                Some("u1"),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["item"], item);
    }

    #[tokio::test]
    async fn test_create_with_invalid_payload_is_bad_request() {
        let app = create_app(AppState::default());

        let malformed = app
            .clone()
            .oneshot(request("POST", "/api/todos", Some("u1"), Some("{not json")))
            .await
            .unwrap();
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        let blank_name = app
            .oneshot(request(
                "POST",
                "/api/todos",
                Some("u1"),
                Some(r#"{"name": "", "dueDate": "2024-01-05"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(blank_name.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_other_users_todo_is_not_found() {
        let app = create_app(AppState::default());
        let item = create(&app, "u1", "Buy milk").await;
        let todo_id = item["todoId"].as_str().unwrap();

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/todos/{todo_id}"),
                Some("u2"),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_todo() {
        let app = create_app(AppState::default());
        let item = create(&app, "u1", "Buy milk").await;
        let todo_id = item["todoId"].as_str().unwrap();
        let uri = format!("/api/todos/{todo_id}");

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                &uri,
                Some("u1"),
                Some(r#"{"name": "Buy oat milk", "dueDate": "2024-01-06", "done": true}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", &uri, Some("u1"), None))
            .await
            .unwrap();
        let updated = json_body(response).await["item"].clone();
        assert_eq!(updated["name"], "Buy oat milk");
        assert_eq!(updated["dueDate"], "2024-01-06");
        assert_eq!(updated["done"], true);
        assert_eq!(updated["createdAt"], item["createdAt"]);
    }

    #[tokio::test]
    async fn test_update_missing_todo_is_not_found() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request(
                "PATCH",
                "/api/todos/missing",
                Some("u1"),
                Some(r#"{"name": "A", "dueDate": "2024-01-01", "done": true}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_with_partial_payload_is_bad_request() {
        let app = create_app(AppState::default());
        let item = create(&app, "u1", "Buy milk").await;
        let todo_id = item["todoId"].as_str().unwrap();

        let response = app
            .oneshot(request(
                "PATCH",
                &format!("/api/todos/{todo_id}"),
                Some("u1"),
                Some(r#"{"done": true}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_todo_is_idempotent() {
        let app = create_app(AppState::default());
        let item = create(&app, "u1", "Buy milk").await;
        let todo_id = item["todoId"].as_str().unwrap();
        let uri = format!("/api/todos/{todo_id}");

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(request("DELETE", &uri, Some("u1"), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(request("GET", &uri, Some("u1"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_attachment() {
        let app = create_app(AppState::default());
        let item = create(&app, "u1", "Buy milk").await;
        let todo_id = item["todoId"].as_str().unwrap();

        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/todos/{todo_id}/attachment"),
                Some("u1"),
                Some(r#"{"attachmentUrl": "https://x/y"}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_body(response).await["item"].clone();
        assert_eq!(updated["attachmentUrl"], "https://x/y");
        assert_eq!(updated["name"], item["name"]);
        assert_eq!(updated["createdAt"], item["createdAt"]);
    }

    #[tokio::test]
    async fn test_list_only_returns_callers_todos() {
        let app = create_app(AppState::default());
        create(&app, "u1", "One").await;
        create(&app, "u1", "Two").await;
        create(&app, "u2", "Other").await;

        let response = app
            .oneshot(request("GET", "/api/todos", Some("u1"), None))
            .await
            .unwrap();

        let json = json_body(response).await;
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item["userId"] == "u1"));
    }
}
