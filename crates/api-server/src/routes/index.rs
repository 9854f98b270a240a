//! Home endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Serialize)]
struct EndpointIndex {
    tasks: &'static str,
    notifications: &'static str,
    health: &'static str,
}

#[derive(Serialize)]
struct IndexResponse {
    app: String,
    environment: String,
    message: &'static str,
    endpoints: EndpointIndex,
}

async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    info!("Home endpoint accessed");
    Json(IndexResponse {
        app: state.config().app_name.clone(),
        environment: state.config().app_env.clone(),
        message: "Welcome to Simple Task Manager",
        endpoints: EndpointIndex {
            tasks: "/api/tasks",
            notifications: "/api/notifications",
            health: "/health",
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::state::AppState;

    #[tokio::test]
    async fn index_lists_available_endpoints() {
        let state = AppState::new(Config {
            app_name: "SimpleTaskManager".to_string(),
            app_env: "development".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "INFO".to_string(),
            max_workers: 1,
        });
        let app = super::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["message"], "Welcome to Simple Task Manager");
        assert_eq!(payload["endpoints"]["tasks"], "/api/tasks");
        assert_eq!(payload["endpoints"]["notifications"], "/api/notifications");
        assert_eq!(payload["endpoints"]["health"], "/health");
    }
}
