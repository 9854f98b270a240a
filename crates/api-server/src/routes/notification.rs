//! Notification API endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use tm_core::notification::Notification;

use crate::state::AppState;

#[derive(Serialize)]
struct ListNotificationsResponse {
    notifications: Vec<Notification>,
}

/// GET /api/notifications - List all notifications
async fn list_notifications(State(state): State<AppState>) -> Json<ListNotificationsResponse> {
    let notifications = state.notification_log().list().await;
    Json(ListNotificationsResponse { notifications })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/notifications", get(list_notifications))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::state::AppState;

    fn build_state() -> AppState {
        AppState::new(Config {
            app_name: "SimpleTaskManager".to_string(),
            app_env: "development".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "INFO".to_string(),
            max_workers: 1,
        })
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let state = build_state();
        let app = super::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/notifications")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload, json!({ "notifications": [] }));
    }

    #[tokio::test]
    async fn list_returns_recorded_notifications() {
        let state = build_state();
        state
            .notification_log()
            .send("New task created: Buy milk", "admin")
            .await;
        let app = super::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/notifications")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            payload["notifications"][0],
            json!({
                "message": "New task created: Buy milk",
                "recipient": "admin",
                "sent": true
            })
        );
    }
}
