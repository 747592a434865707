use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::data::InMemoryCounterRepository;
use crate::domain::Counter;
use crate::server::error::ApiError;

/// State shared by the counter API handlers.
#[derive(Clone)]
pub struct ServerState {
    repository: InMemoryCounterRepository,
    latency: Duration,
}

impl ServerState {
    pub fn new(repository: InMemoryCounterRepository, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    pub fn repository(&self) -> &InMemoryCounterRepository {
        &self.repository
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[derive(Deserialize)]
struct UpdateCounterRequest {
    value: i64,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// Routes: `GET /counter`, `PUT /counter`, `GET /health`.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/counter", get(get_counter).put(put_counter))
        .route("/health", get(health))
        .with_state(state)
}

async fn get_counter(State(state): State<ServerState>) -> Json<Counter> {
    state.simulate_latency().await;
    Json(state.repository.load())
}

async fn put_counter(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<Counter>, ApiError> {
    let request: UpdateCounterRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    let counter = Counter::try_from(request.value)?;

    state.simulate_latency().await;
    let stored = state.repository.save(counter);
    tracing::info!(value = stored.value(), "Counter stored");
    Ok(Json(stored))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "counter-sync",
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn router(initial: u32) -> (InMemoryCounterRepository, Router) {
        let repo = InMemoryCounterRepository::new(Counter::new(initial));
        let state = ServerState::new(repo.clone(), Duration::ZERO);
        (repo, build_router(state))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn put(body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/counter")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_counter() {
        let (_repo, app) = router(12);
        let response = app
            .oneshot(Request::get("/counter").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"value": 12}));
    }

    #[tokio::test]
    async fn test_put_counter_stores_value() {
        let (repo, app) = router(0);
        let response = app.oneshot(put(r#"{"value": 5}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"value": 5}));
        assert_eq!(repo.load(), Counter::new(5));
    }

    #[tokio::test]
    async fn test_put_negative_is_rejected() {
        let (repo, app) = router(2);
        let response = app.oneshot(put(r#"{"value": -1}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "invalid_counter");
        assert_eq!(repo.load(), Counter::new(2));
    }

    #[tokio::test]
    async fn test_put_malformed_body_is_rejected() {
        let (_repo, app) = router(0);
        let response = app.oneshot(put("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "invalid_request");
    }

    #[tokio::test]
    async fn test_health() {
        let (_repo, app) = router(0);
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }
}
