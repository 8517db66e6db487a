use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, infra::db::Db};

use super::data::Repository;
use super::domain::VisitCount;

#[derive(Serialize, Deserialize)]
pub(crate) struct VisitCountDto {
    #[serde(rename = "visitCount")]
    pub visit_count: i64,
}

impl From<VisitCount> for VisitCountDto {
    fn from(value: VisitCount) -> Self {
        Self { visit_count: value.value() }
    }
}

struct Container {
    repo: Repository,
}
impl Container {
    fn new(db: &Db) -> Arc<Self> {
        Arc::new(Container {
            repo: Repository::new(db),
        })
    }
}
type AppState = Arc<Container>;

pub(crate) const PATH: &str = "/visits";

pub(crate) fn router(db: &Db) -> Router {
    Router::new()
        .route("/", get(record_visit).post(record_visit))
        .with_state(Container::new(db))
}

// The trigger payload is deliberately not inspected. Any request on the
// route counts as one visit.
async fn record_visit(State(state): State<AppState>) -> Response {
    let repo = &state.repo;

    match repo.increment().await {
        Ok(count) => (StatusCode::OK, Json(VisitCountDto::from(count))).into_response(),
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, AppError::new(err.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use super::*;

    async fn test_router(migrated: bool) -> Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        if migrated {
            sqlx::migrate!().run(&pool).await.unwrap();
        }

        router(&Db::new(pool))
    }

    #[tokio::test]
    async fn first_visit_returns_count_of_one() {
        let router = test_router(true).await;

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(StatusCode::OK, response.status());
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(br#"{"visitCount":1}"#, &body[..]);
    }

    #[tokio::test]
    async fn each_request_counts_exactly_once() {
        let router = test_router(true).await;

        for expected in [r#"{"visitCount":1}"#, r#"{"visitCount":2}"#, r#"{"visitCount":3}"#] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();

            let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
            assert_eq!(expected.as_bytes(), &body[..]);
        }
    }

    #[tokio::test]
    async fn post_with_payload_is_accepted() {
        let router = test_router(true).await;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from("ignored payload"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(StatusCode::OK, response.status());
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(br#"{"visitCount":1}"#, &body[..]);
    }

    #[tokio::test]
    async fn store_failure_returns_error_body() {
        // No migrations, so the insert fails and the handler must surface
        // the store's message under the error key.
        let router = test_router(false).await;

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let message = body.get("error").unwrap().as_str().unwrap();
        assert!(message.contains("no such table"));
    }
}
