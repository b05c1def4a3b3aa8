//! Course listing routes.
//!
//! Provides the `GET /courses` endpoint returning every course together with
//! the professor teaching it.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::course::Model as Course;
use util::state::AppState;

use crate::response::ErrorResponse;

/// Builds the `/courses` route group.
pub fn courses_routes() -> Router<AppState> {
    Router::new().route("/", get(list_courses))
}

/// GET /courses
///
/// List all courses and the professor teaching each course. No filtering,
/// pagination, or ordering is applied; the rows come back in store order.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   { "course_name": "Algorithms", "professor_name": "Dr. A" }
/// ]
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "error": "detailed store error here" }
/// ```
pub async fn list_courses(State(app_state): State<AppState>) -> Response {
    match Course::with_professors(app_state.db()).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use db::models::{course, professor};
    use db::test_utils::setup_test_db;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn list_courses_returns_course_and_professor_names() {
        let db = setup_test_db().await;

        let prof = professor::Model::create(&db, "Dr. A").await.unwrap();
        course::Model::create(&db, "Algorithms", prof.professor_id)
            .await
            .unwrap();

        let state = AppState::new(db);
        let response = list_courses(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            json!([{ "course_name": "Algorithms", "professor_name": "Dr. A" }])
        );
    }

    #[tokio::test]
    async fn list_courses_empty_store_returns_empty_array() {
        let db = setup_test_db().await;

        let response = list_courses(State(AppState::new(db))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!([]));
    }
}
