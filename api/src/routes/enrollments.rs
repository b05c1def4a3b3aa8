//! Enrollment routes.
//!
//! Provides the `POST /enroll` endpoint that enrolls a student in a course.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use db::models::enrollment::Model as Enrollment;
use serde::{Deserialize, Serialize};
use util::state::AppState;

use crate::response::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub message: String,
    pub enrollment_id: i64,
}

/// Builds the `/enroll` route group.
pub fn enrollments_routes() -> Router<AppState> {
    Router::new().route("/", post(enroll_student))
}

/// POST /enroll
///
/// Enroll a student in a course. The ids are taken verbatim from the request
/// body; whether they refer to real rows is left to the store's foreign keys.
/// Enrolling the same pair twice creates a second enrollment row — there is
/// no duplicate prevention.
///
/// ### Request Body
/// ```json
/// { "student_id": 5, "course_id": 2 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "message": "Student enrolled successfully", "enrollment_id": 1 }
/// ```
///
/// - `500 Internal Server Error` (store failure, including foreign-key violations)
/// ```json
/// { "error": "detailed store error here" }
/// ```
pub async fn enroll_student(
    State(app_state): State<AppState>,
    Json(req): Json<EnrollRequest>,
) -> Response {
    match Enrollment::create(app_state.db(), req.student_id, req.course_id).await {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(EnrollResponse {
                message: "Student enrolled successfully".to_string(),
                enrollment_id: enrollment.enrollment_id,
            }),
        )
            .into_response(),
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
    use db::models::{course, professor, student};
    use db::test_utils::setup_test_db;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;

    async fn seed_course_and_student(db: &DatabaseConnection) -> (i64, i64) {
        let prof = professor::Model::create(db, "Dr. A").await.unwrap();
        let course = course::Model::create(db, "Algorithms", prof.professor_id)
            .await
            .unwrap();
        let stud = student::Model::create(db, "Sam").await.unwrap();
        (stud.student_id, course.course_id)
    }

    #[tokio::test]
    async fn enroll_student_returns_generated_id_and_message() {
        let db = setup_test_db().await;
        let (student_id, course_id) = seed_course_and_student(&db).await;

        let state = AppState::new(db);
        let response = enroll_student(
            State(state.clone()),
            Json(EnrollRequest {
                student_id,
                course_id,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Student enrolled successfully");
        assert_eq!(json["enrollment_id"], 1);

        // A second attempt for the same pair is another row, not an error.
        let response = enroll_student(
            State(state),
            Json(EnrollRequest {
                student_id,
                course_id,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["enrollment_id"], 2);
    }

    #[tokio::test]
    async fn enroll_student_store_failure_maps_to_500() {
        let db = setup_test_db().await;
        // No courses or students seeded: the foreign keys reject the insert.
        let response = enroll_student(
            State(AppState::new(db)),
            Json(EnrollRequest {
                student_id: 5,
                course_id: 2,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string());
    }
}
