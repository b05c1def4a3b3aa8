//! Grade assignment routes.
//!
//! Provides the `POST /assign-grade` endpoint through which the professor of
//! record appends a grade to an enrollment.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use db::models::{enrollment::Model as Enrollment, grade::Model as Grade};
use sea_orm::{DbErr, TransactionTrait};
use serde::{Deserialize, Serialize};
use util::state::AppState;

use crate::response::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct AssignGradeRequest {
    pub enrollment_id: i64,
    pub grade: f64,
    pub professor_id: i64,
}

#[derive(Debug, Serialize)]
pub struct AssignGradeResponse {
    pub message: String,
}

/// Builds the `/assign-grade` route group.
pub fn grades_routes() -> Router<AppState> {
    Router::new().route("/", post(assign_grade))
}

/// POST /assign-grade
///
/// Assign a grade to an enrollment. Only the professor teaching the
/// enrollment's course may do so; the caller's identity is the plain
/// `professor_id` field, unverified beyond that check.
///
/// A successful call always appends a new grade row — repeated calls for the
/// same enrollment accumulate grades rather than updating one.
///
/// ### Request Body
/// ```json
/// { "enrollment_id": 1, "grade": 90, "professor_id": 1 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "message": "Grade assigned successfully" }
/// ```
///
/// - `400 Bad Request` (grade outside [0, 100]; checked before touching the store)
/// ```json
/// { "error": "Grade must be between 0 and 100" }
/// ```
///
/// - `403 Forbidden` (professor does not teach the enrollment's course, or
///   the enrollment does not exist)
/// ```json
/// { "error": "Professor not authorized to assign grade for this course" }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "error": "detailed store error here" }
/// ```
pub async fn assign_grade(
    State(app_state): State<AppState>,
    Json(req): Json<AssignGradeRequest>,
) -> Response {
    // Validate that the grade is within the allowed range
    if req.grade < 0.0 || req.grade > 100.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Grade must be between 0 and 100")),
        )
            .into_response();
    }

    // The authorization check and the insert share one transaction so that
    // two concurrent calls cannot interleave between the check and the insert.
    let txn = match app_state.db().begin().await {
        Ok(txn) => txn,
        Err(err) => return store_error(err),
    };

    // Check if the professor teaches the course for the enrollment
    match Enrollment::is_taught_by(&txn, req.enrollment_id, req.professor_id).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new(
                    "Professor not authorized to assign grade for this course",
                )),
            )
                .into_response();
        }
        Err(err) => return store_error(err),
    }

    if let Err(err) = Grade::create(&txn, req.enrollment_id, req.grade).await {
        return store_error(err);
    }

    match txn.commit().await {
        Ok(()) => (
            StatusCode::OK,
            Json(AssignGradeResponse {
                message: "Grade assigned successfully".to_string(),
            }),
        )
            .into_response(),
        Err(err) => store_error(err),
    }
}

fn store_error(err: DbErr) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use db::models::{course, enrollment, grade, professor, student};
    use db::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, EntityTrait};
    use serde_json::Value;

    struct Seeded {
        enrollment_id: i64,
        professor_id: i64,
        other_professor_id: i64,
    }

    async fn seed(db: &DatabaseConnection) -> Seeded {
        let prof = professor::Model::create(db, "Dr. A").await.unwrap();
        let other = professor::Model::create(db, "Dr. B").await.unwrap();
        let course = course::Model::create(db, "Algorithms", prof.professor_id)
            .await
            .unwrap();
        let stud = student::Model::create(db, "Sam").await.unwrap();
        let enr = enrollment::Model::create(db, stud.student_id, course.course_id)
            .await
            .unwrap();

        Seeded {
            enrollment_id: enr.enrollment_id,
            professor_id: prof.professor_id,
            other_professor_id: other.professor_id,
        }
    }

    async fn grade_count(db: &DatabaseConnection) -> usize {
        grade::Entity::find().all(db).await.unwrap().len()
    }

    async fn call(
        db: &DatabaseConnection,
        enrollment_id: i64,
        grade: f64,
        professor_id: i64,
    ) -> Response {
        assign_grade(
            State(AppState::new(db.clone())),
            Json(AssignGradeRequest {
                enrollment_id,
                grade,
                professor_id,
            }),
        )
        .await
    }

    #[tokio::test]
    async fn out_of_range_grades_rejected_before_store() {
        let db = setup_test_db().await;
        let seeded = seed(&db).await;

        for bad in [-1.0, 101.0, 150.0] {
            let response = call(&db, seeded.enrollment_id, bad, seeded.professor_id).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["error"], "Grade must be between 0 and 100");
        }

        assert_eq!(grade_count(&db).await, 0);
    }

    #[tokio::test]
    async fn boundary_grades_accepted() {
        let db = setup_test_db().await;
        let seeded = seed(&db).await;

        for ok in [0.0, 100.0] {
            let response = call(&db, seeded.enrollment_id, ok, seeded.professor_id).await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(grade_count(&db).await, 2);
    }

    #[tokio::test]
    async fn wrong_professor_rejected_without_insert() {
        let db = setup_test_db().await;
        let seeded = seed(&db).await;

        let response = call(&db, seeded.enrollment_id, 90.0, seeded.other_professor_id).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["error"],
            "Professor not authorized to assign grade for this course"
        );
        assert_eq!(grade_count(&db).await, 0);
    }

    #[tokio::test]
    async fn unknown_enrollment_rejected_as_forbidden() {
        let db = setup_test_db().await;
        let seeded = seed(&db).await;

        let response = call(&db, 999, 90.0, seeded.professor_id).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(grade_count(&db).await, 0);
    }

    #[tokio::test]
    async fn repeated_assignments_accumulate_rows() {
        let db = setup_test_db().await;
        let seeded = seed(&db).await;

        for value in [80.0, 100.0] {
            let response = call(&db, seeded.enrollment_id, value, seeded.professor_id).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["message"], "Grade assigned successfully");
        }

        let grades = grade::Entity::find().all(&db).await.unwrap();
        let values: Vec<f64> = grades.iter().map(|g| g.grade).collect();
        assert_eq!(values, vec![80.0, 100.0]);
        assert!(grades.iter().all(|g| g.enrollment_id == seeded.enrollment_id));
    }
}
