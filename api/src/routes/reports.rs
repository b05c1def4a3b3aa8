//! Reporting routes.
//!
//! Provides the `GET /average-grades` endpoint showing the average grade for
//! each course.

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

/// Builds the `/average-grades` route group.
pub fn reports_routes() -> Router<AppState> {
    Router::new().route("/", get(average_grades))
}

/// GET /average-grades
///
/// Report the arithmetic mean grade per course. Only courses with at least
/// one graded enrollment appear; a course with no grades is omitted rather
/// than reported with a null or zero average.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   { "course_name": "Algorithms", "average_grade": 90.0 }
/// ]
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "error": "detailed store error here" }
/// ```
pub async fn average_grades(State(app_state): State<AppState>) -> Response {
    match Course::average_grades(app_state.db()).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        )
            .into_response(),
    }
}
