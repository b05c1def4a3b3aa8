//! HTTP route entry point.
//!
//! This module defines all HTTP entry points for the service. Routes are
//! organized by domain:
//! - `/courses` → course listing (public)
//! - `/enroll` → student enrollment
//! - `/assign-grade` → grade assignment by the professor of record
//! - `/average-grades` → per-course average grade report

use axum::Router;
use util::state::AppState;

pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod reports;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router mounts the four route groups under their base paths
/// and carries the shared [`AppState`] so handlers receive their store access
/// through the `State` extractor rather than a global.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/courses", courses::courses_routes())
        .nest("/enroll", enrollments::enrollments_routes())
        .nest("/assign-grade", grades::grades_routes())
        .nest("/average-grades", reports::reports_routes())
        .with_state(app_state)
}
