//! API endpoint handlers
//!
//! Each handler validates its input, looks the entity up in the store and
//! applies the mutation while holding the store lock, then formats the
//! envelope. Failures are returned as `ServerError`.

use super::extractors::{RawId, ValidJson};
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use enrollment_core::{
    validation, Course, CourseKey, CoursePatch, Student, StudentCourses, StudentKey, StudentPatch,
};
use serde::Serialize;
use tracing::{debug, info};

/// Success response with a `Link` header naming the affected resource
fn located<T: Serialize>(link: String, body: ApiResponse<T>) -> Response {
    ([(header::LINK, link)], Json(body)).into_response()
}

fn course_link(course_id: i64) -> String {
    format!("/courses/{}", course_id)
}

fn student_link(student_id: &str) -> String {
    format!("/students/{}", student_id)
}

/// Service banner
pub(super) async fn root() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("lab 15 API service successfully"))
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// Students

pub(super) async fn list_students(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Student>>> {
    let students = state.store.read().await.students().all().to_vec();
    debug!(count = students.len(), "Listing students");

    Json(ApiResponse::success("Get all students", students))
}

pub(super) async fn get_student(
    State(state): State<AppState>,
    RawId(raw_id): RawId,
) -> Result<Response, ServerError> {
    let student_id = validation::student_id(&raw_id)?;
    let student = state.store.read().await.students().get(&student_id)?.clone();

    Ok(located(
        student_link(&student_id),
        ApiResponse::success(format!("Get student {} successfully", student_id), student),
    ))
}

/// Resolve a student's enrolled course ids to course summaries
#[axum::debug_handler]
pub(super) async fn get_student_courses(
    State(state): State<AppState>,
    RawId(raw_id): RawId,
) -> Result<Response, ServerError> {
    let student_id = validation::student_id(&raw_id)?;
    let resolved: StudentCourses = state.store.read().await.student_courses(&student_id)?;

    Ok(located(
        format!("{}/courses", student_link(&student_id)),
        ApiResponse::success(format!("Get courses detail of student {}", student_id), resolved),
    ))
}

pub(super) async fn create_student(
    State(state): State<AppState>,
    ValidJson(student): ValidJson<Student>,
) -> Result<Response, ServerError> {
    let created = state.store.write().await.students_mut().insert(student)?.clone();
    info!(student_id = %created.student_id, "Student created");

    Ok(located(
        student_link(&created.student_id),
        ApiResponse::success(
            format!("Student {} has been added successfully", created.student_id),
            created,
        ),
    ))
}

pub(super) async fn update_student(
    State(state): State<AppState>,
    ValidJson(patch): ValidJson<StudentPatch>,
) -> Result<Response, ServerError> {
    let updated = state.store.write().await.students_mut().update(patch)?.clone();
    info!(student_id = %updated.student_id, "Student updated");

    Ok(located(
        student_link(&updated.student_id),
        ApiResponse::success(
            format!("Student {} has been updated successfully", updated.student_id),
            updated,
        ),
    ))
}

pub(super) async fn delete_student(
    State(state): State<AppState>,
    ValidJson(key): ValidJson<StudentKey>,
) -> Result<Response, ServerError> {
    let removed = state.store.write().await.students_mut().remove(&key.student_id)?;
    info!(student_id = %removed.student_id, "Student deleted");

    Ok(located(
        student_link(&removed.student_id),
        ApiResponse::success(
            format!("Student {} has been deleted successfully", removed.student_id),
            removed,
        ),
    ))
}

// Courses

pub(super) async fn list_courses(State(state): State<AppState>) -> Json<ApiResponse<Vec<Course>>> {
    let courses = state.store.read().await.courses().all().to_vec();
    debug!(count = courses.len(), "Listing courses");

    Json(ApiResponse::success("Get all courses", courses))
}

/// Single course lookup, served on both the canonical and the legacy path
#[axum::debug_handler]
pub(super) async fn get_course(
    State(state): State<AppState>,
    RawId(raw_id): RawId,
) -> Result<Response, ServerError> {
    let course_id = validation::course_id(&raw_id)?;
    let course = state.store.read().await.courses().get(&course_id)?.clone();

    Ok(located(
        course_link(course_id),
        ApiResponse::success(format!("Get course {} successfully", course_id), course),
    ))
}

pub(super) async fn create_course(
    State(state): State<AppState>,
    ValidJson(course): ValidJson<Course>,
) -> Result<Response, ServerError> {
    let created = state.store.write().await.courses_mut().insert(course)?.clone();
    info!(course_id = created.course_id, "Course created");

    Ok(located(
        course_link(created.course_id),
        ApiResponse::success(
            format!("Course {} has been added successfully", created.course_id),
            created,
        ),
    ))
}

pub(super) async fn update_course(
    State(state): State<AppState>,
    ValidJson(patch): ValidJson<CoursePatch>,
) -> Result<Response, ServerError> {
    let updated = state.store.write().await.courses_mut().update(patch)?.clone();
    info!(course_id = updated.course_id, "Course updated");

    Ok(located(
        course_link(updated.course_id),
        ApiResponse::success(
            format!("Course {} has been updated successfully", updated.course_id),
            updated,
        ),
    ))
}

pub(super) async fn delete_course(
    State(state): State<AppState>,
    ValidJson(key): ValidJson<CourseKey>,
) -> Result<Response, ServerError> {
    let removed = state.store.write().await.courses_mut().remove(&key.course_id)?;
    info!(course_id = removed.course_id, "Course deleted");

    Ok(located(
        course_link(removed.course_id),
        ApiResponse::success(
            format!("Course {} has been deleted successfully", removed.course_id),
            removed,
        ),
    ))
}
