//! Insert and list handlers for the reference entities allocations point at.
//! Inserts require an admin session; listings are public.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use roomgrid_core::models::catalog::{
    require_name, Cohort, CohortFilter, CohortListing, Course, CreateCohortRequest,
    CreateCourseRequest, CreateDisciplineRequest, CreateInstructorRequest, CreateRoomRequest,
    CreateSemesterRequest, Discipline, Instructor, Overview, Room, Semester,
};
use roomgrid_db::repositories::catalog;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{
        auth::AdminSession,
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn create_room(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    payload.validate()?;

    let db_room =
        catalog::create_room(&state.db_pool, payload.name.trim(), payload.capacity, payload.kind)
            .await?;

    Ok((StatusCode::CREATED, Json(Room::try_from(db_room)?)))
}

#[axum::debug_handler]
pub async fn list_rooms(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = catalog::list_rooms(&state.db_pool)
        .await?
        .into_iter()
        .map(Room::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(rooms))
}

#[axum::debug_handler]
pub async fn create_instructor(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateInstructorRequest>,
) -> Result<(StatusCode, Json<Instructor>), AppError> {
    payload.validate()?;

    let db_instructor = catalog::create_instructor(
        &state.db_pool,
        payload.name.trim(),
        payload.normalized_email(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(db_instructor.into())))
}

#[axum::debug_handler]
pub async fn list_instructors(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let instructors = catalog::list_instructors(&state.db_pool).await?;
    Ok(Json(instructors.into_iter().map(Instructor::from).collect()))
}

#[axum::debug_handler]
pub async fn create_course(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    require_name("course name", &payload.name)?;

    let db_course = catalog::create_course(&state.db_pool, payload.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(db_course.into())))
}

#[axum::debug_handler]
pub async fn list_courses(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = catalog::list_courses(&state.db_pool).await?;
    Ok(Json(courses.into_iter().map(Course::from).collect()))
}

#[axum::debug_handler]
pub async fn create_semester(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateSemesterRequest>,
) -> Result<(StatusCode, Json<Semester>), AppError> {
    require_name("semester description", &payload.description)?;

    let db_semester = catalog::create_semester(&state.db_pool, payload.description.trim()).await?;
    Ok((StatusCode::CREATED, Json(db_semester.into())))
}

#[axum::debug_handler]
pub async fn list_semesters(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Semester>>, AppError> {
    let semesters = catalog::list_semesters(&state.db_pool).await?;
    Ok(Json(semesters.into_iter().map(Semester::from).collect()))
}

#[axum::debug_handler]
pub async fn create_discipline(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateDisciplineRequest>,
) -> Result<(StatusCode, Json<Discipline>), AppError> {
    require_name("discipline name", &payload.name)?;

    let db_discipline =
        catalog::create_discipline(&state.db_pool, payload.name.trim(), payload.course_id).await?;
    Ok((StatusCode::CREATED, Json(db_discipline.into())))
}

#[axum::debug_handler]
pub async fn list_course_disciplines(
    State(state): State<Arc<ApiState>>,
    ApiPath(course_id): ApiPath<Uuid>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = catalog::list_disciplines_by_course(&state.db_pool, course_id).await?;
    Ok(Json(disciplines.into_iter().map(Discipline::from).collect()))
}

#[axum::debug_handler]
pub async fn create_cohort(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    ApiJson(payload): ApiJson<CreateCohortRequest>,
) -> Result<(StatusCode, Json<Cohort>), AppError> {
    payload.validate()?;

    let db_cohort = catalog::create_cohort(
        &state.db_pool,
        payload.identifier.trim(),
        payload.course_id,
        payload.semester_id,
        payload.enrolled_count,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(db_cohort.into())))
}

#[axum::debug_handler]
pub async fn list_cohorts(
    State(state): State<Arc<ApiState>>,
    ApiQuery(filter): ApiQuery<CohortFilter>,
) -> Result<Json<Vec<CohortListing>>, AppError> {
    let cohorts = catalog::list_cohorts(&state.db_pool, &filter).await?;
    Ok(Json(cohorts.into_iter().map(CohortListing::from).collect()))
}

#[axum::debug_handler]
pub async fn overview(State(state): State<Arc<ApiState>>) -> Result<Json<Overview>, AppError> {
    Ok(Json(catalog::overview(&state.db_pool).await?))
}
