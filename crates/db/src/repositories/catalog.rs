use crate::models::{
    DbCohort, DbCohortListing, DbCourse, DbDiscipline, DbInstructor, DbRoom, DbSemester,
};
use chrono::Utc;
use eyre::Result;
use roomgrid_core::models::catalog::{CohortFilter, Overview};
use roomgrid_core::models::enums::RoomKind;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Room Repository

pub async fn create_room(
    pool: &Pool<Postgres>,
    name: &str,
    capacity: i32,
    kind: RoomKind,
) -> Result<DbRoom> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating room: id={}, name={}, capacity={}, kind={}", id, name, capacity, kind);

    let room = sqlx::query_as::<_, DbRoom>(
        r#"
        INSERT INTO rooms (id, name, capacity, kind, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, capacity, kind, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(capacity)
    .bind(kind.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(room)
}

pub async fn list_rooms(pool: &Pool<Postgres>) -> Result<Vec<DbRoom>> {
    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, name, capacity, kind, created_at
        FROM rooms
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

// Instructor Repository

pub async fn create_instructor(
    pool: &Pool<Postgres>,
    name: &str,
    email: Option<&str>,
) -> Result<DbInstructor> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let instructor = sqlx::query_as::<_, DbInstructor>(
        r#"
        INSERT INTO instructors (id, name, email, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(instructor)
}

pub async fn list_instructors(pool: &Pool<Postgres>) -> Result<Vec<DbInstructor>> {
    let instructors = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, email, created_at
        FROM instructors
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(instructors)
}

// Course Repository

pub async fn create_course(pool: &Pool<Postgres>, name: &str) -> Result<DbCourse> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        INSERT INTO courses (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(course)
}

pub async fn list_courses(pool: &Pool<Postgres>) -> Result<Vec<DbCourse>> {
    let courses = sqlx::query_as::<_, DbCourse>(
        r#"
        SELECT id, name, created_at
        FROM courses
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

// Semester Repository

pub async fn create_semester(pool: &Pool<Postgres>, description: &str) -> Result<DbSemester> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let semester = sqlx::query_as::<_, DbSemester>(
        r#"
        INSERT INTO semesters (id, description, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, description, created_at
        "#,
    )
    .bind(id)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(semester)
}

pub async fn list_semesters(pool: &Pool<Postgres>) -> Result<Vec<DbSemester>> {
    let semesters = sqlx::query_as::<_, DbSemester>(
        r#"
        SELECT id, description, created_at
        FROM semesters
        ORDER BY description ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(semesters)
}

// Discipline Repository

pub async fn create_discipline(
    pool: &Pool<Postgres>,
    name: &str,
    course_id: Uuid,
) -> Result<DbDiscipline> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let discipline = sqlx::query_as::<_, DbDiscipline>(
        r#"
        INSERT INTO disciplines (id, name, course_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, course_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(course_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(discipline)
}

pub async fn list_disciplines_by_course(
    pool: &Pool<Postgres>,
    course_id: Uuid,
) -> Result<Vec<DbDiscipline>> {
    let disciplines = sqlx::query_as::<_, DbDiscipline>(
        r#"
        SELECT id, name, course_id, created_at
        FROM disciplines
        WHERE course_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(disciplines)
}

// Cohort Repository

pub async fn create_cohort(
    pool: &Pool<Postgres>,
    identifier: &str,
    course_id: Uuid,
    semester_id: Uuid,
    enrolled_count: i32,
) -> Result<DbCohort> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let cohort = sqlx::query_as::<_, DbCohort>(
        r#"
        INSERT INTO cohorts (id, identifier, course_id, semester_id, enrolled_count, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, identifier, course_id, semester_id, enrolled_count, created_at
        "#,
    )
    .bind(id)
    .bind(identifier)
    .bind(course_id)
    .bind(semester_id)
    .bind(enrolled_count)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(cohort)
}

/// Lists cohorts by course name then identifier. Absent filter fields match all.
pub async fn list_cohorts(
    pool: &Pool<Postgres>,
    filter: &CohortFilter,
) -> Result<Vec<DbCohortListing>> {
    let cohorts = sqlx::query_as::<_, DbCohortListing>(
        r#"
        SELECT t.id, t.identifier, t.course_id, c.name AS course_name,
               t.semester_id, t.enrolled_count
        FROM cohorts t
        JOIN courses c ON t.course_id = c.id
        WHERE ($1::uuid IS NULL OR t.course_id = $1)
          AND ($2::uuid IS NULL OR t.semester_id = $2)
        ORDER BY c.name ASC, t.identifier ASC
        "#,
    )
    .bind(filter.course_id)
    .bind(filter.semester_id)
    .fetch_all(pool)
    .await?;

    Ok(cohorts)
}

pub async fn overview(pool: &Pool<Postgres>) -> Result<Overview> {
    let (rooms, instructors, cohorts, allocations) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM rooms),
            (SELECT COUNT(*) FROM instructors),
            (SELECT COUNT(*) FROM cohorts),
            (SELECT COUNT(*) FROM allocations)
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(Overview {
        rooms,
        instructors,
        cohorts,
        allocations,
    })
}
