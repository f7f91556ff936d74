//! Line queries feeding the grid and calendar projections in `roomgrid-core`.
//!
//! Every filter is a bound parameter.

use crate::models::{DbAllocationLine, DbCalendarLine};
use eyre::Result;
use roomgrid_core::models::enums::Day;
use roomgrid_core::models::grid::{AllocationLine, CalendarLine};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const LINE_COLUMNS: &str = r#"
    SELECT a.id AS allocation_id, a.day, a.shift, a.modality,
           r.id AS room_id, r.name AS room_name, r.kind AS room_kind, r.capacity AS room_capacity,
           i.id AS instructor_id, i.name AS instructor_name,
           d.name AS discipline_name,
           c.id AS cohort_id, c.identifier AS cohort_identifier, c.enrolled_count
    FROM allocations a
    JOIN rooms r ON a.room_id = r.id
    JOIN instructors i ON a.instructor_id = i.id
    JOIN disciplines d ON a.discipline_id = d.id
    JOIN allocation_cohort_links l ON l.allocation_id = a.id
    JOIN cohorts c ON l.cohort_id = c.id
"#;

/// All allocation lines, optionally restricted to one day.
pub async fn global_lines(pool: &Pool<Postgres>, day: Option<Day>) -> Result<Vec<AllocationLine>> {
    let sql = format!("{} WHERE ($1::text IS NULL OR a.day = $1)", LINE_COLUMNS);

    let lines = sqlx::query_as::<_, DbAllocationLine>(&sql)
        .bind(day.map(|d| d.as_str()))
        .fetch_all(pool)
        .await?;

    tracing::debug!("Fetched {} grid lines (day filter: {:?})", lines.len(), day);
    Ok(lines.into_iter().map(AllocationLine::from).collect())
}

/// Lines of every allocation that serves the cohort, with all of their cohorts.
pub async fn cohort_lines(pool: &Pool<Postgres>, cohort_id: Uuid) -> Result<Vec<AllocationLine>> {
    let sql = format!(
        "{} WHERE a.id IN (SELECT allocation_id FROM allocation_cohort_links WHERE cohort_id = $1)",
        LINE_COLUMNS
    );

    let lines = sqlx::query_as::<_, DbAllocationLine>(&sql)
        .bind(cohort_id)
        .fetch_all(pool)
        .await?;

    Ok(lines.into_iter().map(AllocationLine::from).collect())
}

pub async fn instructor_lines(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
) -> Result<Vec<AllocationLine>> {
    let sql = format!("{} WHERE a.instructor_id = $1", LINE_COLUMNS);

    let lines = sqlx::query_as::<_, DbAllocationLine>(&sql)
        .bind(instructor_id)
        .fetch_all(pool)
        .await?;

    Ok(lines.into_iter().map(AllocationLine::from).collect())
}

pub async fn calendar_lines(pool: &Pool<Postgres>) -> Result<Vec<CalendarLine>> {
    let lines = sqlx::query_as::<_, DbCalendarLine>(
        r#"
        SELECT a.id AS allocation_id, a.day, a.shift,
               r.name AS room_name, i.name AS instructor_name,
               d.name AS discipline_name, r.capacity AS room_capacity
        FROM allocations a
        JOIN rooms r ON a.room_id = r.id
        JOIN instructors i ON a.instructor_id = i.id
        JOIN disciplines d ON a.discipline_id = d.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(lines.into_iter().map(CalendarLine::from).collect())
}
