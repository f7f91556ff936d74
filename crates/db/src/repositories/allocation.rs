//! # Allocation Writer
//!
//! An allocation and its cohort links are written and removed as one unit.
//! Creation inserts the allocation row and then one link per cohort inside a
//! single transaction; any failure rolls the whole transaction back.
//!
//! Deletion relies on the `ON DELETE CASCADE` rule of
//! `allocation_cohort_links.allocation_id`, so removing the allocation row is
//! enough to remove its links.
//!
//! Neither room availability nor capacity is checked here.

use crate::errors::classify;
use crate::models::DbAllocation;
use chrono::Utc;
use eyre::Result;
use roomgrid_core::errors::{GridError, GridResult};
use roomgrid_core::models::allocation::CreateAllocationRequest;
use sqlx::{Pool, Postgres, Transaction};
use tracing::{info, warn};
use uuid::Uuid;

pub async fn create_allocation(
    pool: &Pool<Postgres>,
    request: &CreateAllocationRequest,
) -> GridResult<Uuid> {
    request.validate()?;

    let mut tx = pool.begin().await.map_err(classify)?;

    match insert_allocation(&mut tx, request).await {
        Ok(id) => {
            tx.commit().await.map_err(classify)?;
            info!(
                allocation_id = %id,
                day = %request.day,
                shift = %request.shift,
                room_id = %request.room_id,
                cohorts = request.cohort_ids.len(),
                "Allocation created"
            );
            Ok(id)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback after failed allocation insert failed: {}", rollback_err);
            }
            Err(classify(e))
        }
    }
}

async fn insert_allocation(
    tx: &mut Transaction<'_, Postgres>,
    request: &CreateAllocationRequest,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO allocations (id, day, shift, modality, room_id, instructor_id, discipline_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(request.day.as_str())
    .bind(request.shift.as_str())
    .bind(request.modality.as_str())
    .bind(request.room_id)
    .bind(request.instructor_id)
    .bind(request.discipline_id)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    for cohort_id in &request.cohort_ids {
        sqlx::query(
            r#"
            INSERT INTO allocation_cohort_links (allocation_id, cohort_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(id)
        .bind(cohort_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(id)
}

/// Removes an allocation and, through the cascade, its links. Returns the
/// number of links that went with it.
pub async fn delete_allocation(pool: &Pool<Postgres>, id: Uuid) -> GridResult<u64> {
    let mut tx = pool.begin().await.map_err(classify)?;

    match remove_allocation(&mut tx, id).await {
        Ok(Some(links)) => {
            tx.commit().await.map_err(classify)?;
            info!(allocation_id = %id, links, "Allocation deleted");
            Ok(links)
        }
        Ok(None) => {
            tx.rollback().await.map_err(classify)?;
            Err(GridError::NotFound(format!("Allocation with ID {} not found", id)))
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback after failed allocation delete failed: {}", rollback_err);
            }
            Err(classify(e))
        }
    }
}

async fn remove_allocation(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
) -> Result<Option<u64>, sqlx::Error> {
    let links = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM allocation_cohort_links WHERE allocation_id = $1
        "#,
    )
    .bind(id)
    .fetch_one(&mut **tx)
    .await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM allocations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut **tx)
    .await?
    .rows_affected();

    if deleted == 0 {
        return Ok(None);
    }

    Ok(Some(u64::try_from(links).unwrap_or_default()))
}

pub async fn get_allocation_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAllocation>> {
    let allocation = sqlx::query_as::<_, DbAllocation>(
        r#"
        SELECT id, day, shift, modality, room_id, instructor_id, discipline_id, created_at
        FROM allocations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(allocation)
}

pub async fn count_links(pool: &Pool<Postgres>, allocation_id: Uuid) -> Result<i64> {
    let links = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM allocation_cohort_links WHERE allocation_id = $1
        "#,
    )
    .bind(allocation_id)
    .fetch_one(pool)
    .await?;

    Ok(links)
}
