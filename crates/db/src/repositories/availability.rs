//! Room availability for a (day, shift) slot.
//!
//! Granularity is the exact slot only. Room kind, modality and neighbouring
//! shifts play no part. The answer is advisory: the allocation writer does not
//! consult it.

use std::collections::BTreeSet;

use eyre::Result;
use roomgrid_core::models::allocation::RoomAvailability;
use roomgrid_core::models::enums::{Day, Shift};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::catalog;

/// Rooms holding at least one allocation in exactly this day and shift.
pub async fn occupied_rooms(
    pool: &Pool<Postgres>,
    day: Day,
    shift: Shift,
) -> Result<BTreeSet<Uuid>> {
    let room_ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT DISTINCT room_id
        FROM allocations
        WHERE day = $1 AND shift = $2
        "#,
    )
    .bind(day.as_str())
    .bind(shift.as_str())
    .fetch_all(pool)
    .await?;

    tracing::debug!("{} rooms occupied on {} {}", room_ids.len(), day, shift);
    Ok(room_ids.into_iter().collect())
}

/// Every room, by name, flagged with whether the slot is already taken.
pub async fn room_availability(
    pool: &Pool<Postgres>,
    day: Day,
    shift: Shift,
) -> Result<Vec<RoomAvailability>> {
    let occupied = occupied_rooms(pool, day, shift).await?;
    let rooms = catalog::list_rooms(pool).await?;

    let mut availability = Vec::with_capacity(rooms.len());
    for room in rooms {
        availability.push(RoomAvailability {
            occupied: occupied.contains(&room.id),
            kind: room.kind.parse()?,
            room_id: room.id,
            name: room.name,
            capacity: room.capacity,
        });
    }

    Ok(availability)
}
