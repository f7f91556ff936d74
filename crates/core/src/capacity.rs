//! Capacity evaluation. Advisory only, nothing is rejected on its result.

use serde::{Deserialize, Serialize};

use crate::models::grid::LinkedCohort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityStatus {
    Ok,
    OverCapacity,
}

/// `OverCapacity` only when strictly more students than seats; a full room is `Ok`.
pub fn status(total_enrolled: i64, room_capacity: i32) -> CapacityStatus {
    if total_enrolled > i64::from(room_capacity) {
        CapacityStatus::OverCapacity
    } else {
        CapacityStatus::Ok
    }
}

pub fn total_enrolled(cohorts: &[LinkedCohort]) -> i64 {
    cohorts.iter().map(|c| i64::from(c.enrolled_count)).sum()
}
