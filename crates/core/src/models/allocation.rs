use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Day, Modality, RoomKind, Shift};
use crate::errors::{GridError, GridResult};

/// Everything needed to schedule one class into one (day, shift) slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAllocationRequest {
    pub day: Day,
    pub shift: Shift,
    pub modality: Modality,
    pub room_id: Uuid,
    pub instructor_id: Uuid,
    pub discipline_id: Uuid,
    /// Cohorts served by the class, in the order they were chosen.
    pub cohort_ids: Vec<Uuid>,
}

impl CreateAllocationRequest {
    /// Rejects requests the store would only half-apply: no cohorts, or the
    /// same cohort listed twice.
    pub fn validate(&self) -> GridResult<()> {
        if self.cohort_ids.is_empty() {
            return Err(GridError::InvalidInput(
                "an allocation needs at least one cohort".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.cohort_ids.len());
        for id in &self.cohort_ids {
            if !seen.insert(id) {
                return Err(GridError::InvalidInput(format!(
                    "cohort {} listed more than once",
                    id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAllocationResponse {
    pub id: Uuid,
    pub linked_cohorts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAllocationResponse {
    pub id: Uuid,
    pub removed_links: u64,
}

/// A room as offered for a slot: free unless some allocation already holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room_id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub kind: RoomKind,
    pub occupied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub day: Day,
    pub shift: Shift,
    pub occupied_room_ids: Vec<Uuid>,
    pub rooms: Vec<RoomAvailability>,
}
