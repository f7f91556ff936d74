use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Day, Modality, RoomKind, Shift};
use crate::capacity::CapacityStatus;

/// One allocation ⋈ cohort pair as read from the store. Enumerated columns are
/// kept as raw text; they are parsed when lines are collapsed into summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub allocation_id: Uuid,
    pub day: String,
    pub shift: String,
    pub modality: String,
    pub room_id: Uuid,
    pub room_name: String,
    pub room_kind: String,
    pub room_capacity: i32,
    pub instructor_id: Uuid,
    pub instructor_name: String,
    pub discipline_name: String,
    pub cohort_id: Uuid,
    pub cohort_identifier: String,
    pub enrolled_count: i32,
}

/// Source row for the calendar: one per allocation, no cohort join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLine {
    pub allocation_id: Uuid,
    pub day: String,
    pub shift: String,
    pub room_name: String,
    pub instructor_name: String,
    pub discipline_name: String,
    pub room_capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedCohort {
    pub id: Uuid,
    pub identifier: String,
    pub enrolled_count: i32,
}

/// An allocation with all of its linked cohorts gathered together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub id: Uuid,
    pub day: Day,
    pub shift: Shift,
    pub modality: Modality,
    pub room_id: Uuid,
    pub room_name: String,
    pub room_kind: RoomKind,
    pub room_capacity: i32,
    pub instructor_id: Uuid,
    pub instructor_name: String,
    pub discipline_name: String,
    pub cohorts: Vec<LinkedCohort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGridRow {
    pub allocation_id: Uuid,
    pub day: Day,
    pub shift: Shift,
    pub modality: Modality,
    pub room: String,
    pub room_capacity: i32,
    pub instructor: String,
    pub discipline: String,
    pub cohorts: String,
    pub total_enrolled: i64,
    pub status: CapacityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortGridRow {
    pub allocation_id: Uuid,
    pub day: Day,
    pub shift: Shift,
    pub modality: Modality,
    pub room: String,
    pub room_kind: RoomKind,
    pub discipline: String,
    pub instructor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorGridRow {
    pub allocation_id: Uuid,
    pub day: Day,
    pub shift: Shift,
    pub modality: Modality,
    pub room: String,
    pub room_kind: RoomKind,
    pub discipline: String,
    pub cohorts: String,
}

/// Rows of a single day, for tabbed display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPartition<T> {
    pub day: Day,
    pub rows: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub allocation_id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Room name.
    pub resource_id: String,
    pub instructor: String,
    pub discipline: String,
    pub capacity: i32,
    pub color: String,
}
