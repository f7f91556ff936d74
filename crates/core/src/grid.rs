//! # Grid Projection
//!
//! Turns flat allocation ⋈ cohort lines into the weekly grids shown to each
//! audience. The store returns one line per linked cohort; [`collapse`] folds
//! those back into one [`AllocationSummary`] per allocation and puts the result
//! in canonical order:
//!
//! 1. day of week, Monday through Saturday
//! 2. shift, Morning through Night
//! 3. room name, then allocation id as a final tie-break
//!
//! Cohorts inside an allocation are ordered by identifier (then id), so the
//! joined cohort label is stable no matter what order the store returned them.
//!
//! Capacity status is recomputed on every projection from the cohort sizes on
//! the lines; it is never persisted.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use crate::capacity::{self, CapacityStatus};
use crate::errors::GridResult;
use crate::models::enums::Day;
use crate::models::grid::{
    AllocationLine, AllocationSummary, CohortGridRow, DayPartition, GlobalGridRow,
    InstructorGridRow, LinkedCohort,
};

/// Separator between cohort identifiers of a unified class.
pub const COHORT_SEPARATOR: &str = " + ";

impl AllocationSummary {
    pub fn total_enrolled(&self) -> i64 {
        capacity::total_enrolled(&self.cohorts)
    }

    pub fn capacity_status(&self) -> CapacityStatus {
        capacity::status(self.total_enrolled(), self.room_capacity)
    }

    pub fn cohort_label(&self) -> String {
        self.cohorts
            .iter()
            .map(|c| c.identifier.as_str())
            .collect::<Vec<_>>()
            .join(COHORT_SEPARATOR)
    }
}

/// Groups lines by allocation and sorts the result canonically.
///
/// Allocations whose day, shift, modality or room kind is not a known value
/// are left out of every grid and reported with a warning.
pub fn collapse<I>(lines: I) -> Vec<AllocationSummary>
where
    I: IntoIterator<Item = AllocationLine>,
{
    let mut summaries: Vec<AllocationSummary> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut skipped: HashSet<Uuid> = HashSet::new();

    for line in lines {
        let allocation_id = line.allocation_id;
        if skipped.contains(&allocation_id) {
            continue;
        }

        if let Some(&pos) = index.get(&allocation_id) {
            let cohort = cohort_of(&line);
            let summary = &mut summaries[pos];
            if !summary.cohorts.iter().any(|c| c.id == cohort.id) {
                summary.cohorts.push(cohort);
            }
            continue;
        }

        match summary_from(line) {
            Ok(summary) => {
                index.insert(allocation_id, summaries.len());
                summaries.push(summary);
            }
            Err(e) => {
                warn!(%allocation_id, "skipping allocation with unrecognized value: {}", e);
                skipped.insert(allocation_id);
            }
        }
    }

    for summary in &mut summaries {
        summary
            .cohorts
            .sort_by(|a, b| a.identifier.cmp(&b.identifier).then(a.id.cmp(&b.id)));
    }
    summaries.sort_by(canonical_order);

    summaries
}

fn canonical_order(a: &AllocationSummary, b: &AllocationSummary) -> Ordering {
    a.day
        .cmp(&b.day)
        .then(a.shift.cmp(&b.shift))
        .then_with(|| a.room_name.cmp(&b.room_name))
        .then(a.id.cmp(&b.id))
}

fn cohort_of(line: &AllocationLine) -> LinkedCohort {
    LinkedCohort {
        id: line.cohort_id,
        identifier: line.cohort_identifier.clone(),
        enrolled_count: line.enrolled_count,
    }
}

fn summary_from(line: AllocationLine) -> GridResult<AllocationSummary> {
    let cohort = cohort_of(&line);

    Ok(AllocationSummary {
        id: line.allocation_id,
        day: line.day.parse()?,
        shift: line.shift.parse()?,
        modality: line.modality.parse()?,
        room_id: line.room_id,
        room_kind: line.room_kind.parse()?,
        room_name: line.room_name,
        room_capacity: line.room_capacity,
        instructor_id: line.instructor_id,
        instructor_name: line.instructor_name,
        discipline_name: line.discipline_name,
        cohorts: vec![cohort],
    })
}

/// Splits canonically ordered rows into per-day sequences. Days without rows
/// do not appear.
pub fn partition_by_day<T, F>(rows: Vec<T>, day_of: F) -> Vec<DayPartition<T>>
where
    F: Fn(&T) -> Day,
{
    let mut by_day: BTreeMap<Day, Vec<T>> = BTreeMap::new();
    for row in rows {
        by_day.entry(day_of(&row)).or_default().push(row);
    }

    by_day
        .into_iter()
        .map(|(day, rows)| DayPartition { day, rows })
        .collect()
}

/// Whole-schedule view, one row per allocation annotated with capacity status.
pub fn global_grid<I>(lines: I) -> Vec<GlobalGridRow>
where
    I: IntoIterator<Item = AllocationLine>,
{
    collapse(lines)
        .into_iter()
        .map(|s| GlobalGridRow {
            allocation_id: s.id,
            day: s.day,
            shift: s.shift,
            modality: s.modality,
            cohorts: s.cohort_label(),
            total_enrolled: s.total_enrolled(),
            status: s.capacity_status(),
            room: s.room_name,
            room_capacity: s.room_capacity,
            instructor: s.instructor_name,
            discipline: s.discipline_name,
        })
        .collect()
}

/// Timetable of a single cohort. The lines are expected to cover only
/// allocations that link the cohort.
pub fn cohort_grid<I>(lines: I) -> Vec<DayPartition<CohortGridRow>>
where
    I: IntoIterator<Item = AllocationLine>,
{
    let rows = collapse(lines)
        .into_iter()
        .map(|s| CohortGridRow {
            allocation_id: s.id,
            day: s.day,
            shift: s.shift,
            modality: s.modality,
            room: s.room_name,
            room_kind: s.room_kind,
            discipline: s.discipline_name,
            instructor: s.instructor_name,
        })
        .collect();

    partition_by_day(rows, |row: &CohortGridRow| row.day)
}

/// Timetable of a single instructor, cohorts of unified classes joined.
pub fn instructor_grid<I>(lines: I) -> Vec<DayPartition<InstructorGridRow>>
where
    I: IntoIterator<Item = AllocationLine>,
{
    let rows = collapse(lines)
        .into_iter()
        .map(|s| InstructorGridRow {
            allocation_id: s.id,
            day: s.day,
            shift: s.shift,
            modality: s.modality,
            cohorts: s.cohort_label(),
            room: s.room_name,
            room_kind: s.room_kind,
            discipline: s.discipline_name,
        })
        .collect();

    partition_by_day(rows, |row: &InstructorGridRow| row.day)
}
