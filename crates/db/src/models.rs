use chrono::{DateTime, Utc};
use roomgrid_core::errors::GridError;
use roomgrid_core::models::catalog::{
    Cohort, CohortListing, Course, Discipline, Instructor, Room, Semester,
};
use roomgrid_core::models::grid::{AllocationLine, CalendarLine};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbRoom> for Room {
    type Error = GridError;

    fn try_from(row: DbRoom) -> Result<Self, Self::Error> {
        Ok(Room {
            kind: row.kind.parse()?,
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInstructor {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbInstructor> for Instructor {
    fn from(row: DbInstructor) -> Self {
        Instructor {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbCourse> for Course {
    fn from(row: DbCourse) -> Self {
        Course {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSemester {
    pub id: Uuid,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbSemester> for Semester {
    fn from(row: DbSemester) -> Self {
        Semester {
            id: row.id,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDiscipline {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbDiscipline> for Discipline {
    fn from(row: DbDiscipline) -> Self {
        Discipline {
            id: row.id,
            name: row.name,
            course_id: row.course_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCohort {
    pub id: Uuid,
    pub identifier: String,
    pub course_id: Uuid,
    pub semester_id: Uuid,
    pub enrolled_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbCohort> for Cohort {
    fn from(row: DbCohort) -> Self {
        Cohort {
            id: row.id,
            identifier: row.identifier,
            course_id: row.course_id,
            semester_id: row.semester_id,
            enrolled_count: row.enrolled_count,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCohortListing {
    pub id: Uuid,
    pub identifier: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub semester_id: Uuid,
    pub enrolled_count: i32,
}

impl From<DbCohortListing> for CohortListing {
    fn from(row: DbCohortListing) -> Self {
        CohortListing {
            id: row.id,
            identifier: row.identifier,
            course_id: row.course_id,
            course_name: row.course_name,
            semester_id: row.semester_id,
            enrolled_count: row.enrolled_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAllocation {
    pub id: Uuid,
    pub day: String,
    pub shift: String,
    pub modality: String,
    pub room_id: Uuid,
    pub instructor_id: Uuid,
    pub discipline_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAllocationLine {
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

impl From<DbAllocationLine> for AllocationLine {
    fn from(row: DbAllocationLine) -> Self {
        AllocationLine {
            allocation_id: row.allocation_id,
            day: row.day,
            shift: row.shift,
            modality: row.modality,
            room_id: row.room_id,
            room_name: row.room_name,
            room_kind: row.room_kind,
            room_capacity: row.room_capacity,
            instructor_id: row.instructor_id,
            instructor_name: row.instructor_name,
            discipline_name: row.discipline_name,
            cohort_id: row.cohort_id,
            cohort_identifier: row.cohort_identifier,
            enrolled_count: row.enrolled_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCalendarLine {
    pub allocation_id: Uuid,
    pub day: String,
    pub shift: String,
    pub room_name: String,
    pub instructor_name: String,
    pub discipline_name: String,
    pub room_capacity: i32,
}

impl From<DbCalendarLine> for CalendarLine {
    fn from(row: DbCalendarLine) -> Self {
        CalendarLine {
            allocation_id: row.allocation_id,
            day: row.day,
            shift: row.shift,
            room_name: row.room_name,
            instructor_name: row.instructor_name,
            discipline_name: row.discipline_name,
            room_capacity: row.room_capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCredential {
    pub username: String,
    pub secret_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}
