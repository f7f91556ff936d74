use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::RoomKind;
use crate::errors::{GridError, GridResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub kind: RoomKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: i32,
    pub kind: RoomKind,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> GridResult<()> {
        require_name("room name", &self.name)?;
        require_positive("room capacity", self.capacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstructorRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateInstructorRequest {
    pub fn validate(&self) -> GridResult<()> {
        require_name("instructor name", &self.name)
    }

    /// Blank e-mail input is stored as absent.
    pub fn normalized_email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: Uuid,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSemesterRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDisciplineRequest {
    pub name: String,
    pub course_id: Uuid,
}

/// A group of enrolled students belonging to one course and one semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cohort {
    pub id: Uuid,
    pub identifier: String,
    pub course_id: Uuid,
    pub semester_id: Uuid,
    pub enrolled_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Cohort listing row, carrying the owning course name for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortListing {
    pub id: Uuid,
    pub identifier: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub semester_id: Uuid,
    pub enrolled_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCohortRequest {
    pub identifier: String,
    pub course_id: Uuid,
    pub semester_id: Uuid,
    pub enrolled_count: i32,
}

impl CreateCohortRequest {
    pub fn validate(&self) -> GridResult<()> {
        require_name("cohort identifier", &self.identifier)?;
        require_positive("enrolled count", self.enrolled_count)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortFilter {
    pub course_id: Option<Uuid>,
    pub semester_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub rooms: i64,
    pub instructors: i64,
    pub cohorts: i64,
    pub allocations: i64,
}

pub fn require_name(field: &str, value: &str) -> GridResult<()> {
    if value.trim().is_empty() {
        return Err(GridError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: i32) -> GridResult<()> {
    if value <= 0 {
        return Err(GridError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(())
}
