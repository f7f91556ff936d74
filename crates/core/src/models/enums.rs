//! Closed enumerations shared by the store, the engine and the API.
//!
//! Every enumeration is persisted as its literal text value (see `as_str`), and
//! the derived `Ord` follows declaration order, which is the canonical order used
//! by every grid: Monday before Saturday, Morning before Night.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GridError;

/// Day of the week an allocation takes place on. Sunday is not schedulable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Days elapsed since the Monday of the same week.
    pub fn offset_from_monday(&self) -> i64 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
        }
    }
}

impl FromStr for Day {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            _ => Err(GridError::InvalidInput(format!("unknown day: {}", s))),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed daily time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night",
        }
    }
}

impl FromStr for Shift {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Afternoon" => Ok(Self::Afternoon),
            "Night" => Ok(Self::Night),
            _ => Err(GridError::InvalidInput(format!("unknown shift: {}", s))),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery mode of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "In-person")]
    InPerson,
    Hybrid,
    Blended,
    Remote,
}

impl Modality {
    pub const ALL: [Modality; 4] = [
        Modality::InPerson,
        Modality::Hybrid,
        Modality::Blended,
        Modality::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InPerson => "In-person",
            Self::Hybrid => "Hybrid",
            Self::Blended => "Blended",
            Self::Remote => "Remote",
        }
    }
}

impl FromStr for Modality {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In-person" => Ok(Self::InPerson),
            "Hybrid" => Ok(Self::Hybrid),
            "Blended" => Ok(Self::Blended),
            "Remote" => Ok(Self::Remote),
            _ => Err(GridError::InvalidInput(format!("unknown modality: {}", s))),
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Lecture,
    Lab,
    Auditorium,
}

impl RoomKind {
    pub const ALL: [RoomKind; 3] = [RoomKind::Lecture, RoomKind::Lab, RoomKind::Auditorium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Lab => "Lab",
            Self::Auditorium => "Auditorium",
        }
    }
}

impl FromStr for RoomKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lecture" => Ok(Self::Lecture),
            "Lab" => Ok(Self::Lab),
            "Auditorium" => Ok(Self::Auditorium),
            _ => Err(GridError::InvalidInput(format!("unknown room kind: {}", s))),
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
