//! # RoomGrid Core
//!
//! Domain types and the pure parts of the allocation scheduling engine: the
//! closed enumerations used by the store, the capacity evaluator, grid
//! projection for the three audiences and the weekly calendar projection.
//!
//! Nothing in this crate touches the store. The `roomgrid-db` crate produces
//! [`models::grid::AllocationLine`] records and hands them to [`grid`] and
//! [`calendar`].

pub mod calendar;
pub mod capacity;
pub mod errors;
pub mod grid;
pub mod models;
