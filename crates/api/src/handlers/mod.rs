pub mod allocation;
pub mod auth;
pub mod availability;
pub mod catalog;
pub mod grid;
