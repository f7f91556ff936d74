pub mod allocation;
pub mod availability;
pub mod catalog;
pub mod credential;
pub mod grid;
