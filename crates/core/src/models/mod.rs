pub mod allocation;
pub mod catalog;
pub mod credential;
pub mod enums;
pub mod grid;
