//! Core value types and physical constants for the navigation library

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
