//! Data models for the Gourmet site core.
//!
//! Field names serialize in camelCase to match the JSON the page scripts use.

mod menu;
mod reservation;

pub use menu::*;
pub use reservation::*;
