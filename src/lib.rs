//! Gourmet site core.
//!
//! Reservation form validation and submission, menu filtering, and the
//! local store both of them persist to. Rendering is left to the caller.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod reservation;
pub mod store;
pub mod validation;

pub use catalog::{apply, load, MenuCatalog, MenuLoader, MenuSource};
pub use errors::AppError;
pub use reservation::{ReservationForm, Submission};
pub use store::{ReservationStore, SqliteKvStore};
pub use validation::{
    validate, validate_on, FieldRule, FieldValues, TimeWindow, ValidationResult,
};
