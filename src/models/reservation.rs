//! Reservation record as persisted in the local store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A submitted table reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: u32,
    pub date: NaiveDate,
    /// "HH:MM"
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
