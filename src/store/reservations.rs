//! Append-only reservation log.

use super::KeyValueStore;
use crate::errors::AppError;
use crate::models::Reservation;

/// Storage key holding the JSON array of reservations.
pub const RESERVATIONS_KEY: &str = "reservations";

/// Where an appended reservation ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Written to the backing store.
    Stored,
    /// The store failed; the record lives only for this session.
    SessionOnly,
}

/// Reservation log on top of a [`KeyValueStore`].
///
/// After the first storage failure the log stops touching the backend for
/// writes and keeps new records in memory for the rest of the session.
pub struct ReservationStore<S> {
    backend: S,
    session: Vec<Reservation>,
    degraded: bool,
}

impl<S: KeyValueStore> ReservationStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            session: Vec::new(),
            degraded: false,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Append `record` after all previously stored reservations.
    pub async fn append_reservation(
        &mut self,
        record: Reservation,
    ) -> Result<Persistence, AppError> {
        if self.degraded {
            self.session.push(record);
            return Ok(Persistence::SessionOnly);
        }

        let mut existing = match self.backend.get(RESERVATIONS_KEY).await {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => return Ok(self.degrade(e, record)),
        };
        existing.push(record.clone());

        let encoded = serde_json::to_string(&existing)
            .map_err(|e| AppError::Storage(format!("Failed to encode reservations: {}", e)))?;

        match self.backend.set(RESERVATIONS_KEY, &encoded).await {
            Ok(()) => {
                tracing::info!("Stored reservation #{}", existing.len());
                Ok(Persistence::Stored)
            }
            Err(e) => Ok(self.degrade(e, record)),
        }
    }

    /// Stored reservations followed by session-only ones, in insertion order.
    pub async fn list_reservations(&self) -> Vec<Reservation> {
        let mut all = match self.backend.get(RESERVATIONS_KEY).await {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => {
                tracing::warn!("Reading reservations failed, showing session only: {}", e);
                Vec::new()
            }
        };
        all.extend(self.session.iter().cloned());
        all
    }

    fn degrade(&mut self, error: AppError, record: Reservation) -> Persistence {
        tracing::warn!(
            "Reservation storage unavailable, keeping records in memory: {}",
            error
        );
        self.degraded = true;
        self.session.push(record);
        Persistence::SessionOnly
    }
}

/// Missing or malformed data reads as an empty log.
fn decode(raw: Option<&str>) -> Vec<Reservation> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!("Discarding malformed reservations data: {}", e);
        Vec::new()
    })
}
