//! Reservation submission pipeline: validate, build the record, persist.

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::AppError;
use crate::models::Reservation;
use crate::store::{KeyValueStore, Persistence, ReservationStore};
use crate::validation::{
    fields, parse_iso_date, reservation_rules, validate_on, FieldError, FieldRule, FieldValues,
    TimeWindow, ValidationResult,
};

/// A reservation that passed validation and was appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub reservation: Reservation,
    pub persistence: Persistence,
}

/// The reservation form: its rule table and operating hours.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    rules: Vec<FieldRule>,
    window: TimeWindow,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new(TimeWindow::default())
    }
}

impl ReservationForm {
    /// Form with the standard reservation rules.
    pub fn new(window: TimeWindow) -> Self {
        Self::with_rules(reservation_rules(), window)
    }

    pub fn with_rules(rules: Vec<FieldRule>, window: TimeWindow) -> Self {
        Self { rules, window }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Validate with `today` as the earliest bookable date.
    pub fn validate(&self, values: &FieldValues, today: NaiveDate) -> ValidationResult {
        validate_on(values, &self.rules, self.window, today)
    }

    /// Build a reservation from valid input. Invalid input yields
    /// [`AppError::Validation`] and no record. The UTC day of `created_at`
    /// is the earliest bookable date.
    pub fn build(
        &self,
        values: &FieldValues,
        created_at: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        let result = self.validate(values, created_at.date_naive());
        if !result.is_valid() {
            return Err(AppError::Validation(result));
        }

        let guests = values
            .get(fields::GUESTS)
            .trim()
            .parse::<u32>()
            .map_err(|_| field_error(fields::GUESTS, FieldError::InvalidFormat))?;
        let date = parse_iso_date(values.get(fields::DATE).trim())
            .ok_or_else(|| field_error(fields::DATE, FieldError::InvalidDate))?;
        let message = Some(values.get(fields::MESSAGE).trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Reservation {
            name: values.get(fields::NAME).trim().to_string(),
            email: values.get(fields::EMAIL).trim().to_string(),
            phone: values.get(fields::PHONE).trim().to_string(),
            guests,
            date,
            time: values.get(fields::TIME).trim().to_string(),
            message,
            created_at,
        })
    }

    /// Validate, build and append a reservation stamped with the current time.
    pub async fn submit<S: KeyValueStore>(
        &self,
        values: &FieldValues,
        store: &mut ReservationStore<S>,
    ) -> Result<Submission, AppError> {
        self.submit_at(values, store, Utc::now()).await
    }

    pub async fn submit_at<S: KeyValueStore>(
        &self,
        values: &FieldValues,
        store: &mut ReservationStore<S>,
        created_at: DateTime<Utc>,
    ) -> Result<Submission, AppError> {
        let reservation = self.build(values, created_at)?;
        let persistence = store.append_reservation(reservation.clone()).await?;

        tracing::info!(
            "Reservation accepted for {} on {} at {}",
            reservation.guests,
            reservation.date,
            reservation.time
        );

        Ok(Submission {
            reservation,
            persistence,
        })
    }
}

fn field_error(key: &str, error: FieldError) -> AppError {
    let mut result = ValidationResult::default();
    result.insert(key, error);
    AppError::Validation(result)
}
