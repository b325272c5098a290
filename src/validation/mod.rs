//! Declarative field validation for the reservation form.
//!
//! Validation is a pure function over raw field values and a rule table.
//! Presenting the messages is left to the caller.

mod rules;

pub use rules::*;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Key of the field the operating-hours check applies to.
pub const TIME_FIELD: &str = fields::TIME;

/// A single validation failure for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    MinLength(usize),
    InvalidEmail,
    InvalidFormat,
    BelowMinimum(f64),
    InvalidDate,
    DateInPast,
    OutsideOperatingHours,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "required"),
            FieldError::MinLength(len) => write!(f, "min length {}", len),
            FieldError::InvalidEmail => write!(f, "invalid email"),
            FieldError::InvalidFormat => write!(f, "invalid format"),
            FieldError::BelowMinimum(min) => write!(f, "below minimum {}", min),
            FieldError::InvalidDate => write!(f, "invalid date"),
            FieldError::DateInPast => write!(f, "date in the past"),
            FieldError::OutsideOperatingHours => write!(f, "outside operating hours"),
        }
    }
}

/// Validation rule for one form field.
///
/// Checks run in declaration order and the first failure wins:
/// required, min length, email, pattern, numeric minimum, ISO date, not past.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub key: String,
    pub required: bool,
    pub min_length: Option<usize>,
    pub is_email: bool,
    pub pattern: Option<Regex>,
    pub min: Option<f64>,
    pub is_date: bool,
    /// Reject dates before the reference day passed to [`validate_on`].
    pub not_past: bool,
}

impl FieldRule {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: false,
            min_length: None,
            is_email: false,
            pattern: None,
            min: None,
            is_date: false,
            not_past: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn email(mut self) -> Self {
        self.is_email = true;
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn date(mut self) -> Self {
        self.is_date = true;
        self
    }

    /// ISO date that may not lie before the reference day.
    pub fn not_past(mut self) -> Self {
        self.is_date = true;
        self.not_past = true;
        self
    }

    /// Evaluate this rule against a raw value, without a reference day.
    pub fn check(&self, raw: &str) -> Option<FieldError> {
        self.check_on(raw, None)
    }

    /// Evaluate this rule; `today` enables the not-past check.
    pub fn check_on(&self, raw: &str, today: Option<NaiveDate>) -> Option<FieldError> {
        let value = raw.trim();

        if value.is_empty() {
            return self.required.then_some(FieldError::Required);
        }

        if let Some(len) = self.min_length {
            if value.chars().count() < len {
                return Some(FieldError::MinLength(len));
            }
        }

        if self.is_email && !is_email(value) {
            return Some(FieldError::InvalidEmail);
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Some(FieldError::InvalidFormat);
            }
        }

        if let Some(min) = self.min {
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() => {
                    if n < min {
                        return Some(FieldError::BelowMinimum(min));
                    }
                }
                _ => return Some(FieldError::InvalidFormat),
            }
        }

        if self.is_date {
            let Some(date) = parse_iso_date(value) else {
                return Some(FieldError::InvalidDate);
            };
            if let Some(today) = today.filter(|_| self.not_past) {
                if date < today {
                    return Some(FieldError::DateInPast);
                }
            }
        }

        None
    }
}

/// Raw string input keyed by field name. Missing keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(HashMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Outcome of one validation attempt.
///
/// Only failing fields appear in `errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: BTreeMap<String, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, error: FieldError) {
        self.errors.insert(key.into(), error);
    }

    pub fn get(&self, key: &str) -> Option<&FieldError> {
        self.errors.get(key)
    }

    /// Display message for a field, if it failed.
    pub fn message(&self, key: &str) -> Option<String> {
        self.errors.get(key).map(ToString::to_string)
    }

    /// All messages keyed by field.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(k, e)| (k.clone(), e.to_string()))
            .collect()
    }
}

/// Opening hours as inclusive minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub open_minutes: u32,
    pub close_minutes: u32,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            open_minutes: 10 * 60,
            close_minutes: 23 * 60,
        }
    }
}

impl TimeWindow {
    /// Build a window from two "HH:MM" strings.
    pub fn from_hhmm(open: &str, close: &str) -> Option<Self> {
        let open_minutes = parse_hhmm(open)?;
        let close_minutes = parse_hhmm(close)?;
        (open_minutes <= close_minutes).then_some(Self {
            open_minutes,
            close_minutes,
        })
    }

    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.open_minutes && minutes <= self.close_minutes
    }
}

/// Parse "HH:MM" into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hh, mm) = value.trim().split_once(':')?;
    if !is_two_digits(hh) || !is_two_digits(mm) {
        return None;
    }
    let hours: u32 = hh.parse().ok()?;
    let minutes: u32 = mm.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

fn is_two_digits(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a zero-padded ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// Validate `fields` against `rules` and the operating-hours window.
///
/// Not-past date checks are skipped; use [`validate_on`] to apply them.
pub fn validate(fields: &FieldValues, rules: &[FieldRule], window: TimeWindow) -> ValidationResult {
    validate_inner(fields, rules, window, None)
}

/// Like [`validate`], with `today` as the earliest acceptable date.
pub fn validate_on(
    fields: &FieldValues,
    rules: &[FieldRule],
    window: TimeWindow,
    today: NaiveDate,
) -> ValidationResult {
    validate_inner(fields, rules, window, Some(today))
}

fn validate_inner(
    fields: &FieldValues,
    rules: &[FieldRule],
    window: TimeWindow,
    today: Option<NaiveDate>,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    for rule in rules {
        if let Some(error) = rule.check_on(fields.get(&rule.key), today) {
            result.insert(rule.key.clone(), error);
        }
    }

    // The operating-hours message overrides any per-field message for time.
    let time = fields.get(TIME_FIELD).trim();
    if !time.is_empty() {
        match parse_hhmm(time) {
            Some(minutes) if window.contains(minutes) => {}
            Some(_) => result.insert(TIME_FIELD, FieldError::OutsideOperatingHours),
            None => {
                result
                    .errors
                    .entry(TIME_FIELD.to_string())
                    .or_insert(FieldError::InvalidFormat);
            }
        }
    }

    if !result.is_valid() {
        tracing::debug!(fields = ?result.messages(), "Validation failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> FieldValues {
        FieldValues::new()
            .with("name", "Ana")
            .with("email", "ana@x.com")
            .with("phone", "+355691234567")
            .with("guests", "2")
            .with("date", "2030-01-01")
            .with("time", "12:00")
    }

    fn check_time(time: &str) -> ValidationResult {
        validate(
            &scenario_a().with("time", time),
            &reservation_rules(),
            TimeWindow::default(),
        )
    }

    #[test]
    fn test_scenario_a_is_valid() {
        let result = validate(&scenario_a(), &reservation_rules(), TimeWindow::default());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_scenario_b_outside_hours() {
        let result = check_time("08:00");
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.message("time"),
            Some("outside operating hours".to_string())
        );
    }

    #[test]
    fn test_time_window_boundaries() {
        assert!(check_time("10:00").is_valid());
        assert!(check_time("23:00").is_valid());
        assert!(!check_time("09:59").is_valid());
        assert!(!check_time("23:01").is_valid());
    }

    #[test]
    fn test_unparseable_time_is_invalid_format() {
        let result = check_time("noon");
        assert_eq!(result.get("time"), Some(&FieldError::InvalidFormat));
        let result = check_time("25:00");
        assert_eq!(result.get("time"), Some(&FieldError::InvalidFormat));
    }

    #[test]
    fn test_missing_required_fields() {
        for key in ["name", "email", "phone", "guests", "date", "time"] {
            let mut fields = scenario_a();
            fields.insert(key, "   ");
            let result = validate(&fields, &reservation_rules(), TimeWindow::default());
            assert!(!result.is_valid(), "{key} should be required");
            assert_eq!(result.get(key), Some(&FieldError::Required));
        }
    }

    #[test]
    fn test_absent_key_reads_as_empty() {
        let fields = FieldValues::new().with("name", "Ana");
        let result = validate(&fields, &reservation_rules(), TimeWindow::default());
        assert_eq!(result.get("email"), Some(&FieldError::Required));
        assert!(result.get("name").is_none());
    }

    #[test]
    fn test_min_length_message() {
        let result = validate(
            &scenario_a().with("name", "A"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.message("name"), Some("min length 2".to_string()));
    }

    #[test]
    fn test_email_rule() {
        let rule = FieldRule::new("email").required().email();
        assert_eq!(rule.check("ana@x.com"), None);
        assert_eq!(rule.check("a@b"), None);
        assert_eq!(rule.check("ana.x.com"), Some(FieldError::InvalidEmail));
        assert_eq!(rule.check("ana@"), Some(FieldError::InvalidEmail));
        assert_eq!(rule.check("@x.com"), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn test_phone_pattern() {
        let result = validate(
            &scenario_a().with("phone", "12ab"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.message("phone"), Some("invalid format".to_string()));

        let result = validate(
            &scenario_a().with("phone", "(069) 123-45"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_guests_minimum() {
        let result = validate(
            &scenario_a().with("guests", "0"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.message("guests"), Some("below minimum 1".to_string()));

        let result = validate(
            &scenario_a().with("guests", "two"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.get("guests"), Some(&FieldError::InvalidFormat));
    }

    #[test]
    fn test_min_rejects_non_numeric() {
        let rule = FieldRule::new("amount").min(1.0);
        assert_eq!(rule.check("NaN"), Some(FieldError::InvalidFormat));
        assert_eq!(rule.check("1.5"), None);
        assert_eq!(rule.check("0.5"), Some(FieldError::BelowMinimum(1.0)));
    }

    #[test]
    fn test_invalid_date() {
        let result = validate(
            &scenario_a().with("date", "2030-02-30"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.message("date"), Some("invalid date".to_string()));
    }

    #[test]
    fn test_first_failure_wins() {
        let rule = FieldRule::new("code")
            .required()
            .min_length(5)
            .pattern(Regex::new("^[0-9]+$").unwrap());
        assert_eq!(rule.check("ab"), Some(FieldError::MinLength(5)));
        assert_eq!(rule.check("abcdef"), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_optional_empty_field_skips_checks() {
        let rule = FieldRule::new("message").min_length(10);
        assert_eq!(rule.check(""), None);
        assert_eq!(rule.check("short"), Some(FieldError::MinLength(10)));
    }

    #[test]
    fn test_custom_window() {
        let window = TimeWindow::from_hhmm("12:00", "14:30").unwrap();
        assert_eq!(window.open_minutes, 720);
        assert_eq!(window.close_minutes, 870);
        let result = validate(&scenario_a().with("time", "14:31"), &reservation_rules(), window);
        assert_eq!(result.get("time"), Some(&FieldError::OutsideOperatingHours));
        assert!(TimeWindow::from_hhmm("23:00", "10:00").is_none());
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("9:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("1200"), None);
        assert_eq!(parse_hhmm("+9:30"), None);
        assert_eq!(parse_hhmm("+1:00"), None);
        assert_eq!(parse_hhmm("1:-5"), None);
    }

    #[test]
    fn test_signed_time_is_invalid_format() {
        let wide = TimeWindow::from_hhmm("00:00", "23:59").unwrap();
        let result = validate(&scenario_a().with("time", "+1:00"), &reservation_rules(), wide);
        assert_eq!(result.get("time"), Some(&FieldError::InvalidFormat));

        let result = check_time("+9:30");
        assert_eq!(result.get("time"), Some(&FieldError::InvalidFormat));
        assert!(TimeWindow::from_hhmm("+9:00", "23:00").is_none());
    }

    #[test]
    fn test_unpadded_date_is_invalid() {
        let result = validate(
            &scenario_a().with("date", "2030-1-1"),
            &reservation_rules(),
            TimeWindow::default(),
        );
        assert_eq!(result.get("date"), Some(&FieldError::InvalidDate));
        assert_eq!(parse_iso_date("2030-01-01"), NaiveDate::from_ymd_opt(2030, 1, 1));
        assert_eq!(parse_iso_date("+030-01-01"), None);
    }

    #[test]
    fn test_past_date_rejected_on_reference_day() {
        let today = NaiveDate::from_ymd_opt(2029, 6, 1).unwrap();
        let rules = reservation_rules();

        let result = validate_on(
            &scenario_a().with("date", "1999-01-01"),
            &rules,
            TimeWindow::default(),
            today,
        );
        assert_eq!(result.message("date"), Some("date in the past".to_string()));

        let result = validate_on(
            &scenario_a().with("date", "2029-06-01"),
            &rules,
            TimeWindow::default(),
            today,
        );
        assert!(result.is_valid());

        // Without a reference day the past check does not apply.
        let result = validate(
            &scenario_a().with("date", "1999-01-01"),
            &rules,
            TimeWindow::default(),
        );
        assert!(result.is_valid());
    }
}
