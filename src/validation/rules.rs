//! Rule table for the reservation form.

use std::sync::LazyLock;

use regex::Regex;

use super::FieldRule;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+() \-]{7,}$").expect("phone pattern is valid"));

static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// Field keys of the reservation form surface.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const GUESTS: &str = "guests";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const MESSAGE: &str = "message";
}

/// Rules for the reservation form. `message` is free text and has no rule.
pub fn reservation_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(fields::NAME).required().min_length(2),
        FieldRule::new(fields::EMAIL).required().email(),
        FieldRule::new(fields::PHONE)
            .required()
            .pattern(PHONE_PATTERN.clone()),
        FieldRule::new(fields::GUESTS)
            .required()
            .pattern(DIGITS_PATTERN.clone())
            .min(1.0),
        FieldRule::new(fields::DATE).required().not_past(),
        FieldRule::new(fields::TIME).required(),
    ]
}
