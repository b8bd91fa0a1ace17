//! Field validators and the age/birth-date consistency check.
//!
//! All functions here are pure boolean classifiers with no side effects;
//! they never fail, they only accept or reject.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Local part restricted to lowercase letters, digits and `. _ % + -`;
/// domain labels case-insensitive; TLD at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("email regex compiles")
});

/// Checks the syntactic shape of an email address.
///
/// No network or DNS verification; the empty string is rejected.
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks that a phone number is entirely decimal digits and at least
/// 7 characters long. Rejects the empty string.
pub fn valid_phone(phone: &str) -> bool {
    phone.len() >= 7 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Checks whether a declared age agrees with a birth date as of `today`.
///
/// `calculated = today.year - birth_day.year`, decremented by one when the
/// birth date falls after `today` shifted back by the declared age — i.e.
/// the birthday "this cycle" has not yet occurred. The result depends on
/// `today`, so a record that passes now can fail later without being
/// modified; the declared age is a point-in-time assertion.
pub fn age_matches_birth_date(birth_day: NaiveDate, declared_age: i32, today: NaiveDate) -> bool {
    let mut calculated = today.year() - birth_day.year();
    if birth_day > years_before(today, declared_age) {
        calculated -= 1;
    }
    calculated == declared_age
}

/// Shifts a date back by whole years. Feb 29 normalizes to Mar 1 in
/// non-leap target years.
pub(crate) fn years_before(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}
