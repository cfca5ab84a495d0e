//! Reusable field rules
//!
//! Each rule appends to a [`ValidationReport`]; forms compose them in their
//! `validate` impls. Messages are user-facing.

use crate::report::ValidationReport;
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,14}$").expect("phone regex"));

/// Non-blank string field
pub fn required(report: &mut ValidationReport, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.reject(field, "required");
    }
}

/// Option field that must be present
pub fn required_some<T>(report: &mut ValidationReport, field: &str, value: &Option<T>) {
    if value.is_none() {
        report.reject(field, "required");
    }
}

/// Option field required only under a condition
pub fn required_if<T>(
    report: &mut ValidationReport,
    field: &str,
    condition: bool,
    value: &Option<T>,
    message: &str,
) {
    if condition && value.is_none() {
        report.reject(field, message);
    }
}

/// Email format, checked only when non-blank
pub fn email(report: &mut ValidationReport, field: &str, value: &str) {
    if !value.trim().is_empty() && !EMAIL.is_match(value.trim()) {
        report.reject(field, "not a valid email address");
    }
}

/// Phone format, checked only when present
pub fn phone(report: &mut ValidationReport, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.trim().is_empty() && !PHONE.is_match(value.trim()) {
            report.reject(field, "not a valid phone number");
        }
    }
}

/// Inclusive numeric bounds, checked only when present
pub fn bounded(report: &mut ValidationReport, field: &str, value: Option<u32>, min: u32, max: u32) {
    if let Some(value) = value {
        if value < min || value > max {
            report.reject(field, format!("must be between {min} and {max}"));
        }
    }
}

/// Strictly positive money amount
pub fn positive_amount(report: &mut ValidationReport, field: &str, value: i64) {
    if value <= 0 {
        report.reject(field, "must be greater than zero");
    }
}

/// Minimum age against today's date
pub fn min_age(report: &mut ValidationReport, field: &str, dob: NaiveDate, min_years: u32) {
    min_age_on(report, field, dob, min_years, Utc::now().date_naive());
}

/// Minimum age against an explicit reference date
pub fn min_age_on(
    report: &mut ValidationReport,
    field: &str,
    dob: NaiveDate,
    min_years: u32,
    today: NaiveDate,
) {
    match today.years_since(dob) {
        Some(age) if age >= min_years => {}
        _ => report.reject(field, format!("must be at least {min_years} years old")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace() {
        let mut report = ValidationReport::new();
        required(&mut report, "name", "   ");
        assert_eq!(report.violations().len(), 1);
    }

    #[test]
    fn email_accepts_common_addresses() {
        let mut report = ValidationReport::new();
        email(&mut report, "email", "priya.sharma@example.co.in");
        assert!(report.is_empty());

        email(&mut report, "email", "not-an-email");
        assert_eq!(report.violations().len(), 1);
    }

    #[test]
    fn phone_skips_absent_values() {
        let mut report = ValidationReport::new();
        phone(&mut report, "phone", None);
        assert!(report.is_empty());

        phone(&mut report, "phone", Some("+91 98765 4321x"));
        assert!(!report.is_empty());
    }

    #[test]
    fn min_age_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        // Exactly 18 today: allowed
        let mut report = ValidationReport::new();
        let dob = NaiveDate::from_ymd_opt(2007, 6, 1).unwrap();
        min_age_on(&mut report, "dateOfBirth", dob, 18, today);
        assert!(report.is_empty());

        // 18 tomorrow: rejected
        let mut report = ValidationReport::new();
        let dob = NaiveDate::from_ymd_opt(2007, 6, 2).unwrap();
        min_age_on(&mut report, "dateOfBirth", dob, 18, today);
        assert!(!report.is_empty());
    }

    #[test]
    fn min_age_rejects_future_dob() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut report = ValidationReport::new();
        let dob = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        min_age_on(&mut report, "dateOfBirth", dob, 18, today);
        assert!(!report.is_empty());
    }

    #[test]
    fn positive_amount_rejects_zero() {
        let mut report = ValidationReport::new();
        positive_amount(&mut report, "amount", 0);
        positive_amount(&mut report, "amount", -50);
        assert_eq!(report.violations().len(), 2);
    }
}
