//! Alias-aware access to raw backend records

use crate::error::DecodeError;
use atrium_model::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

/// Known field aliases, canonical snake_case name first
///
/// Grown one backend regression at a time. Every spelling here has been
/// observed in a live payload.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("site_id", &["site", "branch_id", "branch"]),
    ("society_id", &["society", "community_id", "community"]),
    ("block_id", &["block"]),
    ("unit_id", &["unit"]),
    ("reporting_manager", &["manager_id", "manager"]),
    ("date_of_birth", &["dob"]),
    ("seller", &["seller_name"]),
    ("number", &["unit_number"]),
    ("issued_on", &["issue_date", "date"]),
];

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Thin, alias-aware view over one raw backend record
///
/// Field lookup tries the canonical snake_case name, then its camelCase
/// spelling, then every known alias (in both spellings). This is the only
/// place alias fallbacks exist.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    obj: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    /// Wrap a JSON object
    #[inline]
    #[must_use]
    pub fn new(obj: &'a Map<String, Value>) -> Self {
        Self { obj }
    }

    /// View a JSON value as a record, rejecting non-objects
    pub fn from_value(value: &'a Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(Self::new)
            .ok_or(DecodeError::UnrecognizedEnvelope)
    }

    fn lookup(&self, field: &str) -> Option<&'a Value> {
        if let Some(v) = self.obj.get(field) {
            return Some(v);
        }
        if let Some(v) = self.obj.get(&to_camel_case(field)) {
            return Some(v);
        }
        let aliases = FIELD_ALIASES
            .iter()
            .find(|(canonical, _)| *canonical == field)
            .map(|(_, aliases)| *aliases)?;
        for alias in aliases {
            if let Some(v) = self.obj.get(*alias) {
                return Some(v);
            }
            if let Some(v) = self.obj.get(&to_camel_case(alias)) {
                return Some(v);
            }
        }
        None
    }

    /// Server-assigned id: `_id`, then `id`, then `uuid`
    pub fn id(&self) -> Result<RecordId, DecodeError> {
        for key in ["_id", "id", "uuid"] {
            match self.obj.get(key) {
                Some(Value::String(s)) if !s.is_empty() => return Ok(RecordId::new(s.clone())),
                // Integer ids show up on the oldest backend
                Some(Value::Number(n)) => return Ok(RecordId::new(n.to_string())),
                _ => {}
            }
        }
        Err(DecodeError::missing("_id"))
    }

    /// Required string field
    pub fn str(&self, field: &str) -> Result<&'a str, DecodeError> {
        match self.lookup(field) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(DecodeError::invalid(field, "expected a string")),
            None => Err(DecodeError::missing(field)),
        }
    }

    /// Optional string field; absent, null, and empty all read as `None`
    #[must_use]
    pub fn opt_str(&self, field: &str) -> Option<&'a str> {
        match self.lookup(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Optional unsigned field; tolerates numbers sent as strings
    #[must_use]
    pub fn opt_u64(&self, field: &str) -> Option<u64> {
        match self.lookup(field)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Optional u32 field
    #[must_use]
    pub fn opt_u32(&self, field: &str) -> Option<u32> {
        self.opt_u64(field).and_then(|n| u32::try_from(n).ok())
    }

    /// Required signed amount field; tolerates numbers sent as strings
    pub fn amount(&self, field: &str) -> Result<i64, DecodeError> {
        match self.lookup(field) {
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| DecodeError::invalid(field, "amount out of range")),
            Some(Value::String(s)) => s
                .parse()
                .map_err(|_| DecodeError::invalid(field, "amount not numeric")),
            Some(_) => Err(DecodeError::invalid(field, "expected a number")),
            None => Err(DecodeError::missing(field)),
        }
    }

    /// Optional boolean field
    #[must_use]
    pub fn opt_bool(&self, field: &str) -> Option<bool> {
        self.lookup(field).and_then(Value::as_bool)
    }

    /// Required array field
    pub fn array(&self, field: &str) -> Result<&'a Vec<Value>, DecodeError> {
        match self.lookup(field) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(DecodeError::invalid(field, "expected an array")),
            None => Err(DecodeError::missing(field)),
        }
    }

    /// Optional array field
    #[must_use]
    pub fn opt_array(&self, field: &str) -> Option<&'a Vec<Value>> {
        self.lookup(field).and_then(Value::as_array)
    }

    /// Required enum-like field parsed via `FromStr`
    pub fn parsed<T>(&self, field: &str) -> Result<T, DecodeError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.str(field)?;
        raw.parse()
            .map_err(|e: T::Err| DecodeError::invalid(field, e.to_string()))
    }

    /// Optional enum-like field; a present-but-unknown value is an error
    pub fn opt_parsed<T>(&self, field: &str) -> Result<Option<T>, DecodeError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.opt_str(field) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e: T::Err| DecodeError::invalid(field, e.to_string())),
            None => Ok(None),
        }
    }

    /// Required calendar date: `YYYY-MM-DD`, or the date part of RFC 3339
    pub fn date(&self, field: &str) -> Result<NaiveDate, DecodeError> {
        let raw = self.str(field)?;
        parse_date(raw).ok_or_else(|| DecodeError::invalid(field, format!("bad date: {raw}")))
    }

    /// Optional calendar date
    pub fn opt_date(&self, field: &str) -> Result<Option<NaiveDate>, DecodeError> {
        match self.opt_str(field) {
            Some(raw) => parse_date(raw)
                .map(Some)
                .ok_or_else(|| DecodeError::invalid(field, format!("bad date: {raw}"))),
            None => Ok(None),
        }
    }

    /// Required RFC 3339 timestamp
    pub fn datetime(&self, field: &str) -> Result<DateTime<Utc>, DecodeError> {
        let raw = self.str(field)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DecodeError::invalid(field, e.to_string()))
    }

    /// Optional RFC 3339 timestamp; an unparseable value reads as `None`
    ///
    /// Timestamps are display metadata, not domain state; a backend that
    /// mangles `created_at` should not fail the whole record.
    #[must_use]
    pub fn opt_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        let raw = self.opt_str(field)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    /// Foreign reference: a plain string id or a denormalized embedded object
    ///
    /// `{"site": "66f"}` and `{"site": {"_id": "66f", "name": "Tower B"}}`
    /// both resolve to the id.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<RecordId> {
        match self.lookup(field)? {
            Value::String(s) if !s.is_empty() => Some(RecordId::new(s.clone())),
            Value::Object(obj) => RawRecord::new(obj).id().ok(),
            _ => None,
        }
    }

    /// Display name of an embedded foreign reference, if denormalized
    #[must_use]
    pub fn reference_name(&self, field: &str) -> Option<String> {
        match self.lookup(field)? {
            Value::Object(obj) => RawRecord::new(obj)
                .opt_str("name")
                .map(ToString::to_string),
            _ => None,
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Timestamp where a date was expected: take the date part
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
