//! Envelope classification and pagination extraction
//!
//! Every backend generation wrapped responses differently. Rather than
//! guessing at call sites, the shapes are enumerated here and anything
//! outside the list is rejected loudly.

use crate::error::DecodeError;
use serde_json::{Map, Value};

/// Observed response envelope shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Bare JSON array of records
    BareList,
    /// `{ "data": [...] }`, optionally with a `pagination` block
    DataList,
    /// `{ "message": [...] }` — legacy bespoke envelope
    MessageList,
    /// `{ "result": [...] }`
    ResultList,
    /// Bare JSON object carrying an id field
    BareRecord,
    /// `{ "data": {...} }`
    DataRecord,
    /// `{ "user": {...} }` — auth endpoints
    UserRecord,
    /// `{ "result": {...} }`
    ResultRecord,
    /// None of the above
    Unrecognized,
}

impl Envelope {
    /// Name the shape of a payload without decoding it
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::BareList,
            Value::Object(obj) => {
                for (key, shape) in [
                    ("data", (Self::DataList, Self::DataRecord)),
                    ("message", (Self::MessageList, Self::Unrecognized)),
                    ("result", (Self::ResultList, Self::ResultRecord)),
                    ("user", (Self::Unrecognized, Self::UserRecord)),
                ] {
                    match obj.get(key) {
                        Some(Value::Array(_)) if shape.0 != Self::Unrecognized => return shape.0,
                        Some(Value::Object(_)) if shape.1 != Self::Unrecognized => return shape.1,
                        _ => {}
                    }
                }
                if obj.contains_key("_id") || obj.contains_key("id") || obj.contains_key("uuid") {
                    Self::BareRecord
                } else {
                    Self::Unrecognized
                }
            }
            _ => Self::Unrecognized,
        }
    }
}

/// Pagination block as reported by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-based)
    pub page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total record count across pages
    pub total: u64,
}

impl PageInfo {
    fn from_object(obj: &Map<String, Value>) -> Option<Self> {
        let page = obj.get("page")?.as_u64()?;
        let total_pages = obj
            .get("totalPages")
            .or_else(|| obj.get("total_pages"))?
            .as_u64()?;
        let total = obj.get("total")?.as_u64()?;
        Some(Self {
            page: page as u32,
            total_pages: total_pages as u32,
            total,
        })
    }
}

/// Extract the record array and pagination info from a list payload
pub(crate) fn list_items(value: &Value) -> Result<(&Vec<Value>, Option<PageInfo>), DecodeError> {
    match value {
        Value::Array(items) => Ok((items, None)),
        Value::Object(obj) => {
            let items = ["data", "message", "result"]
                .iter()
                .find_map(|key| obj.get(*key).and_then(Value::as_array))
                .ok_or(DecodeError::UnrecognizedEnvelope)?;

            let info = obj
                .get("pagination")
                .and_then(Value::as_object)
                .and_then(PageInfo::from_object)
                .or_else(|| PageInfo::from_object(obj));

            Ok((items, info))
        }
        _ => Err(DecodeError::UnrecognizedEnvelope),
    }
}

/// Extract the record object from a single-record payload
pub(crate) fn record_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::UnrecognizedEnvelope)?;

    if obj.contains_key("_id") || obj.contains_key("id") || obj.contains_key("uuid") {
        return Ok(obj);
    }

    ["data", "user", "result"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_object))
        .ok_or(DecodeError::UnrecognizedEnvelope)
}

/// Defensively extract a human-readable error message from a failure payload
///
/// Backends report errors as `{"error": "..."}` or `{"message": "..."}` or
/// `{"msg": "..."}` or `{"error": {"message": "..."}}`.
#[must_use]
pub fn error_message(value: &Value) -> Option<String> {
    let obj = value.as_object()?;

    for key in ["error", "message", "msg"] {
        match obj.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Object(inner)) => {
                if let Some(Value::String(s)) = inner.get("message") {
                    if !s.is_empty() {
                        return Some(s.clone());
                    }
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_every_observed_list_shape() {
        assert_eq!(Envelope::classify(&json!([])), Envelope::BareList);
        assert_eq!(Envelope::classify(&json!({"data": []})), Envelope::DataList);
        assert_eq!(Envelope::classify(&json!({"message": []})), Envelope::MessageList);
        assert_eq!(Envelope::classify(&json!({"result": []})), Envelope::ResultList);
    }

    #[test]
    fn classifies_every_observed_record_shape() {
        assert_eq!(Envelope::classify(&json!({"_id": "1"})), Envelope::BareRecord);
        assert_eq!(Envelope::classify(&json!({"id": "1"})), Envelope::BareRecord);
        assert_eq!(
            Envelope::classify(&json!({"data": {"_id": "1"}})),
            Envelope::DataRecord
        );
        assert_eq!(
            Envelope::classify(&json!({"user": {"_id": "1"}})),
            Envelope::UserRecord
        );
        assert_eq!(
            Envelope::classify(&json!({"result": {"_id": "1"}})),
            Envelope::ResultRecord
        );
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert_eq!(Envelope::classify(&json!(42)), Envelope::Unrecognized);
        assert_eq!(Envelope::classify(&json!({"ok": true})), Envelope::Unrecognized);
    }

    #[test]
    fn list_items_reads_nested_pagination() {
        let payload = json!({
            "data": [{"_id": "1"}],
            "pagination": {"page": 2, "totalPages": 5, "total": 93}
        });

        let (items, info) = list_items(&payload).unwrap();
        assert_eq!(items.len(), 1);
        let info = info.unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(info.total_pages, 5);
        assert_eq!(info.total, 93);
    }

    #[test]
    fn list_items_reads_top_level_pagination() {
        let payload = json!({
            "message": [],
            "page": 1,
            "totalPages": 1,
            "total": 0
        });

        let (_, info) = list_items(&payload).unwrap();
        assert_eq!(info.unwrap().total, 0);
    }

    #[test]
    fn error_message_handles_all_shapes() {
        assert_eq!(
            error_message(&json!({"error": "boom"})),
            Some("boom".to_string())
        );
        assert_eq!(
            error_message(&json!({"message": "nope"})),
            Some("nope".to_string())
        );
        assert_eq!(
            error_message(&json!({"msg": "denied"})),
            Some("denied".to_string())
        );
        assert_eq!(
            error_message(&json!({"error": {"message": "nested"}})),
            Some("nested".to_string())
        );
        assert_eq!(error_message(&json!({"ok": true})), None);
        assert_eq!(error_message(&json!({"error": ""})), None);
    }
}
