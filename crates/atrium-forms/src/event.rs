//! Event drafts

use crate::report::ValidationReport;
use crate::{rules, FormMode, Validate};
use atrium_model::{Event, RecordId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

/// Draft for creating or editing an [`Event`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Hosting society
    #[serde(skip_serializing_if = "Option::is_none")]
    pub society_id: Option<RecordId>,
    /// Event title
    pub title: String,
    /// Venue description
    pub venue: String,
    /// Start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// End time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    /// Registration capacity, if capped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl EventForm {
    /// Blank draft scoped to a society
    #[must_use]
    pub fn create(society_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            society_id: Some(society_id),
            title: String::new(),
            venue: String::new(),
            starts_at: None,
            ends_at: None,
            capacity: None,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(event: &Event) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(event.id.clone()),
            society_id: Some(event.society_id.clone()),
            title: event.title.clone(),
            venue: event.venue.clone(),
            starts_at: Some(event.starts_at),
            ends_at: Some(event.ends_at),
            capacity: event.capacity,
        }
    }
}

impl Validate for EventForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "title", &self.title);
        rules::required(&mut report, "venue", &self.venue);
        rules::required_some(&mut report, "societyId", &self.society_id);
        rules::required_some(&mut report, "startsAt", &self.starts_at);
        rules::required_some(&mut report, "endsAt", &self.ends_at);

        if let (Some(starts), Some(ends)) = (self.starts_at, self.ends_at) {
            if ends <= starts {
                report.reject("endsAt", "must be after the start time");
            }
        }

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                report.reject("capacity", "must be at least 1");
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_form() -> EventForm {
        let mut form = EventForm::create(RecordId::new("soc-1"));
        form.title = "Annual General Meeting".to_string();
        form.venue = "Clubhouse".to_string();
        form.starts_at = Some(Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap());
        form.ends_at = Some(Utc.with_ymd_and_hms(2025, 3, 1, 20, 0, 0).unwrap());
        form
    }

    #[test]
    fn well_formed_event_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = valid_form();
        form.ends_at = Some(Utc.with_ymd_and_hms(2025, 3, 1, 17, 0, 0).unwrap());

        assert_eq!(form.validate().for_field("endsAt").len(), 1);
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let mut form = valid_form();
        form.ends_at = form.starts_at;

        assert_eq!(form.validate().for_field("endsAt").len(), 1);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut form = valid_form();
        form.capacity = Some(0);

        assert_eq!(form.validate().for_field("capacity").len(), 1);
    }
}
