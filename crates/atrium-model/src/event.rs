//! Society events

use crate::id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Society event with registration tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned id
    pub id: RecordId,
    /// Hosting society
    pub society_id: RecordId,
    /// Event title
    pub title: String,
    /// Venue description
    pub venue: String,
    /// Start time
    pub starts_at: DateTime<Utc>,
    /// End time
    pub ends_at: DateTime<Utc>,
    /// Registration capacity, if capped
    pub capacity: Option<u32>,
    /// Current registration count
    pub registered: u32,
}

impl Event {
    /// Whether further registrations are possible
    #[inline]
    #[must_use]
    pub fn has_capacity(&self) -> bool {
        match self.capacity {
            Some(cap) => self.registered < cap,
            None => true,
        }
    }
}
