//! In-memory backend

use async_trait::async_trait;
use atrium_client::{Backend, ClientError, ListQuery, Resource};
use atrium_model::RecordId;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Which list envelope the backend answers with
///
/// The real fleet drifts across these shapes; tests pick the one the
/// scenario calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeStyle {
    /// `{ "data": [...], "pagination": {...} }`
    #[default]
    Data,
    /// `{ "message": [...] }` (legacy services)
    Message,
    /// `{ "result": [...] }`
    Result,
    /// Bare top-level array
    Bare,
}

/// [`Backend`] over an in-process map of wire-shaped records
///
/// Records are stored exactly as a backend would serve them, `_id` and all,
/// so responses still cross the ingress decoders. Single failure injection:
/// the next matching operation errors once, then the backend recovers.
pub struct MemoryBackend {
    records: DashMap<Resource, Vec<Value>>,
    style: EnvelopeStyle,
    next_id: AtomicU64,
    fail_next_list: Mutex<Option<ClientError>>,
}

impl MemoryBackend {
    /// Empty backend answering with the given envelope style
    #[must_use]
    pub fn new(style: EnvelopeStyle) -> Self {
        Self {
            records: DashMap::new(),
            style,
            next_id: AtomicU64::new(1),
            fail_next_list: Mutex::new(None),
        }
    }

    /// Seed wire-shaped records into a collection
    pub fn seed(&self, resource: Resource, records: Vec<Value>) {
        self.records.entry(resource).or_default().extend(records);
    }

    /// Make the next `fetch_list` fail with the given error, once
    pub fn fail_next_list(&self, error: ClientError) {
        *self.fail_next_list.lock() = Some(error);
    }

    /// Records currently stored for a collection
    #[must_use]
    pub fn stored(&self, resource: Resource) -> Vec<Value> {
        self.records
            .get(&resource)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    fn wrap_list(&self, items: Vec<Value>) -> Value {
        let total = items.len();
        match self.style {
            EnvelopeStyle::Data => json!({
                "data": items,
                "pagination": { "page": 1, "totalPages": 1, "total": total },
            }),
            EnvelopeStyle::Message => json!({ "message": items }),
            EnvelopeStyle::Result => json!({ "result": items }),
            EnvelopeStyle::Bare => Value::Array(items),
        }
    }

    fn wrap_record(&self, record: Value) -> Value {
        match self.style {
            EnvelopeStyle::Data => json!({ "data": record }),
            EnvelopeStyle::Result => json!({ "result": record }),
            EnvelopeStyle::Message | EnvelopeStyle::Bare => record,
        }
    }

    fn matches_query(record: &Value, query: &ListQuery) -> bool {
        if let Some(society) = &query.society {
            let field = record
                .get("societyId")
                .or_else(|| record.get("society"))
                .and_then(Value::as_str);
            if field != Some(society.as_str()) {
                return false;
            }
        }
        if let Some(site) = &query.site {
            let field = record
                .get("siteId")
                .or_else(|| record.get("branch_id"))
                .and_then(Value::as_str);
            if field != Some(site.as_str()) {
                return false;
            }
        }
        if let Some(role) = &query.role {
            if record.get("role").and_then(Value::as_str) != Some(role.as_str()) {
                return false;
            }
        }
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = ["name", "title"].iter().any(|key| {
                record
                    .get(*key)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            });
            if !hit {
                return false;
            }
        }
        true
    }

    fn record_id(record: &Value) -> Option<&str> {
        record
            .get("_id")
            .or_else(|| record.get("id"))
            .and_then(Value::as_str)
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn fetch_list(
        &self,
        resource: Resource,
        query: &ListQuery,
    ) -> Result<Value, ClientError> {
        if let Some(error) = self.fail_next_list.lock().take() {
            return Err(error);
        }

        let items = self
            .records
            .get(&resource)
            .map(|entry| {
                entry
                    .iter()
                    .filter(|record| Self::matches_query(record, query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(self.wrap_list(items))
    }

    async fn fetch_one(&self, resource: Resource, id: &RecordId) -> Result<Value, ClientError> {
        let record = self.records.get(&resource).and_then(|entry| {
            entry
                .iter()
                .find(|record| Self::record_id(record) == Some(id.as_str()))
                .cloned()
        });
        match record {
            Some(record) => Ok(self.wrap_record(record)),
            None => Err(ClientError::Status {
                code: 404,
                message: format!("{resource} {id} not found"),
            }),
        }
    }

    async fn create(&self, resource: Resource, payload: Value) -> Result<Value, ClientError> {
        let mut record = payload;
        if Self::record_id(&record).is_none() {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            record["_id"] = json!(format!("mem-{id}"));
        }
        self.records
            .entry(resource)
            .or_default()
            .push(record.clone());
        Ok(self.wrap_record(record))
    }

    async fn update(
        &self,
        resource: Resource,
        id: &RecordId,
        payload: Value,
    ) -> Result<Value, ClientError> {
        let mut entry = self.records.entry(resource).or_default();
        let slot = entry
            .iter_mut()
            .find(|record| Self::record_id(record) == Some(id.as_str()));
        match slot {
            Some(slot) => {
                let mut updated = payload;
                updated["_id"] = json!(id.as_str());
                *slot = updated.clone();
                Ok(self.wrap_record(updated))
            }
            None => Err(ClientError::Status {
                code: 404,
                message: format!("{resource} {id} not found"),
            }),
        }
    }

    async fn delete(&self, resource: Resource, id: &RecordId) -> Result<(), ClientError> {
        if let Some(mut entry) = self.records.get_mut(&resource) {
            entry.retain(|record| Self::record_id(record) != Some(id.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_wraps_in_configured_envelope() {
        let backend = MemoryBackend::new(EnvelopeStyle::Message);
        backend.seed(
            Resource::Members,
            vec![json!({"_id": "m1", "name": "A", "role": "member"})],
        );

        let body = backend
            .fetch_list(Resource::Members, &ListQuery::default())
            .await
            .unwrap();
        assert!(body.get("message").is_some());
    }

    #[tokio::test]
    async fn create_assigns_an_id() {
        let backend = MemoryBackend::new(EnvelopeStyle::Data);
        let body = backend
            .create(Resource::Employees, json!({"name": "New Hire"}))
            .await
            .unwrap();
        assert!(body["data"]["_id"].as_str().unwrap().starts_with("mem-"));
        assert_eq!(backend.stored(Resource::Employees).len(), 1);
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let backend = MemoryBackend::new(EnvelopeStyle::Data);
        backend.fail_next_list(ClientError::Timeout);

        assert!(backend
            .fetch_list(Resource::Events, &ListQuery::default())
            .await
            .is_err());
        assert!(backend
            .fetch_list(Resource::Events, &ListQuery::default())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn query_scopes_are_applied() {
        let backend = MemoryBackend::new(EnvelopeStyle::Bare);
        backend.seed(
            Resource::Members,
            vec![
                json!({"_id": "m1", "name": "A", "role": "member", "societyId": "s1"}),
                json!({"_id": "m2", "name": "B", "role": "member", "societyId": "s2"}),
            ],
        );

        let query = ListQuery::default().with_society(RecordId::new("s1"));
        let body = backend.fetch_list(Resource::Members, &query).await.unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
