//! Typed repositories over the raw backend seam

use crate::backend::Backend;
use crate::error::ClientError;
use crate::query::{ListQuery, Page};
use crate::resource::Resource;
use atrium_ingress::{decode_list, decode_record, FromRaw};
use atrium_model::RecordId;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Binds a [`Resource`] to a canonical entity type
///
/// The only place raw payloads from [`Backend`] meet the ingress decoders;
/// call sites see `Result<T, ClientError>` and nothing else.
pub struct Repository<T> {
    backend: Arc<dyn Backend>,
    resource: Resource,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            resource: self.resource,
            _marker: PhantomData,
        }
    }
}

impl<T: FromRaw> Repository<T> {
    /// Bind a backend and resource
    #[inline]
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, resource: Resource) -> Self {
        Self {
            backend,
            resource,
            _marker: PhantomData,
        }
    }

    /// Resource this repository is bound to
    #[inline]
    #[must_use]
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Fetch one page of records
    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>, ClientError> {
        let payload = self.backend.fetch_list(self.resource, query).await?;
        let decoded = decode_list(&payload)?;
        Ok(decoded.into())
    }

    /// Fetch a single record
    pub async fn get(&self, id: &RecordId) -> Result<T, ClientError> {
        let payload = self.backend.fetch_one(self.resource, id).await?;
        Ok(decode_record(&payload)?)
    }

    /// Create a record and decode the backend's view of it
    pub async fn create<P: Serialize + Sync>(&self, draft: &P) -> Result<T, ClientError> {
        let payload = serde_json::to_value(draft)?;
        let response = self.backend.create(self.resource, payload).await?;
        Ok(decode_record(&response)?)
    }

    /// Update a record and decode the backend's view of it
    pub async fn update<P: Serialize + Sync>(
        &self,
        id: &RecordId,
        draft: &P,
    ) -> Result<T, ClientError> {
        let payload = serde_json::to_value(draft)?;
        let response = self.backend.update(self.resource, id, payload).await?;
        Ok(decode_record(&response)?)
    }

    /// Delete a record
    pub async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        self.backend.delete(self.resource, id).await
    }
}
