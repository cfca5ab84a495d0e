//! The backend transport seam

use crate::error::ClientError;
use crate::query::ListQuery;
use crate::resource::Resource;
use async_trait::async_trait;
use atrium_model::RecordId;
use serde_json::Value;

/// Raw transport to the backend
///
/// Implementations move JSON in and out; normalization into canonical types
/// happens above this seam, at the ingress boundary. Each call is one
/// best-effort request.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch a list payload
    async fn fetch_list(
        &self,
        resource: Resource,
        query: &ListQuery,
    ) -> Result<Value, ClientError>;

    /// Fetch a single record payload
    async fn fetch_one(&self, resource: Resource, id: &RecordId) -> Result<Value, ClientError>;

    /// Create a record from a canonical payload
    async fn create(&self, resource: Resource, payload: Value) -> Result<Value, ClientError>;

    /// Update a record with a partial canonical payload
    async fn update(
        &self,
        resource: Resource,
        id: &RecordId,
        payload: Value,
    ) -> Result<Value, ClientError>;

    /// Delete a record
    async fn delete(&self, resource: Resource, id: &RecordId) -> Result<(), ClientError>;
}
