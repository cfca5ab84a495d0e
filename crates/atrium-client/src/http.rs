//! HTTP implementation of the backend seam

use crate::backend::Backend;
use crate::error::ClientError;
use crate::query::ListQuery;
use crate::resource::Resource;
use async_trait::async_trait;
use atrium_ingress::error_message;
use atrium_model::RecordId;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// `reqwest`-backed [`Backend`]
///
/// Single attempt per operation, shared connection pool, bearer auth when a
/// token is configured, and a fresh correlation id on every request.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// Build a backend for the given base URL
    ///
    /// # Errors
    /// `ClientError::Http` if the underlying client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_transport)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token to every request
    #[inline]
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, resource: Resource, id: Option<&RecordId>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, resource.path(), id),
            None => format!("{}/{}", self.base_url, resource.path()),
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let correlation = Uuid::new_v4();
        let mut request = request.header("x-request-id", correlation.to_string());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ClientError::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ClientError::from_transport)?;
        // Failure payloads are not always JSON
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if status.is_success() {
            tracing::debug!(%correlation, %status, "backend request ok");
            Ok(body)
        } else {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            tracing::warn!(%correlation, %status, %message, "backend request failed");
            Err(ClientError::Status {
                code: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_list(
        &self,
        resource: Resource,
        query: &ListQuery,
    ) -> Result<Value, ClientError> {
        let request = self
            .client
            .get(self.url(resource, None))
            .query(&query.to_params());
        self.send(request).await
    }

    async fn fetch_one(&self, resource: Resource, id: &RecordId) -> Result<Value, ClientError> {
        self.send(self.client.get(self.url(resource, Some(id)))).await
    }

    async fn create(&self, resource: Resource, payload: Value) -> Result<Value, ClientError> {
        let request = self.client.post(self.url(resource, None)).json(&payload);
        self.send(request).await
    }

    async fn update(
        &self,
        resource: Resource,
        id: &RecordId,
        payload: Value,
    ) -> Result<Value, ClientError> {
        let request = self.client.put(self.url(resource, Some(id))).json(&payload);
        self.send(request).await
    }

    async fn delete(&self, resource: Resource, id: &RecordId) -> Result<(), ClientError> {
        self.send(self.client.delete(self.url(resource, Some(id))))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_construction_strips_trailing_slash() {
        let backend = HttpBackend::new("https://api.example.com/", Duration::from_secs(5)).unwrap();

        assert_eq!(
            backend.url(Resource::Employees, None),
            "https://api.example.com/employees"
        );
        assert_eq!(
            backend.url(Resource::DebitNotes, Some(&RecordId::new("d1"))),
            "https://api.example.com/ehs/debit-notes/d1"
        );
    }
}
