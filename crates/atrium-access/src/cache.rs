//! Memoizing capability wrapper

use crate::error::AccessError;
use crate::provider::{Action, CapabilityProvider, Role};
use atrium_client::Resource;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

type CacheKey = (Role, Action, Resource);

/// Caches answers from an inner [`CapabilityProvider`]
///
/// Capability checks run on every list load and submit, so answers are
/// memoized per (role, action, resource) triple with a TTL. Only answers are
/// cached; provider errors surface to the caller and are asked again next
/// time.
pub struct CachedCapabilities {
    inner: Arc<dyn CapabilityProvider>,
    answers: Cache<CacheKey, bool>,
}

impl CachedCapabilities {
    /// Wrap `inner`, keeping answers for `ttl`
    #[must_use]
    pub fn new(inner: Arc<dyn CapabilityProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            answers: Cache::builder()
                .max_capacity(1_024)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Drop all cached answers, forcing fresh provider queries
    pub fn invalidate(&self) {
        self.answers.invalidate_all();
    }

    /// Number of cached answers
    #[must_use]
    pub fn len(&self) -> u64 {
        self.answers.entry_count()
    }

    /// Whether nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.entry_count() == 0
    }
}

#[async_trait::async_trait]
impl CapabilityProvider for CachedCapabilities {
    async fn can(
        &self,
        role: Role,
        action: Action,
        resource: Resource,
    ) -> Result<bool, AccessError> {
        let key = (role, action, resource);
        if let Some(answer) = self.answers.get(&key).await {
            return Ok(answer);
        }

        let answer = self.inner.can(role, action, resource).await?;
        debug!(%role, %action, %resource, answer, "capability resolved");
        self.answers.insert(key, answer).await;
        Ok(answer)
    }
}
