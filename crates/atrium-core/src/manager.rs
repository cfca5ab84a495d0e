//! Per-page list orchestration

use crate::error::ConsoleError;
use crate::notice::Notice;
use crate::record::ConsoleRecord;
use atrium_access::{Action, CapabilityProvider, Role};
use atrium_client::{Backend, ListQuery, Repository};
use atrium_forms::Validate;
use atrium_ingress::PageInfo;
use atrium_model::RecordId;
use atrium_store::{apply_filters, FilterQuery, Identified, RecordStore};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates one list screen
///
/// Owns the record store, the repository binding, and the current filter
/// query. Mutations check capabilities first, validate second, and only then
/// touch the network. A failed load keeps last-known-good store contents.
pub struct ListManager<T: ConsoleRecord> {
    repository: Repository<T>,
    store: Arc<RecordStore<T>>,
    filter: RwLock<FilterQuery>,
    page_info: RwLock<Option<PageInfo>>,
    last_query: RwLock<ListQuery>,
    notices: Mutex<Vec<Notice>>,
    capabilities: Arc<dyn CapabilityProvider>,
    role: Role,
}

impl<T: ConsoleRecord> ListManager<T> {
    /// Bind a backend, capability provider, and shared store
    ///
    /// Managers built over the same store see each other's mutations; the
    /// console hands out one store per resource.
    #[must_use]
    pub fn new(
        backend: Arc<dyn Backend>,
        capabilities: Arc<dyn CapabilityProvider>,
        role: Role,
        default_query: ListQuery,
        store: Arc<RecordStore<T>>,
    ) -> Self {
        Self {
            repository: Repository::new(backend, T::RESOURCE),
            store,
            filter: RwLock::new(FilterQuery::new()),
            page_info: RwLock::new(None),
            last_query: RwLock::new(default_query),
            notices: Mutex::new(Vec::new()),
            capabilities,
            role,
        }
    }

    /// Fetch a page and replace the store wholesale
    ///
    /// On failure the store keeps its last-known-good contents and the error
    /// is returned after emitting a notice.
    pub async fn load(&self, query: &ListQuery) -> Result<usize, ConsoleError> {
        self.ensure_allowed(Action::View).await?;
        *self.last_query.write() = query.clone();

        match self.repository.list(query).await {
            Ok(page) => {
                let count = page.items.len();
                self.store.replace(page.items);
                *self.page_info.write() = page.info;
                debug!(resource = %T::RESOURCE, count, "list loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(resource = %T::RESOURCE, error = %err, "list load failed");
                self.push_notice(Notice::error(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Records currently visible under the active filter query
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        let snapshot = self.store.snapshot();
        apply_filters(&snapshot, &self.filter.read())
    }

    /// Replace the active filter query
    pub fn set_filter(&self, query: FilterQuery) {
        *self.filter.write() = query;
    }

    /// Active filter query
    #[must_use]
    pub fn filter(&self) -> FilterQuery {
        self.filter.read().clone()
    }

    /// Pagination block from the last successful load
    #[must_use]
    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info.read().clone()
    }

    /// Validate a draft, create it, and prepend the created record
    ///
    /// A draft that fails validation never reaches the network. After the
    /// optimistic prepend the list is refreshed best-effort; a refresh
    /// failure is logged and otherwise ignored.
    pub async fn submit_create<F>(&self, draft: &F) -> Result<T, ConsoleError>
    where
        F: Validate + Serialize + Sync,
    {
        self.ensure_allowed(Action::Create).await?;

        let report = draft.validate();
        if !report.is_empty() {
            self.push_notice(Notice::error(report.to_string()));
            return Err(ConsoleError::Validation(report));
        }

        match self.repository.create(draft).await {
            Ok(created) => {
                self.store.prepend(created.clone());
                info!(resource = %T::RESOURCE, id = %created.record_id(), "record created");
                self.push_notice(Notice::success("saved"));
                self.refresh_best_effort().await;
                Ok(created)
            }
            Err(err) => {
                self.push_notice(Notice::error(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Validate a draft and update the record with the given id
    ///
    /// The updated record replaces its in-store predecessor; the last
    /// response to arrive wins.
    pub async fn submit_update<F>(&self, id: &RecordId, draft: &F) -> Result<T, ConsoleError>
    where
        F: Validate + Serialize + Sync,
    {
        self.ensure_allowed(Action::Edit).await?;

        let report = draft.validate();
        if !report.is_empty() {
            self.push_notice(Notice::error(report.to_string()));
            return Err(ConsoleError::Validation(report));
        }

        match self.repository.update(id, draft).await {
            Ok(updated) => {
                self.store.apply(updated.clone());
                info!(resource = %T::RESOURCE, %id, "record updated");
                self.push_notice(Notice::success("saved"));
                self.refresh_best_effort().await;
                Ok(updated)
            }
            Err(err) => {
                self.push_notice(Notice::error(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Delete a record and drop it from the store
    pub async fn remove(&self, id: &RecordId) -> Result<(), ConsoleError> {
        self.ensure_allowed(Action::Delete).await?;

        match self.repository.delete(id).await {
            Ok(()) => {
                self.store.remove(id);
                info!(resource = %T::RESOURCE, %id, "record deleted");
                self.push_notice(Notice::success("deleted"));
                Ok(())
            }
            Err(err) => {
                self.push_notice(Notice::error(err.user_message()));
                Err(err.into())
            }
        }
    }

    /// Notices emitted since the last drain, oldest first
    #[must_use]
    pub fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.notices.lock())
    }

    /// Current store contents, unfiltered
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.store.snapshot()
    }

    async fn ensure_allowed(&self, action: Action) -> Result<(), ConsoleError> {
        let allowed = self
            .capabilities
            .can(self.role, action, T::RESOURCE)
            .await?;
        if allowed {
            Ok(())
        } else {
            let err = ConsoleError::PermissionDenied {
                role: self.role,
                action,
                resource: T::RESOURCE,
            };
            self.push_notice(Notice::error(err.user_message()));
            Err(err)
        }
    }

    async fn refresh_best_effort(&self) {
        let query = self.last_query.read().clone();
        match self.repository.list(&query).await {
            Ok(page) => {
                self.store.replace(page.items);
                *self.page_info.write() = page.info;
            }
            Err(err) => {
                warn!(resource = %T::RESOURCE, error = %err, "refresh failed, keeping last-known-good");
            }
        }
    }

    fn push_notice(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
