//! The admin console facade

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::manager::ListManager;
use crate::record::ConsoleRecord;
use atrium_access::{Action, CachedCapabilities, CapabilityProvider, PolicyTable, Role};
use atrium_client::{Backend, HttpBackend, ListQuery, Repository, Resource};
use atrium_model::{MemberRole, RecordId, SocietyMember};
use atrium_render::Printable;
use atrium_store::StoreRegistry;
use std::sync::Arc;
use tracing::{debug, info};

/// Wires the backend, the capability service, and per-resource managers
///
/// One console per signed-in operator. Capability answers are cached with
/// the configured TTL; managers built from the same console share the backend
/// connection pool and the cache.
pub struct AdminConsole {
    config: ConsoleConfig,
    backend: Arc<dyn Backend>,
    capabilities: Arc<CachedCapabilities>,
    stores: StoreRegistry,
    role: Role,
}

impl AdminConsole {
    /// Connect to the configured backend with the built-in policy table
    pub fn connect(config: ConsoleConfig, role: Role) -> Result<Self, ConsoleError> {
        let backend = HttpBackend::new(config.base_url.clone(), config.request_timeout())?;
        Ok(Self::with_backend(config, Arc::new(backend), Arc::new(PolicyTable::new()), role))
    }

    /// Wire an explicit backend and capability provider
    ///
    /// Tests and embedded setups use this to substitute the transport or the
    /// policy source.
    #[must_use]
    pub fn with_backend(
        config: ConsoleConfig,
        backend: Arc<dyn Backend>,
        provider: Arc<dyn CapabilityProvider>,
        role: Role,
    ) -> Self {
        let capabilities = Arc::new(CachedCapabilities::new(
            provider,
            config.capability_cache_ttl(),
        ));
        info!(%role, base_url = %config.base_url, "console connected");
        Self {
            config,
            backend,
            capabilities,
            stores: StoreRegistry::new(),
            role,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Role of the signed-in operator
    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Build the list manager for an entity's screen
    ///
    /// Managers for the same resource share one record store, so two views
    /// of the same screen stay in sync.
    #[must_use]
    pub fn manager<T: ConsoleRecord>(&self) -> ListManager<T> {
        ListManager::new(
            Arc::clone(&self.backend),
            self.capabilities.clone() as Arc<dyn CapabilityProvider>,
            self.role,
            self.config.default_query(),
            self.stores.store::<T>(T::RESOURCE.path()),
        )
    }

    /// Proactive capability check for an arbitrary operation
    pub async fn ensure_allowed(
        &self,
        action: Action,
        resource: Resource,
    ) -> Result<(), ConsoleError> {
        if self.capabilities.can(self.role, action, resource).await? {
            Ok(())
        } else {
            Err(ConsoleError::PermissionDenied {
                role: self.role,
                action,
                resource,
            })
        }
    }

    /// Load the member directory of a society, admins excluded
    ///
    /// The member endpoint mixes committee admins into the same list; the
    /// member view only shows ordinary members.
    pub async fn load_members(
        &self,
        society: &RecordId,
    ) -> Result<Vec<SocietyMember>, ConsoleError> {
        self.ensure_allowed(Action::View, Resource::Members).await?;

        let repository: Repository<SocietyMember> =
            Repository::new(Arc::clone(&self.backend), Resource::Members);
        let query = ListQuery::new(self.config.default_page_size).with_society(society.clone());
        let page = repository.list(&query).await?;

        let total = page.items.len();
        let members: Vec<SocietyMember> = page
            .items
            .into_iter()
            .filter(|member| member.role == MemberRole::Member)
            .collect();
        debug!(%society, total, members = members.len(), "member directory loaded");
        Ok(members)
    }

    /// Render a record as a self-contained printable byte buffer
    ///
    /// Checked like any other operation; the buffer is the deliverable and
    /// delivery is the caller's concern.
    pub async fn print_record<T>(&self, record: &T) -> Result<Vec<u8>, ConsoleError>
    where
        T: ConsoleRecord + Printable,
    {
        self.ensure_allowed(Action::Print, T::RESOURCE).await?;
        Ok(record.print())
    }

    /// Drop all cached capability answers
    pub fn invalidate_capabilities(&self) {
        self.capabilities.invalidate();
    }
}
