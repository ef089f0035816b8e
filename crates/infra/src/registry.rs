use crate::{repos::IServiceRegistryRepo, system::IServiceIdGenerator};
use cas_registry_domain::{RegisteredService, ServicePattern};
use std::sync::Arc;
use tracing::{debug, warn};

/// The service registry used by the authentication broker. Assigns ids to new
/// services and delegates storage to an `IServiceRegistryRepo`.
#[derive(Clone)]
pub struct ServiceRegistry {
    repo: Arc<dyn IServiceRegistryRepo>,
    ids: Arc<dyn IServiceIdGenerator>,
}

impl ServiceRegistry {
    pub fn new(repo: Arc<dyn IServiceRegistryRepo>, ids: Arc<dyn IServiceIdGenerator>) -> Self {
        Self { repo, ids }
    }

    /// Makes sure the backing collection exists. With `drop_collection` set
    /// every stored service is removed first.
    pub async fn initialize(&self, drop_collection: bool) -> anyhow::Result<()> {
        if drop_collection {
            warn!(
                "Dropping every registered service in collection: [{}]",
                self.repo.collection_name()
            );
        }
        self.repo.ensure_collection(drop_collection).await
    }

    /// Stores the service, assigning it an id first if it has none, and
    /// returns the service as it was read back from storage
    pub async fn save(&self, mut service: RegisteredService) -> anyhow::Result<RegisteredService> {
        if !service.has_assigned_id() {
            service.id = self.ids.next_id(&service);
        }
        self.repo.save(&service).await?;
        debug!("Saved registered service: [{:?}]", service);

        match self.repo.find(service.id).await? {
            Some(saved) => Ok(saved),
            None => Err(anyhow::anyhow!(
                "Registered service with id: {} was removed while being saved",
                service.id
            )),
        }
    }

    /// Returns `false` when no service with the same id is stored
    pub async fn delete(&self, service: &RegisteredService) -> anyhow::Result<bool> {
        let removed = self.repo.delete(service.id).await?;
        if removed {
            debug!("Removed registered service: [{:?}]", service);
        }
        Ok(removed)
    }

    pub async fn find_service_by_id(&self, id: i64) -> anyhow::Result<Option<RegisteredService>> {
        self.repo.find(id).await
    }

    /// Exact lookup, `service_id` is not interpreted as a pattern
    pub async fn find_service_by_service_id(
        &self,
        service_id: &str,
    ) -> anyhow::Result<Option<RegisteredService>> {
        self.repo.find_by_service_id(service_id).await
    }

    /// Compiles `pattern` as a case insensitive regular expression and returns
    /// the first service whose `service_id` matches it
    pub async fn find_service_by_pattern(
        &self,
        pattern: &str,
    ) -> anyhow::Result<Option<RegisteredService>> {
        let pattern = ServicePattern::new(pattern)?;
        self.repo.find_by_pattern(&pattern).await
    }

    pub async fn load(&self) -> anyhow::Result<Vec<RegisteredService>> {
        self.repo.find_all().await
    }

    pub async fn size(&self) -> anyhow::Result<u64> {
        self.repo.count().await
    }
}
