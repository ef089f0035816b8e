use super::IServiceRegistryRepo;
use crate::repos::shared::inmemory_repo::*;
use cas_registry_domain::{RegisteredService, ServicePattern};

pub struct InMemoryServiceRegistryRepo {
    collection_name: String,
    services: std::sync::Mutex<Vec<RegisteredService>>,
}

impl InMemoryServiceRegistryRepo {
    pub fn new(collection_name: &str) -> Self {
        Self {
            collection_name: collection_name.to_string(),
            services: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRegistryRepo for InMemoryServiceRegistryRepo {
    fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The collection always exists, dropping it just clears it
    async fn ensure_collection(&self, drop_collection: bool) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.collection_name.is_empty(),
            "Collection name must not be empty"
        );
        if drop_collection {
            clear(&self.services);
        }
        Ok(())
    }

    async fn save(&self, service: &RegisteredService) -> anyhow::Result<()> {
        save(service, &self.services);
        Ok(())
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<RegisteredService>> {
        Ok(find(id, &self.services))
    }

    async fn find_by_service_id(
        &self,
        service_id: &str,
    ) -> anyhow::Result<Option<RegisteredService>> {
        Ok(find_one_by(&self.services, |s| s.service_id == service_id))
    }

    async fn find_by_pattern(
        &self,
        pattern: &ServicePattern,
    ) -> anyhow::Result<Option<RegisteredService>> {
        Ok(find_one_by(&self.services, |s| {
            pattern.is_match(&s.service_id)
        }))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<RegisteredService>> {
        Ok(find_by(&self.services, |_| true))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(delete(id, &self.services).is_some())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(count(&self.services))
    }
}
