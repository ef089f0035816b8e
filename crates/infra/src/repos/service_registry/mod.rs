mod inmemory;
mod mongo;

pub use inmemory::InMemoryServiceRegistryRepo;
pub use mongo::MongoServiceRegistryRepo;
use cas_registry_domain::{RegisteredService, ServicePattern};

/// Storage primitives for registered services. Every implementation works on
/// exactly one named collection.
#[async_trait::async_trait]
pub trait IServiceRegistryRepo: Send + Sync {
    fn collection_name(&self) -> &str;
    /// Drops the collection if `drop_collection` is set, then creates it if it
    /// does not exist
    async fn ensure_collection(&self, drop_collection: bool) -> anyhow::Result<()>;
    /// Inserts the service or replaces the one stored with the same id
    async fn save(&self, service: &RegisteredService) -> anyhow::Result<()>;
    async fn find(&self, id: i64) -> anyhow::Result<Option<RegisteredService>>;
    /// Exact, case sensitive match on `service_id`
    async fn find_by_service_id(&self, service_id: &str)
        -> anyhow::Result<Option<RegisteredService>>;
    /// First service whose `service_id` matches the pattern
    async fn find_by_pattern(
        &self,
        pattern: &ServicePattern,
    ) -> anyhow::Result<Option<RegisteredService>>;
    async fn find_all(&self) -> anyhow::Result<Vec<RegisteredService>>;
    /// Returns `true` if a service with the given id was removed
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}
