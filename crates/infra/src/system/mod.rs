use crate::config::IdStrategy;
use cas_registry_domain::RegisteredService;
use cas_registry_utils::create_random_id;
use std::sync::Arc;

/// Assigns ids to services saved without one. Mocked out in tests to get
/// predictable ids.
pub trait IServiceIdGenerator: Send + Sync {
    /// Never returns `INITIAL_IDENTIFIER_VALUE`
    fn next_id(&self, service: &RegisteredService) -> i64;
}

pub struct RandomIdGenerator {}
impl IServiceIdGenerator for RandomIdGenerator {
    fn next_id(&self, _service: &RegisteredService) -> i64 {
        create_random_id()
    }
}

pub struct ContentHashIdGenerator {}
impl IServiceIdGenerator for ContentHashIdGenerator {
    fn next_id(&self, service: &RegisteredService) -> i64 {
        service.content_hash_id()
    }
}

pub fn id_generator(strategy: IdStrategy) -> Arc<dyn IServiceIdGenerator> {
    match strategy {
        IdStrategy::Random => Arc::new(RandomIdGenerator {}),
        IdStrategy::ContentHash => Arc::new(ContentHashIdGenerator {}),
    }
}
