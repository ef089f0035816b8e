mod config;
mod registry;
mod repos;
mod system;

pub use config::{Config, IdStrategy, InvalidIdStrategyError, MongoConfig};
pub use registry::ServiceRegistry;
pub use repos::{IServiceRegistryRepo, Repos};
pub use system::{id_generator, ContentHashIdGenerator, IServiceIdGenerator, RandomIdGenerator};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct RegistryContext {
    pub repos: Repos,
    pub config: Config,
    pub ids: Arc<dyn IServiceIdGenerator>,
}

impl RegistryContext {
    pub fn create_inmemory(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(&config.collection_name),
            ids: id_generator(config.id_strategy),
            config,
        }
    }

    /// Connects to mongodb when it is configured and falls back to the
    /// inmemory repos otherwise
    pub async fn create(config: Config) -> anyhow::Result<Self> {
        let mongodb = match &config.mongodb {
            Some(mongodb) => mongodb,
            None => {
                info!("Mongodb is not configured. Going to use inmemory infra.");
                return Ok(Self::create_inmemory(config));
            }
        };
        info!(
            "Going to use mongodb database: {} and collection: {}.",
            mongodb.db_name, config.collection_name
        );
        let repos = Repos::create_mongodb(mongodb, &config.collection_name).await?;
        Ok(Self {
            repos,
            ids: id_generator(config.id_strategy),
            config,
        })
    }

    pub fn registry(&self) -> ServiceRegistry {
        ServiceRegistry::new(self.repos.service_registry.clone(), self.ids.clone())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RegistryContext> {
    RegistryContext::create(Config::new()).await
}
