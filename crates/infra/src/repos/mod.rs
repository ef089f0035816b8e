mod service_registry;
mod shared;

use crate::config::MongoConfig;
use mongodb::{bson::doc, options::ClientOptions, Client};
pub use service_registry::{
    IServiceRegistryRepo, InMemoryServiceRegistryRepo, MongoServiceRegistryRepo,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub service_registry: Arc<dyn IServiceRegistryRepo>,
}

impl Repos {
    pub async fn create_mongodb(mongodb: &MongoConfig, collection_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(&mongodb.connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(&mongodb.db_name);

        // The driver connects lazily, ping so that a bad connection fails here
        info!("DB CHECKING CONNECTION ...");
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            service_registry: Arc::new(MongoServiceRegistryRepo::new(&db, collection_name)),
        })
    }

    pub fn create_inmemory(collection_name: &str) -> Self {
        Self {
            service_registry: Arc::new(InMemoryServiceRegistryRepo::new(collection_name)),
        }
    }
}
