use cas_registry_infra::{Config, RegistryContext, ServiceRegistry};
use cas_registry_utils::create_random_name;

pub struct TestApp {
    pub config: Config,
    pub registry: ServiceRegistry,
}

async fn create_app(config: Config) -> TestApp {
    let ctx = RegistryContext::create(config)
        .await
        .expect("Failed to build context.");
    TestApp {
        config: ctx.config.clone(),
        registry: ctx.registry(),
    }
}

/// Builds the context from the environment, pointed at a collection that no
/// other test uses. Nothing is initialized yet.
pub async fn spawn_app() -> TestApp {
    let mut config = Config::new();
    config.collection_name = format!("test-app-{}", create_random_name(12));
    create_app(config).await
}

/// A second registry on the same collection, like a restarted server
pub async fn restart_app(app: &TestApp) -> TestApp {
    create_app(app.config.clone()).await
}
