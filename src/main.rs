mod telemetry;

use cas_registry_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("cas_service_registry".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;
    let registry = context.registry();
    registry.initialize(context.config.drop_collection).await?;

    let size = registry.size().await?;
    info!(
        "Service registry is ready with {} registered services in collection: [{}]",
        size, context.config.collection_name
    );
    Ok(())
}
