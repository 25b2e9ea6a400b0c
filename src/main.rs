//! `workbench [BUSINESS_ID]`
//!
//! Builds one workbench snapshot against the configured back-office API and
//! prints it as JSON. Without a business id the platform-wide view is built.

use std::sync::Arc;

use subscription_workbench::adapters::{
    BackendClient, CachedSubscriptionRepository, HttpBusinessProfileReader, HttpOrderReporting,
    HttpSubscriptionRepository,
};
use subscription_workbench::application::{GetWorkbenchSnapshotQuery, WorkbenchAggregator};
use subscription_workbench::config::AppConfig;
use subscription_workbench::ports::SubscriptionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.logging.init_tracing();
    config.validate()?;

    let client = BackendClient::new(&config.backend)?;
    tracing::info!(base_url = client.base_url(), "Back-office client ready");

    let subscriptions: Arc<dyn SubscriptionRepository> = Arc::new(CachedSubscriptionRepository::new(
        Arc::new(HttpSubscriptionRepository::new(client.clone())),
        config.workbench.collection_cache_ttl(),
    ));
    let aggregator = WorkbenchAggregator::new(
        Arc::new(HttpBusinessProfileReader::new(client.clone())),
        Arc::new(HttpOrderReporting::new(client)),
        subscriptions,
        config.workbench.settings(),
    );

    let business_id = std::env::args().nth(1);
    let snapshot = aggregator
        .handle(GetWorkbenchSnapshotQuery { business_id })
        .await?;

    if !snapshot.is_complete() {
        tracing::warn!(
            degraded = ?snapshot.degraded_pillars,
            "Snapshot built with defaulted sections"
        );
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
