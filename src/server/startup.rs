use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::{
    model::contract::ItemCatalog,
    server::{
        config::Config,
        error::Error,
        model::{app::AppState, dashboard::DashboardStore, system::SystemList},
        router,
        service::source::HttpContractSource,
    },
};

/// Build the HTTP client for the upstream contract source
pub fn build_contract_source(config: &Config) -> Result<HttpContractSource, Error> {
    HttpContractSource::new(
        &config.contracts_api_url,
        config.request_timeout,
        &config.user_agent,
    )
}

/// Build the shared application state with an empty dashboard
pub fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let source = build_contract_source(config)?;

    Ok(AppState {
        source,
        catalog: Arc::new(ItemCatalog::default()),
        tracked_alliance_id: config.tracked_alliance_id,
        systems: SystemList::new(config.tracked_systems.clone()),
        dashboard: DashboardStore::new(),
        refresh_interval: config.refresh_interval,
    })
}

/// Bind the listener and serve the API until the process exits
pub async fn serve(config: &Config, state: AppState) -> Result<(), Error> {
    let listener = TcpListener::bind(&config.bind_address).await?;
    let app = router::routes().with_state(state);

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
