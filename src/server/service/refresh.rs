use chrono::Utc;
use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    model::{aggregate::ContractAggregator, contract::ItemCatalog},
    server::{
        error::Error,
        model::{
            app::AppState,
            dashboard::{DashboardStore, SystemContracts},
            system::SystemList,
        },
        service::source::ContractSource,
    },
};

/// Outcome of a full refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    /// Generation assigned to the cycle.
    pub generation: u64,
    /// Systems whose contracts were fetched and aggregated.
    pub refreshed: usize,
    /// Systems whose fetch failed and kept their previous entry.
    pub failed: Vec<String>,
    /// Whether the cycle's results replaced the dashboard snapshot.
    pub published: bool,
}

/// Fetches, aggregates and publishes contracts from a [`ContractSource`].
pub struct RefreshService<'a, S: ContractSource> {
    source: &'a S,
    catalog: &'a ItemCatalog,
    tracked_alliance_id: i64,
}

impl<'a, S: ContractSource + Sync> RefreshService<'a, S> {
    /// Creates a new instance of [`RefreshService`]
    pub fn new(source: &'a S, catalog: &'a ItemCatalog, tracked_alliance_id: i64) -> Self {
        Self {
            source,
            catalog,
            tracked_alliance_id,
        }
    }

    /// Fetches and aggregates the contracts of a single system.
    pub async fn refresh_system(&self, system: &str) -> Result<SystemContracts, Error> {
        let batch = self.source.fetch_system_contracts(system).await?;

        let aggregation = ContractAggregator::new(self.catalog, self.tracked_alliance_id)
            .aggregate(&batch.records);

        Ok(SystemContracts::new(
            system,
            aggregation,
            batch.skipped.len(),
            Utc::now(),
        ))
    }

    /// Refreshes every tracked system concurrently and publishes the results to `store`.
    ///
    /// A failed system is logged and keeps its previous snapshot entry; it never prevents the
    /// other systems from being published. Changes made to `systems` while the cycle is fetching
    /// are applied when the results are published.
    pub async fn refresh_all(&self, systems: &SystemList, store: &DashboardStore) -> RefreshReport {
        let generation = store.begin_cycle();
        let names = systems.names().await;

        let results = join_all(
            names
                .iter()
                .map(|system| async move { (system, self.refresh_system(system).await) }),
        )
        .await;

        let mut fresh = Vec::with_capacity(results.len());
        let mut failed = Vec::new();

        for (system, result) in results {
            match result {
                Ok(contracts) => fresh.push(contracts),
                Err(e) => {
                    tracing::error!("Failed to refresh contracts for system {}: {}", system, e);
                    failed.push(system.clone());
                }
            }
        }

        let refreshed = fresh.len();
        let published = store.publish(generation, systems, fresh, Utc::now()).await;

        RefreshReport {
            generation,
            refreshed,
            failed,
            published,
        }
    }
}

/// Runs a full refresh cycle for every system tracked by `state`.
pub async fn refresh_dashboard(state: &AppState) -> RefreshReport {
    RefreshService::new(&state.source, &state.catalog, state.tracked_alliance_id)
        .refresh_all(&state.systems, &state.dashboard)
        .await
}
