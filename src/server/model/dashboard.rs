//! Dashboard snapshot and the store that publishes it.
//!
//! Refresh cycles run concurrently with API reads and may overlap each other. Every cycle is
//! assigned a generation by [`DashboardStore::begin_cycle`] and a cycle's results are only
//! published if no newer cycle has published first.

use std::collections::{BTreeMap, HashMap};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use tokio::sync::RwLock;

use crate::{
    model::{
        aggregate::{Aggregation, AggregationResult},
        api::{ItemTotalDto, StructureContractsDto, SystemContractsDto},
        contract::ItemCatalog,
        error::ContractError,
    },
    server::{model::system::SystemList, util::format::format_quantity},
};

/// Aggregated contracts of one system from a single refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemContracts {
    /// Name of the system.
    pub system: String,
    /// Results per structure in the system.
    pub structures: BTreeMap<String, AggregationResult>,
    /// Fold of every structure result.
    pub total: AggregationResult,
    /// Upstream records skipped while decoding or aggregating.
    pub skipped: usize,
    /// When the contracts were fetched.
    pub refreshed_at: DateTime<Utc>,
}

impl SystemContracts {
    /// Creates the system entry from an aggregation pass.
    ///
    /// # Arguments
    /// - `system` - Name of the system
    /// - `aggregation` - Output of the aggregator for the system's contracts
    /// - `skipped_on_decode` - Records already dropped because they could not be decoded
    /// - `refreshed_at` - When the contracts were fetched
    pub fn new(
        system: impl Into<String>,
        aggregation: Aggregation,
        skipped_on_decode: usize,
        refreshed_at: DateTime<Utc>,
    ) -> Self {
        let total = aggregation.total();

        Self {
            system: system.into(),
            skipped: skipped_on_decode + aggregation.skipped.len(),
            structures: aggregation.structures,
            total,
            refreshed_at,
        }
    }

    /// Contracts from the tracked alliance across every structure.
    pub fn contract_count(&self) -> u64 {
        self.total.matching_contract_count
    }

    /// Converts the entry into its API representation, resolving item names through `catalog`.
    pub fn to_dto(&self, catalog: &ItemCatalog) -> Result<SystemContractsDto, ContractError> {
        let structures = self
            .structures
            .iter()
            .map(|(name, result)| structure_dto(name, result, catalog))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SystemContractsDto {
            system: self.system.clone(),
            contracts: self.total.matching_contract_count,
            non_alliance_contracts: self.total.non_alliance_contract_count,
            structures,
            totals: item_totals_dto(&self.total.item_totals, catalog)?,
            skipped_records: self.skipped,
            refreshed_at: self.refreshed_at,
        })
    }
}

fn structure_dto(
    name: &str,
    result: &AggregationResult,
    catalog: &ItemCatalog,
) -> Result<StructureContractsDto, ContractError> {
    Ok(StructureContractsDto {
        name: name.to_string(),
        contracts: result.matching_contract_count,
        non_alliance_contracts: result.non_alliance_contract_count,
        non_alliance_issuers: result.non_alliance_issuers.iter().cloned().collect(),
        totals: item_totals_dto(&result.item_totals, catalog)?,
    })
}

fn item_totals_dto(
    totals: &BTreeMap<i64, u64>,
    catalog: &ItemCatalog,
) -> Result<Vec<ItemTotalDto>, ContractError> {
    totals
        .iter()
        .map(|(type_id, quantity)| {
            Ok(ItemTotalDto {
                type_id: *type_id,
                name: catalog.lookup(*type_id)?.to_string(),
                quantity: *quantity,
                formatted: format_quantity(*quantity),
            })
        })
        .collect()
}

/// Latest published state of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Generation of the cycle that published this snapshot, 0 before the first publish.
    pub generation: u64,
    /// Per system results in tracked order.
    pub systems: Vec<SystemContracts>,
    /// Alliance contract total at the last full cycle that found any, the baseline for the next
    /// delta.
    pub last_cycle_total: u64,
    /// Contracts that appeared during the last full cycle.
    pub new_contracts: u64,
    /// When the last full cycle was published.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardSnapshot {
    /// Alliance contracts across every system currently in the snapshot.
    pub fn total_contracts(&self) -> u64 {
        self.systems.iter().map(SystemContracts::contract_count).sum()
    }
}

/// Shared holder of the [`DashboardSnapshot`].
///
/// Cloning the store is cheap and every clone refers to the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    snapshot: Arc<RwLock<DashboardSnapshot>>,
    generation: Arc<AtomicU64>,
}

impl DashboardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh cycle and returns its generation.
    ///
    /// Generations start at 1 and strictly increase across calls.
    pub fn begin_cycle(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publishes the results of a refresh cycle.
    ///
    /// The tracked systems are read from `tracked` once the snapshot is locked, so systems added or
    /// removed while the cycle was fetching are honoured. A tracked system takes its entry from
    /// `fresh` when present, otherwise it keeps its previous entry so a failed fetch leaves stale
    /// data rather than blanking the system. Systems no longer tracked are dropped.
    ///
    /// The new contract count is the increase of the alliance contract total over the baseline.
    /// A cycle without any alliance contract reports nothing new and leaves the baseline as is.
    ///
    /// # Returns
    /// - `true` - The snapshot was replaced
    /// - `false` - A newer cycle already published, the results were discarded
    pub async fn publish(
        &self,
        generation: u64,
        tracked: &SystemList,
        fresh: Vec<SystemContracts>,
        now: DateTime<Utc>,
    ) -> bool {
        let mut snapshot = self.snapshot.write().await;

        if generation <= snapshot.generation {
            tracing::debug!(
                "Discarding refresh cycle {} as cycle {} already published",
                generation,
                snapshot.generation
            );

            return false;
        }

        let mut fresh: HashMap<String, SystemContracts> = fresh
            .into_iter()
            .map(|contracts| (contracts.system.clone(), contracts))
            .collect();
        let mut previous: HashMap<String, SystemContracts> = std::mem::take(&mut snapshot.systems)
            .into_iter()
            .map(|contracts| (contracts.system.clone(), contracts))
            .collect();

        snapshot.systems = tracked
            .names()
            .await
            .iter()
            .filter_map(|system| fresh.remove(system).or_else(|| previous.remove(system)))
            .collect();

        let total = snapshot.total_contracts();
        if total > 0 {
            snapshot.new_contracts = total.saturating_sub(snapshot.last_cycle_total);
            snapshot.last_cycle_total = total;
        } else {
            snapshot.new_contracts = 0;
        }
        snapshot.generation = generation;
        snapshot.refreshed_at = Some(now);

        true
    }

    /// Replaces, or appends, the entry of a single system outside of a full cycle.
    ///
    /// The baseline used for new contract notifications is left untouched, so contracts found
    /// here are still reported by the next full cycle.
    pub async fn replace_system(&self, contracts: SystemContracts) {
        let mut snapshot = self.snapshot.write().await;

        match snapshot
            .systems
            .iter_mut()
            .find(|existing| existing.system == contracts.system)
        {
            Some(existing) => *existing = contracts,
            None => snapshot.systems.push(contracts),
        }
    }

    /// Drops the entry of a system that is no longer tracked.
    pub async fn remove_system(&self, system: &str) {
        let mut snapshot = self.snapshot.write().await;

        snapshot.systems.retain(|existing| existing.system != system);
    }

    /// Returns a copy of the current snapshot.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot.read().await.clone()
    }
}
