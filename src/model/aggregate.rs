//! Contract aggregation.
//!
//! Classifies a batch of [`ContractRecord`]s against the tracked [`ItemCatalog`] and sums the
//! tracked quantities per structure. A contract matches when at least one of its line items has
//! a tracked type ID. Matching contracts issued by the tracked alliance are counted and their
//! tracked quantities summed; matching contracts from anyone else are counted separately and
//! only their issuer is recorded.

use std::collections::{BTreeMap, BTreeSet};
use std::iter::Sum;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::model::{
    contract::{ContractRecord, ItemCatalog},
    error::ContractError,
};

/// Aggregated contracts for one structure, or the fold of several structures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Matching contracts issued by the tracked alliance.
    pub matching_contract_count: u64,
    /// Matching contracts issued by anyone outside the tracked alliance.
    pub non_alliance_contract_count: u64,
    /// Names of the issuers behind `non_alliance_contract_count`.
    pub non_alliance_issuers: BTreeSet<String>,
    /// Summed quantity per tracked type ID, alliance contracts only.
    pub item_totals: BTreeMap<i64, u64>,
}

impl AggregationResult {
    /// Combines two results.
    ///
    /// Counts and per-type totals are summed (a type missing on one side counts as 0) and the
    /// issuer sets are unioned. The operation is associative and commutative, and
    /// [`AggregationResult::default`] is its identity.
    pub fn merge(mut self, other: &Self) -> Self {
        self.merge_from(other);
        self
    }

    /// In-place form of [`AggregationResult::merge`].
    pub fn merge_from(&mut self, other: &Self) {
        self.matching_contract_count += other.matching_contract_count;
        self.non_alliance_contract_count += other.non_alliance_contract_count;
        self.non_alliance_issuers
            .extend(other.non_alliance_issuers.iter().cloned());

        for (type_id, quantity) in &other.item_totals {
            let total = self.item_totals.entry(*type_id).or_insert(0);
            *total = total.saturating_add(*quantity);
        }
    }

    /// Total number of matching contracts regardless of issuer.
    pub fn contract_count(&self) -> u64 {
        self.matching_contract_count + self.non_alliance_contract_count
    }

    /// Returns `true` when no contract was counted and no item quantity was summed.
    pub fn is_empty(&self) -> bool {
        self.contract_count() == 0 && self.item_totals.is_empty()
    }
}

impl<'a> Sum<&'a AggregationResult> for AggregationResult {
    fn sum<I: Iterator<Item = &'a AggregationResult>>(iter: I) -> Self {
        iter.fold(AggregationResult::default(), |acc, result| acc.merge(result))
    }
}

/// Output of a single aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Results keyed by structure name. Structures without any matching contract are absent.
    pub structures: BTreeMap<String, AggregationResult>,
    /// Records that were skipped because they could not be aggregated.
    pub skipped: Vec<ContractError>,
}

impl Aggregation {
    /// Folds every structure into a single system-level result.
    pub fn total(&self) -> AggregationResult {
        self.structures.values().sum()
    }
}

/// Aggregates contract batches for one tracked alliance against one item catalog.
///
/// The aggregator holds no state between calls; independent batches can be aggregated
/// concurrently with the same instance.
#[derive(Debug, Clone, Copy)]
pub struct ContractAggregator<'a> {
    catalog: &'a ItemCatalog,
    tracked_alliance_id: i64,
}

impl<'a> ContractAggregator<'a> {
    /// Creates a new instance of [`ContractAggregator`]
    pub fn new(catalog: &'a ItemCatalog, tracked_alliance_id: i64) -> Self {
        Self {
            catalog,
            tracked_alliance_id,
        }
    }

    /// Aggregates a batch of contract records per structure.
    ///
    /// Records are processed in input order. A malformed record is logged, reported in
    /// [`Aggregation::skipped`] and otherwise ignored; the rest of the batch is still aggregated.
    ///
    /// # Arguments
    /// - `contracts` - Contract records for a single refresh of a single system
    ///
    /// # Returns
    /// An [`Aggregation`] with one [`AggregationResult`] per structure that had at least one
    /// matching contract
    pub fn aggregate(&self, contracts: &[ContractRecord]) -> Aggregation {
        let mut aggregation = Aggregation::default();

        for (index, record) in contracts.iter().enumerate() {
            let contract = match record.validate(index) {
                Ok(contract) => contract,
                Err(err) => {
                    tracing::warn!("{}", err);
                    aggregation.skipped.push(err);
                    continue;
                }
            };

            let mut tracked_items = contract
                .details
                .iter()
                .filter(|item| self.catalog.is_tracked(item.type_id))
                .peekable();

            if tracked_items.peek().is_none() {
                continue;
            }

            let result = aggregation
                .structures
                .entry(contract.structure_name.to_string())
                .or_default();

            if contract.alliance_id == Some(self.tracked_alliance_id) {
                result.matching_contract_count += 1;

                for item in tracked_items {
                    let total = result.item_totals.entry(item.type_id).or_insert(0);
                    *total = total.saturating_add(item.quantity);
                }
            } else {
                result.non_alliance_contract_count += 1;
                result
                    .non_alliance_issuers
                    .insert(contract.issuer_name.to_string());
            }
        }

        aggregation
    }
}

/// Aggregates `contracts` per structure for `tracked_alliance_id`.
///
/// Convenience wrapper around [`ContractAggregator::aggregate`] that discards the report of
/// skipped records.
pub fn aggregate(
    contracts: &[ContractRecord],
    catalog: &ItemCatalog,
    tracked_alliance_id: i64,
) -> BTreeMap<String, AggregationResult> {
    ContractAggregator::new(catalog, tracked_alliance_id)
        .aggregate(contracts)
        .structures
}
