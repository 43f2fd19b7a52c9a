//! Contract records as delivered by the upstream source and the tracked item catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::error::ContractError;

/// Item types tracked by default: fuel block isotopes, strontium clathrates and cap boosters.
pub const DEFAULT_TRACKED_ITEMS: [(i64, &str); 6] = [
    (17888, "Nitrogen Isotopes"),
    (17887, "Oxygen Isotopes"),
    (17889, "Hydrogen Isotopes"),
    (16274, "Helium Isotopes"),
    (16275, "Stront"),
    (41489, "Cap Booster 3200s"),
];

/// A tracked EVE Online item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItemType {
    pub type_id: i64,
    pub name: String,
}

/// Immutable set of tracked item types keyed by type ID.
///
/// Only line items whose type ID is in the catalog take part in aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<i64, String>,
}

impl ItemCatalog {
    /// Creates a catalog from a list of item types.
    ///
    /// If the same type ID appears more than once the last name wins.
    pub fn new(items: impl IntoIterator<Item = ItemType>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.type_id, item.name))
                .collect(),
        }
    }

    /// Returns the display name of a tracked item type.
    ///
    /// # Returns
    /// - `Ok(&str)` - Display name of the item type
    /// - `Err(ContractError::UnknownItemType)` - The type ID is not tracked
    pub fn lookup(&self, type_id: i64) -> Result<&str, ContractError> {
        self.items
            .get(&type_id)
            .map(String::as_str)
            .ok_or(ContractError::UnknownItemType(type_id))
    }

    /// Returns every tracked type ID.
    pub fn tracked_ids(&self) -> BTreeSet<i64> {
        self.items.keys().copied().collect()
    }

    /// Whether the type ID is tracked.
    pub fn is_tracked(&self, type_id: i64) -> bool {
        self.items.contains_key(&type_id)
    }

    /// Tracked item types ordered by type ID.
    pub fn items(&self) -> Vec<ItemType> {
        self.items
            .iter()
            .map(|(type_id, name)| ItemType {
                type_id: *type_id,
                name: name.clone(),
            })
            .collect()
    }

    /// Number of tracked item types.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the catalog tracks no item types.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRACKED_ITEMS
                .iter()
                .map(|(type_id, name)| ItemType {
                    type_id: *type_id,
                    name: name.to_string(),
                }),
        )
    }
}

/// A single item stack offered in a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractLineItem {
    pub type_id: i64,
    pub quantity: u64,
}

/// One upstream contract, enriched with the name of the structure it was issued at, the
/// issuer's name and the issuer's alliance.
///
/// Fields the aggregator requires are optional here so that a record missing them can be
/// decoded, reported and skipped rather than failing the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    #[serde(rename = "structureName", default)]
    pub structure_name: Option<String>,
    #[serde(default)]
    pub issuer_name: String,
    /// `None` when the issuer is not in an alliance.
    #[serde(default)]
    pub alliance_id: Option<i64>,
    #[serde(default)]
    pub details: Option<Vec<ContractLineItem>>,
}

/// Borrowed view of a [`ContractRecord`] that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidContract<'a> {
    pub structure_name: &'a str,
    pub issuer_name: &'a str,
    pub alliance_id: Option<i64>,
    pub details: &'a [ContractLineItem],
}

impl ContractRecord {
    /// Checks that the record carries everything aggregation needs.
    ///
    /// # Arguments
    /// - `index` - Position of the record within its batch, used for error reporting
    ///
    /// # Returns
    /// - `Ok(ValidContract)` - Borrowed view of the validated record
    /// - `Err(ContractError::MalformedContractRecord)` - Structure name is missing or blank,
    ///   or the line items are missing
    pub fn validate(&self, index: usize) -> Result<ValidContract<'_>, ContractError> {
        let structure_name = match self.structure_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => {
                return Err(ContractError::MalformedContractRecord {
                    index,
                    reason: "structureName is blank".to_string(),
                })
            }
            None => {
                return Err(ContractError::MalformedContractRecord {
                    index,
                    reason: "structureName is missing".to_string(),
                })
            }
        };

        let Some(details) = self.details.as_deref() else {
            return Err(ContractError::MalformedContractRecord {
                index,
                reason: "details are missing".to_string(),
            });
        };

        Ok(ValidContract {
            structure_name,
            issuer_name: &self.issuer_name,
            alliance_id: self.alliance_id,
            details,
        })
    }
}
