use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Summed quantity of one tracked item type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItemTotalDto {
    pub type_id: i64,
    pub name: String,
    pub quantity: u64,
    /// Quantity formatted for display, e.g. `12,500` or `1.25M`
    pub formatted: String,
}

/// Aggregated contracts at one structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StructureContractsDto {
    pub name: String,
    /// Contracts from the tracked alliance holding tracked items
    pub contracts: u64,
    /// Contracts from outside the tracked alliance holding tracked items
    pub non_alliance_contracts: u64,
    pub non_alliance_issuers: Vec<String>,
    pub totals: Vec<ItemTotalDto>,
}

/// Aggregated contracts for one system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemContractsDto {
    pub system: String,
    pub contracts: u64,
    pub non_alliance_contracts: u64,
    pub structures: Vec<StructureContractsDto>,
    pub totals: Vec<ItemTotalDto>,
    /// Upstream records that could not be aggregated
    pub skipped_records: usize,
    pub refreshed_at: DateTime<Utc>,
}

/// Notification raised when new contracts appeared since the previous refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NotificationDto {
    pub new_contracts: u64,
    pub message: String,
}

/// Latest dashboard snapshot across every tracked system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    /// Page title with the contract count badge, e.g. `(3) Fuel Contracts`
    pub title: String,
    pub total_contracts: u64,
    pub new_contracts: u64,
    pub notification: Option<NotificationDto>,
    pub systems: Vec<SystemContractsDto>,
    pub refreshed_at: Option<DateTime<Utc>>,
    /// Time until the next scheduled refresh, e.g. `1m 30s`
    pub next_refresh: Option<String>,
    /// Refresh cycle that published this dashboard, 0 before the first cycle
    pub generation: u64,
}
