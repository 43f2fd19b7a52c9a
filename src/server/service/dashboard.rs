use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::{DashboardDto, NotificationDto},
        contract::ItemCatalog,
    },
    server::{
        error::Error,
        model::dashboard::{DashboardSnapshot, SystemContracts},
        util::format::format_countdown,
    },
};

/// Title of the dashboard before the contract count badge is applied.
pub const DASHBOARD_TITLE: &str = "Fuel Contracts";

/// Prefixes `title` with the contract count badge when there is at least one contract.
pub fn badge_title(total_contracts: u64, title: &str) -> String {
    if total_contracts > 0 {
        format!("({}) {}", total_contracts, title)
    } else {
        title.to_string()
    }
}

/// Builds the "new contracts" notification for a refresh cycle.
///
/// # Returns
/// - `Some(NotificationDto)` - At least one contract appeared since the previous cycle
/// - `None` - Nothing new to report
pub fn build_notification(
    new_contracts: u64,
    systems: &[SystemContracts],
) -> Option<NotificationDto> {
    if new_contracts == 0 {
        return None;
    }

    let mut lines = vec![format!("{} new contract(s) since last update", new_contracts)];
    lines.extend(
        systems
            .iter()
            .map(|system| format!("{} currently in {}", system.contract_count(), system.system)),
    );

    Some(NotificationDto {
        new_contracts,
        message: lines.join("\n"),
    })
}

/// Converts the latest snapshot into the dashboard API response.
///
/// # Arguments
/// - `snapshot` - Latest published snapshot
/// - `catalog` - Catalog used to resolve item names
/// - `refresh_interval` - Period between two refresh cycles
/// - `now` - Current time, used for the countdown to the next refresh
///
/// # Returns
/// - `Ok(DashboardDto)` - The dashboard response
/// - `Err(Error::ContractError)` - A total references an item type missing from `catalog`
pub fn dashboard_dto(
    snapshot: &DashboardSnapshot,
    catalog: &ItemCatalog,
    refresh_interval: Duration,
    now: DateTime<Utc>,
) -> Result<DashboardDto, Error> {
    let systems = snapshot
        .systems
        .iter()
        .map(|system| system.to_dto(catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let total_contracts = snapshot.total_contracts();

    let next_refresh = snapshot.refreshed_at.map(|refreshed_at| {
        let elapsed = now
            .signed_duration_since(refreshed_at)
            .num_seconds()
            .max(0) as u64;

        format_countdown(refresh_interval.as_secs().saturating_sub(elapsed))
    });

    Ok(DashboardDto {
        title: badge_title(total_contracts, DASHBOARD_TITLE),
        total_contracts,
        new_contracts: snapshot.new_contracts,
        notification: build_notification(snapshot.new_contracts, &snapshot.systems),
        systems,
        refreshed_at: snapshot.refreshed_at,
        next_refresh,
        generation: snapshot.generation,
    })
}
