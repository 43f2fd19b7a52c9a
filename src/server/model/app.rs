use std::{sync::Arc, time::Duration};

use crate::{
    model::contract::ItemCatalog,
    server::{
        model::{dashboard::DashboardStore, system::SystemList},
        service::source::HttpContractSource,
    },
};

/// Shared state handed to every controller and to the refresh scheduler.
#[derive(Clone)]
pub struct AppState {
    /// Upstream contract source.
    pub source: HttpContractSource,
    /// Tracked item types.
    pub catalog: Arc<ItemCatalog>,
    /// Contracts issued by this alliance contribute to item totals.
    pub tracked_alliance_id: i64,
    /// Tracked systems.
    pub systems: SystemList,
    /// Latest dashboard snapshot.
    pub dashboard: DashboardStore,
    /// Period between two dashboard refresh cycles.
    pub refresh_interval: Duration,
}
