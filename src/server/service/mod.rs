//! Service layer for fetching, aggregating and publishing contracts.
//!
//! `source` talks to the upstream contract API, `refresh` turns fetched contracts into per
//! system aggregates and publishes them, and `dashboard` shapes the published snapshot for the
//! API.

pub mod dashboard;
pub mod refresh;
pub mod source;
