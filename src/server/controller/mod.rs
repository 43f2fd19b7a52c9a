//! HTTP controller endpoints for the fuelwatch web API.
//!
//! Controllers read the published dashboard snapshot, trigger on-demand refreshes, and manage the
//! tracked system list. Every handler is documented with utoipa for the OpenAPI specification.

pub mod contract;
pub mod item;
pub mod system;
