//! Server application core modules.
//!
//! This module contains the server side of fuelwatch: configuration, the upstream contract
//! source, the refresh service that keeps the dashboard snapshot current, the periodic refresh
//! scheduler, and the HTTP API that exposes the aggregated contracts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
