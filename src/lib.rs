//! Contract tracking dashboard for EVE Online structure fuel deliveries.
//!
//! The [`model`] module holds the contract aggregation core and the API types shared with
//! any frontend. The [`server`] module (feature `server`) polls the upstream contract source,
//! keeps the dashboard snapshot current and serves it over HTTP.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
