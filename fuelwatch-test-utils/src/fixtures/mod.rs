//! Test fixtures for upstream contract data.
//!
//! - `contract` - Contract record JSON and mock contract API endpoints

pub mod contract;
