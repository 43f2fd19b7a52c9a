//! Domain and API types shared between the server and any frontend.
//!
//! Everything in this module is free of I/O so it compiles without the `server` feature.

pub mod aggregate;
pub mod api;
pub mod contract;
pub mod error;
