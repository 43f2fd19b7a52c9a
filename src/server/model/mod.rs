//! Server application models and type definitions.
//!
//! This module contains the application state shared with controllers and the scheduler, the
//! dashboard snapshot with its store, and the tracked system list.

pub mod app;
pub mod dashboard;
pub mod system;
