//! Utility functions and helpers for server operations.
//!
//! This module provides display formatting for quantities and countdowns used when building
//! API responses and notification messages.

pub mod format;
