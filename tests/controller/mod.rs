//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the responses are checked for status
//! and body.

mod contract;
mod item;
mod system;

use fuelwatch_test_utils::{fixtures::contract::factory::*, prelude::*};

use crate::util::{json_body, TestSetupExt};
