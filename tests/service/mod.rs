//! Tests for the contract source and refresh services against a mock upstream.

mod refresh;

use fuelwatch_test_utils::{fixtures::contract::factory::*, prelude::*};

use crate::util::TestSetupExt;
