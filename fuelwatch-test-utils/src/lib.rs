pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ALLIANCE_ID, TEST_OTHER_ALLIANCE_ID, TEST_SYSTEM, TEST_USER_AGENT},
        fixtures::contract::factory,
        TestBuilder, TestError, TestSetup,
    };
}
