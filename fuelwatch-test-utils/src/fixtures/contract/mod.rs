use crate::TestSetup;

pub mod factory;
pub mod mockito;

pub struct ContractFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
