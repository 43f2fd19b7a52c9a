use thiserror::Error;

/// Errors raised while classifying contract records.
///
/// Neither variant is fatal: a malformed record is skipped and the rest of the batch is still
/// aggregated, and an unknown item type is only reported to callers using
/// [`ItemCatalog::lookup`](crate::model::contract::ItemCatalog::lookup) directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A contract record is missing a field required for aggregation.
    #[error("Skipping malformed contract record at index {index}: {reason}")]
    MalformedContractRecord {
        /// Position of the record within its batch.
        index: usize,
        /// What made the record unusable.
        reason: String,
    },
    /// The item type ID is not part of the tracked item catalog.
    #[error("Item type ID {0} is not tracked")]
    UnknownItemType(i64),
}
