//! Fatal input errors
//!
//! A [`ContractViolation`] means the caller handed over a structurally
//! incomplete record. It is returned as `Err` and never shows up as a
//! [`transfer_types::Finding`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractViolation {
    /// No record was supplied at all (e.g. a JSON `null`).
    #[error("no transfer record was supplied")]
    MissingRecord,

    /// The firearm-line collection was never populated by the mapping layer.
    /// An empty collection is fine; an absent one is not.
    #[error("transfer record is missing its firearm-line collection")]
    MissingFirearmLines,

    /// The supplied JSON could not be decoded into a transfer record.
    #[error("transfer record could not be decoded: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Invalid engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnvValue { name: &'static str, value: String },

    #[error("configuration could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("category keyword list is empty")]
    NoCategoryKeywords,
}
