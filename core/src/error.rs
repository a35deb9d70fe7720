//! Error types for the **replichain** core crate.
//!
//! All high-level operations return [`crate::Result`] which is a convenient
//! alias for `core::result::Result<T, ValidationError>`.
//!
//! The enum is intentionally narrow: each variant corresponds to exactly one
//! check named by the block validator, so callers and logs can say precisely
//! which invariant failed instead of collapsing to a single boolean.
//!
//! # Examples
//!
//! ```
//! use replichain_core::{ValidationError, Result};
//!
//! fn demo_fn(fail: bool) -> Result<()> {
//!     if fail {
//!         Err(ValidationError::ProposerMismatch)
//!     } else {
//!         Ok(())
//!     }
//! }
//! ```

use thiserror::Error;

/// Why a proposed block was rejected by [`crate::validator::is_new_block_valid`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Recomputing the block hash did not match `block.hash` or the claimed hash.
    #[error("block hash does not match its contents")]
    HashMismatch,

    /// `previous_hash` did not match the expected predecessor (tip, or the
    /// genesis literal when the chain is empty).
    #[error("previous hash does not match chain tip")]
    PrevHashMismatch,

    /// `number` was not exactly one greater than the chain tip (or not 1 for
    /// a candidate genesis).
    #[error("block number is not sequential")]
    NonSequentialNumber,

    /// At least one transaction in the block could not be applied against
    /// the current state.
    #[error("block contains a transaction that cannot be applied")]
    TransactionRejected,

    /// `miner` did not match the expected proposer for this block number.
    #[error("miner does not match the expected proposer")]
    ProposerMismatch,
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ValidationError>;
