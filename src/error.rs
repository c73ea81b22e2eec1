//! Errors for the fallible filter operations
//!
//! The plain `insert`, `has` and `delete` methods report through `bool` and never fail. The `try_*` variants return these instead.

use thiserror::Error;

/// Possible errors for the Cuckoo Filter
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CuckooFilterError {
    /// Requested capacity at initialization exceeds item limit
    #[error("requested capacity {requested} exceeds the limit of {limit} buckets")]
    CapacityExceedsItemLimit { requested: usize, limit: usize },

    /// Every relocation was spent without finding a free slot. The filter is unchanged.
    #[error("filter is full: no free slot within {max_relocations} relocations")]
    OutOfSpace { max_relocations: usize },

    /// For `try_delete`, when no matching fingerprint exists
    #[error("item does not exist in the filter")]
    ItemDoesNotExist,
}
