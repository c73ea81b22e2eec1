//! Bucket index computation
//!
//! This is partial-key cuckoo hashing: the alternate bucket of a fingerprint depends only on its current bucket and the fingerprint itself, so an evicted fingerprint can be moved without knowing the item it came from.

use crate::fingerprint::Fingerprint;
use crate::hash;

/// Position of a bucket in the table
pub type BucketIndex = usize;

/// Maps hashes and fingerprints onto a power-of-two bucket table
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexFunction {
    mask: u64,
}

impl IndexFunction {
    /// Index function for a table of `buckets` buckets. `buckets` must be a power of two.
    pub fn new(buckets: usize) -> IndexFunction {
        debug_assert!(buckets.is_power_of_two());
        IndexFunction {
            mask: buckets as u64 - 1,
        }
    }

    /// Number of buckets addressed
    pub fn buckets(&self) -> usize {
        (self.mask + 1) as usize
    }

    /// Primary bucket of an item hash
    #[inline]
    pub fn index1(&self, hash: u64) -> BucketIndex {
        (hash & self.mask) as BucketIndex
    }

    /// Alternate bucket of a fingerprint currently at `index`
    ///
    /// `index2(index2(i, fp), fp) == i` for every in-range `i`. Rollback of a failed eviction chain depends on this.
    #[inline]
    pub fn index2(&self, index: BucketIndex, fp: Fingerprint) -> BucketIndex {
        ((index as u64 ^ hash::mix(fp as u64)) & self.mask) as BucketIndex
    }
}

/* -------------------- Unit Tests -------------------- */
