//! Filter configuration
//!
//! ```
//! use cuckoofilter::{FilterConfig, Filter64M};
//!
//! let config = FilterConfig::new(1000).with_max_relocations(50);
//! let filter = Filter64M::with_config(&config).unwrap();
//! assert_eq!(filter.num_buckets(), 1024);
//! assert_eq!(filter.max_relocations(), 50);
//! ```

use crate::error::CuckooFilterError;

/// Bucket tables are never smaller than this
pub const MIN_BUCKETS: usize = 2;

/// Construction parameters shared by every filter layout
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterConfig {
    /// Requested number of buckets, rounded up to a power of two (minimum 2)
    pub capacity: usize,
    /// Relocations tried before an insert gives up. `None` derives it from the table size.
    pub max_relocations: Option<usize>,
}

impl FilterConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_relocations: None,
        }
    }

    /// Builder-style method to override the relocation limit
    pub fn with_max_relocations(mut self, max_relocations: usize) -> Self {
        self.max_relocations = Some(max_relocations);
        self
    }

    /// Check that a table of `word_size` byte buckets can be allocated
    pub fn validate(&self, word_size: usize) -> Result<(), CuckooFilterError> {
        self.buckets(word_size).map(|_| ())
    }

    /// Actual bucket count: the next power of two at or above the requested capacity
    pub fn buckets(&self, word_size: usize) -> Result<usize, CuckooFilterError> {
        let limit = bucket_limit(word_size);
        self.capacity
            .max(MIN_BUCKETS)
            .checked_next_power_of_two()
            .filter(|&buckets| buckets <= limit)
            .ok_or(CuckooFilterError::CapacityExceedsItemLimit {
                requested: self.capacity,
                limit,
            })
    }

    /// Relocation limit for a table of `buckets` buckets
    pub fn relocations(&self, buckets: usize) -> usize {
        self.max_relocations
            .unwrap_or_else(|| default_max_relocations(buckets))
    }
}

/// `floor(20 * ln(buckets))`
pub fn default_max_relocations(buckets: usize) -> usize {
    (20.0 * (buckets as f64).ln()) as usize
}

/// Largest power of two bucket count whose table fits in `isize::MAX` bytes
fn bucket_limit(word_size: usize) -> usize {
    let max = isize::MAX as usize / word_size.max(1);
    1 << (usize::BITS - 1 - max.leading_zeros())
}

/* -------------------- Unit Tests -------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_power_of_two() {
        assert_eq!(FilterConfig::new(100).buckets(1), Ok(128));
        assert_eq!(FilterConfig::new(128).buckets(1), Ok(128));
        assert_eq!(FilterConfig::new(129).buckets(4), Ok(256));
    }

    #[test]
    fn enforces_minimum() {
        assert_eq!(FilterConfig::new(0).buckets(1), Ok(2));
        assert_eq!(FilterConfig::new(1).buckets(2), Ok(2));
    }

    #[test]
    fn rejects_unaddressable_capacity() {
        let limit = bucket_limit(4);
        assert_eq!(FilterConfig::new(limit).buckets(4), Ok(limit));
        let err = FilterConfig::new(limit + 1).validate(4).unwrap_err();
        assert_eq!(
            err,
            CuckooFilterError::CapacityExceedsItemLimit {
                requested: limit + 1,
                limit
            }
        );
        assert!(FilterConfig::new(usize::MAX).validate(1).is_err());
    }

    #[test]
    fn default_relocations_follow_table_size() {
        assert_eq!(default_max_relocations(2), 13);
        assert_eq!(default_max_relocations(128), 97);
        assert_eq!(default_max_relocations(1 << 20), 277);
        assert_eq!(FilterConfig::new(128).relocations(128), 97);
        assert_eq!(
            FilterConfig::new(128).with_max_relocations(5).relocations(128),
            5
        );
    }
}
