//! # Byte item filters
//!
//! [`Filter`] accepts anything that can be viewed as bytes. The bytes are hashed twice: xxHash64 picks the primary bucket and xxHash32 feeds the fingerprint. Keeping the two hashes unrelated stops a fingerprint from being predictable from its bucket, which keeps false positives close to the rate the fingerprint width allows.
//!
//! Everything else is delegated to a [`Filter64`] of the same layout.

use crate::config::FilterConfig;
use crate::error::CuckooFilterError;
use crate::filter::Filter64;
use crate::fingerprint::{self, Fingerprint};
use crate::hash;
use crate::layout::Layout;

/// A Cuckoo Filter for byte sequences
///
/// The same caveats as [`Filter64`] apply: duplicates consume extra slots, and only items known to be present should be deleted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter<L: Layout> {
    engine: Filter64<L>,
}

impl<L: Layout> Filter<L> {
    /// Create a filter with room for at least `capacity` buckets
    ///
    /// ### Panics
    ///
    /// If the bucket table could not be addressed. Use [`Filter::try_new`] to handle that case.
    pub fn new(capacity: usize) -> Filter<L> {
        Filter {
            engine: Filter64::new(capacity),
        }
    }

    pub fn try_new(capacity: usize) -> Result<Filter<L>, CuckooFilterError> {
        Filter64::try_new(capacity).map(|engine| Filter { engine })
    }

    pub fn with_config(config: &FilterConfig) -> Result<Filter<L>, CuckooFilterError> {
        Filter64::with_config(config).map(|engine| Filter { engine })
    }

    /// Index hash and fingerprint of an item
    #[inline]
    fn hashes(item: &[u8]) -> (u64, Fingerprint) {
        let fp = fingerprint::derive(hash::fingerprint_hash(item), L::FINGERPRINT_BITS);
        (hash::index_hash(item), fp)
    }

    /// Add item to filter and return whether it was inserted
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> bool {
        let (h, fp) = Self::hashes(item.as_ref());
        self.engine.insert_hashed(h, fp)
    }

    /// Add item to filter. Returns Err if filter is full.
    pub fn try_insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> Result<(), CuckooFilterError> {
        if self.insert(item) {
            Ok(())
        } else {
            Err(CuckooFilterError::OutOfSpace {
                max_relocations: self.engine.max_relocations(),
            })
        }
    }

    /// Check if item is in filter
    pub fn has<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        let (h, fp) = Self::hashes(item.as_ref());
        self.engine.has_hashed(h, fp)
    }

    /// Remove an item and return whether it was present
    ///
    /// To delete an item safely it must have been previously inserted.
    pub fn delete<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> bool {
        let (h, fp) = Self::hashes(item.as_ref());
        self.engine.delete_hashed(h, fp)
    }

    pub fn try_delete<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) -> Result<(), CuckooFilterError> {
        if self.delete(item) {
            Ok(())
        } else {
            Err(CuckooFilterError::ItemDoesNotExist)
        }
    }

    /// Number of items in the filter
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Filter capacity (maximum number of items it may contain)
    pub fn cap(&self) -> usize {
        self.engine.cap()
    }

    pub fn is_full(&self) -> bool {
        self.engine.is_full()
    }

    pub fn load_factor(&self) -> f64 {
        self.engine.load_factor()
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// The underlying engine, for table level inspection
    pub fn as_filter64(&self) -> &Filter64<L> {
        &self.engine
    }
}

/* -------------------- Unit Tests -------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Large, Medium, Small};

    fn members(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("member-{i}")).collect()
    }

    #[test]
    fn retrieve_item() {
        let mut cf = Filter::<Medium>::new(128);
        let item = [1u8, 2, 3, 4, 5];
        assert!(cf.insert(&item));
        assert!(cf.has(&item));
        assert!(!cf.has(&[1u8, 2, 3, 4]));
    }

    #[test]
    fn accepts_str_and_vec() {
        let mut cf = Filter::<Small>::new(16);
        assert!(cf.insert("cat"));
        assert!(cf.has(&b"cat".to_vec()));
        assert!(cf.has(&String::from("cat")));
        assert!(cf.delete(b"cat"));
        assert!(cf.is_empty());
    }

    #[test]
    fn empty_item_is_an_item() {
        let mut cf = Filter::<Large>::new(16);
        assert!(!cf.has(b""));
        assert!(cf.insert(b""));
        assert!(cf.has(b""));
        assert_eq!(cf.len(), 1);
    }

    #[test]
    fn delete_item() {
        let mut cf = Filter::<Large>::new(128);
        let item = [1u8, 2, 3, 4, 5];
        assert!(cf.insert(&item));
        assert_eq!(cf.try_delete(&item), Ok(()));
        assert!(!cf.has(&item));
        assert_eq!(cf.try_delete(&item), Err(CuckooFilterError::ItemDoesNotExist));
    }

    #[test]
    fn insert_then_delete_everything() {
        let words = members(2048);
        let mut cf = Filter::<Medium>::new(2048);
        for w in &words {
            assert!(cf.insert(w));
        }
        assert_eq!(cf.len(), 2048);
        for w in &words {
            assert!(cf.delete(w), "{w} not found");
        }
        assert!(cf.is_empty());
    }

    #[test]
    fn byte_and_integer_filters_share_geometry() {
        let cf = Filter::<Small>::new(100);
        assert_eq!(cf.cap(), 256);
        assert_eq!(cf.as_filter64().num_buckets(), 128);
    }

    #[test]
    fn try_insert_on_tiny_filter() {
        let mut cf = Filter::<Medium>::new(2);
        let words = members(32);
        let failed = words.iter().find_map(|w| {
            let before = cf.clone();
            cf.try_insert(w).err().map(|err| (err, before))
        });
        let (err, before) = failed.expect("a 4 slot filter cannot take 32 items");
        assert_eq!(err, CuckooFilterError::OutOfSpace { max_relocations: 13 });
        assert_eq!(cf, before);
        assert!(cf.len() <= cf.cap());
    }
}
