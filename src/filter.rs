//! # Cuckoo Filter
//!
//! This implementation is based on the paper _Cuckoo Filter: Practically Better Than Bloom_, by Fan et. al.
//!
//! Every item has two candidate buckets. The first comes straight from its hash, the second from the first and the item's fingerprint (see [`IndexFunction`]). When both are full, the fingerprint in the first slot of a bucket is kicked out to its own alternate bucket, which may kick out another, up to a fixed number of relocations.
//!
//! If the chain runs out, the kicks are replayed backwards so the table ends up exactly as it was before the insert. No eviction cache is kept: a failed insert stores nothing.
//!
//! [`Filter64`] is keyed on `u64` values which serve as their own hash: the primary index and the fingerprint both come from the low bits of the key. Keys should therefore already be well distributed (row ids from a counter are fine, raw pointers less so). For arbitrary data use [`Filter`](crate::Filter).

use core::marker::PhantomData;

use tracing::{debug, warn};

use crate::bucket::{BucketStore, BucketWord};
use crate::config::FilterConfig;
use crate::error::CuckooFilterError;
use crate::fingerprint::{self, Fingerprint};
use crate::index::{BucketIndex, IndexFunction};
use crate::layout::Layout;

/// A Cuckoo Filter for `u64` items
///
/// ### Notes
///
/// - Nothing prevents inserting the same item several times. Each insert takes another slot, so an item can be inserted at most as many times as free slots remain reachable from its two buckets (twice, for an otherwise empty filter with two slots per bucket).
/// - Deletion only matches fingerprints. Deleting an item that was never inserted can remove a different item sharing its fingerprint and bucket. Only delete items known to be present.
/// - The filter has no internal synchronization. Share it across threads behind a lock, or partition items across several filters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter64<L: Layout> {
    buckets: BucketStore<L::Word>,
    index: IndexFunction,
    max_relocations: usize,
    layout: PhantomData<L>,
}

impl<L: Layout> Filter64<L> {
    /// Create a filter with room for at least `capacity` buckets
    ///
    /// The bucket count is rounded up to the next power of two, with a minimum of 2.
    ///
    /// ### Panics
    ///
    /// If the bucket table could not be addressed. Use [`Filter64::try_new`] to handle that case.
    pub fn new(capacity: usize) -> Filter64<L> {
        match Self::try_new(capacity) {
            Ok(filter) => filter,
            Err(err) => panic!("cuckoo filter initialized with too many items: {err}"),
        }
    }

    /// Try to create a new filter with room for at least `capacity` buckets
    pub fn try_new(capacity: usize) -> Result<Filter64<L>, CuckooFilterError> {
        Self::with_config(&FilterConfig::new(capacity))
    }

    /// Create a filter from a full configuration
    pub fn with_config(config: &FilterConfig) -> Result<Filter64<L>, CuckooFilterError> {
        const {
            assert!(
                L::FINGERPRINT_BITS > 0 && L::FINGERPRINT_BITS <= fingerprint::MAX_FINGERPRINT_BITS,
                "fingerprint width must be between 1 and 32 bits"
            );
            assert!(
                <L::Word as BucketWord>::BITS % L::FINGERPRINT_BITS == 0,
                "fingerprint width must divide the bucket word width"
            );
        }

        let buckets = config.buckets(core::mem::size_of::<L::Word>())?;
        let max_relocations = config.relocations(buckets);
        if max_relocations == 0 {
            warn!(
                layout = L::NAME,
                "relocation limit is zero, inserts into two full buckets will always fail"
            );
        }
        debug!(
            layout = L::NAME,
            buckets,
            slots_per_bucket = L::SLOTS_PER_BUCKET,
            max_relocations,
            "created cuckoo filter"
        );

        Ok(Filter64 {
            buckets: BucketStore::new(buckets, L::FINGERPRINT_BITS),
            index: IndexFunction::new(buckets),
            max_relocations,
            layout: PhantomData,
        })
    }

    /// Fingerprint of a raw key
    #[inline]
    fn fingerprint(x: u64) -> Fingerprint {
        fingerprint::derive(x, L::FINGERPRINT_BITS)
    }

    /// Add item to filter and return whether it was inserted
    ///
    /// False means the filter is (probabilistically) full. The filter is then left exactly as it was.
    pub fn insert(&mut self, x: u64) -> bool {
        self.insert_hashed(x, Self::fingerprint(x))
    }

    /// Add item to filter. Returns Err if filter is full.
    pub fn try_insert(&mut self, x: u64) -> Result<(), CuckooFilterError> {
        if self.insert(x) {
            Ok(())
        } else {
            Err(CuckooFilterError::OutOfSpace {
                max_relocations: self.max_relocations,
            })
        }
    }

    /// Check if item is in filter
    ///
    /// False is definite. True may be a false positive.
    pub fn has(&self, x: u64) -> bool {
        self.has_hashed(x, Self::fingerprint(x))
    }

    /// Remove an item from the filter and return whether it was present
    ///
    /// To delete an item safely it must have been previously inserted.
    pub fn delete(&mut self, x: u64) -> bool {
        self.delete_hashed(x, Self::fingerprint(x))
    }

    /// Delete an item from the filter. Returns Err if no matching fingerprint was found.
    pub fn try_delete(&mut self, x: u64) -> Result<(), CuckooFilterError> {
        if self.delete(x) {
            Ok(())
        } else {
            Err(CuckooFilterError::ItemDoesNotExist)
        }
    }

    /// Insert fingerprint `fp` for an item whose hash is `hash`
    pub(crate) fn insert_hashed(&mut self, hash: u64, fp: Fingerprint) -> bool {
        debug_assert_ne!(fp, 0);
        let mut i = self.index.index1(hash);
        if self.buckets.insert_at(i, fp) {
            return true;
        }
        if self.buckets.insert_at(self.index.index2(i, fp), fp) {
            return true;
        }

        // Both buckets are full: kick the first entry of the current bucket to its alternate bucket
        let mut fp = fp;
        for _ in 0..self.max_relocations {
            fp = self.buckets.swap_first(i, fp);
            i = self.index.index2(i, fp);
            if self.buckets.insert_at(i, fp) {
                return true;
            }
        }

        self.rollback(i, fp);
        debug!(
            layout = L::NAME,
            max_relocations = self.max_relocations,
            "insert failed, relocations rolled back"
        );
        false
    }

    /// Undo a failed relocation chain ending with `fp` homeless at bucket `i`
    ///
    /// Each step recovers the bucket the carried fingerprint was evicted from, puts it back in the first slot and picks up whatever had replaced it. After as many steps as the chain took, the carried value is the fingerprint of the failed insert itself and is dropped.
    fn rollback(&mut self, mut i: BucketIndex, mut fp: Fingerprint) {
        for _ in 0..self.max_relocations {
            i = self.index.index2(i, fp);
            fp = self.buckets.swap_first(i, fp);
        }
    }

    pub(crate) fn has_hashed(&self, hash: u64, fp: Fingerprint) -> bool {
        let i = self.index.index1(hash);
        self.buckets.find_at(i, fp) || self.buckets.find_at(self.index.index2(i, fp), fp)
    }

    pub(crate) fn delete_hashed(&mut self, hash: u64, fp: Fingerprint) -> bool {
        let i = self.index.index1(hash);
        self.buckets.delete_at(i, fp) || self.buckets.delete_at(self.index.index2(i, fp), fp)
    }

    /// Number of fingerprints stored, counted by scanning every bucket
    pub fn len(&self) -> usize {
        self.buckets.occupied()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of items the filter may hold: buckets times slots per bucket
    pub fn cap(&self) -> usize {
        self.buckets.num_buckets() * self.buckets.slots_per_bucket()
    }

    /// Is every slot occupied?
    pub fn is_full(&self) -> bool {
        self.len() == self.cap()
    }

    /// Number of buckets, a power of two
    pub fn num_buckets(&self) -> usize {
        self.buckets.num_buckets()
    }

    pub fn slots_per_bucket(&self) -> usize {
        self.buckets.slots_per_bucket()
    }

    /// Relocations tried before an insert gives up
    pub fn max_relocations(&self) -> usize {
        self.max_relocations
    }

    /// Fraction of slots in use
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.cap() as f64
    }

    /// Approximately how many bytes is the bucket table using?
    pub fn size_in_bytes(&self) -> usize {
        self.buckets.size_in_bytes()
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Fingerprints of one bucket, zero for empty slots
    pub fn bucket(&self, index: usize) -> Option<Vec<Fingerprint>> {
        (index < self.num_buckets()).then(|| self.buckets.slots(index).collect())
    }

    /// Bucket word width of the layout in bits
    pub fn bucket_bits(&self) -> u32 {
        <L::Word as BucketWord>::BITS
    }
}

/* -------------------- Unit Tests -------------------- */
