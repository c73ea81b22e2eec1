//! # Bucket storage
//!
//! Every bucket is a single unsigned word holding `W::BITS / fp_bits` fingerprint slots. Slot 0 occupies the low bits. A slot value of zero means the slot is empty.
//!
//! All slot arithmetic goes through a `u64` view of the word so the packing code is shared by every word width.

use core::fmt::Debug;

use crate::fingerprint::{self, Fingerprint};
use crate::index::BucketIndex;

/// An unsigned integer usable as a packed bucket
pub trait BucketWord: Copy + Default + Eq + Debug + Send + Sync + 'static {
    /// Width of the word in bits
    const BITS: u32;

    /// Zero-extend to 64 bits
    fn widen(self) -> u64;

    /// Truncate from 64 bits
    fn narrow(value: u64) -> Self;
}

macro_rules! impl_bucket_word {
    ($($t:ty),*) => {
        $(
            impl BucketWord for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn narrow(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_bucket_word!(u8, u16, u32, u64);

/// Read slot `slot` of a packed word
#[inline]
fn get_slot(word: u64, slot: usize, bits: u32) -> Fingerprint {
    ((word >> (slot as u32 * bits)) & fingerprint::mask(bits)) as Fingerprint
}

/// Overwrite slot `slot` of a packed word
#[inline]
fn set_slot(word: u64, slot: usize, bits: u32, fp: Fingerprint) -> u64 {
    let shift = slot as u32 * bits;
    (word & !(fingerprint::mask(bits) << shift)) | ((fp as u64) << shift)
}

/// A table of packed buckets
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BucketStore<W: BucketWord> {
    words: Vec<W>,
    fp_bits: u32,
}

impl<W: BucketWord> BucketStore<W> {
    /// Allocate `buckets` empty buckets of `fp_bits` wide slots
    pub(crate) fn new(buckets: usize, fp_bits: u32) -> BucketStore<W> {
        debug_assert!(fp_bits > 0 && W::BITS % fp_bits == 0);
        BucketStore {
            words: vec![W::default(); buckets],
            fp_bits,
        }
    }

    #[inline]
    pub(crate) fn slots_per_bucket(&self) -> usize {
        (W::BITS / self.fp_bits) as usize
    }

    pub(crate) fn num_buckets(&self) -> usize {
        self.words.len()
    }

    /// Fingerprints of bucket `index`, empty slots included as zero
    pub(crate) fn slots(&self, index: BucketIndex) -> impl Iterator<Item = Fingerprint> + '_ {
        let word = self.words[index].widen();
        (0..self.slots_per_bucket()).map(move |slot| get_slot(word, slot, self.fp_bits))
    }

    /// Put `fp` in the first empty slot of bucket `index`
    ///
    /// False means the bucket was full and is unchanged.
    pub(crate) fn insert_at(&mut self, index: BucketIndex, fp: Fingerprint) -> bool {
        let word = self.words[index].widen();
        for slot in 0..self.slots_per_bucket() {
            if get_slot(word, slot, self.fp_bits) == 0 {
                self.words[index] = W::narrow(set_slot(word, slot, self.fp_bits, fp));
                return true;
            }
        }
        false
    }

    /// Does any slot of bucket `index` hold `fp`?
    pub(crate) fn find_at(&self, index: BucketIndex, fp: Fingerprint) -> bool {
        self.slots(index).any(|entry| entry == fp)
    }

    /// Clear the first slot of bucket `index` holding `fp`
    pub(crate) fn delete_at(&mut self, index: BucketIndex, fp: Fingerprint) -> bool {
        let word = self.words[index].widen();
        for slot in 0..self.slots_per_bucket() {
            if get_slot(word, slot, self.fp_bits) == fp {
                self.words[index] = W::narrow(set_slot(word, slot, self.fp_bits, 0));
                return true;
            }
        }
        false
    }

    /// Replace the fingerprint in the first slot of bucket `index`, returning the previous one
    pub(crate) fn swap_first(&mut self, index: BucketIndex, fp: Fingerprint) -> Fingerprint {
        let word = self.words[index].widen();
        let previous = get_slot(word, 0, self.fp_bits);
        self.words[index] = W::narrow(set_slot(word, 0, self.fp_bits, fp));
        previous
    }

    /// Count every occupied slot in the table
    pub(crate) fn occupied(&self) -> usize {
        (0..self.words.len())
            .map(|index| self.slots(index).filter(|&entry| entry != 0).count())
            .sum()
    }

    pub(crate) fn clear(&mut self) {
        self.words.fill(W::default());
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.words.len() * core::mem::size_of::<W>()
    }
}

/* -------------------- Unit Tests -------------------- */
