//! Filter layouts
//!
//! A layout fixes the bucket word and the fingerprint width. Slots per bucket follow from the two. The three shipped layouts all hold two fingerprints per bucket:
//!
//! | Layout | Fingerprint | Bucket | False positive ceiling |
//! |--------|-------------|--------|------------------------|
//! | [`Small`] | 4 bits | `u8` | ~11% |
//! | [`Medium`] | 8 bits | `u16` | ~1% |
//! | [`Large`] | 16 bits | `u32` | ~0.005% |
//!
//! Other layouts can be declared by implementing [`Layout`]. The fingerprint width must be between 1 and 32 bits and divide the word width. Both are checked at compile time when a filter of the layout is built.

use core::fmt::Debug;

use crate::bucket::BucketWord;

/// Bucket and fingerprint geometry of a filter
pub trait Layout: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Packed bucket representation
    type Word: BucketWord;

    /// Width of a fingerprint in bits
    const FINGERPRINT_BITS: u32;

    /// Documented upper bound on the false positive rate of a byte filter below capacity
    const FALSE_POSITIVE_CEILING: f64;

    /// Fingerprint slots in one bucket
    const SLOTS_PER_BUCKET: usize = (<Self::Word as BucketWord>::BITS / Self::FINGERPRINT_BITS) as usize;

    /// Short name used in logs
    const NAME: &'static str;
}

/// 4 bit fingerprints, two per `u8` bucket
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Small;

impl Layout for Small {
    type Word = u8;
    const FINGERPRINT_BITS: u32 = 4;
    const FALSE_POSITIVE_CEILING: f64 = 0.11;
    const NAME: &'static str = "small";
}

/// 8 bit fingerprints, two per `u16` bucket
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Medium;

impl Layout for Medium {
    type Word = u16;
    const FINGERPRINT_BITS: u32 = 8;
    const FALSE_POSITIVE_CEILING: f64 = 0.01;
    const NAME: &'static str = "medium";
}

/// 16 bit fingerprints, two per `u32` bucket
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Large;

impl Layout for Large {
    type Word = u32;
    const FINGERPRINT_BITS: u32 = 16;
    const FALSE_POSITIVE_CEILING: f64 = 0.00005;
    const NAME: &'static str = "large";
}

/* -------------------- Unit Tests -------------------- */
