//! Fingerprint derivation
//!
//! A fingerprint is the low `bits` of a hash. Zero marks an empty slot, so when the low bits are all zero the hash is shifted right a nibble at a time until they are not. A hash of zero maps to `1`.
//!
//! The shifting skews the distribution slightly towards the values that follow a run of zero nibbles. That bias is accepted in exchange for never reserving a colliding sentinel.

/// A fingerprint as stored in a bucket slot. Never zero once derived.
pub type Fingerprint = u32;

/// Widest fingerprint a slot can hold
pub const MAX_FINGERPRINT_BITS: u32 = u32::BITS;

/// Mask selecting the low `bits` of a value
#[inline]
pub(crate) const fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Compute a non-zero fingerprint of `bits` width from a 64 bit hash
///
/// `bits` must be in `1..=32`.
#[inline]
pub fn derive(hash: u64, bits: u32) -> Fingerprint {
    debug_assert!(bits > 0 && bits <= MAX_FINGERPRINT_BITS);
    let mask = mask(bits);
    let mut h = hash;
    while h & mask == 0 {
        if h == 0 {
            return 1;
        }
        h >>= 4;
    }
    (h & mask) as Fingerprint
}

/* -------------------- Unit Tests -------------------- */
