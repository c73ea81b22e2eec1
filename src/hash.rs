//! Implementations of hash functions
//!
//! Byte items are hashed twice, with two unrelated functions, so that a fingerprint says as little as possible about the bucket it lives in. Both use the same fixed seed.

use xxhash_rust::xxh32::xxh32;
use xxhash_rust::xxh64::xxh64;

/// Seed shared by every byte hash ("coccoo")
pub const SEED: u32 = 0xC0CC00;

const PRIME64_1: u64 = 11_400_714_785_074_694_791;
const PRIME64_2: u64 = 14_029_467_366_897_019_727;
const PRIME64_3: u64 = 1_609_587_929_392_839_161;
const PRIME64_4: u64 = 9_650_029_242_287_828_579;
const PRIME64_5: u64 = 2_870_177_450_012_600_261;

/// Avalanche a fingerprint into a 64 bit offset for the alternate bucket index
///
/// This is xxHash64 of a single 8 byte lane with a zero seed, unrolled. The alternate index is `i ^ mix(fp)`, so any change to these steps changes where every relocated fingerprint lands.
#[inline]
pub fn mix(x: u64) -> u64 {
    let mut h64 = PRIME64_5.wrapping_add(8);
    let p64 = x.wrapping_mul(PRIME64_2);
    h64 ^= p64.rotate_left(31).wrapping_mul(PRIME64_1);
    h64 = h64
        .rotate_left(27)
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4);

    h64 ^= h64 >> 33;
    h64 = h64.wrapping_mul(PRIME64_2);
    h64 ^= h64 >> 29;
    h64 = h64.wrapping_mul(PRIME64_3);
    h64 ^= h64 >> 32;
    h64
}

/// 64 bit hash of a byte item, used for the primary bucket index
#[inline]
pub fn index_hash(input: &[u8]) -> u64 {
    xxh64(input, SEED as u64)
}

/// 32 bit hash of a byte item widened to 64 bits, used as the fingerprint source
#[inline]
pub fn fingerprint_hash(input: &[u8]) -> u64 {
    xxh32(input, SEED) as u64
}

/* -------------------- Unit Tests -------------------- */
