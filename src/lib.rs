//! # Cuckoo Filter implementation
//!
//! A Cuckoo Filter is an efficient data structure for determining "set membership" (i.e. 'have I seen this thing before?'). A query answers either "definitely not" or "probably yes". Unlike a Bloom Filter, items can be deleted without disturbing the others.
//!
//! This crate provides one filter engine instantiated at three sizes. Each keeps two fingerprints per bucket:
//!
//! - [`Filter64S`] / [`FilterS`]: 4 bit fingerprints, error rate ~11%
//! - [`Filter64M`] / [`FilterM`]: 8 bit fingerprints, error rate ~1%
//! - [`Filter64L`] / [`FilterL`]: 16 bit fingerprints, error rate ~0.005%
//!
//! The `Filter64*` types take `u64` items and use them directly as their hash, which makes them faster than the `Filter*` types that hash arbitrary bytes.
//!
//! See <https://www.cs.cmu.edu/~dga/papers/cuckoo-conext2014.pdf> for the theory behind Cuckoo filters.
//!
//! ```
//! use cuckoofilter::Filter64S;
//!
//! let row_ids = [24, 98, 58, 345, 111, 156800, 123, 961];
//!
//! let mut f = Filter64S::new(128);
//! for id in row_ids {
//!     assert!(f.insert(id), "could not insert row id {id}");
//! }
//!
//! assert_eq!(f.len(), 8);
//! assert!(f.has(123));
//! assert!(!f.has(456));
//!
//! assert!(f.delete(123));
//! assert!(!f.has(123));
//! ```
//!
//! ```
//! use cuckoofilter::FilterM;
//!
//! let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";
//! let words: Vec<String> = text.replace(',', "").split(' ').map(String::from).collect();
//!
//! let mut f = FilterM::new(words.len());
//! for w in &words {
//!     assert!(f.insert(w), "could not insert word {w}");
//! }
//!
//! assert_eq!(f.len(), 19);
//! assert!(f.has("elit"));
//! assert!(!f.has("e_lit"));
//!
//! assert!(f.delete("elit"));
//! assert!(!f.has("elit"));
//! ```
//!
//! A filter is a plain value with no internal locking. Wrap it in a `Mutex` or `RwLock` to share it between threads.

mod bucket;
mod bytes;
mod config;
mod error;
mod filter;
pub mod fingerprint;
pub mod hash;
mod index;
pub mod layout;

pub use bucket::BucketWord;
pub use bytes::Filter;
pub use config::{default_max_relocations, FilterConfig, MIN_BUCKETS};
pub use error::CuckooFilterError;
pub use filter::Filter64;
pub use fingerprint::Fingerprint;
pub use index::{BucketIndex, IndexFunction};
pub use layout::{Large, Layout, Medium, Small};

/// `u64` filter with 4 bit fingerprints
pub type Filter64S = Filter64<Small>;
/// `u64` filter with 8 bit fingerprints
pub type Filter64M = Filter64<Medium>;
/// `u64` filter with 16 bit fingerprints
pub type Filter64L = Filter64<Large>;

/// Byte filter with 4 bit fingerprints
pub type FilterS = Filter<Small>;
/// Byte filter with 8 bit fingerprints
pub type FilterM = Filter<Medium>;
/// Byte filter with 16 bit fingerprints
pub type FilterL = Filter<Large>;
