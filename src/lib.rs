//! # Coffer
//!
//! Generic in-memory containers built over a shared contiguous-storage
//! primitive: a growable array, a circular-buffer deque, open-addressing
//! hash containers, and an in-place sort.
//!
//! Every owning container allocates through [`Buffer`], a fixed-capacity
//! block with explicit move and deep-copy semantics, and lends out
//! [`View`]/[`ViewMut`] windows as the common currency for generic
//! algorithms. The hash containers share one linear-probing engine whose
//! deletions are tombstone-free: each slot carries a monotonic `conflict`
//! marker recording that an insertion once probed past it, so removals can
//! free slots without severing any other key's probe chain.
//!
//! The crate is single-threaded and synchronous: no operation blocks,
//! suspends, or retries, and nothing here is safe for concurrent mutation.
//!
//! ## Basic Usage
//!
//! ```rust
//! use coffer::{DynArray, ProbeMap, sort};
//!
//! // Growable array with amortized O(1) append
//! let mut numbers: DynArray<i32> = DynArray::new();
//! for n in [5, 3, 8, 1, 9, 2] {
//!     numbers.push_back(n);
//! }
//! sort(numbers.as_view_mut());
//! assert_eq!(numbers.as_slice(), &[1, 2, 3, 5, 8, 9]);
//!
//! // Open-addressing map with conflict-marked probing
//! let mut ages: ProbeMap<String, u32> = ProbeMap::new();
//! ages.insert("ada".to_string(), 36);
//! ages.insert("grace".to_string(), 85);
//! assert_eq!(ages.get("ada"), Some(&36));
//! assert_eq!(ages.remove("ada"), Some(36));
//! assert_eq!(ages.get("grace"), Some(&85));
//! ```
//!
//! ## Double-ended queue
//!
//! ```rust
//! use coffer::Deque;
//!
//! let mut deque: Deque<i32> = Deque::new();
//! deque.push_back(2);
//! deque.push_front(1);
//! deque.push_back(3);
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(3));
//! ```
//!
//! ## Errors
//!
//! Checked access (`at`) and pops on empty containers report a typed
//! [`Error`]; a missing hash key is `None`, never an error. Allocation
//! failure is fatal and is not represented.

/// Owned fixed-capacity contiguous storage
mod buffer;
/// Circular-buffer double-ended queue
mod deque;
/// Growable array over a single buffer
mod dyn_array;
/// Shared error type for checked access
mod error;
/// The fixed key-digest contract
mod hashing;
/// Public map over the probing engine
mod probe_map;
/// Public set over the probing engine
mod probe_set;
/// Shared open-addressing engine with conflict markers
mod probe_table;
/// In-place partition sort over views
mod sort;
/// Non-owning windows over contiguous storage
mod view;

pub use buffer::Buffer;
pub use deque::Deque;
pub use dyn_array::DynArray;
pub use error::Error;
pub use hashing::ProbeHash;
pub use probe_map::ProbeMap;
pub use probe_set::ProbeSet;
pub use sort::{sort, sort_by};
pub use view::{View, ViewMut};
