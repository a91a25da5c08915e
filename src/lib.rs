//! Sorted `Vec` index.
//!
//! Elements stay in ascending order of a key derived from each element. Lookup
//! is a binary search, insertion and removal shift the dense vector. Equal keys
//! may coexist, and [`insert_after`] / [`insert_before`] grow a run of them in
//! a defined order, which makes the vec usable as an ordered log.
//!
//! # Example
//! ```rust
//! use ordered_array::{OrderedArray, SearchResult};
//!
//! let by_key = OrderedArray::new(|e: &(u32, &str)| e.0);
//! let mut items = vec![(1, "a"), (2, "b"), (4, "d")];
//!
//! assert_eq!(by_key.search(&items, &3), SearchResult::Closest(2));
//! by_key.insert(&mut items, (3, "c"));
//!
//! // upsert: the callback sees the current element and returns the new one
//! by_key.update(&mut items, &1, |e| e.map(|&(k, _)| (k, "A"))).unwrap();
//!
//! assert_eq!(items, vec![(1, "A"), (2, "b"), (3, "c"), (4, "d")]);
//! ```

mod error;
pub use error::KeyInvariantViolation;

pub mod key_search;
pub use key_search::{binary_search_by, BinarySearch, KeySearcher, LinearSearch, SearchResult};

pub mod ops;
pub use ops::{
    equal_range, get, get_mut, insert, insert_after, insert_before, is_sorted, remove, search,
    search_first, search_last, update,
};

mod ordered_array;
pub use ordered_array::OrderedArray;
