use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

use crate::error::KeyInvariantViolation;
use crate::key_search::{BinarySearch, KeySearcher, SearchResult};
use crate::ops;

/// Binds a key extractor and a comparator once, so the operations in
/// [`crate::ops`] can be called on `Vec<T>` without repeating them.
///
/// The struct holds no elements. Each method borrows the caller's sequence for
/// the duration of the call only, so one `OrderedArray` serves any number of
/// sequences of the same element type.
///
/// # Examples
/// ```rust
/// use ordered_array::{OrderedArray, SearchResult};
///
/// #[derive(Debug, PartialEq)]
/// struct Entry {
///     id: u32,
///     name: &'static str,
/// }
///
/// let by_id = OrderedArray::new(|e: &Entry| e.id);
/// let mut entries = vec![];
///
/// by_id.insert(&mut entries, Entry { id: 7, name: "seven" });
/// by_id.insert(&mut entries, Entry { id: 3, name: "three" });
///
/// assert_eq!(by_id.search(&entries, &7), SearchResult::Found(1));
/// assert_eq!(by_id.get(&entries, &3).unwrap().name, "three");
/// assert_eq!(by_id.remove(&mut entries, &3).unwrap().name, "three");
/// assert_eq!(entries.len(), 1);
/// ```
///
/// Keys without a total `Ord`, such as `f64`, bring their own comparator:
/// ```rust
/// use ordered_array::OrderedArray;
///
/// let by_time = OrderedArray::with_comparator(|e: &(f64, &str)| e.0, f64::total_cmp);
/// let mut log = vec![];
/// by_time.insert_after(&mut log, (0.5, "b"));
/// by_time.insert_after(&mut log, (0.25, "a"));
/// by_time.insert_after(&mut log, (0.5, "c"));
///
/// assert_eq!(log, vec![(0.25, "a"), (0.5, "b"), (0.5, "c")]);
/// ```
///
/// Keys are located with [`BinarySearch`] unless another [`KeySearcher`] is
/// picked with [`with_searcher`](Self::with_searcher). [`LinearSearch`] always
/// reports the first element of a run of equal keys:
/// ```rust
/// use ordered_array::{LinearSearch, OrderedArray, SearchResult};
///
/// let by_key = OrderedArray::new(|e: &(u8, char)| e.0).with_searcher::<LinearSearch>();
/// let mut items = vec![(1, 'a'), (2, 'x'), (2, 'y'), (3, 'b')];
///
/// assert_eq!(by_key.search(&items, &2), SearchResult::Found(1));
/// assert_eq!(by_key.insert(&mut items, (2, 'n')), Some((2, 'x')));
/// assert_eq!(items, vec![(1, 'a'), (2, 'n'), (2, 'y'), (3, 'b')]);
/// ```
///
/// [`LinearSearch`]: crate::LinearSearch
pub struct OrderedArray<T, K, G, C = fn(&K, &K) -> Ordering, S = BinarySearch> {
    get_key: G,
    compare: C,
    _marker: PhantomData<(fn(&T) -> K, fn() -> S)>,
}

impl<T, K, G> OrderedArray<T, K, G>
where
    K: Ord,
    G: Fn(&T) -> K,
{
    /// Create with the natural order of `K`
    pub fn new(get_key: G) -> Self {
        Self::with_comparator(get_key, K::cmp)
    }
}

impl<T, K, G, C> OrderedArray<T, K, G, C>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    /// Create with a custom comparator. `compare` must be a total order.
    pub fn with_comparator(get_key: G, compare: C) -> Self {
        Self {
            get_key,
            compare,
            _marker: PhantomData,
        }
    }
}

impl<T, K, G, C, S> OrderedArray<T, K, G, C, S>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
    S: KeySearcher,
{
    /// Same binding, locating keys with `S2` instead
    pub fn with_searcher<S2: KeySearcher>(self) -> OrderedArray<T, K, G, C, S2> {
        OrderedArray {
            get_key: self.get_key,
            compare: self.compare,
            _marker: PhantomData,
        }
    }

    /// Key of `item` under this binding
    #[inline]
    pub fn key_of(&self, item: &T) -> K {
        (self.get_key)(item)
    }

    /// See [`ops::search`]
    #[inline]
    pub fn search(&self, items: &[T], key: &K) -> SearchResult {
        ops::search_in::<S, _, _, _, _>(items, key, &self.get_key, &self.compare)
    }

    /// See [`ops::search_first`]
    #[inline]
    pub fn search_first(&self, items: &[T], key: &K) -> SearchResult {
        ops::search_first_in::<S, _, _, _, _>(items, key, &self.get_key, &self.compare)
    }

    /// See [`ops::search_last`]
    #[inline]
    pub fn search_last(&self, items: &[T], key: &K) -> SearchResult {
        ops::search_last_in::<S, _, _, _, _>(items, key, &self.get_key, &self.compare)
    }

    /// See [`ops::equal_range`]
    #[inline]
    pub fn equal_range(&self, items: &[T], key: &K) -> Range<usize> {
        ops::equal_range_in::<S, _, _, _, _>(items, key, &self.get_key, &self.compare)
    }

    /// See [`ops::get`]
    #[inline]
    pub fn get<'a>(&self, items: &'a [T], key: &K) -> Option<&'a T> {
        let idx = self.search(items, key).found()?;
        Some(&items[idx])
    }

    /// See [`ops::get_mut`]
    #[inline]
    pub fn get_mut<'a>(&self, items: &'a mut [T], key: &K) -> Option<&'a mut T> {
        let idx = self.search(items, key).found()?;
        Some(&mut items[idx])
    }

    /// Whether an element with `key` is present
    #[inline]
    pub fn contains_key(&self, items: &[T], key: &K) -> bool {
        self.search(items, key).is_found()
    }

    /// See [`ops::is_sorted`]
    #[inline]
    pub fn is_sorted(&self, items: &[T]) -> bool {
        ops::is_sorted(items, &self.get_key, &self.compare)
    }

    /// See [`ops::insert`]
    #[inline]
    pub fn insert(&self, seq: &mut Vec<T>, item: T) -> Option<T> {
        ops::insert_in::<S, _, _, _, _>(seq, item, &self.get_key, &self.compare)
    }

    /// See [`ops::insert_before`]
    #[inline]
    pub fn insert_before(&self, seq: &mut Vec<T>, item: T) -> usize {
        ops::insert_before_in::<S, _, _, _, _>(seq, item, &self.get_key, &self.compare)
    }

    /// See [`ops::insert_after`]
    #[inline]
    pub fn insert_after(&self, seq: &mut Vec<T>, item: T) -> usize {
        ops::insert_after_in::<S, _, _, _, _>(seq, item, &self.get_key, &self.compare)
    }

    /// See [`ops::update`]
    #[inline]
    pub fn update<F>(
        &self,
        seq: &mut Vec<T>,
        key: &K,
        f: F,
    ) -> Result<Option<T>, KeyInvariantViolation<T>>
    where
        F: FnOnce(Option<&T>) -> Option<T>,
    {
        ops::update_in::<S, _, _, _, _, _>(seq, key, &self.get_key, &self.compare, f)
    }

    /// See [`ops::remove`]
    #[inline]
    pub fn remove(&self, seq: &mut Vec<T>, key: &K) -> Option<T> {
        ops::remove_in::<S, _, _, _, _>(seq, key, &self.get_key, &self.compare)
    }
}

impl<T, K, G: Clone, C: Clone, S> Clone for OrderedArray<T, K, G, C, S> {
    fn clone(&self) -> Self {
        Self {
            get_key: self.get_key.clone(),
            compare: self.compare.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, K, G: Copy, C: Copy, S> Copy for OrderedArray<T, K, G, C, S> {}

impl<T, K, G, C, S> fmt::Debug for OrderedArray<T, K, G, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedArray")
            .field("element", &std::any::type_name::<T>())
            .field("key", &std::any::type_name::<K>())
            .field("searcher", &std::any::type_name::<S>())
            .finish()
    }
}
