//! Key based operations over a sorted `Vec`.
//!
//! Every function takes the extractor `get_key` and the comparator `compare`
//! explicitly. The slice must already be sorted ascending by
//! `compare(&get_key(a), &get_key(b))`; this is not checked, an unsorted input
//! gives meaningless positions. See [`is_sorted`] to check it explicitly.
//!
//! The public functions locate keys with [`BinarySearch`]. For repeated use
//! with one element type, [`crate::OrderedArray`] binds both functions once and
//! can switch to another [`KeySearcher`].

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::KeyInvariantViolation;
use crate::key_search::{BinarySearch, KeySearcher, SearchResult};

/// Locate `key`. With duplicate keys any element of the run may be reported.
///
/// # Examples
/// ```rust
/// use ordered_array::{search, SearchResult};
///
/// let items = [(1, 'a'), (3, 'b'), (5, 'c')];
/// assert_eq!(search(&items, &3, |i| i.0, Ord::cmp), SearchResult::Found(1));
/// assert_eq!(search(&items, &4, |i| i.0, Ord::cmp), SearchResult::Closest(2));
/// ```
pub fn search<T, K, G, C>(items: &[T], key: &K, get_key: G, compare: C) -> SearchResult
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    search_in::<BinarySearch, _, _, _, _>(items, key, get_key, compare)
}

/// Like [`search`], but reports the first element of a run of equal keys.
pub fn search_first<T, K, G, C>(items: &[T], key: &K, get_key: G, compare: C) -> SearchResult
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    search_first_in::<BinarySearch, _, _, _, _>(items, key, get_key, compare)
}

/// Like [`search`], but reports the last element of a run of equal keys.
///
/// # Examples
/// ```rust
/// use ordered_array::{search_first, search_last, SearchResult};
///
/// let log = [(1, 'a'), (2, 'b'), (2, 'c'), (2, 'd'), (3, 'e')];
/// assert_eq!(search_first(&log, &2, |e| e.0, Ord::cmp), SearchResult::Found(1));
/// assert_eq!(search_last(&log, &2, |e| e.0, Ord::cmp), SearchResult::Found(3));
/// ```
pub fn search_last<T, K, G, C>(items: &[T], key: &K, get_key: G, compare: C) -> SearchResult
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    search_last_in::<BinarySearch, _, _, _, _>(items, key, get_key, compare)
}

/// Index range of all elements equal to `key`. Empty, positioned at the
/// insertion point, when there is none.
pub fn equal_range<T, K, G, C>(items: &[T], key: &K, get_key: G, compare: C) -> Range<usize>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    equal_range_in::<BinarySearch, _, _, _, _>(items, key, get_key, compare)
}

/// Returns a reference to an element with `key`.
pub fn get<'a, T, K, G, C>(items: &'a [T], key: &K, get_key: G, compare: C) -> Option<&'a T>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let idx = search(items, key, get_key, compare).found()?;
    Some(&items[idx])
}

/// Returns a mutable reference to an element with `key`.
///
/// The element's key must not be changed through the reference.
pub fn get_mut<'a, T, K, G, C>(
    items: &'a mut [T],
    key: &K,
    get_key: G,
    compare: C,
) -> Option<&'a mut T>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let idx = search(items, key, get_key, compare).found()?;
    Some(&mut items[idx])
}

/// Whether `items` is sorted ascending by key, equal keys allowed.
pub fn is_sorted<T, K, G, C>(items: &[T], get_key: G, compare: C) -> bool
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&get_key(&w[0]), &get_key(&w[1])) != Ordering::Greater)
}

/// Insert `item`, replacing the element with the same key if there is one.
/// The replaced element keeps its position and is returned.
///
/// # Examples
/// ```rust
/// use ordered_array::insert;
///
/// let mut items = vec![(1, "a"), (3, "c")];
/// assert!(insert(&mut items, (2, "b"), |i| i.0, Ord::cmp).is_none());
/// assert_eq!(insert(&mut items, (3, "C"), |i| i.0, Ord::cmp), Some((3, "c")));
/// assert_eq!(items, vec![(1, "a"), (2, "b"), (3, "C")]);
/// ```
pub fn insert<T, K, G, C>(seq: &mut Vec<T>, item: T, get_key: G, compare: C) -> Option<T>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    insert_in::<BinarySearch, _, _, _, _>(seq, item, get_key, compare)
}

/// Insert `item` in front of the run sharing its key, never replacing.
/// Returns the index it was placed at.
///
/// Repeated calls with one key leave the most recent item first in the run.
pub fn insert_before<T, K, G, C>(seq: &mut Vec<T>, item: T, get_key: G, compare: C) -> usize
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    insert_before_in::<BinarySearch, _, _, _, _>(seq, item, get_key, compare)
}

/// Insert `item` behind the run sharing its key, never replacing.
/// Returns the index it was placed at.
///
/// Repeated calls with one key keep the run in call order.
///
/// # Examples
/// ```rust
/// use ordered_array::insert_after;
///
/// let mut log = vec![(1, "boot"), (2, "a"), (3, "stop")];
/// insert_after(&mut log, (2, "b"), |e| e.0, Ord::cmp);
/// insert_after(&mut log, (2, "c"), |e| e.0, Ord::cmp);
/// assert_eq!(log, vec![(1, "boot"), (2, "a"), (2, "b"), (2, "c"), (3, "stop")]);
/// ```
pub fn insert_after<T, K, G, C>(seq: &mut Vec<T>, item: T, get_key: G, compare: C) -> usize
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    insert_after_in::<BinarySearch, _, _, _, _>(seq, item, get_key, compare)
}

/// Upsert or delete the element stored under `key`.
///
/// `f` receives the current element, or `None` when the key is absent, and
/// returns what should be stored under the key afterwards:
///
/// | current  | `f` returns | effect                         | returns        |
/// |----------|-------------|--------------------------------|----------------|
/// | `Some`   | `None`      | element removed                | removed one    |
/// | `Some`   | `Some(v)`   | element replaced by `v`        | replaced one   |
/// | `None`   | `None`      | nothing                        | `None`         |
/// | `None`   | `Some(v)`   | `v` inserted at its position   | `None`         |
///
/// `v` must have a key equal to `key`. Otherwise nothing is changed and
/// [`KeyInvariantViolation`] hands `v` back.
///
/// # Examples
/// ```rust
/// use ordered_array::update;
///
/// let mut counts = vec![("a", 1), ("c", 1)];
/// for word in ["a", "b", "a"] {
///     update(&mut counts, &word, |e| e.0, Ord::cmp, |e| match e {
///         Some(&(w, n)) => Some((w, n + 1)),
///         None => Some((word, 1)),
///     })
///     .unwrap();
/// }
/// assert_eq!(counts, vec![("a", 3), ("b", 1), ("c", 1)]);
/// ```
pub fn update<T, K, G, C, F>(
    seq: &mut Vec<T>,
    key: &K,
    get_key: G,
    compare: C,
    f: F,
) -> Result<Option<T>, KeyInvariantViolation<T>>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
    F: FnOnce(Option<&T>) -> Option<T>,
{
    update_in::<BinarySearch, _, _, _, _, _>(seq, key, get_key, compare, f)
}

/// Remove and return an element with `key`.
pub fn remove<T, K, G, C>(seq: &mut Vec<T>, key: &K, get_key: G, compare: C) -> Option<T>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    remove_in::<BinarySearch, _, _, _, _>(seq, key, get_key, compare)
}

// Strategy generic forms. The public functions above fix `S` to
// `BinarySearch`, `OrderedArray` passes its own.

pub(crate) fn search_in<S, T, K, G, C>(
    items: &[T],
    key: &K,
    get_key: G,
    compare: C,
) -> SearchResult
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    S::search_by(items, |item| compare(&get_key(item), key))
}

pub(crate) fn search_first_in<S, T, K, G, C>(
    items: &[T],
    key: &K,
    get_key: G,
    compare: C,
) -> SearchResult
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    match search_in::<S, _, _, _, _>(items, key, &get_key, &compare) {
        SearchResult::Found(idx) => {
            SearchResult::Found(run_start(items, idx, key, &get_key, &compare))
        }
        closest => closest,
    }
}

pub(crate) fn search_last_in<S, T, K, G, C>(
    items: &[T],
    key: &K,
    get_key: G,
    compare: C,
) -> SearchResult
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    match search_in::<S, _, _, _, _>(items, key, &get_key, &compare) {
        SearchResult::Found(idx) => {
            SearchResult::Found(run_end(items, idx, key, &get_key, &compare) - 1)
        }
        closest => closest,
    }
}

pub(crate) fn equal_range_in<S, T, K, G, C>(
    items: &[T],
    key: &K,
    get_key: G,
    compare: C,
) -> Range<usize>
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    match search_in::<S, _, _, _, _>(items, key, &get_key, &compare) {
        SearchResult::Found(idx) => {
            run_start(items, idx, key, &get_key, &compare)
                ..run_end(items, idx, key, &get_key, &compare)
        }
        SearchResult::Closest(idx) => idx..idx,
    }
}

pub(crate) fn insert_in<S, T, K, G, C>(
    seq: &mut Vec<T>,
    item: T,
    get_key: G,
    compare: C,
) -> Option<T>
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let key = get_key(&item);
    let result = match search_in::<S, _, _, _, _>(seq, &key, &get_key, &compare) {
        SearchResult::Found(idx) => {
            log::trace!("insert: replace at {idx}");
            Some(std::mem::replace(&mut seq[idx], item))
        }
        SearchResult::Closest(idx) => {
            log::trace!("insert: splice at {idx}");
            seq.insert(idx, item);
            None
        }
    };

    #[cfg(test)]
    validate(seq, &get_key, &compare);

    result
}

pub(crate) fn insert_before_in<S, T, K, G, C>(
    seq: &mut Vec<T>,
    item: T,
    get_key: G,
    compare: C,
) -> usize
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let key = get_key(&item);
    let idx = search_first_in::<S, _, _, _, _>(seq, &key, &get_key, &compare).index();
    log::trace!("insert_before: splice at {idx}");
    seq.insert(idx, item);

    #[cfg(test)]
    validate(seq, &get_key, &compare);

    idx
}

pub(crate) fn insert_after_in<S, T, K, G, C>(
    seq: &mut Vec<T>,
    item: T,
    get_key: G,
    compare: C,
) -> usize
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let key = get_key(&item);
    let idx = match search_last_in::<S, _, _, _, _>(seq, &key, &get_key, &compare) {
        SearchResult::Found(last) => last + 1,
        SearchResult::Closest(idx) => idx,
    };
    log::trace!("insert_after: splice at {idx}");
    seq.insert(idx, item);

    #[cfg(test)]
    validate(seq, &get_key, &compare);

    idx
}

pub(crate) fn update_in<S, T, K, G, C, F>(
    seq: &mut Vec<T>,
    key: &K,
    get_key: G,
    compare: C,
    f: F,
) -> Result<Option<T>, KeyInvariantViolation<T>>
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
    F: FnOnce(Option<&T>) -> Option<T>,
{
    let result = match search_in::<S, _, _, _, _>(seq, key, &get_key, &compare) {
        SearchResult::Found(idx) => match f(Some(&seq[idx])) {
            None => {
                log::trace!("update: remove at {idx}");
                Some(seq.remove(idx))
            }
            Some(item) => {
                let item = check_key(item, key, idx, &get_key, &compare)?;
                log::trace!("update: replace at {idx}");
                Some(std::mem::replace(&mut seq[idx], item))
            }
        },
        SearchResult::Closest(idx) => match f(None) {
            None => None,
            Some(item) => {
                let item = check_key(item, key, idx, &get_key, &compare)?;
                log::trace!("update: splice at {idx}");
                seq.insert(idx, item);
                None
            }
        },
    };

    #[cfg(test)]
    validate(seq, &get_key, &compare);

    Ok(result)
}

pub(crate) fn remove_in<S, T, K, G, C>(
    seq: &mut Vec<T>,
    key: &K,
    get_key: G,
    compare: C,
) -> Option<T>
where
    S: KeySearcher,
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let idx = search_in::<S, _, _, _, _>(seq, key, &get_key, &compare).found()?;
    log::trace!("remove: at {idx}");
    Some(seq.remove(idx))
}

/// First index of the run containing `idx`
fn run_start<T, K, G, C>(items: &[T], mut idx: usize, key: &K, get_key: &G, compare: &C) -> usize
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    while idx > 0 && compare(&get_key(&items[idx - 1]), key) == Ordering::Equal {
        idx -= 1;
    }
    idx
}

/// One past the last index of the run containing `idx`
fn run_end<T, K, G, C>(items: &[T], mut idx: usize, key: &K, get_key: &G, compare: &C) -> usize
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    while idx + 1 < items.len() && compare(&get_key(&items[idx + 1]), key) == Ordering::Equal {
        idx += 1;
    }
    idx + 1
}

fn check_key<T, K, G, C>(
    item: T,
    key: &K,
    idx: usize,
    get_key: &G,
    compare: &C,
) -> Result<T, KeyInvariantViolation<T>>
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    if compare(&get_key(&item), key) == Ordering::Equal {
        Ok(item)
    } else {
        log::warn!("update: element key differs from searched key, rejected at {idx}");
        Err(KeyInvariantViolation::new(item, idx))
    }
}

#[cfg(test)]
fn validate<T, K, G, C>(items: &[T], get_key: &G, compare: &C)
where
    G: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    assert!(is_sorted(items, get_key, compare), "sequence out of order");
}
