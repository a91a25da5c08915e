use std::cmp::Ordering;

/// Outcome of searching a sorted slice.
///
/// `Found(idx)` means the element at `idx` compares equal to the target.
/// `Closest(idx)` means no element does, and `idx` is where the target would be
/// inserted to keep the slice sorted (`0 <= idx <= len`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    Found(usize),
    Closest(usize),
}

impl SearchResult {
    /// Index of the equal element, if any
    #[inline]
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(idx) => Some(idx),
            Self::Closest(_) => None,
        }
    }

    /// Insertion point, if the target was not found
    #[inline]
    pub fn closest(self) -> Option<usize> {
        match self {
            Self::Found(_) => None,
            Self::Closest(idx) => Some(idx),
        }
    }

    /// The index carried by either variant
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Found(idx) | Self::Closest(idx) => idx,
        }
    }

    /// Whether the target was found
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<SearchResult> for Result<usize, usize> {
    /// Same convention as `slice::binary_search`, `Ok` for found and `Err` for
    /// the insertion point.
    fn from(r: SearchResult) -> Self {
        match r {
            SearchResult::Found(idx) => Ok(idx),
            SearchResult::Closest(idx) => Err(idx),
        }
    }
}

impl From<Result<usize, usize>> for SearchResult {
    fn from(r: Result<usize, usize>) -> Self {
        match r {
            Ok(idx) => SearchResult::Found(idx),
            Err(idx) => SearchResult::Closest(idx),
        }
    }
}

/// Binary search over `items`, which must be sorted consistently with `f`.
///
/// `f` returns the ordering of the element under test relative to the target, so
/// `Ordering::Less` means the target lies to the right of it.
///
/// When several elements compare equal, any one of them may be returned. Use
/// [`crate::search_first`] or [`crate::search_last`] to get a run boundary.
pub fn binary_search_by<T, F>(items: &[T], mut f: F) -> SearchResult
where
    F: FnMut(&T) -> Ordering,
{
    // `max` is exclusive so the bracket can shrink to empty without underflow
    let mut min = 0;
    let mut max = items.len();

    while min < max {
        let mid = min + (max - min) / 2;
        match f(&items[mid]) {
            Ordering::Less => min = mid + 1,
            Ordering::Greater => max = mid,
            Ordering::Equal => return SearchResult::Found(mid),
        }
    }

    SearchResult::Closest(min)
}

/// Strategy used to locate a target in a sorted slice.
pub trait KeySearcher {
    /// search the slice with `f`, which orders each element against the target
    fn search_by<T, F>(items: &[T], f: F) -> SearchResult
    where
        F: FnMut(&T) -> Ordering;
}

/// O(log n) search, see [`binary_search_by`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl KeySearcher for BinarySearch {
    #[inline]
    fn search_by<T, F>(items: &[T], f: F) -> SearchResult
    where
        F: FnMut(&T) -> Ordering,
    {
        binary_search_by(items, f)
    }
}

/// Front to back scan. Always reports the first equal element.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl KeySearcher for LinearSearch {
    #[inline(never)]
    fn search_by<T, F>(items: &[T], mut f: F) -> SearchResult
    where
        F: FnMut(&T) -> Ordering,
    {
        items
            .iter()
            .enumerate()
            .find_map(|(idx, item)| match f(item) {
                Ordering::Less => None,
                Ordering::Equal => Some(SearchResult::Found(idx)),
                Ordering::Greater => Some(SearchResult::Closest(idx)),
            })
            .unwrap_or(SearchResult::Closest(items.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::any::type_name;

    use super::*;

    fn test_searcher<S: KeySearcher>() {
        println!("testing {}", type_name::<S>());
        let mut keys = [0u32; 64];
        for i in 0..64 {
            keys[i] = (i as u32 + 1) * 2;
        }
        let s = |k: u32| S::search_by(&keys, |x| x.cmp(&k));

        assert_eq!(s(1), SearchResult::Closest(0));
        assert_eq!(s(2), SearchResult::Found(0));
        assert_eq!(s(3), SearchResult::Closest(1));
        assert_eq!(s(4), SearchResult::Found(1));
        assert_eq!(s(5), SearchResult::Closest(2));
        assert_eq!(s(6), SearchResult::Found(2));
        assert_eq!(s(7), SearchResult::Closest(3));
        assert_eq!(s(8), SearchResult::Found(3));
        assert_eq!(s(9), SearchResult::Closest(4));
        assert_eq!(s(10), SearchResult::Found(4));
        assert_eq!(s(128), SearchResult::Found(63));
        assert_eq!(s(129), SearchResult::Closest(64));
        assert_eq!(s(130), SearchResult::Closest(64));
    }

    #[test]
    fn test_searchers() {
        test_searcher::<BinarySearch>();
        test_searcher::<LinearSearch>();
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search_by(&empty, |x| x.cmp(&1)), SearchResult::Closest(0));

        let one = [5];
        assert_eq!(binary_search_by(&one, |x| x.cmp(&5)), SearchResult::Found(0));
        assert_eq!(binary_search_by(&one, |x| x.cmp(&4)), SearchResult::Closest(0));
        assert_eq!(binary_search_by(&one, |x| x.cmp(&6)), SearchResult::Closest(1));
    }

    #[test]
    fn test_agrees_with_std() {
        let keys = (0..200).map(|i| i * 3).collect::<Vec<i32>>();
        for k in -2..605 {
            let ours: Result<usize, usize> = binary_search_by(&keys, |x| x.cmp(&k)).into();
            assert_eq!(ours, keys.binary_search(&k), "key {k}");
        }
    }

    #[test]
    fn test_duplicates_found_inside_run() {
        let keys = [1, 2, 2, 2, 2, 3];
        let idx = binary_search_by(&keys, |x| x.cmp(&2)).found().unwrap();
        assert!((1..=4).contains(&idx));

        // linear search is the reference for the first boundary
        assert_eq!(
            LinearSearch::search_by(&keys, |x| x.cmp(&2)),
            SearchResult::Found(1)
        );
    }

    #[test]
    fn test_result_accessors() {
        let r = SearchResult::Found(3);
        assert_eq!(r.found(), Some(3));
        assert_eq!(r.closest(), None);
        assert_eq!(r.index(), 3);
        assert!(r.is_found());

        let r = SearchResult::Closest(7);
        assert_eq!(r.found(), None);
        assert_eq!(r.closest(), Some(7));
        assert_eq!(r.index(), 7);
        assert!(!r.is_found());

        assert_eq!(SearchResult::from(Err::<usize, usize>(2)), SearchResult::Closest(2));
        assert_eq!(Result::<usize, usize>::from(SearchResult::Found(1)), Ok(1));
    }
}
