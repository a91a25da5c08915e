use std::fmt;

/// Returned when an element handed to [`crate::update`] has a key that differs
/// from the key it was supposed to be stored under.
///
/// Storing it would break the ordering for every later search, so the sequence
/// is left untouched and the rejected element is handed back.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyInvariantViolation<T> {
    item: T,
    index: usize,
}

impl<T> KeyInvariantViolation<T> {
    pub(crate) fn new(item: T, index: usize) -> Self {
        Self { item, index }
    }

    /// The rejected element
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Index the element would have been stored at
    pub fn index(&self) -> usize {
        self.index
    }

    /// Take back the rejected element
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Debug for KeyInvariantViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyInvariantViolation")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for KeyInvariantViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element key does not match the searched key (index {})",
            self.index
        )
    }
}

impl<T> std::error::Error for KeyInvariantViolation<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_surface() {
        let e = KeyInvariantViolation::new("x", 4);
        assert_eq!(e.index(), 4);
        assert_eq!(*e.item(), "x");
        assert_eq!(
            e.to_string(),
            "element key does not match the searched key (index 4)"
        );
        assert_eq!(format!("{e:?}"), "KeyInvariantViolation { index: 4, .. }");

        let boxed: Box<dyn std::error::Error> = Box::new(e.clone());
        assert!(boxed.source().is_none());
        assert_eq!(e.into_inner(), "x");
    }
}
