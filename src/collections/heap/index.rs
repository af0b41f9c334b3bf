//! Position arithmetic for the implicit tree inside the heap's backing
//! vector.
//!
//! The entry at position `i` has its children at `2i + 1` and `2i + 2` and
//! its parent at `(i - 1) / 2`. That arithmetic is written down here and
//! nowhere else, so the build and sift routines cannot disagree about the
//! shape of the tree.

/// Returns the position of the parent of `index`, or `None` for the root.
///
/// # Examples
///
/// ```
/// use fundamentals::collections::heap::index;
///
/// assert_eq!(index::parent(0), None);
/// assert_eq!(index::parent(1), Some(0));
/// assert_eq!(index::parent(2), Some(0));
/// assert_eq!(index::parent(8), Some(3));
/// ```
#[inline]
#[must_use]
pub const fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Returns the position of the left child of `index`.
///
/// The result may lie past the end of the heap; callers bounds-check before
/// reading through it.
///
/// # Examples
///
/// ```
/// use fundamentals::collections::heap::index;
///
/// assert_eq!(index::left_child(0), 1);
/// assert_eq!(index::left_child(3), 7);
/// ```
#[inline]
#[must_use]
pub const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the position of the right child of `index`.
///
/// The result may lie past the end of the heap; callers bounds-check before
/// reading through it.
///
/// # Examples
///
/// ```
/// use fundamentals::collections::heap::index;
///
/// assert_eq!(index::right_child(0), 2);
/// assert_eq!(index::right_child(3), 8);
/// ```
#[inline]
#[must_use]
pub const fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent(0), None);
    }

    #[test]
    fn first_levels() {
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
        assert_eq!(parent(3), Some(1));
        assert_eq!(parent(4), Some(1));
        assert_eq!(parent(5), Some(2));
        assert_eq!(parent(6), Some(2));

        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(left_child(1), 3);
        assert_eq!(right_child(1), 4);
        assert_eq!(left_child(2), 5);
        assert_eq!(right_child(2), 6);
    }

    #[test]
    fn children_invert_to_parent() {
        for i in 0..1000 {
            assert_eq!(parent(left_child(i)), Some(i));
            assert_eq!(parent(right_child(i)), Some(i));
        }
    }

    #[test]
    fn siblings_are_adjacent() {
        for i in 0..1000 {
            assert_eq!(right_child(i), left_child(i) + 1);
        }
    }
}
