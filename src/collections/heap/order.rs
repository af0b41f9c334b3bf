use core::cmp::Ordering;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Max {}
    impl Sealed for super::Min {}
}

/// The comparison direction of a [`BinaryHeap`](super::BinaryHeap).
///
/// A direction decides which of two keys belongs closer to the root. The
/// sift and build routines consult it through [`outranks`](Self::outranks)
/// and never compare keys any other way, so [`Max`] and [`Min`] heaps share
/// one engine. The trait is sealed; these two directions are the only ones.
pub trait HeapOrder: sealed::Sealed {
    /// The result a key must win in a comparison to sit above the other key.
    fn ordering() -> Ordering;

    /// Whether `a` must be placed strictly above `b`.
    ///
    /// Equal keys never outrank each other, so sifting stops at ties and
    /// duplicate keys are legal everywhere in the tree.
    #[inline]
    fn outranks<K: Ord>(a: &K, b: &K) -> bool {
        a.cmp(b) == Self::ordering()
    }
}

/// Max-heap direction: every parent key is greater than or equal to the keys
/// of its children, and the root holds the greatest key.
#[derive(Debug, Clone, Copy)]
pub enum Max {}

/// Min-heap direction: every parent key is less than or equal to the keys of
/// its children, and the root holds the smallest key.
#[derive(Debug, Clone, Copy)]
pub enum Min {}

impl HeapOrder for Max {
    #[inline]
    fn ordering() -> Ordering {
        Ordering::Greater
    }
}

impl HeapOrder for Min {
    #[inline]
    fn ordering() -> Ordering {
        Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_outranks_greater_only() {
        assert!(Max::outranks(&3, &2));
        assert!(!Max::outranks(&2, &3));
        assert!(!Max::outranks(&2, &2));
    }

    #[test]
    fn min_outranks_less_only() {
        assert!(Min::outranks(&2, &3));
        assert!(!Min::outranks(&3, &2));
        assert!(!Min::outranks(&2, &2));
    }
}
