//! Array-backed binary heaps with a type-level max/min ordering choice.
//!
//! One engine serves both directions: [`BinaryHeap`] is generic over a sealed
//! [`HeapOrder`] policy, and [`MaxHeap`] / [`MinHeap`] are its two faces. The
//! backing `Vec` *is* the tree; [`index`] holds the position arithmetic that
//! makes it one.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, swap, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;

use std::slice;
use std::vec::{self, Vec};

pub mod index;
mod order;

pub use order::{HeapOrder, Max, Min};

/// An immutable pairing of an orderable key with an opaque payload value.
///
/// The heap places entries by `key` alone and never inspects `value`.
/// Equality compares both fields; the heap does not rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<K, V> {
    pub key: K,
    pub value: V,
}

/// A priority queue implemented with a binary heap over key/value entries.
///
/// The direction parameter `O` is fixed at construction and decides which key
/// the root holds: [`Max`] keeps the greatest key on top, [`Min`] the
/// smallest. The aliases [`MaxHeap`] and [`MinHeap`] name the two variants;
/// they share every line of this engine, which consults `O` only for its
/// comparisons.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the heap. The behavior resulting from such a logic
/// error may include panics or incorrect results but will not be undefined
/// behavior.
///
/// # Examples
///
/// ```
/// use fundamentals::{HeapEntry, MaxHeap};
///
/// let mut heap = MaxHeap::new();
///
/// // An empty heap has no root to look at.
/// assert_eq!(heap.peek(), None);
///
/// heap.push(1, "Bob");
/// heap.push(5, "Alice");
/// heap.push(2, "Eve");
///
/// // The root is now the entry with the greatest key.
/// assert_eq!(heap.peek(), Some(&HeapEntry { key: 5, value: "Alice" }));
/// assert_eq!(heap.len(), 3);
///
/// // Iteration visits entries in arbitrary order.
/// for entry in &heap {
///     println!("{}: {}", entry.key, entry.value);
/// }
///
/// // Popping returns entries in key order.
/// assert_eq!(heap.pop().map(|e| e.value), Some("Alice"));
/// assert_eq!(heap.pop().map(|e| e.value), Some("Eve"));
/// assert_eq!(heap.pop().map(|e| e.value), Some("Bob"));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// ## Min-heap
///
/// The same engine, the opposite direction:
///
/// ```
/// use fundamentals::MinHeap;
///
/// let mut heap = MinHeap::new();
///
/// heap.push(1, "Bob");
/// heap.push(5, "Alice");
/// heap.push(2, "Eve");
///
/// assert_eq!(heap.pop().map(|e| e.key), Some(1)); // Bob
/// assert_eq!(heap.pop().map(|e| e.key), Some(2)); // Eve
/// assert_eq!(heap.pop().map(|e| e.key), Some(5)); // Alice
/// assert_eq!(heap.pop(), None);
/// ```
///
/// A heap with a known list of entries can be initialized from an array, or
/// built explicitly from an unordered sequence:
///
/// ```
/// use fundamentals::MaxHeap;
///
/// let from_array = MaxHeap::from([(1, "Bob"), (5, "Alice"), (2, "Eve")]);
///
/// let mut deferred = MaxHeap::from_unordered(vec![(1, "Bob"), (5, "Alice"), (2, "Eve")]);
/// let count = deferred.len();
/// deferred.build_iterative(count);
///
/// assert_eq!(from_array.peek(), deferred.peek());
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek]/[peek\_mut] |
/// |---------------|---------------|--------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)             |
///
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
/// [peek\_mut]: BinaryHeap::peek_mut
pub struct BinaryHeap<K, V, O> {
    data: Vec<HeapEntry<K, V>>,
    order: PhantomData<O>,
}

/// A binary heap whose root holds the greatest key.
pub type MaxHeap<K, V> = BinaryHeap<K, V, Max>;

/// A binary heap whose root holds the smallest key.
pub type MinHeap<K, V> = BinaryHeap<K, V, Min>;

/// Structure wrapping a mutable reference to the root entry of a
/// [`BinaryHeap`].
///
/// This `struct` is created by the [`peek_mut`] method on [`BinaryHeap`]. If
/// the entry is mutably dereferenced, the root is sifted back into place when
/// the guard drops.
///
/// [`peek_mut`]: BinaryHeap::peek_mut
pub struct PeekMut<'a, K: 'a + Ord, V: 'a, O: HeapOrder> {
    heap: &'a mut BinaryHeap<K, V, O>,
    sift: bool,
}

impl<K: Ord + fmt::Debug, V: fmt::Debug, O: HeapOrder> fmt::Debug for PeekMut<'_, K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<K: Ord, V, O: HeapOrder> Drop for PeekMut<'_, K, V, O> {
    fn drop(&mut self) {
        if self.sift {
            // SAFETY: PeekMut is only instantiated for non-empty heaps.
            unsafe { self.heap.sift_down(0) };
        }
    }
}

impl<K: Ord, V, O: HeapOrder> Deref for PeekMut<'_, K, V, O> {
    type Target = HeapEntry<K, V>;
    fn deref(&self) -> &Self::Target {
        debug_assert!(!self.heap.is_empty());
        // SAFETY: PeekMut is only instantiated for non-empty heaps.
        unsafe { self.heap.data.get_unchecked(0) }
    }
}

impl<K: Ord, V, O: HeapOrder> DerefMut for PeekMut<'_, K, V, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        debug_assert!(!self.heap.is_empty());
        self.sift = true;
        // SAFETY: PeekMut is only instantiated for non-empty heaps.
        unsafe { self.heap.data.get_unchecked_mut(0) }
    }
}

impl<'a, K: Ord, V, O: HeapOrder> PeekMut<'a, K, V, O> {
    /// Removes the peeked entry from the heap and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundamentals::collections::heap::PeekMut;
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from(vec![1, 2, 3]);
    ///
    /// let root = heap.peek_mut().unwrap();
    /// assert_eq!(PeekMut::pop(root).key, 3);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn pop(mut this: PeekMut<'a, K, V, O>) -> HeapEntry<K, V> {
        let entry = this.heap.pop().unwrap();
        this.sift = false;
        entry
    }
}

impl<K: Clone, V: Clone, O> Clone for BinaryHeap<K, V, O> {
    fn clone(&self) -> Self {
        BinaryHeap {
            data: self.data.clone(),
            order: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<K: Ord, V, O: HeapOrder> Default for BinaryHeap<K, V, O> {
    /// Creates an empty heap.
    #[inline]
    fn default() -> BinaryHeap<K, V, O> {
        BinaryHeap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for BinaryHeap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[allow(unused_unsafe)]
impl<K: Ord, V, O: HeapOrder> BinaryHeap<K, V, O> {
    /// Creates an empty heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.push(4, "Bob");
    /// ```
    #[must_use]
    pub fn new() -> BinaryHeap<K, V, O> {
        BinaryHeap {
            data: Vec::new(),
            order: PhantomData,
        }
    }

    /// Creates an empty heap with at least the given capacity.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MinHeap;
    /// let mut heap = MinHeap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4, "Bob");
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> BinaryHeap<K, V, O> {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Creates a heap holding `entries` in their given order, without
    /// establishing heap order.
    ///
    /// Order-dependent queries (`peek`, `pop`, `peek_mut`) are not
    /// trustworthy until [`build_iterative`] or [`build_recursive`] has run;
    /// they stay memory-safe regardless. The [`From`] conversions compose
    /// this constructor with an iterative build.
    ///
    /// [`build_iterative`]: BinaryHeap::build_iterative
    /// [`build_recursive`]: BinaryHeap::build_recursive
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from_unordered(vec![(1, 'a'), (9, 'b'), (4, 'c')]);
    /// assert!(!heap.check_integrity());
    ///
    /// let count = heap.len();
    /// heap.build_iterative(count);
    /// assert!(heap.check_integrity());
    /// ```
    pub fn from_unordered(entries: impl IntoIterator<Item = (K, V)>) -> BinaryHeap<K, V, O> {
        BinaryHeap {
            data: entries
                .into_iter()
                .map(|(key, value)| HeapEntry { key, value })
                .collect(),
            order: PhantomData,
        }
    }

    /// Establishes heap order among the first `count` entries by scanning
    /// from the last parent position down to the root and sifting each entry
    /// down into its subtree.
    ///
    /// Every position past `count / 2 - 1` is a leaf, so the scan starts
    /// there; each visited subtree's children are already heaps, which is
    /// what makes the single sift-down per position sufficient.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of entries in the heap. A `count`
    /// of zero is a no-op.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from_unordered(vec![(3, "c"), (7, "g"), (1, "a")]);
    /// let count = heap.len();
    /// heap.build_iterative(count);
    ///
    /// assert!(heap.check_integrity());
    /// assert_eq!(heap.peek().map(|e| e.key), Some(7));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(`count`): most sift-downs act on the short subtrees near the
    /// leaves, so the total work is linear rather than *O*(*n* log(*n*)).
    pub fn build_iterative(&mut self, count: usize) {
        assert!(count <= self.len());
        let mut n = count / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n < count / 2, so n is a valid position below the
            //  bound: n < count <= self.len().
            unsafe { self.sift_down_range(n, count) };
        }
    }

    /// Establishes heap order among the first `count` entries by postorder
    /// recursion: both subtrees of a position are built before the position
    /// itself sifts down into them.
    ///
    /// Produces a heap equivalent to [`build_iterative`]: the same invariant
    /// holds and the same drain sequence follows for the same input, though
    /// entries with equal keys may settle at different positions since the
    /// traversal order differs. Recursion depth is the tree height.
    ///
    /// [`build_iterative`]: BinaryHeap::build_iterative
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of entries in the heap. A `count`
    /// of zero is a no-op.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MinHeap;
    ///
    /// let mut heap = MinHeap::from_unordered(vec![(5, ()), (2, ()), (8, ()), (1, ())]);
    /// let count = heap.len();
    /// heap.build_recursive(count);
    ///
    /// assert!(heap.check_integrity());
    /// assert_eq!(heap.peek().map(|e| e.key), Some(1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(`count`), by the same argument as the iterative build.
    pub fn build_recursive(&mut self, count: usize) {
        assert!(count <= self.len());
        if count > 0 {
            self.build_subtree(0, count);
        }
    }

    /// Heapifies the subtree rooted at `node`, children first.
    ///
    /// `node < count <= self.len()` is guaranteed by both callers.
    fn build_subtree(&mut self, node: usize, count: usize) {
        let left = index::left_child(node);
        if left < count {
            self.build_subtree(left, count);
        }
        let right = index::right_child(node);
        if right < count {
            self.build_subtree(right, count);
        }
        // SAFETY: node < count <= self.len(), per the caller contract.
        unsafe { self.sift_down_range(node, count) };
    }

    /// Returns a mutable reference to the root entry, or `None` if the heap
    /// is empty.
    ///
    /// If the returned guard is mutably dereferenced, the root is sifted
    /// down when the guard drops, so the heap order holds again afterwards.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert!(heap.peek_mut().is_none());
    ///
    /// heap.push(1, "Bob");
    /// heap.push(5, "Alice");
    /// heap.push(2, "Eve");
    ///
    /// {
    ///     let mut root = heap.peek_mut().unwrap();
    ///     root.key = 0;
    /// }
    ///
    /// assert_eq!(heap.peek().map(|e| e.key), Some(2));
    /// assert!(heap.check_integrity());
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(1) to take the guard; *O*(log(*n*)) on drop after a mutation.
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, K, V, O>> {
        if self.is_empty() {
            None
        } else {
            Some(PeekMut {
                heap: self,
                sift: false,
            })
        }
    }

    /// Removes the root entry and returns it, or returns `None` if the heap
    /// is empty. The heap is left untouched in the empty case.
    ///
    /// The last entry fills the vacated root position and sifts down, so the
    /// next-ranked key surfaces.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from(vec![1, 3]);
    ///
    /// assert_eq!(heap.pop().map(|e| e.key), Some(3));
    /// assert_eq!(heap.pop().map(|e| e.key), Some(1));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<HeapEntry<K, V>> {
        self.data.pop().map(|mut entry| {
            if !self.is_empty() {
                swap(&mut entry, &mut self.data[0]);
                // SAFETY: the heap is non-empty, so position 0 is occupied.
                unsafe { self.sift_down(0) };
            }
            entry
        })
    }

    /// Appends an entry at the first free position and sifts it up to where
    /// its key belongs.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.push(3, "Bob");
    /// heap.push(5, "Alice");
    /// heap.push(1, "Eve");
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek().map(|e| e.key), Some(5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) in the worst case, when the new key must climb to the
    /// root. The expected cost over a random arrival order is *O*(1).
    pub fn push(&mut self, key: K, value: V) {
        let old_len = self.len();
        self.data.push(HeapEntry { key, value });
        // SAFETY: old_len = self.len() - 1 < self.len().
        unsafe { self.sift_up(0, old_len) };
    }

    /// Consumes the heap and returns its entries sorted by key: the
    /// root-most entries come last, so a max-heap yields ascending keys and
    /// a min-heap descending ones.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let heap = MaxHeap::from(vec![1, 5, 3, 7, 2]);
    /// let keys: Vec<i32> = heap.into_sorted_vec().into_iter().map(|e| e.key).collect();
    ///
    /// assert_eq!(keys, [1, 2, 3, 5, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<K, V>> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // SAFETY: `end` runs from self.len() - 1 down to 1, so both 0
            //  and `end` are occupied positions.
            unsafe {
                let ptr = self.data.as_mut_ptr();
                ptr::swap(ptr, ptr.add(end));
            }
            // SAFETY: 0 < end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        self.into_vec()
    }

    /// Reports whether every parent/child pair currently satisfies the heap
    /// order. Equal keys satisfy it.
    ///
    /// Holds after every `push`, `pop`, build, and `From` conversion;
    /// [`from_unordered`](BinaryHeap::from_unordered) alone makes no such
    /// promise.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from(vec![2, 9, 7]);
    /// assert!(heap.check_integrity());
    ///
    /// heap.push(11, 11);
    /// assert!(heap.check_integrity());
    /// ```
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        (1..self.len()).all(|child| match index::parent(child) {
            Some(parent) => !O::outranks(&self.data[child].key, &self.data[parent].key),
            None => true,
        })
    }

    /// Sifts the entry at `pos` toward the root until its parent outranks it
    /// or it becomes the root. Returns the entry's final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // SAFETY: The caller guarantees that pos < self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = match index::parent(hole.pos()) {
                Some(parent) => parent,
                None => break,
            };

            // An entry never outranks an equal parent, so duplicates stop
            // sifting as soon as they meet.
            // SAFETY: parent < hole.pos() < self.len() and parent != pos.
            if unsafe { !O::outranks(&hole.element().key, &hole.get(parent).key) } {
                break;
            }

            // SAFETY: Same as above.
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Sifts the entry at `pos` away from the root, swapping with whichever
    /// in-range child must sit above it, until heap order holds locally or
    /// position `end` fences the descent. Both children tying means the left
    /// child wins, keeping layouts reproducible.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = index::left_child(hole.pos());

        while child < end {
            let right = index::right_child(hole.pos());
            // Descend toward the child that belongs above its sibling; only
            // a strictly outranking right child is preferred, so ties keep
            // the left child.
            // SAFETY: child < end <= self.len() and right < end when read;
            //  both are below the hole, so neither aliases hole.pos().
            if right < end && unsafe { O::outranks(&hole.get(right).key, &hole.get(child).key) } {
                child = right;
            }

            // In order once the favored child no longer outranks the entry.
            // SAFETY: Same bounds as above.
            if unsafe { !O::outranks(&hole.get(child).key, &hole.element().key) } {
                return;
            }

            // SAFETY: Same bounds as above.
            unsafe { hole.move_to(child) };
            child = index::left_child(hole.pos());
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller.
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Clears the heap, returning an iterator over the removed entries in
    /// heap order. If the iterator is dropped before being fully consumed,
    /// it drops the remaining entries in heap order.
    ///
    /// Note: `.drain_sorted()` is *O*(*n* \* log(*n*)); much slower than
    /// [`drain`](BinaryHeap::drain). Use the latter when order is
    /// irrelevant.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(heap.len(), 5);
    ///
    /// drop(heap.drain_sorted()); // removes all entries in heap order
    /// assert_eq!(heap.len(), 0);
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, K, V, O> {
        DrainSorted { inner: self }
    }
}

impl<K, V, O> BinaryHeap<K, V, O> {
    /// Returns an iterator visiting all entries in the underlying vector, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let heap = MaxHeap::from(vec![1, 2, 3, 4]);
    ///
    /// // Prints 1, 2, 3, 4 in arbitrary order
    /// for entry in heap.iter() {
    ///     println!("{}", entry.key);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Returns an iterator which retrieves entries in heap order. This
    /// method consumes the original heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let heap = MaxHeap::from(vec![1, 2, 3, 4, 5]);
    ///
    /// let keys: Vec<i32> = heap.into_iter_sorted().take(2).map(|e| e.key).collect();
    /// assert_eq!(keys, [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<K, V, O> {
        IntoIterSorted { inner: self }
    }

    /// Returns a reference to the root entry, or `None` if the heap is
    /// empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::{HeapEntry, MinHeap};
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(1, "Bob");
    /// heap.push(5, "Alice");
    /// heap.push(2, "Eve");
    /// assert_eq!(heap.peek(), Some(&HeapEntry { key: 1, value: "Bob" }));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&HeapEntry<K, V>> {
        self.data.first()
    }

    /// Returns the number of entries the heap can hold without reallocating.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::with_capacity(100);
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4, "Bob");
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.reserve(100);
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4, "Steven");
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap: MaxHeap<i32, &str> = MaxHeap::with_capacity(100);
    ///
    /// assert!(heap.capacity() >= 100);
    /// heap.shrink_to_fit();
    /// assert!(heap.capacity() == 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Consumes the heap and returns the underlying vector of entries in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let heap = MaxHeap::from(vec![1, 2, 3, 4, 5, 6, 7]);
    /// let entries = heap.into_vec();
    ///
    /// assert_eq!(entries.len(), 7);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<HeapEntry<K, V>> {
        self.into()
    }

    /// Returns the number of entries in the heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let heap = MaxHeap::from(vec![1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::new();
    ///
    /// assert!(heap.is_empty());
    ///
    /// heap.push(3, "Bob");
    ///
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed entries in
    /// arbitrary order. If the iterator is dropped before being fully
    /// consumed, it drops the remaining entries in arbitrary order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::from(vec![1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// for entry in heap.drain() {
    ///     println!("key: {} value: {}", entry.key, entry.value);
    /// }
    ///
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, HeapEntry<K, V>> {
        Drain {
            iter: self.data.drain(..),
        }
    }

    /// Drops all entries from the heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fundamentals::MaxHeap;
    /// let mut heap = MaxHeap::from(vec![1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.drain();
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    #[allow(unused_unsafe)]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: pos is inside the slice.
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    #[allow(unused_unsafe)]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    #[allow(unused_unsafe)]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the entries of a [`BinaryHeap`].
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its documentation
/// for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a, V: 'a> {
    iter: slice::Iter<'a, HeapEntry<K, V>>,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a HeapEntry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<&'a HeapEntry<K, V>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a HeapEntry<K, V>> {
        self.iter.last()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a HeapEntry<K, V>> {
        self.iter.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator yielding entries in heap order.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<K, V, O> {
    inner: BinaryHeap<K, V, O>,
}

impl<K: Ord, V, O: HeapOrder> Iterator for IntoIterSorted<K, V, O> {
    type Item = HeapEntry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<HeapEntry<K, V>> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V, O: HeapOrder> ExactSizeIterator for IntoIterSorted<K, V, O> {}

impl<K: Ord, V, O: HeapOrder> FusedIterator for IntoIterSorted<K, V, O> {}

/// A draining iterator over the entries of a [`BinaryHeap`], in arbitrary
/// order.
///
/// This `struct` is created by [`BinaryHeap::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

/// A draining iterator yielding entries in heap order.
///
/// This `struct` is created by [`BinaryHeap::drain_sorted()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct DrainSorted<'a, K: Ord, V, O: HeapOrder> {
    inner: &'a mut BinaryHeap<K, V, O>,
}

impl<K: Ord, V, O: HeapOrder> Drop for DrainSorted<'_, K, V, O> {
    /// Removes heap entries in heap order.
    fn drop(&mut self) {
        struct DropGuard<'r, 'a, K: Ord, V, O: HeapOrder>(&'r mut DrainSorted<'a, K, V, O>);

        impl<K: Ord, V, O: HeapOrder> Drop for DropGuard<'_, '_, K, V, O> {
            fn drop(&mut self) {
                while self.0.inner.pop().is_some() {}
            }
        }

        while let Some(entry) = self.inner.pop() {
            let guard = DropGuard(self);
            drop(entry);
            mem::forget(guard);
        }
    }
}

impl<K: Ord, V, O: HeapOrder> Iterator for DrainSorted<'_, K, V, O> {
    type Item = HeapEntry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<HeapEntry<K, V>> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V, O: HeapOrder> ExactSizeIterator for DrainSorted<'_, K, V, O> {}

impl<K: Ord, V, O: HeapOrder> FusedIterator for DrainSorted<'_, K, V, O> {}

impl<K: Clone + Ord, O: HeapOrder> From<Vec<K>> for BinaryHeap<K, K, O> {
    /// Converts a `Vec<K>` into a heap keyed by the values themselves, with
    /// each key cloned as its own payload.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<K>) -> BinaryHeap<K, K, O> {
        let mut heap: BinaryHeap<K, K, O> = BinaryHeap {
            data: vec
                .into_iter()
                .map(|key| HeapEntry {
                    value: key.clone(),
                    key,
                })
                .collect(),
            order: PhantomData,
        };
        let count = heap.len();
        heap.build_iterative(count);
        heap
    }
}

impl<K: Ord, V, O: HeapOrder> From<Vec<(K, V)>> for BinaryHeap<K, V, O> {
    /// Converts a `Vec<(K, V)>` into a heap.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<(K, V)>) -> BinaryHeap<K, V, O> {
        let mut heap: BinaryHeap<K, V, O> = BinaryHeap::from_unordered(vec);
        let count = heap.len();
        heap.build_iterative(count);
        heap
    }
}

impl<K: Ord, V, O: HeapOrder, const N: usize> From<[(K, V); N]> for BinaryHeap<K, V, O> {
    /// ```
    /// use fundamentals::MinHeap;
    ///
    /// let mut h1: MinHeap<i32, char> = MinHeap::from([(1, 'a'), (4, 'b'), (2, 'c'), (3, 'd')]);
    /// let mut h2: MinHeap<i32, char> = [(1, 'a'), (4, 'b'), (2, 'c'), (3, 'd')].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<K: Clone + Ord, O: HeapOrder, const N: usize> From<[K; N]> for BinaryHeap<K, K, O> {
    /// ```
    /// use fundamentals::MaxHeap;
    ///
    /// let mut h1 = MaxHeap::from([1, 4, 2, 3]);
    /// let mut h2: MaxHeap<_, _> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [K; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<K, V, O> From<BinaryHeap<K, V, O>> for Vec<HeapEntry<K, V>> {
    /// Converts a heap into a `Vec` of its entries in arbitrary order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<K, V, O>) -> Vec<HeapEntry<K, V>> {
        heap.data
    }
}

impl<K: Ord + Clone, O: HeapOrder> FromIterator<K> for BinaryHeap<K, K, O> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> BinaryHeap<K, K, O> {
        BinaryHeap::from(iter.into_iter().map(|v| (v.clone(), v)).collect::<Vec<_>>())
    }
}

impl<K: Ord, V, O: HeapOrder> FromIterator<(K, V)> for BinaryHeap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> BinaryHeap<K, V, O> {
        BinaryHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, K, V, O> IntoIterator for &'a BinaryHeap<K, V, O> {
    type Item = &'a HeapEntry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Clone + Ord, O: HeapOrder> Extend<K> for BinaryHeap<K, K, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |v| self.push(v.clone(), v));
    }
}

impl<K: Ord, V, O: HeapOrder> Extend<(K, V)> for BinaryHeap<K, V, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |(key, value)| self.push(key, value));
    }
}
