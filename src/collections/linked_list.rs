//! A doubly linked list with owned nodes.
//!
//! Every node carries links in both directions, so the list can grow and
//! unlink at either end or around any value it can find. Searches answer
//! with `Option` and anchored edits with `bool`; a missing value is an
//! expected outcome, not a failure.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

struct Node<T> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

/// A bi-directional linked list that owns its nodes.
///
/// The list deliberately keeps no cached length; [`count`] walks the nodes,
/// which is the honest cost of asking a linked structure how long it is.
///
/// [`count`]: DoublyLinkedList::count
///
/// # Examples
///
/// ```
/// use fundamentals::collections::linked_list::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.count(), 3);
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
///
/// assert!(list.insert_after(&1, 10));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 10, 2, 3]);
/// ```
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            marker: PhantomData,
        }
    }

    /// Returns `true` if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of values in the list by walking it; *O*(*n*).
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the first value, or `None` if the list is
    /// empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: head points at a node owned by this list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a reference to the last value, or `None` if the list is
    /// empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail points at a node owned by this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Adds a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let new = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: self.head,
        })));
        match self.head {
            // SAFETY: the old head is a live node owned by this list.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(new) },
            None => self.tail = Some(new),
        }
        self.head = Some(new);
    }

    /// Adds a value at the back of the list.
    pub fn push_back(&mut self, value: T) {
        let new = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));
        match self.tail {
            // SAFETY: the old tail is a live node owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(new) },
            None => self.head = Some(new),
        }
        self.tail = Some(new);
    }

    /// Returns an iterator over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the first value equal to `value`, or `None`
    /// if no value matches.
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        // SAFETY: the node came out of this list and lives as long as it.
        self.find_node(value)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Inserts `value` directly after the first node equal to `anchor`.
    /// Returns `false`, leaving the list unchanged, when no node matches.
    pub fn insert_after(&mut self, anchor: &T, value: T) -> bool
    where
        T: PartialEq,
    {
        match self.find_node(anchor) {
            Some(node) => {
                // SAFETY: find_node only returns nodes owned by this list.
                unsafe { self.link_after(node, value) };
                true
            }
            None => false,
        }
    }

    /// Inserts `value` directly before the first node equal to `anchor`.
    /// Returns `false`, leaving the list unchanged, when no node matches.
    pub fn insert_before(&mut self, anchor: &T, value: T) -> bool
    where
        T: PartialEq,
    {
        match self.find_node(anchor) {
            Some(node) => {
                // SAFETY: find_node only returns nodes owned by this list.
                unsafe { self.link_before(node, value) };
                true
            }
            None => false,
        }
    }

    /// Unlinks the first node equal to `value`. Returns `false` when no
    /// node matches.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find_node(value) {
            Some(node) => {
                // SAFETY: find_node only returns nodes owned by this list.
                unsafe { self.unlink(node) };
                true
            }
            None => false,
        }
    }

    fn find_node(&self, value: &T) -> Option<NonNull<Node<T>>>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every reachable node is owned by this list.
            let node_ref = unsafe { &*node.as_ptr() };
            if node_ref.value == *value {
                return Some(node);
            }
            current = node_ref.next;
        }
        None
    }

    /// # Safety
    ///
    /// `node` must be a live node owned by this list.
    unsafe fn link_after(&mut self, node: NonNull<Node<T>>, value: T) {
        let node_ptr = node.as_ptr();
        let new = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: Some(node),
            next: (*node_ptr).next,
        })));
        match (*node_ptr).next {
            Some(next) => (*next.as_ptr()).prev = Some(new),
            None => self.tail = Some(new),
        }
        (*node_ptr).next = Some(new);
    }

    /// # Safety
    ///
    /// `node` must be a live node owned by this list.
    unsafe fn link_before(&mut self, node: NonNull<Node<T>>, value: T) {
        let node_ptr = node.as_ptr();
        let new = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: (*node_ptr).prev,
            next: Some(node),
        })));
        match (*node_ptr).prev {
            Some(prev) => (*prev.as_ptr()).next = Some(new),
            None => self.head = Some(new),
        }
        (*node_ptr).prev = Some(new);
    }

    /// # Safety
    ///
    /// `node` must be a live node owned by this list; it is freed here.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(prev) => (*prev.as_ptr()).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => (*next.as_ptr()).prev = node.prev,
            None => self.tail = node.prev,
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every node was leaked from a Box and is owned here.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    /// Creates an empty list.
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the values of a [`DoublyLinkedList`], front to back.
///
/// This `struct` is created by [`DoublyLinkedList::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the borrow on the list outlives this iterator, and
            //  every reachable node is owned by the list.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn push_back_keeps_arrival_order() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn push_front_reverses_arrival_order() {
        let mut list = DoublyLinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn count_walks_the_list() {
        let list: DoublyLinkedList<i32> = (0..17).collect();
        assert_eq!(list.count(), 17);
    }

    #[test]
    fn find_first_match_or_none() {
        let list: DoublyLinkedList<i32> = vec![5, 7, 9].into_iter().collect();

        assert_eq!(list.find(&7), Some(&7));
        assert_eq!(list.find(&8), None);
    }

    #[test]
    fn insert_after_middle_and_tail() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(list.insert_after(&2, 20));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 20, 3]);

        assert!(list.insert_after(&3, 30));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 20, 3, 30]);
        assert_eq!(list.back(), Some(&30));
    }

    #[test]
    fn insert_after_missing_anchor_is_refused() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2].into_iter().collect();

        assert!(!list.insert_after(&9, 90));
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn insert_before_head_and_middle() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(list.insert_before(&1, 0));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(list.front(), Some(&0));

        assert!(list.insert_before(&3, 25));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 25, 3]);
    }

    #[test]
    fn insert_anchors_on_first_match() {
        let mut list: DoublyLinkedList<i32> = vec![7, 1, 7].into_iter().collect();

        assert!(list.insert_after(&7, 8));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [7, 8, 1, 7]);
    }

    #[test]
    fn remove_only_node_clears_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_back(42);

        assert!(list.remove(&42));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn remove_head_moves_head_forward() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(list.remove(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(list.front(), Some(&2));
    }

    #[test]
    fn remove_tail_moves_tail_backward() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(list.remove(&3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(list.back(), Some(&2));
    }

    #[test]
    fn remove_middle_relinks_neighbors() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(list.remove(&2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);

        // The surviving neighbors must still be reachable from both ends.
        assert!(list.insert_after(&1, 10));
        assert!(list.insert_before(&3, 20));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 10, 20, 3]);
    }

    #[test]
    fn remove_missing_value_is_refused() {
        let mut list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        assert!(!list.remove(&4));
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn remove_unlinks_first_match_only() {
        let mut list: DoublyLinkedList<i32> = vec![7, 1, 7].into_iter().collect();

        assert!(list.remove(&7));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 7]);
    }

    #[test]
    fn drop_frees_every_node() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = DoublyLinkedList::new();
            for _ in 0..10 {
                list.push_back(Rc::clone(&tracker));
            }
            assert_eq!(Rc::strong_count(&tracker), 11);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn debug_renders_like_a_list() {
        let list: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }
}
