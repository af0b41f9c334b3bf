//! Classic in-memory data structures and algorithms, written to be read.
//!
//! Every unit in this crate is self-contained: the binary heap family, the
//! doubly linked list, the red-black tree node layer and the string
//! algorithms share no state and can be studied in isolation. The heap is
//! the most developed of them, a single engine behind the [`MaxHeap`] and
//! [`MinHeap`] aliases.
//!
//! # Examples
//!
//! Priority scheduling with a max-heap:
//!
//! ```
//! use fundamentals::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.push(2, "low");
//! heap.push(9, "urgent");
//! heap.push(5, "normal");
//!
//! assert_eq!(heap.pop().map(|entry| entry.value), Some("urgent"));
//! assert_eq!(heap.pop().map(|entry| entry.value), Some("normal"));
//! assert_eq!(heap.pop().map(|entry| entry.value), Some("low"));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod algorithms;
pub mod collections;

pub use collections::heap::{BinaryHeap, HeapEntry, MaxHeap, MinHeap};
