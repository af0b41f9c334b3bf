//! Container data structures.
//!
//! Each structure is independent of the others; pick the one whose shape
//! matches the access pattern you need.

pub mod heap;
pub mod linked_list;
pub mod rbtree;
