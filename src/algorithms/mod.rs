//! Standalone algorithms.

pub mod insertion_sort;
pub mod kmp;
