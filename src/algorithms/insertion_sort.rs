//! Insertion sort, with a harness for demonstrating its stability.
//!
//! The sort only ever swaps adjacent out-of-order neighbors, so two equal
//! values can never pass each other. [`is_stable`] makes that observable by
//! tagging plain values with their arrival position before sorting.

use core::cmp::Ordering;

/// Sorts a slice in place by repeatedly swapping adjacent out-of-order
/// neighbors.
///
/// Equal values never swap, which keeps the sort stable. Runs in O(*n*²)
/// in the worst case and O(*n*) on already sorted input.
///
/// # Examples
///
/// ```
/// use fundamentals::algorithms::insertion_sort;
///
/// let mut items = [3, 1, 4, 1, 5];
/// insertion_sort::sort(&mut items);
/// assert_eq!(items, [1, 1, 3, 4, 5]);
/// ```
pub fn sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// A value tagged with the position it occupied before sorting.
///
/// Ordering looks at `value` only, so a sort sees two elements with equal
/// values as interchangeable; the tag then reveals whether the sort kept or
/// reversed their arrival order.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub value: i32,
    pub original_index: usize,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Tags each value with its position, producing the input for
/// [`is_stable`].
#[must_use]
pub fn tag(values: &[i32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(original_index, &value)| Element {
            value,
            original_index,
        })
        .collect()
}

/// Reports whether `sort` stably sorts `values`.
///
/// The values are tagged with their arrival positions and handed to `sort`;
/// the result must come back sorted by value with every run of equal values
/// still in arrival order.
///
/// # Examples
///
/// ```
/// use fundamentals::algorithms::insertion_sort;
///
/// assert!(insertion_sort::is_stable(
///     insertion_sort::sort,
///     &[3, 1, 1, 2, 2, 4, 1, 1, 2, 2],
/// ));
/// ```
#[must_use]
pub fn is_stable<F>(sort: F, values: &[i32]) -> bool
where
    F: FnOnce(&mut [Element]),
{
    let mut elements = tag(values);
    sort(&mut elements);

    elements.windows(2).all(|pair| {
        pair[0].value < pair[1].value
            || (pair[0].value == pair[1].value
                && pair[0].original_index < pair[1].original_index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_duplicates() {
        let mut items = [3, 1, 1, 2, 2, 4, 1, 1, 2, 2];
        sort(&mut items);
        assert_eq!(items, [1, 1, 1, 1, 2, 2, 2, 2, 3, 4]);
    }

    #[test]
    fn sorts_a_reversed_run() {
        let mut items = [5, 4, 3, 2, 1];
        sort(&mut items);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn leaves_sorted_input_alone() {
        let mut items = [1, 2, 2, 3];
        sort(&mut items);
        assert_eq!(items, [1, 2, 2, 3]);
    }

    #[test]
    fn handles_trivial_slices() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);
        assert_eq!(empty, []);

        let mut single = [7];
        sort(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn tagging_records_arrival_positions() {
        let elements = tag(&[9, 9, 1]);

        assert_eq!(elements[0].original_index, 0);
        assert_eq!(elements[1].original_index, 1);
        assert_eq!(elements[2].original_index, 2);
        assert_eq!(elements[0], elements[1]);
        assert!(elements[2] < elements[0]);
    }

    #[test]
    fn stable_on_mixed_duplicates() {
        assert!(is_stable(sort, &[3, 1, 1, 2, 2, 4, 1, 1, 2, 2]));
    }

    #[test]
    fn stable_on_sorted_duplicates() {
        assert!(is_stable(sort, &[1, 1, 2, 2, 3, 3]));
    }

    #[test]
    fn stable_on_reverse_sorted_duplicates() {
        assert!(is_stable(sort, &[3, 3, 2, 2, 1, 1]));
    }

    #[test]
    fn a_tie_reordering_sort_is_flagged() {
        // Reversing first makes equal values finish in reversed arrival
        // order even though the final pass is a stable sort.
        fn reversing_sort(items: &mut [Element]) {
            items.reverse();
            items.sort();
        }

        assert!(!is_stable(reversing_sort, &[1, 1, 2, 2]));
    }

    #[test]
    fn a_non_sorting_function_is_flagged() {
        assert!(!is_stable(|_| {}, &[2, 1]));
    }
}
