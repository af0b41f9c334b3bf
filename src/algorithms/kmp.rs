//! Knuth-Morris-Pratt substring search.
//!
//! The searcher never re-reads text it has already matched. A prefix table
//! computed from the pattern records how much of a partial match survives a
//! mismatch, so the scan advances through the text exactly once.

/// Computes, for every position `i` of `pattern`, the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
///
/// A proper prefix is strictly shorter than the string itself, so
/// `lengths[0]` is always `0`. The table drives [`find`], which uses it to
/// fall back to the longest reusable partial match after a mismatch.
///
/// Operates on bytes; positions are byte positions.
///
/// # Examples
///
/// ```
/// use fundamentals::algorithms::kmp;
///
/// assert_eq!(kmp::prefix_function("abcabca"), [0, 0, 0, 1, 2, 3, 4]);
/// assert_eq!(kmp::prefix_function("aaaa"), [0, 1, 2, 3]);
/// assert_eq!(kmp::prefix_function(""), []);
/// ```
#[must_use]
pub fn prefix_function(pattern: &str) -> Vec<usize> {
    let bytes = pattern.as_bytes();
    let mut lengths = vec![0; bytes.len()];

    // Length of the proper prefix that is also a suffix of the sub-pattern
    // ending just before position i.
    let mut matched = 0;

    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == bytes[matched] {
            matched += 1;
            lengths[i] = matched;
            i += 1;
        } else if matched == 0 {
            // Nothing to fall back on, this position keeps length zero.
            i += 1;
        } else {
            matched = lengths[matched - 1];
        }
    }

    lengths
}

/// Returns the byte offset of the first occurrence of `pattern` in `text`,
/// or `None` if `text` does not contain it.
///
/// The empty pattern matches at offset `0` of any text. Runs in
/// O(`text.len()` + `pattern.len()`).
///
/// # Examples
///
/// ```
/// use fundamentals::algorithms::kmp;
///
/// assert_eq!(kmp::find("hello world", "world"), Some(6));
/// assert_eq!(kmp::find("hello world", "worlds"), None);
/// assert_eq!(kmp::find("hello world", ""), Some(0));
/// ```
#[must_use]
pub fn find(text: &str, pattern: &str) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }

    let lengths = prefix_function(pattern);
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();

    let mut matched = 0;
    for (i, &byte) in text.iter().enumerate() {
        while matched > 0 && byte != pattern[matched] {
            matched = lengths[matched - 1];
        }
        if byte == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            return Some(i + 1 - pattern.len());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    #[test]
    fn prefix_lengths_of_repeating_pattern() {
        assert_eq!(prefix_function("abcabca"), [0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn prefix_lengths_of_uniform_pattern() {
        assert_eq!(prefix_function("aaaa"), [0, 1, 2, 3]);
    }

    #[test]
    fn prefix_lengths_with_interior_fallback() {
        assert_eq!(prefix_function("ababaca"), [0, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn prefix_lengths_without_any_repetition() {
        assert_eq!(prefix_function("abcd"), [0, 0, 0, 0]);
    }

    #[test]
    fn prefix_lengths_of_trivial_patterns() {
        assert_eq!(prefix_function(""), []);
        assert_eq!(prefix_function("x"), [0]);
    }

    #[test]
    fn finds_pattern_in_the_middle() {
        assert_eq!(find("hello world", "world"), Some(6));
    }

    #[test]
    fn finds_pattern_at_the_start() {
        assert_eq!(find("hello", "hell"), Some(0));
    }

    #[test]
    fn find_reports_first_of_several_occurrences() {
        assert_eq!(find("abab", "ab"), Some(0));
        assert_eq!(find("aaaaa", "aaa"), Some(0));
    }

    #[test]
    fn find_survives_partial_match_fallback() {
        assert_eq!(find("ababcabcabababd", "ababd"), Some(10));
    }

    #[test]
    fn find_misses_absent_pattern() {
        assert_eq!(find("hello", "xyz"), None);
        assert_eq!(find("abc", "abcd"), None);
    }

    #[test]
    fn empty_pattern_matches_immediately() {
        assert_eq!(find("", ""), Some(0));
        assert_eq!(find("abc", ""), Some(0));
        assert_eq!(find("", "a"), None);
    }

    #[test]
    fn agrees_with_std_find_on_random_inputs() {
        let mut rng = XorShiftRng::seed_from_u64(0x6b6d70);

        for _ in 0..500 {
            let text: String = (0..rng.gen_range(0usize, 30))
                .map(|_| if rng.gen::<bool>() { 'a' } else { 'b' })
                .collect();
            let pattern: String = (0..rng.gen_range(0usize, 6))
                .map(|_| if rng.gen::<bool>() { 'a' } else { 'b' })
                .collect();

            assert_eq!(
                find(&text, &pattern),
                text.find(&pattern),
                "text={text:?} pattern={pattern:?}"
            );
        }
    }
}
