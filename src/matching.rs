//! Sequence-matching similarity.
//!
//! Ratcliff/Obershelp "gestalt pattern matching" as done by
//! [`difflib::sequencematcher::SequenceMatcher`]: the ratio is `2 * M / T`
//! where `M` is the number of characters in the matching blocks and `T` the
//! combined length of both inputs.

use difflib::sequencematcher::SequenceMatcher;

/// Similarity of `a` and `b` in `[0, 1]`.
///
/// Two empty strings are identical and score 1.0.
///
/// # Example
///
/// ```
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_blocks_len(a, b) as f64 / total as f64
}

/// Case-insensitive variant of [`ratio`].
pub fn ratio_ignore_case(a: &str, b: &str) -> f64 {
    ratio(&a.to_lowercase(), &b.to_lowercase())
}

/// Number of characters covered by the matching blocks of `a` and `b`.
pub fn matching_blocks_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // f32 ratio() would lose precision, so sum the blocks ourselves
    SequenceMatcher::new(&a, &b)
        .get_matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum()
}
