//! Clause conjunction shared by both dispatch forms.

use sift_patterns::{evaluate_subject, Pattern, Subject};

/// A clause matches when every (subject, pattern) position matches.
///
/// Evaluation short-circuits on the first failing position; pattern
/// evaluation is pure, so the cut-off is not observable.
pub(crate) fn clause_matches<const N: usize>(
    subjects: &[Subject; N],
    patterns: &[Pattern; N],
) -> bool {
    subjects
        .iter()
        .zip(patterns.iter())
        .all(|(subject, pattern)| evaluate_subject(*subject, *pattern))
}
