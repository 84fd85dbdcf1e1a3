//! Pattern evaluation.
//!
//! Both entry points are total predicates: they return `false` for a
//! non-matching pattern and never error. [`evaluate`] covers plain scalars;
//! [`evaluate_subject`] additionally handles tagged subjects, including the
//! bare-literal discriminant convenience (a `Literal(n)` pattern against a
//! tagged subject tests `n` against the discriminant). Because the subject
//! kind is explicit, that convenience is deterministic - the evaluator never
//! inspects magnitudes to guess intent.

use crate::pattern::Pattern;
use crate::subject::{Subject, Tag};


/// Evaluate a pattern against a plain scalar.
///
/// `Variant` patterns never match a scalar: a plain integer is not a tagged
/// value, whatever its magnitude.
#[inline]
pub fn evaluate(value: i64, pattern: Pattern) -> bool {
    match pattern {
        Pattern::Wildcard => true,
        Pattern::Literal(expected) => value == expected,
        Pattern::Compare(op, bound) => op.holds(value, bound),
        Pattern::Range {
            low,
            high,
            inclusive,
        } => {
            if inclusive {
                low <= value && value <= high
            } else {
                low < value && value < high
            }
        }
        Pattern::Variant(_) => false,
    }
}

/// Evaluate a pattern against a subject of either kind.
///
/// Scalar subjects delegate to [`evaluate`]. Tagged subjects match
/// `Wildcard`, a `Variant` pattern with an equal tag, or a `Literal` whose
/// value equals the discriminant (and fits in a tag); ordering and range
/// patterns have no meaning for a discriminant and never match.
pub fn evaluate_subject(subject: Subject, pattern: Pattern) -> bool {
    match subject {
        Subject::Scalar(value) => evaluate(value, pattern),
        Subject::Tagged(tag) => match pattern {
            Pattern::Wildcard => true,
            Pattern::Variant(expected) => tag == expected,
            Pattern::Literal(raw) => {
                let matched = u32::try_from(raw).is_ok_and(|raw| Tag::new(raw) == tag);
                tracing::trace!(
                    tag = tag.raw(),
                    literal = raw,
                    matched,
                    "bare literal against tagged subject"
                );
                matched
            }
            Pattern::Compare(..) | Pattern::Range { .. } => false,
        },
    }
}
