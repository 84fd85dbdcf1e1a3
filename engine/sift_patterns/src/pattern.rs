//! The pattern model.
//!
//! A [`Pattern`] describes one match criterion. Construction is total: every
//! constructor returns an immutable `Copy` value and none of them can fail.
//! Range and comparison bounds are full-width `i64`.

use std::fmt;

use crate::subject::Tag;

/// Ordering/inequality operator for [`Pattern::Compare`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Not equal.
    Ne,
}

impl CmpOp {
    /// Apply the operator between a subject value and the pattern bound.
    #[inline]
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Ne => lhs != rhs,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Ne => "!=",
        };
        f.write_str(symbol)
    }
}

/// A single match criterion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Exact-equality match against a scalar. Against a tagged subject this
    /// is a discriminant test (the bare-constant convenience; see `eval`).
    Literal(i64),
    /// Matches any subject unconditionally.
    Wildcard,
    /// Ordering/inequality test against a bound.
    Compare(CmpOp, i64),
    /// Bounds check. Exclusive (`low < x < high`) or inclusive
    /// (`low <= x <= high`) per the flag.
    Range {
        low: i64,
        high: i64,
        inclusive: bool,
    },
    /// Matches a tagged subject whose discriminant equals the tag.
    Variant(Tag),
}

/// Exact-equality pattern.
#[inline]
pub const fn literal(value: i64) -> Pattern {
    Pattern::Literal(value)
}

/// Pattern that matches anything.
#[inline]
pub const fn wildcard() -> Pattern {
    Pattern::Wildcard
}

/// `subject > value`.
#[inline]
pub const fn gt(value: i64) -> Pattern {
    Pattern::Compare(CmpOp::Gt, value)
}

/// `subject >= value`.
#[inline]
pub const fn ge(value: i64) -> Pattern {
    Pattern::Compare(CmpOp::Ge, value)
}

/// `subject < value`.
#[inline]
pub const fn lt(value: i64) -> Pattern {
    Pattern::Compare(CmpOp::Lt, value)
}

/// `subject <= value`.
#[inline]
pub const fn le(value: i64) -> Pattern {
    Pattern::Compare(CmpOp::Le, value)
}

/// `subject != value`.
#[inline]
pub const fn ne(value: i64) -> Pattern {
    Pattern::Compare(CmpOp::Ne, value)
}

/// Exclusive range: matches when `low < subject < high`.
///
/// Assumes `low <= high`; the bounds are not validated.
#[inline]
pub fn range(low: i64, high: i64) -> Pattern {
    debug_assert!(low <= high, "range bounds out of order");
    Pattern::Range {
        low,
        high,
        inclusive: false,
    }
}

/// Inclusive range: matches when `low <= subject <= high`.
///
/// Assumes `low <= high`; the bounds are not validated.
#[inline]
pub fn between(low: i64, high: i64) -> Pattern {
    debug_assert!(low <= high, "range bounds out of order");
    Pattern::Range {
        low,
        high,
        inclusive: true,
    }
}

/// Matches a tagged subject holding the given variant.
#[inline]
pub const fn variant(tag: Tag) -> Pattern {
    Pattern::Variant(tag)
}

impl From<Tag> for Pattern {
    /// A bare tag used where a pattern is expected selects that variant.
    #[inline]
    fn from(tag: Tag) -> Self {
        Pattern::Variant(tag)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Wildcard => f.write_str("_"),
            Pattern::Compare(op, value) => write!(f, "{op} {value}"),
            Pattern::Range {
                low,
                high,
                inclusive: true,
            } => write!(f, "in {low}..={high}"),
            Pattern::Range {
                low,
                high,
                inclusive: false,
            } => write!(f, "in {low}..{high}"),
            Pattern::Variant(tag) => write!(f, "variant {tag}"),
        }
    }
}
