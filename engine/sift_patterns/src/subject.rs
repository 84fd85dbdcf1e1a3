//! Subjects and tags.
//!
//! A [`Subject`] is what the evaluator sees on the left-hand side of a match:
//! either a plain scalar or the discriminant of a tagged union. The split is
//! explicit at the type level, so a small integer and a small tag value can
//! never be confused with one another.

use std::fmt;

/// Discriminant of a tagged-union variant.
///
/// Unique per variant within its type. Wraps a `u32` rather than exposing a
/// bare integer so tag comparisons cannot be mixed up with scalar matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Create a tag from a raw discriminant value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Tag(raw)
    }

    /// Extract the raw discriminant value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A discriminated-union value: a tag plus a variant-dependent payload.
///
/// Implementors report which variant they currently hold. Payload access is
/// deliberately not part of this trait; concrete types expose typed accessors
/// gated on the variant (see `sift_adt`).
pub trait Tagged {
    /// The discriminant of the currently held variant.
    fn tag(&self) -> Tag;
}

/// A value being matched against a pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    /// A plain scalar, matched by value.
    Scalar(i64),
    /// The discriminant of a tagged union, matched by variant.
    Tagged(Tag),
}

impl Subject {
    /// Wrap a scalar value.
    #[inline]
    pub const fn scalar(value: i64) -> Self {
        Subject::Scalar(value)
    }

    /// Capture the discriminant of a tagged value.
    #[inline]
    pub fn tagged<T: Tagged + ?Sized>(value: &T) -> Self {
        Subject::Tagged(value.tag())
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Subject {
                #[inline]
                fn from(value: $ty) -> Self {
                    Subject::Scalar(i64::from(value))
                }
            }
        )+
    };
}

impl_scalar_from!(i8, i16, i32, i64, u8, u16, u32, bool);

impl From<char> for Subject {
    #[inline]
    fn from(value: char) -> Self {
        Subject::Scalar(i64::from(u32::from(value)))
    }
}

impl<T: Tagged> From<&T> for Subject {
    #[inline]
    fn from(value: &T) -> Self {
        Subject::tagged(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct TwoState(bool);

    impl Tagged for TwoState {
        fn tag(&self) -> Tag {
            if self.0 {
                Tag::new(1)
            } else {
                Tag::new(0)
            }
        }
    }

    #[test]
    fn tag_round_trips_raw_value() {
        assert_eq!(Tag::new(7).raw(), 7);
        assert_eq!(Tag::new(0), Tag::new(0));
        assert_ne!(Tag::new(0), Tag::new(1));
    }

    #[test]
    fn tag_display_shows_discriminant() {
        assert_eq!(Tag::new(3).to_string(), "#3");
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(Subject::from(42i32), Subject::Scalar(42));
        assert_eq!(Subject::from(-1i8), Subject::Scalar(-1));
        assert_eq!(Subject::from(true), Subject::Scalar(1));
        assert_eq!(Subject::from('A'), Subject::Scalar(65));
    }

    #[test]
    fn tagged_conversion_captures_discriminant() {
        let on = TwoState(true);
        let off = TwoState(false);
        assert_eq!(Subject::from(&on), Subject::Tagged(Tag::new(1)));
        assert_eq!(Subject::tagged(&off), Subject::Tagged(Tag::new(0)));
    }
}
