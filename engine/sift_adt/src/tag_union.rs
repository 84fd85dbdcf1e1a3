//! User-defined tagged unions.
//!
//! [`tag_union!`] declares a discriminated union in one place: the enum, its
//! `Tagged` impl, a `Tag` constant per variant (auto-numbered from 0 in
//! declaration order, unique within the type), and a variant-gated payload
//! accessor per payload-carrying variant. Generated unions flow through
//! `Subject` / `variant(..)` patterns exactly like `Opt` and `Res`.

/// Declare a tagged union.
///
/// Each variant names its `Tag` constant; payload variants also name their
/// accessor:
///
/// ```
/// use sift_adt::{tag_union, Tagged};
///
/// tag_union! {
///     /// A geometric shape.
///     pub enum Shape {
///         CIRCLE: Circle(f64) => circle,
///         SQUARE: Square(f64) => square,
///         POINT: Point,
///     }
/// }
///
/// let shape = Shape::Circle(2.0);
/// assert_eq!(shape.tag(), Shape::CIRCLE);
/// assert_eq!(shape.circle(), Some(&2.0));
/// assert_eq!(shape.square(), None);
/// ```
#[macro_export]
macro_rules! tag_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $tag_const:ident : $variant:ident $( ($payload:ty) )? $( => $accessor:ident )? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $( $variant $( ($payload) )? ),+
        }

        impl $name {
            $crate::tag_union!(@consts $vis, 0u32; $( $tag_const );+);

            $( $crate::tag_union!(@accessor $vis, $variant $( ($payload) )? $( => $accessor )?); )+
        }

        impl $crate::Tagged for $name {
            fn tag(&self) -> $crate::Tag {
                match self {
                    $( Self::$variant { .. } => Self::$tag_const, )+
                }
            }
        }
    };

    (@consts $vis:vis, $n:expr; $tag_const:ident) => {
        /// Discriminant of the corresponding variant.
        $vis const $tag_const: $crate::Tag = $crate::Tag::new($n);
    };
    (@consts $vis:vis, $n:expr; $tag_const:ident; $($rest:ident);+) => {
        /// Discriminant of the corresponding variant.
        $vis const $tag_const: $crate::Tag = $crate::Tag::new($n);
        $crate::tag_union!(@consts $vis, $n + 1; $($rest);+);
    };

    (@accessor $vis:vis, $variant:ident ($payload:ty) => $accessor:ident) => {
        /// Variant-gated payload access; `None` when another variant is held.
        $vis fn $accessor(&self) -> ::core::option::Option<&$payload> {
            match self {
                Self::$variant(value) => ::core::option::Option::Some(value),
                _ => ::core::option::Option::None,
            }
        }
    };
    // Payload variant without an accessor, or unit variant: nothing extra.
    (@accessor $vis:vis, $variant:ident ($payload:ty)) => {};
    (@accessor $vis:vis, $variant:ident) => {};
}
