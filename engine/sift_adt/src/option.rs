//! The generic option family.

use sift_patterns::{Tag, Tagged};

use crate::diag::Diag;
use crate::result::Res;

/// Discriminant of [`Opt::None`].
pub const NONE: Tag = Tag::new(0);

/// Discriminant of [`Opt::Some`].
pub const SOME: Tag = Tag::new(1);

/// An optional value: either `Some(T)` or `None`.
///
/// One parametric definition covers every payload type; monomorphization
/// supplies the per-`T` instances. As a [`Tagged`] value it matches
/// `variant(SOME)` / `variant(NONE)` patterns (or the bare tag constants)
/// through the usual evaluator pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opt<T> {
    /// A present payload.
    Some(T),
    /// No payload.
    None,
}

impl<T> Opt<T> {
    /// Construct the present variant.
    #[inline]
    pub fn some(value: T) -> Self {
        Opt::Some(value)
    }

    /// Construct the absent variant.
    #[inline]
    pub fn none() -> Self {
        Opt::None
    }

    /// Whether a payload is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Whether the payload is absent.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Opt::None)
    }

    /// Variant-gated payload access: `Some(&payload)` only when present.
    #[inline]
    pub fn payload(&self) -> Option<&T> {
        match self {
            Opt::Some(value) => Some(value),
            Opt::None => None,
        }
    }

    /// The payload if present, else `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => default,
        }
    }

    /// Transform the payload when present; `None` propagates unchanged.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    /// Chain an option-producing transform; `None` propagates unchanged.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Opt::None,
        }
    }

    /// Convert to a result, supplying the error for the absent case.
    #[inline]
    pub fn to_result(self, error_if_none: Diag) -> Res<T> {
        match self {
            Opt::Some(value) => Res::Ok(value),
            Opt::None => Res::Err(error_if_none),
        }
    }
}

impl<T> Tagged for Opt<T> {
    #[inline]
    fn tag(&self) -> Tag {
        match self {
            Opt::Some(_) => SOME,
            Opt::None => NONE,
        }
    }
}
