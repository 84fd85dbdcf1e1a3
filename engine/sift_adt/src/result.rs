//! The generic result family.
//!
//! The error payload is fixed to [`Diag`]: programs built on this engine
//! report failures as opaque diagnostic messages, not structured codes.

use sift_patterns::{Tag, Tagged};

use crate::diag::Diag;
use crate::option::Opt;

/// Discriminant of [`Res::Ok`].
pub const OK: Tag = Tag::new(2);

/// Discriminant of [`Res::Err`].
pub const ERR: Tag = Tag::new(3);

/// A fallible outcome: either `Ok(T)` or `Err(Diag)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Res<T> {
    /// A successful payload.
    Ok(T),
    /// A diagnostic describing the failure.
    Err(Diag),
}

impl<T> Res<T> {
    /// Construct the success variant.
    #[inline]
    pub fn ok(value: T) -> Self {
        Res::Ok(value)
    }

    /// Construct the failure variant.
    #[inline]
    pub fn err(diag: Diag) -> Self {
        Res::Err(diag)
    }

    /// Whether this is the success variant.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Res::Ok(_))
    }

    /// Whether this is the failure variant.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Res::Err(_))
    }

    /// Variant-gated payload access: `Some(&payload)` only on success.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Res::Ok(value) => Some(value),
            Res::Err(_) => None,
        }
    }

    /// Variant-gated diagnostic access: `Some(&diag)` only on failure.
    #[inline]
    pub fn error(&self) -> Option<&Diag> {
        match self {
            Res::Ok(_) => None,
            Res::Err(diag) => Some(diag),
        }
    }

    /// The payload on success, else `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Res::Ok(value) => value,
            Res::Err(_) => default,
        }
    }

    /// Transform the payload on success; the error propagates unchanged.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Res<U> {
        match self {
            Res::Ok(value) => Res::Ok(f(value)),
            Res::Err(diag) => Res::Err(diag),
        }
    }

    /// Chain a result-producing transform; the error propagates unchanged.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Res<U>) -> Res<U> {
        match self {
            Res::Ok(value) => f(value),
            Res::Err(diag) => Res::Err(diag),
        }
    }

    /// Convert to an option, discarding the diagnostic on failure.
    #[inline]
    pub fn to_option(self) -> Opt<T> {
        match self {
            Res::Ok(value) => Opt::Some(value),
            Res::Err(_) => Opt::None,
        }
    }
}

impl<T> Tagged for Res<T> {
    #[inline]
    fn tag(&self) -> Tag {
        match self {
            Res::Ok(_) => OK,
            Res::Err(_) => ERR,
        }
    }
}
