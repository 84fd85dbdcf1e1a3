//! Sift ADT - the generic Option/Result family and user tagged unions.
//!
//! This crate provides:
//! - [`Opt<T>`] and [`Res<T>`] - parametric two-variant algebraic types that
//!   flow through the pattern evaluator and dispatchers as tagged subjects
//! - [`Diag`] - the opaque diagnostic payload of `Res::Err`
//! - [`tag_union!`] - a declaration macro for user-defined tagged unions
//!
//! # Invariants
//!
//! Exactly one variant of an `Opt`/`Res` holds a payload at any time, and
//! every extraction path is either gated on the variant (accessors return
//! `Option`) or defaulted (`unwrap_or`). Absent/error variants propagate by
//! value through `map`/`and_then`; nothing here panics.
//!
//! # Tags
//!
//! The option and result families carry distinct discriminants ([`NONE`],
//! [`SOME`], [`OK`], [`ERR`]), so a clause list mixing both kinds of subject
//! cannot alias variants across types.

mod diag;
mod option;
mod result;
mod tag_union;

pub use diag::{
    allocation_failed, diagnostic, not_found, permission_denied, timeout, Diag, DiagKind,
};
pub use option::{Opt, NONE, SOME};
pub use result::{Res, ERR, OK};

// Re-exported so `tag_union!` expansions and downstream code resolve the
// tagged-subject machinery through this crate.
pub use sift_patterns::{Tag, Tagged};
