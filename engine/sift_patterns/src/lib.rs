#![deny(clippy::arithmetic_side_effects)]
//! Sift Patterns - pattern model and evaluation engine.
//!
//! This crate provides:
//! - The `Pattern` criterion type (literals, wildcard, comparisons, ranges,
//!   tagged-union variant selectors) and its total constructors
//! - The `Subject` type and the `Tagged` trait for discriminated unions
//! - The evaluator (`evaluate`, `evaluate_subject`)
//!
//! # Design
//!
//! A `Pattern` is an immutable, `Copy` description of one match criterion.
//! It carries no reference to any subject, and constructing one cannot fail.
//! Evaluation is a total predicate: a non-matching pattern is the ordinary
//! `false` outcome, never an error.
//!
//! Tagged subjects are explicit. A value participates in variant matching by
//! implementing [`Tagged`] and being converted to [`Subject::Tagged`]; the
//! evaluator never guesses whether an integer "looks like" a discriminant.
//! Payload access is not a side effect of evaluation either - concrete union
//! types expose typed, variant-gated accessors instead.

mod eval;
mod pattern;
mod subject;

pub use eval::{evaluate, evaluate_subject};
pub use pattern::{
    between, ge, gt, le, literal, lt, ne, range, variant, wildcard, CmpOp, Pattern,
};
pub use subject::{Subject, Tag, Tagged};
