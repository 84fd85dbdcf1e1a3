//! Sift Match - arity-generic match dispatchers.
//!
//! Two forms of dispatch over N parallel (subject, pattern) pairs:
//!
//! - [`Match`] - statement form: `when` clauses run side-effecting bodies,
//!   `otherwise` catches the rest.
//! - [`MatchExpr`] - expression form: `is` clauses produce a value, the
//!   mandatory trailing `default` supplies one when nothing matched.
//!
//! Both are first-match-wins: clauses are tested in declaration order, a
//! clause matches when every position matches, and at most one body or
//! expression ever runs. Arity is a const-generic parameter over
//! `[Subject; N]` / `[Pattern; N]`, so a clause with the wrong number of
//! patterns does not typecheck. Arities 1 through 10 are the supported
//! surface; nothing breaks beyond that.
//!
//! The C-style `do { ...; last }` block of the source syntax is an ordinary
//! Rust closure body here, and the `let(x) in(...)` expression alias folds
//! into [`MatchExpr`].
//!
//! No state persists across dispatches: each value carries only its own
//! subjects and a resolved flag, and is consumed by the terminal call.

mod clause;
mod expr;
mod stmt;

pub use expr::MatchExpr;
pub use stmt::Match;
