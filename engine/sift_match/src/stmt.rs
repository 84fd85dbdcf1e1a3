//! Statement-form dispatch.

use sift_patterns::{Pattern, Subject};

use crate::clause::clause_matches;

/// A statement-form match over `N` parallel subjects.
///
/// Clauses are declared with [`when`](Match::when) and tested in order; the
/// first clause whose patterns all match runs its body and resolves the
/// dispatch. [`otherwise`](Match::otherwise) runs its body only when no
/// clause matched. Dropping the value without an `otherwise` is the "no
/// clause ran" outcome.
///
/// ```
/// use sift_match::Match;
/// use sift_patterns::{gt, literal};
///
/// let mut seen = None;
/// Match::on(42)
///     .when([literal(42)], || seen = Some("the answer"))
///     .when([gt(10)], || seen = Some("big"))
///     .otherwise(|| seen = Some("something else"));
/// assert_eq!(seen, Some("the answer"));
/// ```
#[derive(Debug)]
pub struct Match<const N: usize> {
    subjects: [Subject; N],
    resolved: bool,
    clauses: usize,
}

impl Match<1> {
    /// Single-subject convenience for the common arity-1 dispatch.
    pub fn on(subject: impl Into<Subject>) -> Self {
        Match::over([subject.into()])
    }
}

impl<const N: usize> Match<N> {
    /// Begin a dispatch over the given subjects.
    pub fn over(subjects: [Subject; N]) -> Self {
        Match {
            subjects,
            resolved: false,
            clauses: 0,
        }
    }

    /// Declare a clause. Runs `body` iff no earlier clause matched and every
    /// pattern matches its subject.
    #[must_use = "later clauses and `otherwise` are only tested through the returned dispatcher"]
    pub fn when(mut self, patterns: [Pattern; N], body: impl FnOnce()) -> Self {
        self.clauses = self.clauses.saturating_add(1);
        if !self.resolved && clause_matches(&self.subjects, &patterns) {
            self.resolved = true;
            tracing::trace!(arity = N, clause = self.clauses, "statement dispatch resolved");
            body();
        }
        self
    }

    /// Terminal default clause: runs `body` iff nothing matched.
    pub fn otherwise(self, body: impl FnOnce()) {
        if !self.resolved {
            tracing::trace!(arity = N, clauses = self.clauses, "fell through to otherwise");
            body();
        }
    }

    /// Whether some clause has already matched.
    pub fn resolved(&self) -> bool {
        self.resolved
    }
}
