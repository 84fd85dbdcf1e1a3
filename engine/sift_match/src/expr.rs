//! Expression-form dispatch.

use sift_patterns::{Pattern, Subject};

use crate::clause::clause_matches;

/// An expression-form match over `N` parallel subjects, producing a `T`.
///
/// `is` clauses are tested in order; the first clause whose patterns all
/// match evaluates its expression, and later clauses (matching or not) are
/// never evaluated. The chain must end in [`default`](MatchExpr::default),
/// which supplies the value when nothing matched - there is no implicit
/// "no match" case.
///
/// A multi-statement body is just a closure with a block:
///
/// ```
/// use sift_match::MatchExpr;
/// use sift_patterns::{between, gt};
///
/// let value = 25;
/// let result = MatchExpr::on(value)
///     .is([gt(50)], || value * 2)
///     .is([between(20, 30)], || {
///         let bump = 10;
///         value + bump
///     })
///     .default(|| value * 3);
/// assert_eq!(result, 35);
/// ```
#[derive(Debug)]
pub struct MatchExpr<const N: usize, T> {
    subjects: [Subject; N],
    result: Option<T>,
}

impl<T> MatchExpr<1, T> {
    /// Single-subject convenience for the common arity-1 dispatch.
    #[must_use = "an expression dispatch only yields its value through the terminal `default`"]
    pub fn on(subject: impl Into<Subject>) -> Self {
        MatchExpr::over([subject.into()])
    }
}

impl<const N: usize, T> MatchExpr<N, T> {
    /// Begin a value-producing dispatch over the given subjects.
    #[must_use = "an expression dispatch only yields its value through the terminal `default`"]
    pub fn over(subjects: [Subject; N]) -> Self {
        MatchExpr {
            subjects,
            result: None,
        }
    }

    /// Declare a clause. Evaluates `expr` iff no earlier clause matched and
    /// every pattern matches its subject.
    #[must_use = "the produced value is only returned by the terminal `default`"]
    pub fn is(mut self, patterns: [Pattern; N], expr: impl FnOnce() -> T) -> Self {
        if self.result.is_none() && clause_matches(&self.subjects, &patterns) {
            tracing::trace!(arity = N, "expression dispatch resolved");
            self.result = Some(expr());
        }
        self
    }

    /// Terminal default: returns the matched clause's value, or evaluates
    /// `expr` when no clause matched.
    pub fn default(self, expr: impl FnOnce() -> T) -> T {
        self.result.unwrap_or_else(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::MatchExpr;
    use pretty_assertions::assert_eq;
    use sift_patterns::{ge, gt, literal, lt, wildcard, Subject};

    /// Score-to-letter grading via chained threshold comparisons.
    fn grade(score: i64) -> char {
        MatchExpr::on(score)
            .is([ge(90)], || 'A')
            .is([ge(80)], || 'B')
            .is([ge(70)], || 'C')
            .is([ge(60)], || 'D')
            .default(|| 'F')
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(grade(92), 'A');
        assert_eq!(grade(85), 'B');
        assert_eq!(grade(71), 'C');
        assert_eq!(grade(60), 'D');
        assert_eq!(grade(10), 'F');
    }

    #[test]
    fn first_match_wins_and_later_expressions_never_run() {
        let mut evaluated = Vec::new();
        let result = MatchExpr::on(5)
            .is([gt(10)], || {
                evaluated.push("gt10");
                1
            })
            .is([gt(0)], || {
                evaluated.push("gt0");
                2
            })
            .is([wildcard()], || {
                evaluated.push("wild");
                3
            })
            .default(|| {
                evaluated.push("default");
                0
            });
        assert_eq!(result, 2);
        assert_eq!(evaluated, vec!["gt0"]);
    }

    #[test]
    fn default_supplies_the_value_when_nothing_matches() {
        let result = MatchExpr::on(5)
            .is([gt(10)], || "big")
            .is([lt(0)], || "negative")
            .default(|| "neither");
        assert_eq!(result, "neither");
    }

    #[test]
    fn multi_subject_quadrants() {
        let classify = |x: i64, y: i64| {
            MatchExpr::over([Subject::from(x), Subject::from(y)])
                .is([literal(0), literal(0)], || "origin")
                .is([gt(0), gt(0)], || "positive quadrant")
                .is([lt(0), lt(0)], || "negative quadrant")
                .default(|| "mixed")
        };
        assert_eq!(classify(0, 0), "origin");
        assert_eq!(classify(10, 20), "positive quadrant");
        assert_eq!(classify(-3, -4), "negative quadrant");
        assert_eq!(classify(-3, 4), "mixed");
    }

    #[test]
    fn block_bodies_yield_their_last_expression() {
        let value = 25;
        let result = MatchExpr::on(value)
            .is([gt(50)], || value * 2)
            .is([ge(20)], || {
                let bump = 10;
                value + bump
            })
            .default(|| value * 3);
        assert_eq!(result, 35);
    }

    #[test]
    fn ten_parallel_subjects_produce_a_value() {
        let subjects: [Subject; 10] = std::array::from_fn(|i| Subject::from(i as i32));
        let wide_clause = [
            literal(0),
            literal(1),
            literal(2),
            literal(3),
            wildcard(),
            wildcard(),
            gt(5),
            gt(6),
            ge(8),
            literal(9),
        ];
        let mut off_by_one = wide_clause;
        off_by_one[9] = literal(8);

        let result = MatchExpr::over(subjects)
            .is([lt(0); 10], || "negative")
            .is(off_by_one, || "off by one")
            .is(wide_clause, || "ascending")
            .default(|| "no clause");
        assert_eq!(result, "ascending");
    }

    #[test]
    fn subjects_are_evaluated_once_up_front() {
        // Subject conversion happens at `over`; clauses only read the array.
        let subjects = [Subject::from(1), Subject::from(2)];
        let result = MatchExpr::over(subjects)
            .is([literal(1), literal(2)], || true)
            .default(|| false);
        assert!(result);
    }
}
