//! Clause-based tautology check
//!
//! A formula is valid iff every clause of its conjunctive normal form is, and a
//! clause is valid iff some atom occurs in it both plain and negated. This is
//! exhaustive clause inspection, not a search: the cost is dominated by the
//! CNF conversion.

use crate::checker::Checker;
use crate::error::LogicError;
use crate::formula::{Connective, Formula};
use crate::logging::targets;
use crate::normal_form::Clause;

impl Checker {
    /// Whether `formula` is true under every assignment to its atoms
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{Checker, Formula};
    ///
    /// let checker = Checker::new();
    /// let p = Formula::variable("p");
    ///
    /// assert!(checker.is_valid(&p.or(&p.not())).unwrap());
    /// assert!(!checker.is_valid(&p.and(&p.not())).unwrap());
    /// assert!(!checker.is_valid(&p).unwrap());
    /// ```
    pub fn is_valid(&self, formula: &Formula) -> Result<bool, LogicError> {
        let cnf = self.normalize(formula)?;
        let valid = is_valid_cnf(&cnf)?;
        log::debug!(target: targets::VALIDITY, "{} is {}", formula, verdict(valid));
        Ok(valid)
    }
}

/// Decide validity of a formula already in conjunctive normal form
///
/// Stops at the first clause without a complementary pair. Clauses are
/// inspected left to right.
pub fn is_valid_cnf(cnf: &Formula) -> Result<bool, LogicError> {
    let mut conjuncts = vec![cnf];

    while let Some(node) = conjuncts.pop() {
        match node {
            Formula::Connective(Connective::And, left, right) => {
                conjuncts.push(right);
                conjuncts.push(left);
            }
            disjunction => {
                let clause = Clause::from_disjunction(disjunction)?;
                if !clause.is_tautological() {
                    log::debug!(
                        target: targets::VALIDITY,
                        "clause {} has no complementary pair",
                        clause
                    );
                    return Ok(false);
                }
            }
        }
    }

    Ok(true)
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "not valid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(text: &str) -> bool {
        Checker::new().is_valid(&Formula::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_excluded_middle() {
        assert!(valid("p + ~p"));
        assert!(valid("~p + p"));
    }

    #[test]
    fn test_contradiction() {
        assert!(!valid("p * ~p"));
    }

    #[test]
    fn test_excluded_middle_over_disjunction() {
        assert!(valid("(p + q) + ~p * ~q"));
    }

    #[test]
    fn test_bare_literals_are_not_valid() {
        assert!(!valid("p"));
        assert!(!valid("~p"));
        assert!(!valid("~~p"));
    }

    #[test]
    fn test_double_negation_inside_tautology() {
        assert!(valid("~~p + ~p"));
        assert!(valid("~~(p -> p)"));
    }

    #[test]
    fn test_every_clause_must_be_valid() {
        // (p + ~p) * (q + r)
        assert!(!valid("(p + ~p) * (q + r)"));
        assert!(valid("(p + ~p) * (q + ~q)"));
    }

    #[test]
    fn test_classic_tautologies() {
        assert!(valid("p -> p"));
        assert!(valid("p -> (q -> p)"));
        assert!(valid("(p -> q) -> (~q -> ~p)"));
        assert!(valid("((p -> q) * (q -> r)) -> (p -> r)"));
        assert!(valid("~(p * q) -> (~p + ~q)"));
        assert!(valid("((p -> q) -> p) -> p"));
    }

    #[test]
    fn test_contingent_formulas() {
        assert!(!valid("p -> q"));
        assert!(!valid("(p -> q) -> (q -> p)"));
        assert!(!valid("p * q + ~p * ~q"));
    }

    #[test]
    fn test_is_valid_cnf_rejects_non_cnf() {
        let f = Formula::parse("p + q * ~q").unwrap();
        assert!(matches!(
            is_valid_cnf(&f),
            Err(LogicError::Malformed { .. })
        ));
    }

    #[test]
    fn test_is_valid_cnf_short_circuits() {
        let cnf = Formula::parse("(p + q) * (r + ~r)").unwrap();
        assert!(!is_valid_cnf(&cnf).unwrap());
    }
}
