//! Clause view of CNF formulas

use crate::error::LogicError;
use crate::formula::{Connective, Formula};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A disjunction of literals, split by polarity
///
/// Only the atom names are kept, so repeated literals collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    positive: BTreeSet<Arc<str>>,
    negative: BTreeSet<Arc<str>>,
}

impl Clause {
    /// Collect the literals of an OR-skeleton
    ///
    /// Fails with [`LogicError::Malformed`] if anything other than a
    /// disjunction or a literal is found below the clause boundary.
    pub fn from_disjunction(formula: &Formula) -> Result<Self, LogicError> {
        let mut clause = Clause::default();
        let mut stack = vec![formula];

        while let Some(node) = stack.pop() {
            if let Formula::Connective(Connective::Or, left, right) = node {
                stack.push(right);
                stack.push(left);
                continue;
            }

            match node.as_literal() {
                Some((name, true)) => {
                    clause.positive.insert(Arc::clone(name));
                }
                Some((name, false)) => {
                    clause.negative.insert(Arc::clone(name));
                }
                None => {
                    return Err(LogicError::Malformed {
                        operation: "clauses",
                        reason: format!("`{}` is not a disjunction of literals", formula),
                    })
                }
            }
        }

        Ok(clause)
    }

    /// Atoms occurring positively
    pub fn positive(&self) -> &BTreeSet<Arc<str>> {
        &self.positive
    }

    /// Atoms occurring negated
    pub fn negative(&self) -> &BTreeSet<Arc<str>> {
        &self.negative
    }

    /// Atoms occurring with both polarities
    pub fn complementary_atoms(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.positive.intersection(&self.negative)
    }

    /// A clause is true under every assignment iff it contains some atom with
    /// both polarities
    pub fn is_tautological(&self) -> bool {
        self.complementary_atoms().next().is_some()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literals = self
            .positive
            .iter()
            .map(|name| name.to_string())
            .chain(self.negative.iter().map(|name| format!("~{}", name)));

        for (i, literal) in literals.enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Split a CNF formula into its clauses, left to right
///
/// # Examples
///
/// ```
/// use propositions::normal_form::clauses;
/// use propositions::Formula;
///
/// let cnf = Formula::parse("(p + ~p + q) * (p + q)").unwrap();
/// let clauses = clauses(&cnf).unwrap();
/// assert_eq!(clauses.len(), 2);
/// assert!(clauses[0].is_tautological());
/// assert!(!clauses[1].is_tautological());
/// ```
pub fn clauses(cnf: &Formula) -> Result<Vec<Clause>, LogicError> {
    let mut result = Vec::new();
    let mut stack = vec![cnf];

    while let Some(node) = stack.pop() {
        match node {
            Formula::Connective(Connective::And, left, right) => {
                stack.push(right);
                stack.push(left);
            }
            clause => result.push(Clause::from_disjunction(clause)?),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause_of(text: &str) -> Clause {
        Clause::from_disjunction(&Formula::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_complementary_pair() {
        let clause = clause_of("p + ~p + q");
        assert!(clause.is_tautological());
        let complementary: Vec<&str> = clause.complementary_atoms().map(|a| &**a).collect();
        assert_eq!(complementary, vec!["p"]);
    }

    #[test]
    fn test_no_complementary_pair() {
        assert!(!clause_of("p + q").is_tautological());
        assert!(!clause_of("~p + ~q").is_tautological());
    }

    #[test]
    fn test_single_literal_is_not_tautological() {
        assert!(!clause_of("p").is_tautological());
        assert!(!clause_of("~p").is_tautological());
    }

    #[test]
    fn test_repeated_literals_collapse() {
        let clause = clause_of("p + p + ~q + ~q");
        assert_eq!(clause.len(), 2);
        assert_eq!(clause.to_string(), "p + ~q");
    }

    #[test]
    fn test_conjunction_below_clause_is_malformed() {
        let f = Formula::parse("p + q * r").unwrap();
        assert!(matches!(
            Clause::from_disjunction(&f),
            Err(LogicError::Malformed { .. })
        ));
    }

    #[test]
    fn test_clauses_order() {
        let cnf = Formula::parse("(a + b) * ~c * (d + ~e)").unwrap();
        let rendered: Vec<String> = clauses(&cnf)
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(rendered, vec!["a + b", "~c", "d + ~e"]);
    }

    #[test]
    fn test_clauses_rejects_non_cnf() {
        let f = Formula::parse("~(a * b)").unwrap();
        assert!(clauses(&f).is_err());
    }
}
