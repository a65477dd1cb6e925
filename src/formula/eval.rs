//! Direct evaluation and truth-table checks for formulas

use super::{Connective, Formula, MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE};
use crate::error::{LogicError, Resource};
use std::collections::HashMap;
use std::sync::Arc;

/// A truth assignment from atom names to values
pub type Assignment = HashMap<Arc<str>, bool>;

/// Largest number of atoms the truth-table methods will enumerate
pub const MAX_TRUTH_TABLE_ATOMS: usize = 20;

impl Formula {
    /// Evaluate the formula under an assignment, without normalising it first
    ///
    /// Every atom of the formula must be assigned; a missing atom is reported as
    /// [`LogicError::UndefinedAtom`] rather than defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{Assignment, Formula};
    /// use std::sync::Arc;
    ///
    /// let p = Formula::variable("p");
    /// let q = Formula::variable("q");
    /// let f = p.implies(&q);
    ///
    /// let mut assignment = Assignment::new();
    /// assignment.insert(Arc::from("p"), true);
    /// assignment.insert(Arc::from("q"), false);
    /// assert_eq!(f.evaluate(&assignment).unwrap(), false);
    ///
    /// assignment.remove("q");
    /// assert!(f.evaluate(&assignment).is_err());
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.evaluate_impl(assignment)
        })
    }

    fn evaluate_impl(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        match self {
            Formula::Variable(name) => {
                assignment
                    .get(name)
                    .copied()
                    .ok_or_else(|| LogicError::UndefinedAtom {
                        name: Arc::clone(name),
                    })
            }
            Formula::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Formula::Connective(Connective::And, left, right) => {
                Ok(left.evaluate(assignment)? && right.evaluate(assignment)?)
            }
            Formula::Connective(Connective::Or, left, right) => {
                Ok(left.evaluate(assignment)? || right.evaluate(assignment)?)
            }
        }
    }

    /// Decide validity by evaluating every assignment to the formula's atoms
    ///
    /// Exponential in the number of atoms; formulas with more than
    /// [`MAX_TRUTH_TABLE_ATOMS`] atoms are refused. The clause-based
    /// [`Checker::is_valid`](crate::Checker::is_valid) is the primary decision
    /// procedure, this one exists to cross-check it.
    pub fn is_tautology_by_truth_table(&self) -> Result<bool, LogicError> {
        let atoms: Vec<Arc<str>> = self.atoms().into_iter().collect();
        for assignment in all_assignments(&atoms)? {
            if !self.evaluate(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check whether two formulas agree under every assignment to their atoms
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::Formula;
    ///
    /// let p = Formula::variable("p");
    /// let q = Formula::variable("q");
    ///
    /// // De Morgan
    /// let lhs = p.and(&q).not();
    /// let rhs = p.not().or(&q.not());
    /// assert!(lhs.equivalent_to(&rhs).unwrap());
    /// ```
    pub fn equivalent_to(&self, other: &Formula) -> Result<bool, LogicError> {
        let mut atoms = self.atoms();
        atoms.extend(other.atoms());
        let atoms: Vec<Arc<str>> = atoms.into_iter().collect();

        for assignment in all_assignments(&atoms)? {
            if self.evaluate(&assignment)? != other.evaluate(&assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Every assignment over `atoms`, in binary counting order
fn all_assignments(atoms: &[Arc<str>]) -> Result<impl Iterator<Item = Assignment> + '_, LogicError> {
    if atoms.len() > MAX_TRUTH_TABLE_ATOMS {
        return Err(LogicError::ResourceExhausted {
            resource: Resource::Atoms,
            limit: MAX_TRUTH_TABLE_ATOMS,
        });
    }

    let rows: u64 = 1 << atoms.len();
    Ok((0..rows).map(move |row| {
        atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (Arc::clone(atom), row & (1 << i) != 0))
            .collect()
    }))
}
