//! Conjunctive normal form by distribution
//!
//! The input must already be in negation normal form. Conjunctions are kept as
//! they are; a disjunction is rebuilt with the distributive law
//! `(a * b) + c = (a + c) * (b + c)`, applied again to each half until no
//! conjunction is left under a disjunction.
//!
//! Distribution can grow the formula exponentially. Every node created is
//! charged to the [`NormalFormConfig`] node limit.

use super::{Budget, NormalFormConfig};
use crate::error::LogicError;
use crate::formula::{Connective, Formula, MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE};
use crate::logging::targets;

/// Convert an NNF formula into conjunctive normal form
///
/// Fails with [`LogicError::Malformed`] when `formula` contains a negation of
/// anything other than a variable.
///
/// # Examples
///
/// ```
/// use propositions::normal_form::{cnf::to_cnf, NormalFormConfig};
/// use propositions::Formula;
///
/// let f = Formula::parse("p * q + r").unwrap();
/// let cnf = to_cnf(&f, &NormalFormConfig::default()).unwrap();
/// assert_eq!(cnf.to_string(), "(p + r) * (q + r)");
/// ```
pub fn to_cnf(formula: &Formula, config: &NormalFormConfig) -> Result<Formula, LogicError> {
    let mut budget = Budget::new(config);
    let result = cnf(formula, 0, &mut budget)?;
    log::debug!(
        target: targets::CNF,
        "CNF conversion created {} nodes",
        budget.nodes()
    );
    log::trace!(target: targets::CNF, "{} => {}", formula, result);
    Ok(result)
}

fn cnf(formula: &Formula, depth: usize, budget: &mut Budget) -> Result<Formula, LogicError> {
    budget.check_depth(depth)?;
    stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
        cnf_step(formula, depth, budget)
    })
}

fn cnf_step(formula: &Formula, depth: usize, budget: &mut Budget) -> Result<Formula, LogicError> {
    match formula {
        Formula::Variable(_) => Ok(formula.clone()),
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Variable(_) => Ok(formula.clone()),
            _ => Err(LogicError::Malformed {
                operation: "to_cnf",
                reason: format!("`{}` is not in negation normal form", formula),
            }),
        },
        Formula::Connective(Connective::And, left, right) => {
            let left = cnf(left, depth + 1, budget)?;
            let right = cnf(right, depth + 1, budget)?;
            budget.allocate()?;
            Ok(Formula::connect(Connective::And, left, right))
        }
        Formula::Connective(Connective::Or, left, right) => {
            let left = cnf(left, depth + 1, budget)?;
            let right = cnf(right, depth + 1, budget)?;
            distribute(&left, &right, depth + 1, budget)
        }
    }
}

/// Build the CNF of `left + right` from two CNF operands
fn distribute(
    left: &Formula,
    right: &Formula,
    depth: usize,
    budget: &mut Budget,
) -> Result<Formula, LogicError> {
    budget.check_depth(depth)?;
    stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
        distribute_step(left, right, depth, budget)
    })
}

fn distribute_step(
    left: &Formula,
    right: &Formula,
    depth: usize,
    budget: &mut Budget,
) -> Result<Formula, LogicError> {
    match (left, right) {
        (Formula::Connective(Connective::And, l1, l2), _) => {
            log::trace!(target: targets::CNF, "distributing ({}) + {}", left, right);
            let first = distribute(l1, right, depth + 1, budget)?;
            let second = distribute(l2, right, depth + 1, budget)?;
            budget.allocate()?;
            Ok(Formula::connect(Connective::And, first, second))
        }
        (_, Formula::Connective(Connective::And, r1, r2)) => {
            log::trace!(target: targets::CNF, "distributing {} + ({})", left, right);
            let first = distribute(left, r1, depth + 1, budget)?;
            let second = distribute(left, r2, depth + 1, budget)?;
            budget.allocate()?;
            Ok(Formula::connect(Connective::And, first, second))
        }
        _ => {
            budget.allocate()?;
            Ok(Formula::connect(Connective::Or, left.clone(), right.clone()))
        }
    }
}

impl Formula {
    /// Whether the formula is a conjunction of disjunctions of literals
    pub fn is_cnf(&self) -> bool {
        let mut conjuncts = vec![self];
        while let Some(node) = conjuncts.pop() {
            match node {
                Formula::Connective(Connective::And, left, right) => {
                    conjuncts.push(left);
                    conjuncts.push(right);
                }
                clause => {
                    let mut disjuncts = vec![clause];
                    while let Some(node) = disjuncts.pop() {
                        match node {
                            Formula::Connective(Connective::Or, left, right) => {
                                disjuncts.push(left);
                                disjuncts.push(right);
                            }
                            literal if literal.is_literal() => {}
                            _ => return false,
                        }
                    }
                }
            }
        }
        true
    }
}
