//! Negation normal form
//!
//! A formula is in NNF when every `Not` wraps a variable. The rewrite rules:
//!
//! | input            | output                       |
//! |------------------|------------------------------|
//! | `p`, `~p`        | unchanged                    |
//! | `~~x`            | `nnf(x)`                     |
//! | `~(a * b)`       | `nnf(~a) + nnf(~b)`          |
//! | `~(a + b)`       | `nnf(~a) * nnf(~b)`          |
//! | `a op b`         | `nnf(a) op nnf(b)`           |

use super::{Budget, NormalFormConfig};
use crate::error::LogicError;
use crate::formula::{Formula, MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE};
use crate::logging::targets;

/// Rewrite `formula` into an equivalent formula in negation normal form
///
/// # Examples
///
/// ```
/// use propositions::normal_form::{nnf::to_nnf, NormalFormConfig};
/// use propositions::Formula;
///
/// let f = Formula::parse("~(p * ~~q)").unwrap();
/// let nnf = to_nnf(&f, &NormalFormConfig::default()).unwrap();
/// assert_eq!(nnf.to_string(), "~p + ~q");
/// ```
pub fn to_nnf(formula: &Formula, config: &NormalFormConfig) -> Result<Formula, LogicError> {
    let budget = Budget::new(config);
    let result = nnf(formula, 0, &budget)?;
    log::trace!(target: targets::NNF, "{} => {}", formula, result);
    Ok(result)
}

fn nnf(formula: &Formula, depth: usize, budget: &Budget) -> Result<Formula, LogicError> {
    budget.check_depth(depth)?;
    stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
        nnf_step(formula, depth, budget)
    })
}

fn nnf_step(formula: &Formula, depth: usize, budget: &Budget) -> Result<Formula, LogicError> {
    match formula {
        Formula::Variable(_) => Ok(formula.clone()),
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Variable(_) => Ok(formula.clone()),
            Formula::Not(x) => nnf(x, depth + 1, budget),
            Formula::Connective(kind, left, right) => {
                let left = nnf(&left.negate(), depth + 1, budget)?;
                let right = nnf(&right.negate(), depth + 1, budget)?;
                Ok(Formula::connect(kind.dual(), left, right))
            }
        },
        Formula::Connective(kind, left, right) => {
            let left = nnf(left, depth + 1, budget)?;
            let right = nnf(right, depth + 1, budget)?;
            Ok(Formula::connect(*kind, left, right))
        }
    }
}

impl Formula {
    /// Whether every negation in the formula wraps a variable
    pub fn is_nnf(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Formula::Variable(_) => {}
                Formula::Not(inner) => {
                    if !matches!(inner.as_ref(), Formula::Variable(_)) {
                        return false;
                    }
                }
                Formula::Connective(_, left, right) => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;

    fn nnf_of(text: &str) -> Formula {
        let f = Formula::parse(text).unwrap();
        to_nnf(&f, &NormalFormConfig::default()).unwrap()
    }

    #[test]
    fn test_literals_unchanged() {
        assert_eq!(nnf_of("p"), Formula::variable("p"));
        assert_eq!(nnf_of("~p"), Formula::variable("p").not());
    }

    #[test]
    fn test_double_negation_eliminated() {
        assert_eq!(nnf_of("~~p"), Formula::variable("p"));
        assert_eq!(nnf_of("~~~p"), Formula::variable("p").not());
        assert_eq!(nnf_of("~~(p * q)").to_string(), "p * q");
    }

    #[test]
    fn test_de_morgan_and() {
        assert_eq!(nnf_of("~(p * q)").to_string(), "~p + ~q");
    }

    #[test]
    fn test_de_morgan_or() {
        assert_eq!(nnf_of("~(p + q)").to_string(), "~p * ~q");
    }

    #[test]
    fn test_nested_negations() {
        // ~(p + ~(q * ~r)) = ~p * (q * ~r)
        let result = nnf_of("~(p + ~(q * ~r))");
        assert_eq!(result.to_string(), "~p * (q * ~r)");
        assert!(result.is_nnf());
    }

    #[test]
    fn test_negated_implication() {
        // ~(p -> q) = ~(~p + q) = p * ~q
        assert_eq!(nnf_of("~(p -> q)").to_string(), "p * ~q");
    }

    #[test]
    fn test_connective_under_no_negation_recurses() {
        assert_eq!(nnf_of("~~p + ~(q + r)").to_string(), "p + ~q * ~r");
    }

    #[test]
    fn test_input_not_modified() {
        let f = Formula::parse("~(p * ~~q)").unwrap();
        let before = f.clone();
        let _ = to_nnf(&f, &NormalFormConfig::default()).unwrap();
        assert_eq!(f, before);
    }

    #[test]
    fn test_is_nnf() {
        assert!(Formula::parse("~p * (q + ~r)").unwrap().is_nnf());
        assert!(!Formula::parse("~~p").unwrap().is_nnf());
        assert!(!Formula::parse("~(p + q)").unwrap().is_nnf());
    }

    #[test]
    fn test_formula_just_under_depth_limit() {
        let config = NormalFormConfig::default();
        let mut f = Formula::variable("x0").not();
        for i in 1..config.max_depth - 8 {
            f = Formula::variable(&format!("x{}", i)).or(&f);
        }
        let result = to_nnf(&f, &config).unwrap();
        assert_eq!(result, f);
    }

    #[test]
    fn test_depth_limit() {
        let mut f = Formula::variable("p");
        for _ in 0..300 {
            f = f.not();
        }
        let config = NormalFormConfig::new().with_max_depth(50);
        assert!(matches!(
            to_nnf(&f, &config),
            Err(LogicError::ResourceExhausted {
                resource: Resource::Depth,
                limit: 50
            })
        ));
    }
}
