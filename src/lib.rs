//! # Propositions
//!
//! Propositional formulas as expression trees, with negation normal form,
//! conjunctive normal form and a clause-based tautology check.
//!
//! ## Overview
//!
//! The decision pipeline is:
//!
//! 1. Build a [`Formula`] (methods, operators, the [`prop!`] macro or
//!    [`Formula::parse`]).
//! 2. [`to_nnf`] pushes negations down to the atoms.
//! 3. [`to_cnf`] distributes disjunction over conjunction.
//! 4. [`is_valid`] accepts iff every clause of the CNF contains an atom both
//!    plain and negated.
//!
//! Arguments are checked by reducing them to one formula: the conjunction of
//! the premises implies the conclusion.
//!
//! ```
//! use propositions::{check_argument, is_sound, is_valid, parse_assignment, prop, Formula};
//!
//! # fn main() -> std::io::Result<()> {
//! let p = Formula::variable("p");
//! let q = Formula::variable("q");
//!
//! // Excluded middle over a disjunction
//! assert!(is_valid(&prop!((p + q) + !p * !q))?);
//!
//! // Modus ponens
//! assert!(check_argument(&[p.clone(), prop!(p -> q)], &q)?);
//!
//! // Valid, but the premise is false under p=false
//! let assignment = parse_assignment("p=false")?;
//! assert!(!is_sound(&[p.clone()], &prop!(p + q), &assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Limits
//!
//! CNF conversion by distribution is exponential in the worst case. Every
//! transform runs under a [`NormalFormConfig`] bounding recursion depth and
//! created nodes; exceeding either yields [`LogicError::ResourceExhausted`]
//! rather than a stack overflow. Use a [`Checker`] to pick limits other than
//! the defaults.
//!
//! ## Thread Safety
//!
//! Formulas are immutable and share subtrees through `Arc`, so they are
//! `Send + Sync`. Nothing in the crate holds global state; checks on different
//! threads need no coordination.

// Lets the `prop!` macro expand to `::propositions::...` inside this crate too
extern crate self as propositions;

pub mod argument;
pub mod checker;
pub mod error;
pub mod formula;
pub mod logging;
pub mod normal_form;
pub mod validity;

pub use argument::{parse_assignment, Argument};
pub use checker::Checker;
pub use error::{LogicError, Resource};
pub use formula::{Assignment, Connective, Formula, FormulaNode, FormulaParseError};
pub use normal_form::{Clause, NormalFormConfig};
pub use propositions_macros::prop;

/// Negation normal form of `formula`, with default limits
pub fn to_nnf(formula: &Formula) -> Result<Formula, LogicError> {
    Checker::new().to_nnf(formula)
}

/// Conjunctive normal form of an NNF formula, with default limits
pub fn to_cnf(formula: &Formula) -> Result<Formula, LogicError> {
    Checker::new().to_cnf(formula)
}

/// Whether `formula` is a tautology, with default limits
pub fn is_valid(formula: &Formula) -> Result<bool, LogicError> {
    Checker::new().is_valid(formula)
}

/// Whether `premises` entail `conclusion`, with default limits
pub fn check_argument(premises: &[Formula], conclusion: &Formula) -> Result<bool, LogicError> {
    Checker::new().check_argument(premises, conclusion)
}

/// Whether the argument is valid and all premises hold under `assignment`
pub fn is_sound(
    premises: &[Formula],
    conclusion: &Formula,
    assignment: &Assignment,
) -> Result<bool, LogicError> {
    Checker::new().is_sound(premises, conclusion, assignment)
}
