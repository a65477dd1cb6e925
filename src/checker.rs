//! The configured entry point for normalisation and checking

use crate::error::LogicError;
use crate::formula::Formula;
use crate::normal_form::{cnf, nnf, NormalFormConfig};

/// Runs the normalisation pipeline under a fixed [`NormalFormConfig`]
///
/// A `Checker` holds no state besides its configuration; it can be shared
/// between threads and reused for any number of formulas.
///
/// # Examples
///
/// ```
/// use propositions::{Checker, Formula, NormalFormConfig};
///
/// let checker = Checker::with_config(NormalFormConfig::new().with_max_nodes(10_000));
/// let f = Formula::parse("p + q + ~p * ~q").unwrap();
/// assert!(checker.is_valid(&f).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: NormalFormConfig,
}

impl Checker {
    /// Create a checker with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalFormConfig) -> Self {
        Checker { config }
    }

    pub fn config(&self) -> &NormalFormConfig {
        &self.config
    }

    /// Negation normal form of `formula`
    pub fn to_nnf(&self, formula: &Formula) -> Result<Formula, LogicError> {
        nnf::to_nnf(formula, &self.config)
    }

    /// Conjunctive normal form of an NNF formula
    ///
    /// Use [`Checker::normalize`] to go from an arbitrary formula.
    pub fn to_cnf(&self, formula: &Formula) -> Result<Formula, LogicError> {
        cnf::to_cnf(formula, &self.config)
    }

    /// `to_cnf(to_nnf(formula))`
    pub fn normalize(&self, formula: &Formula) -> Result<Formula, LogicError> {
        self.to_cnf(&self.to_nnf(formula)?)
    }
}
