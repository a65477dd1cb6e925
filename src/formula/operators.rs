//! Operator overloading for formulas
//!
//! `*` is conjunction, `+` is disjunction and `!` wraps in a negation. Every
//! combination of owned and borrowed operands is accepted; borrowed operands are
//! shared into the result rather than moved.

use super::Formula;
use std::ops::{Add, Mul, Not};

/// Conjunction for references: `&p * &q`
///
/// # Examples
///
/// ```
/// use propositions::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// assert_eq!(&p * &q, p.and(&q));
/// ```
impl Mul for &Formula {
    type Output = Formula;

    fn mul(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

impl Mul for Formula {
    type Output = Formula;

    fn mul(self, rhs: Formula) -> Formula {
        Formula::connect(super::Connective::And, self, rhs)
    }
}

impl Mul<Formula> for &Formula {
    type Output = Formula;

    fn mul(self, rhs: Formula) -> Formula {
        Formula::connect(super::Connective::And, self.clone(), rhs)
    }
}

impl Mul<&Formula> for Formula {
    type Output = Formula;

    fn mul(self, rhs: &Formula) -> Formula {
        Formula::connect(super::Connective::And, self, rhs.clone())
    }
}

/// Disjunction for references: `&p + &q`
///
/// # Examples
///
/// ```
/// use propositions::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// assert_eq!(&p + &q, p.or(&q));
/// ```
impl Add for &Formula {
    type Output = Formula;

    fn add(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

impl Add for Formula {
    type Output = Formula;

    fn add(self, rhs: Formula) -> Formula {
        Formula::connect(super::Connective::Or, self, rhs)
    }
}

impl Add<Formula> for &Formula {
    type Output = Formula;

    fn add(self, rhs: Formula) -> Formula {
        Formula::connect(super::Connective::Or, self.clone(), rhs)
    }
}

impl Add<&Formula> for Formula {
    type Output = Formula;

    fn add(self, rhs: &Formula) -> Formula {
        Formula::connect(super::Connective::Or, self, rhs.clone())
    }
}

/// Negation for references: `!&p`
///
/// This is the raw wrap ([`Formula::not`]); `!!&p` is a double negation. Use
/// [`Formula::negate`] to collapse it.
impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::not(self)
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::Not(std::sync::Arc::new(self))
    }
}
