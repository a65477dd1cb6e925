//! Display and Debug formatting for formulas

use super::{Connective, Formula, MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE};
use std::fmt;

/// Context for formatting formulas with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,     // Top level or inside parentheses
    And,      // Left operand of a conjunction
    AndRight, // Right operand of a conjunction
    Or,       // Left operand of a disjunction
    OrRight,  // Right operand of a disjunction
}

impl Formula {
    /// Format with operator precedence context to minimise parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.fmt_with_context_impl(f, ctx)
        })
    }

    fn fmt_with_context_impl(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{}", name),

            Formula::Connective(Connective::And, left, right) => {
                // Operators parse left-associative, so a right-nested AND keeps its parens
                let needs_parens = ctx == OpContext::AndRight;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::And)?;
                write!(f, " * ")?;
                right.fmt_with_context(f, OpContext::AndRight)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Formula::Connective(Connective::Or, left, right) => {
                // OR binds looser than AND
                let needs_parens = matches!(
                    ctx,
                    OpContext::And | OpContext::AndRight | OpContext::OrRight
                );

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::Or)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, OpContext::OrRight)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Formula::Not(inner) => {
                write!(f, "~")?;
                match inner.as_ref() {
                    Formula::Variable(_) | Formula::Not(_) => {
                        inner.fmt_with_context(f, OpContext::None)
                    }
                    Formula::Connective(..) => {
                        write!(f, "(")?;
                        inner.fmt_with_context(f, OpContext::None)?;
                        write!(f, ")")
                    }
                }
            }
        }
    }
}

/// Debug formatting for formulas
///
/// Uses `*` for AND, `+` for OR and `~` for NOT, with parentheses only where
/// precedence requires them. The output parses back to an equal formula.
///
/// # Examples
///
/// ```
/// use propositions::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let r = Formula::variable("r");
///
/// assert_eq!(format!("{:?}", p.or(&q).and(&r)), "(p + q) * r");
/// assert_eq!(format!("{:?}", p.and(&q).not()), "~(p * q)");
/// ```
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

/// Display formatting for formulas
///
/// Delegates to the `Debug` implementation.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
