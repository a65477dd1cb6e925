//! Error types for formula normalisation and checking
//!
//! Every fallible operation in the crate returns [`LogicError`]. Input of the
//! wrong shape is reported separately from a transform that outgrew its budget.

use crate::formula::FormulaParseError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the crate
#[derive(Debug)]
pub enum LogicError {
    /// The input does not have the shape the operation requires
    ///
    /// For example a formula that is not in negation normal form passed to
    /// the CNF transform, or an argument file without a conclusion.
    Malformed {
        /// The operation that rejected the input
        operation: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// An assignment has no value for an atom of the formula being evaluated
    UndefinedAtom {
        /// The missing atom
        name: Arc<str>,
    },

    /// A transform exceeded its configured budget
    ///
    /// Distribution during CNF conversion is exponential in the worst case;
    /// this is how that blow-up, or a tree too deep to recurse over, is
    /// reported.
    ResourceExhausted {
        /// Which limit was hit
        resource: Resource,
        /// The configured value of that limit
        limit: usize,
    },

    /// Failed to parse a formula
    Parse(FormulaParseError),

    /// IO error wrapper
    Io(io::Error),
}

/// The limits a transform can exhaust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Recursion depth
    Depth,
    /// Nodes created by a single transform
    Nodes,
    /// Atoms enumerated by a truth-table check
    Atoms,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Depth => write!(f, "recursion depth"),
            Resource::Nodes => write!(f, "node count"),
            Resource::Atoms => write!(f, "atom count"),
        }
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Malformed { operation, reason } => {
                write!(f, "Malformed input to {}: {}", operation, reason)
            }
            LogicError::UndefinedAtom { name } => {
                write!(f, "Atom {:?} has no value in the assignment", name)
            }
            LogicError::ResourceExhausted { resource, limit } => {
                write!(f, "Resource exhausted: {} exceeded the limit of {}", resource, limit)
            }
            LogicError::Parse(e) => write!(f, "{}", e),
            LogicError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Parse(e) => Some(e),
            LogicError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LogicError {
    fn from(err: io::Error) -> Self {
        LogicError::Io(err)
    }
}

impl From<FormulaParseError> for LogicError {
    fn from(err: FormulaParseError) -> Self {
        LogicError::Parse(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
