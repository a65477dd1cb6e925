//! Parse errors for formula text
//!
//! Every variant keeps the rejected input and the byte offset where parsing
//! stopped. Token errors also carry what the grammar would have accepted
//! there, already rendered for people: operators as written and `atom` for
//! an atom name.

use std::fmt;
use std::io;
use std::ops::Range;
use std::sync::Arc;

/// Errors produced by [`Formula::parse`](super::Formula::parse)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaParseError {
    /// A character that starts no token, such as a digit or `$`
    InvalidCharacter {
        input: Arc<str>,
        position: usize,
    },

    /// A token in a place the grammar does not allow it
    UnexpectedToken {
        input: Arc<str>,
        /// Bytes of the offending token
        span: Range<usize>,
        expected: Vec<String>,
    },

    /// The input stopped before the formula was complete
    UnexpectedEnd {
        input: Arc<str>,
        /// End of the last token read
        position: usize,
        expected: Vec<String>,
    },
}

impl FormulaParseError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            FormulaParseError::InvalidCharacter { input, .. }
            | FormulaParseError::UnexpectedToken { input, .. }
            | FormulaParseError::UnexpectedEnd { input, .. } => input,
        }
    }

    /// Byte offset where parsing stopped
    pub fn position(&self) -> usize {
        self.span().start
    }

    /// Bytes of the input that were rejected; empty at the end of input
    pub fn span(&self) -> Range<usize> {
        match self {
            FormulaParseError::InvalidCharacter { input, position } => {
                let width = input
                    .get(*position..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(0, char::len_utf8);
                *position..*position + width
            }
            FormulaParseError::UnexpectedToken { span, .. } => span.clone(),
            FormulaParseError::UnexpectedEnd { position, .. } => *position..*position,
        }
    }

    /// The rejected text itself
    pub fn found(&self) -> &str {
        self.input().get(self.span()).unwrap_or("")
    }

    /// Tokens that would have been accepted where parsing stopped
    pub fn expected(&self) -> &[String] {
        match self {
            FormulaParseError::InvalidCharacter { .. } => &[],
            FormulaParseError::UnexpectedToken { expected, .. }
            | FormulaParseError::UnexpectedEnd { expected, .. } => expected,
        }
    }
}

impl fmt::Display for FormulaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaParseError::InvalidCharacter { input, position } => write!(
                f,
                "Invalid character {:?} at position {} in formula {:?}",
                self.found(),
                position,
                input
            )?,
            FormulaParseError::UnexpectedToken { input, span, .. } => write!(
                f,
                "Unexpected {:?} at position {} in formula {:?}",
                self.found(),
                span.start,
                input
            )?,
            FormulaParseError::UnexpectedEnd {
                input, position, ..
            } => write!(f, "Formula {:?} ends early at position {}", input, position)?,
        }

        if !self.expected().is_empty() {
            write!(f, "; expected one of: {}", self.expected().join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FormulaParseError {}

impl From<FormulaParseError> for io::Error {
    fn from(err: FormulaParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
