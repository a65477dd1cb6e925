//! Parsing support for formulas

use super::error::FormulaParseError;
use super::Formula;
use lalrpop_util::ParseError;
use std::str::FromStr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/formula/formula_grammar.rs"));
}

impl Formula {
    /// Parse a formula from a string
    ///
    /// Supports:
    /// - `~` or `!` for NOT
    /// - `*` or `&` for AND
    /// - `+` or `|` for OR
    /// - `->` for implication (right associative, encoded as `~a + b`)
    /// - Parentheses for grouping
    /// - Atom names matching `[A-Za-z_][A-Za-z0-9_']*`
    ///
    /// # Errors
    ///
    /// ```
    /// use propositions::Formula;
    ///
    /// let err = Formula::parse("p * (q +").unwrap_err();
    /// assert_eq!(err.position(), 8);
    /// assert!(err.expected().iter().any(|t| t == "atom"));
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormulaParseError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| parse_error(input, e))
    }
}

impl FromStr for Formula {
    type Err = FormulaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

fn parse_error<T, E>(input: &str, err: ParseError<usize, T, E>) -> FormulaParseError {
    let input: Arc<str> = Arc::from(input);
    match err {
        ParseError::InvalidToken { location } => FormulaParseError::InvalidCharacter {
            input,
            position: location,
        },
        ParseError::UnrecognizedEof { location, expected } => FormulaParseError::UnexpectedEnd {
            input,
            position: location,
            expected: describe_tokens(expected),
        },
        ParseError::UnrecognizedToken {
            token: (start, _, end),
            expected,
        } => FormulaParseError::UnexpectedToken {
            input,
            span: start..end,
            expected: describe_tokens(expected),
        },
        ParseError::ExtraToken {
            token: (start, _, end),
        } => FormulaParseError::UnexpectedToken {
            input,
            span: start..end,
            expected: Vec::new(),
        },
        // No grammar action is fallible; blame the whole input
        ParseError::User { .. } => FormulaParseError::UnexpectedToken {
            span: 0..input.len(),
            input,
            expected: Vec::new(),
        },
    }
}

/// `"\"*\""` becomes `*`; the atom-name regex becomes `atom`
fn describe_tokens(expected: Vec<String>) -> Vec<String> {
    let mut described: Vec<String> = expected
        .into_iter()
        .map(|token| {
            if token.starts_with("r#") {
                "atom".to_string()
            } else {
                token.trim_matches('"').to_string()
            }
        })
        .collect();
    described.sort();
    described.dedup();
    described
}
