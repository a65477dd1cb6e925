//! Arguments: premises, a conclusion, validity and soundness
//!
//! An argument is valid when the conjunction of its premises implies its
//! conclusion in every assignment, and sound when it is valid and every
//! premise is true under a given assignment.
//!
//! # Argument files
//!
//! [`Argument::from_file`] reads one formula per line. Blank lines and lines
//! starting with `#` are skipped; the single conclusion line starts with
//! `therefore`:
//!
//! ```text
//! # modus ponens
//! p
//! p -> q
//! therefore q
//! ```

use crate::checker::Checker;
use crate::error::LogicError;
use crate::formula::{Assignment, Formula};
use crate::logging::targets;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

const CONCLUSION_PREFIX: &str = "therefore";

/// A list of premises and a conclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    premises: Vec<Formula>,
    conclusion: Formula,
}

impl Argument {
    pub fn new(premises: impl IntoIterator<Item = Formula>, conclusion: Formula) -> Self {
        Argument {
            premises: premises.into_iter().collect(),
            conclusion,
        }
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }

    /// The single formula that is valid iff the argument is
    ///
    /// Premises are conjoined left to right and the conjunction implies the
    /// conclusion. With no premises the conjunction is empty (true), so the
    /// formula is just the conclusion.
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{Argument, Formula};
    ///
    /// let p = Formula::variable("p");
    /// let q = Formula::variable("q");
    /// let argument = Argument::new([p.clone(), p.implies(&q)], q.clone());
    /// assert_eq!(argument.to_formula().to_string(), "~(p * (~p + q)) + q");
    ///
    /// let no_premises = Argument::new([], q);
    /// assert_eq!(no_premises.to_formula().to_string(), "q");
    /// ```
    pub fn to_formula(&self) -> Formula {
        match self
            .premises
            .iter()
            .cloned()
            .reduce(|acc, premise| acc.and(&premise))
        {
            Some(premises) => premises.implies(&self.conclusion),
            None => self.conclusion.clone(),
        }
    }

    /// Parse an argument from text in the argument-file format
    pub fn parse(text: &str) -> Result<Self, LogicError> {
        Self::from_reader(text.as_bytes())
    }

    /// Read an argument from any `BufRead` source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LogicError> {
        let mut premises = Vec::new();
        let mut conclusion = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.strip_prefix(CONCLUSION_PREFIX) {
                Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                    if conclusion.is_some() {
                        return Err(LogicError::Malformed {
                            operation: "Argument::from_reader",
                            reason: format!("second conclusion on line {}", index + 1),
                        });
                    }
                    conclusion = Some(Formula::parse(rest.trim())?);
                }
                _ => {
                    if conclusion.is_some() {
                        return Err(LogicError::Malformed {
                            operation: "Argument::from_reader",
                            reason: format!("premise after the conclusion on line {}", index + 1),
                        });
                    }
                    premises.push(Formula::parse(line)?);
                }
            }
        }

        let conclusion = conclusion.ok_or_else(|| LogicError::Malformed {
            operation: "Argument::from_reader",
            reason: format!("no line starting with `{}`", CONCLUSION_PREFIX),
        })?;

        Ok(Argument::new(premises, conclusion))
    }

    /// Read an argument file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LogicError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl Checker {
    /// Whether the premises entail the conclusion
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{Checker, Formula};
    ///
    /// let p = Formula::variable("p");
    /// let q = Formula::variable("q");
    ///
    /// // Modus ponens
    /// let checker = Checker::new();
    /// assert!(checker.check_argument(&[p.clone(), p.not().or(&q)], &q).unwrap());
    ///
    /// // Affirming the consequent
    /// assert!(!checker.check_argument(&[q.clone(), p.implies(&q)], &p).unwrap());
    /// ```
    pub fn check_argument(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
    ) -> Result<bool, LogicError> {
        let argument = Argument::new(premises.iter().cloned(), conclusion.clone());
        self.check(&argument)
    }

    /// Whether an assembled [`Argument`] is valid
    pub fn check(&self, argument: &Argument) -> Result<bool, LogicError> {
        let valid = self.is_valid(&argument.to_formula())?;
        log::debug!(
            target: targets::ARGUMENT,
            "argument with {} premises is {}",
            argument.premises().len(),
            if valid { "valid" } else { "invalid" }
        );
        Ok(valid)
    }

    /// Whether the argument is valid and every premise holds under `assignment`
    ///
    /// An invalid argument is reported unsound without evaluating anything.
    /// Premises are evaluated in order until one is false; an atom of an
    /// evaluated premise missing from `assignment` is an error.
    pub fn is_sound(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
        assignment: &Assignment,
    ) -> Result<bool, LogicError> {
        if !self.check_argument(premises, conclusion)? {
            return Ok(false);
        }

        for (index, premise) in premises.iter().enumerate() {
            if !premise.evaluate(assignment)? {
                log::debug!(
                    target: targets::ARGUMENT,
                    "premise {} ({}) is false under the assignment",
                    index + 1,
                    premise
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Parse a truth assignment such as `p=true, q=0`
///
/// Values may be `true`/`false`, `t`/`f` or `1`/`0`, in any case. An empty
/// string is the empty assignment.
///
/// # Examples
///
/// ```
/// use propositions::parse_assignment;
///
/// let assignment = parse_assignment("p=true, q=0").unwrap();
/// assert_eq!(assignment.get("p"), Some(&true));
/// assert_eq!(assignment.get("q"), Some(&false));
/// ```
pub fn parse_assignment(text: &str) -> Result<Assignment, LogicError> {
    let mut assignment = Assignment::new();

    for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, value) = entry.split_once('=').ok_or_else(|| LogicError::Malformed {
            operation: "parse_assignment",
            reason: format!("expected `name=value`, found `{}`", entry),
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(LogicError::Malformed {
                operation: "parse_assignment",
                reason: format!("missing atom name in `{}`", entry),
            });
        }

        let value = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => true,
            "false" | "f" | "0" => false,
            other => {
                return Err(LogicError::Malformed {
                    operation: "parse_assignment",
                    reason: format!("`{}` is not a truth value", other),
                })
            }
        };

        assignment.insert(Arc::from(name), value);
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn var(name: &str) -> Formula {
        Formula::variable(name)
    }

    #[test]
    fn test_modus_ponens() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        assert!(checker
            .check_argument(&[p.clone(), p.not().or(&q)], &q)
            .unwrap());
    }

    #[test]
    fn test_modus_tollens() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        assert!(checker
            .check_argument(&[p.implies(&q), q.not()], &p.not())
            .unwrap());
    }

    #[test]
    fn test_denying_the_antecedent_is_invalid() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        assert!(!checker
            .check_argument(&[p.implies(&q), p.not()], &q.not())
            .unwrap());
    }

    #[test]
    fn test_no_premises_checks_conclusion() {
        let p = var("p");
        let checker = Checker::new();
        assert!(checker.check_argument(&[], &p.or(&p.not())).unwrap());
        assert!(!checker.check_argument(&[], &p).unwrap());
    }

    #[test]
    fn test_inconsistent_premises_entail_anything() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        assert!(checker.check_argument(&[p.clone(), p.not()], &q).unwrap());
    }

    #[test]
    fn test_sound_and_unsound() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();

        let truthful = parse_assignment("p=true").unwrap();
        assert!(checker
            .is_sound(&[p.clone()], &p.or(&q), &truthful)
            .unwrap());

        let false_premise = parse_assignment("p=false").unwrap();
        assert!(!checker
            .is_sound(&[p.clone()], &p.or(&q), &false_premise)
            .unwrap());
    }

    #[test]
    fn test_invalid_argument_is_unsound_without_evaluation() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        // Empty assignment: evaluating would fail, but validity fails first
        assert!(!checker
            .is_sound(&[q.clone()], &p, &Assignment::new())
            .unwrap());
    }

    #[test]
    fn test_sound_with_undefined_atom() {
        let (p, q) = (var("p"), var("q"));
        let checker = Checker::new();
        let assignment = parse_assignment("q=true").unwrap();
        let err = checker
            .is_sound(&[p.clone(), q.clone()], &p, &assignment)
            .unwrap_err();
        assert!(matches!(err, LogicError::UndefinedAtom { ref name } if &**name == "p"));
    }

    #[test]
    fn test_parse_argument() {
        let text = "# modus ponens\np\n\np -> q\ntherefore q\n";
        let argument = Argument::parse(text).unwrap();
        assert_eq!(argument.premises().len(), 2);
        assert_eq!(argument.conclusion(), &var("q"));
        assert!(Checker::new().check(&argument).unwrap());
    }

    #[test]
    fn test_parse_argument_errors() {
        assert!(matches!(
            Argument::parse("p\np -> q\n"),
            Err(LogicError::Malformed { .. })
        ));
        assert!(matches!(
            Argument::parse("therefore p\ntherefore q\n"),
            Err(LogicError::Malformed { .. })
        ));
        assert!(matches!(
            Argument::parse("therefore p\nq\n"),
            Err(LogicError::Malformed { .. })
        ));
        assert!(matches!(
            Argument::parse("p +\ntherefore p\n"),
            Err(LogicError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_argument_error_reasons() {
        match Argument::parse("therefore p\nq\n") {
            Err(LogicError::Malformed { operation, reason }) => {
                assert_eq!(operation, "Argument::from_reader");
                assert_eq!(reason, "premise after the conclusion on line 2");
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_atom_starting_with_prefix_is_a_premise() {
        let argument = Argument::parse("thereforex\ntherefore thereforex\n").unwrap();
        assert_eq!(argument.premises(), &[var("thereforex")]);
    }

    #[test]
    fn test_argument_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "p + q").unwrap();
        writeln!(file, "~p").unwrap();
        writeln!(file, "therefore q").unwrap();
        file.flush().unwrap();

        let argument = Argument::from_file(file.path()).unwrap();
        assert!(Checker::new().check(&argument).unwrap());
    }

    #[test]
    fn test_argument_from_missing_file() {
        assert!(matches!(
            Argument::from_file("/nonexistent/argument.txt"),
            Err(LogicError::Io(_))
        ));
    }

    #[test]
    fn test_parse_assignment_values() {
        let assignment = parse_assignment("a=T, b=f,c=1 ,d=0,e=FALSE").unwrap();
        assert_eq!(assignment.len(), 5);
        assert_eq!(assignment.get("a"), Some(&true));
        assert_eq!(assignment.get("b"), Some(&false));
        assert_eq!(assignment.get("c"), Some(&true));
        assert_eq!(assignment.get("d"), Some(&false));
        assert_eq!(assignment.get("e"), Some(&false));
        assert!(parse_assignment("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("p").is_err());
        assert!(parse_assignment("=true").is_err());
        assert!(parse_assignment("p=maybe").is_err());
    }
}
