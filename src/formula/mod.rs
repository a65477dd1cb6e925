//! Propositional formula trees
//!
//! A [`Formula`] is a closed sum type over three shapes: a named atom, a negation
//! and a binary connective (conjunction or disjunction). Children are held behind
//! [`Arc`], and no method ever writes into an existing node, so subtrees may be
//! shared freely between formulas and across threads.
//!
//! # Construction
//!
//! ```
//! use propositions::{prop, Formula};
//!
//! // Method API
//! let p = Formula::variable("p");
//! let q = Formula::variable("q");
//! let f1 = p.and(&q.not()).or(&p.implies(&q));
//!
//! // Operator overloading
//! let f2 = &p * !&q + &p;
//!
//! // The prop! macro (`->` is implication)
//! let f3 = prop!(p * !q + (p -> q));
//! assert_eq!(f1, f3);
//! # let _ = f2;
//! ```
//!
//! # Parsing
//!
//! ```
//! use propositions::Formula;
//!
//! # fn main() -> std::io::Result<()> {
//! let f = Formula::parse("(p | q) & ~(p -> r)")?;
//! println!("{}", f);  // (p + q) * ~(~p + r)
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod operators;
mod parser;

pub use error::FormulaParseError;
pub use eval::{Assignment, MAX_TRUTH_TABLE_ATOMS};

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// Stack space to keep free before descending into a subtree (32 KB)
pub(crate) const MIN_STACK_RED_ZONE: usize = 32 * 1024;

/// Size of each extra stack segment when running low (1 MB)
pub(crate) const STACK_GROWTH_SIZE: usize = 1024 * 1024;

/// The binary connectives a [`Formula`] can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Conjunction
    And,
    /// Disjunction
    Or,
}

impl Connective {
    /// The De Morgan dual: `And` becomes `Or` and vice versa
    pub fn dual(self) -> Self {
        match self {
            Connective::And => Connective::Or,
            Connective::Or => Connective::And,
        }
    }
}

/// A propositional formula
///
/// Two variables denote the same atom iff their names are equal. Equality on
/// `Formula` is structural, so `p * q` and `q * p` are different values.
///
/// Equality, hashing and dropping walk the tree without recursion, so a
/// formula of any depth can be compared and freed.
#[derive(Clone)]
pub enum Formula {
    /// An atomic proposition identified by name
    Variable(Arc<str>),
    /// Negation of a sub-formula
    Not(Arc<Formula>),
    /// A conjunction or disjunction of two sub-formulas
    Connective(Connective, Arc<Formula>, Arc<Formula>),
}

/// Node type for formula tree folding
///
/// Used with [`Formula::fold`]; `T` is the result already computed for the
/// children of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Negation with the result from the inner subtree
    Not(T),
    /// Connective with results from the left and right subtrees
    Connective(Connective, T, T),
}

impl Formula {
    /// Create a variable with the given name
    pub fn variable(name: &str) -> Self {
        Formula::Variable(Arc::from(name))
    }

    /// Wrap this formula in a negation
    ///
    /// Unlike [`Formula::negate`] this never collapses anything: `p.not().not()`
    /// is a double negation.
    pub fn not(&self) -> Formula {
        Formula::Not(Arc::new(self.clone()))
    }

    /// The opposite of this formula without stacking negations
    ///
    /// `~x` becomes `x`; anything else is wrapped in `Not`.
    ///
    /// ```
    /// use propositions::Formula;
    ///
    /// let p = Formula::variable("p");
    /// assert_eq!(p.negate().negate(), p);
    /// assert_eq!(p.not().not().negate(), p.not());
    /// ```
    pub fn negate(&self) -> Formula {
        match self {
            Formula::Not(inner) => inner.as_ref().clone(),
            _ => self.not(),
        }
    }

    /// Conjunction of this formula and another
    pub fn and(&self, other: &Formula) -> Formula {
        Formula::connect(Connective::And, self.clone(), other.clone())
    }

    /// Disjunction of this formula and another
    pub fn or(&self, other: &Formula) -> Formula {
        Formula::connect(Connective::Or, self.clone(), other.clone())
    }

    /// Material implication, encoded as `~self + other`
    pub fn implies(&self, other: &Formula) -> Formula {
        self.negate().or(other)
    }

    /// Join two owned formulas with a connective
    pub fn connect(kind: Connective, left: Formula, right: Formula) -> Formula {
        Formula::Connective(kind, Arc::new(left), Arc::new(right))
    }

    /// Whether this is a variable or the negation of a variable
    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// Split a literal into its atom name and polarity (`true` for positive)
    pub fn as_literal(&self) -> Option<(&Arc<str>, bool)> {
        match self {
            Formula::Variable(name) => Some((name, true)),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Variable(name) => Some((name, false)),
                _ => None,
            },
            Formula::Connective(..) => None,
        }
    }

    /// All atom names occurring in the formula, sorted
    pub fn atoms(&self) -> BTreeSet<Arc<str>> {
        let mut atoms = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Formula::Variable(name) => {
                    atoms.insert(Arc::clone(name));
                }
                Formula::Not(inner) => stack.push(inner),
                Formula::Connective(_, left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        atoms
    }

    /// Height of the tree; a lone variable has depth 1
    pub fn depth(&self) -> usize {
        self.fold(|node: FormulaNode<usize>| match node {
            FormulaNode::Variable(_) => 1,
            FormulaNode::Not(inner) => inner + 1,
            FormulaNode::Connective(_, l, r) => l.max(r) + 1,
        })
    }

    /// Number of nodes in the tree, counting shared subtrees once per occurrence
    pub fn node_count(&self) -> usize {
        self.fold(|node: FormulaNode<usize>| match node {
            FormulaNode::Variable(_) => 1,
            FormulaNode::Not(inner) => inner + 1,
            FormulaNode::Connective(_, l, r) => l + r + 1,
        })
    }

    /// Fold the formula tree depth-first from leaves to root
    ///
    /// # Examples
    ///
    /// Count the connectives in a formula:
    ///
    /// ```
    /// use propositions::{Formula, FormulaNode};
    ///
    /// let f = Formula::parse("p * (q + ~r)").unwrap();
    /// let connectives = f.fold(|node| match node {
    ///     FormulaNode::Variable(_) => 0,
    ///     FormulaNode::Not(inner) => inner,
    ///     FormulaNode::Connective(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(connectives, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(FormulaNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(FormulaNode<T>) -> T,
    {
        stacker::maybe_grow(MIN_STACK_RED_ZONE, STACK_GROWTH_SIZE, || match self {
            Formula::Variable(name) => f(FormulaNode::Variable(name)),
            Formula::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(FormulaNode::Not(inner_result))
            }
            Formula::Connective(kind, left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(FormulaNode::Connective(*kind, left_result, right_result))
            }
        })
    }

    /// Move uniquely owned compound children into `pending`
    ///
    /// Each detached child is replaced by a shared leaf, so dropping `self`
    /// afterwards frees nothing below it.
    fn detach_children(&mut self, pending: &mut Vec<Arc<Formula>>) {
        match self {
            Formula::Variable(_) => {}
            Formula::Not(inner) => detach(inner, pending),
            Formula::Connective(_, left, right) => {
                detach(left, pending);
                detach(right, pending);
            }
        }
    }
}

fn detach(child: &mut Arc<Formula>, pending: &mut Vec<Arc<Formula>>) {
    static LEAF: OnceLock<Arc<Formula>> = OnceLock::new();

    let compound = !matches!(child.as_ref(), Formula::Variable(_));
    if compound && Arc::get_mut(child).is_some() {
        let leaf = LEAF.get_or_init(|| Arc::new(Formula::Variable(Arc::from(""))));
        pending.push(std::mem::replace(child, Arc::clone(leaf)));
    }
}

impl Drop for Formula {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                node.detach_children(&mut pending);
            }
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Formula) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            match (a, b) {
                (Formula::Variable(x), Formula::Variable(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Formula::Not(x), Formula::Not(y)) => {
                    if !Arc::ptr_eq(x, y) {
                        pairs.push((x.as_ref(), y.as_ref()));
                    }
                }
                (Formula::Connective(k1, l1, r1), Formula::Connective(k2, l2, r2)) => {
                    if k1 != k2 {
                        return false;
                    }
                    if !Arc::ptr_eq(r1, r2) {
                        pairs.push((r1.as_ref(), r2.as_ref()));
                    }
                    if !Arc::ptr_eq(l1, l2) {
                        pairs.push((l1.as_ref(), l2.as_ref()));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            std::mem::discriminant(node).hash(state);
            match node {
                Formula::Variable(name) => name.hash(state),
                Formula::Not(inner) => stack.push(inner),
                Formula::Connective(kind, left, right) => {
                    kind.hash(state);
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
    }
}
