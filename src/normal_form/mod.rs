//! Normal-form transforms
//!
//! - [`nnf`] pushes negations down to the atoms.
//! - [`cnf`] distributes disjunction over conjunction on an NNF formula.
//! - [`Clause`] is the flat view of one conjunct of a CNF formula.
//!
//! Both transforms build new trees bottom-up; their input is only read. Each
//! call runs under a [`NormalFormConfig`] that bounds recursion depth and the
//! number of nodes created, so a pathological input fails with
//! [`LogicError::ResourceExhausted`] instead of overflowing the stack.

mod clause;
pub mod cnf;
pub mod nnf;

pub use clause::{clauses, Clause};

use crate::error::{LogicError, Resource};

/// Limits applied to a single normal-form transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalFormConfig {
    /// Deepest recursion a transform may reach
    pub max_depth: usize,
    /// Most nodes a single CNF conversion may create
    pub max_nodes: usize,
}

impl Default for NormalFormConfig {
    fn default() -> Self {
        NormalFormConfig {
            max_depth: 2048,
            max_nodes: 1_000_000,
        }
    }
}

impl NormalFormConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recursion depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the node limit
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

/// Per-call accounting against a [`NormalFormConfig`]
#[derive(Debug)]
pub(crate) struct Budget<'a> {
    config: &'a NormalFormConfig,
    nodes: usize,
}

impl<'a> Budget<'a> {
    pub(crate) fn new(config: &'a NormalFormConfig) -> Self {
        Budget { config, nodes: 0 }
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), LogicError> {
        if depth > self.config.max_depth {
            return Err(LogicError::ResourceExhausted {
                resource: Resource::Depth,
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Record one freshly created node
    pub(crate) fn allocate(&mut self) -> Result<(), LogicError> {
        self.nodes += 1;
        if self.nodes > self.config.max_nodes {
            return Err(LogicError::ResourceExhausted {
                resource: Resource::Nodes,
                limit: self.config.max_nodes,
            });
        }
        Ok(())
    }

    pub(crate) fn nodes(&self) -> usize {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalFormConfig::new();
        assert_eq!(config.max_depth, 2048);
        assert_eq!(config.max_nodes, 1_000_000);
    }

    #[test]
    fn test_budget_depth() {
        let config = NormalFormConfig::new().with_max_depth(3);
        let budget = Budget::new(&config);
        assert!(budget.check_depth(3).is_ok());
        assert!(matches!(
            budget.check_depth(4),
            Err(LogicError::ResourceExhausted {
                resource: Resource::Depth,
                limit: 3
            })
        ));
    }

    #[test]
    fn test_budget_nodes() {
        let config = NormalFormConfig::new().with_max_nodes(2);
        let mut budget = Budget::new(&config);
        assert!(budget.allocate().is_ok());
        assert!(budget.allocate().is_ok());
        assert_eq!(budget.nodes(), 2);
        assert!(matches!(
            budget.allocate(),
            Err(LogicError::ResourceExhausted {
                resource: Resource::Nodes,
                ..
            })
        ));
    }
}
