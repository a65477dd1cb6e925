/*!
Targets for the [log] calls made by the library.

No logger is installed by the library itself; the `propositions` binary sets up
`env_logger`, so e.g. `RUST_LOG=cnf=trace` shows distribution steps.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [negation normal form](crate::normal_form::nnf)
    pub const NNF: &str = "nnf";

    /// Logs related to [conjunctive normal form](crate::normal_form::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to the [tautology check](crate::validity)
    pub const VALIDITY: &str = "validity";

    /// Logs related to [arguments](crate::argument)
    pub const ARGUMENT: &str = "argument";
}
