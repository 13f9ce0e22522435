use thiserror::Error;

/// The closed set of fatal conditions that can arise while building or solving a
/// problem. Every fallible operation in this crate returns one of these variants
/// rather than a bag of ad-hoc strings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A domain was specified in an unsupported form, e.g. a stepped range with a
    /// non-positive step.
    #[error("invalid domain for variable `{name}`: {reason}")]
    InvalidDomain {
        /// The variable whose domain was rejected.
        name: String,
        /// Why the domain was rejected.
        reason: String,
    },

    /// A variable reachable from an installed expression has no domain bound.
    #[error("variable `{name}` is missing a domain")]
    MissingDomain {
        /// The variable with no domain.
        name: String,
    },

    /// An operator was applied to an operand that cannot be coerced the way it was
    /// used, e.g. a non-`{0,1}` variable used directly as a boolean.
    #[error("type error: {0}")]
    TypeError(String),

    /// An unknown objective mode string was supplied to a string-configured solver
    /// constructor.
    #[error("invalid objective mode `{0}`, expected \"lex\" or \"sum\"")]
    InvalidMode(String),

    /// Evaluating an arithmetic expression divided by zero.
    #[error("division by zero while evaluating expression")]
    DivisionByZero,

    /// Evaluating an arithmetic expression took the remainder modulo zero.
    #[error("modulus by zero while evaluating expression")]
    ModulusByZero,

    /// The search space was exhausted without finding a feasible assignment.
    #[error("no feasible solution")]
    NoFeasibleSolution,

    /// The configured time budget elapsed before the search could conclude.
    #[error("solver timed out before reaching a conclusion")]
    Timeout,
}
