//! The [`ObjectiveMode`] a [`crate::Solver`] is configured with at construction.

use std::convert::TryFrom;
use std::str::FromStr;

use crate::basic_types::SolverError;

/// How a solver aggregates multiple registered objectives into a single score used
/// for the "is this assignment better than the current best" comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectiveMode {
    /// Compare objective vectors element-wise, in registration order, preferring the
    /// element-wise greater one. The objective vector is preserved in the solution.
    #[default]
    Lex,
    /// Aggregate objectives (and soft-constraint penalties) into a single weighted
    /// real number and compare that.
    Sum,
}

impl FromStr for ObjectiveMode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lex" => Ok(ObjectiveMode::Lex),
            "sum" => Ok(ObjectiveMode::Sum),
            other => Err(SolverError::InvalidMode(other.to_owned())),
        }
    }
}

impl TryFrom<&str> for ObjectiveMode {
    type Error = SolverError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("lex".parse::<ObjectiveMode>().unwrap(), ObjectiveMode::Lex);
        assert_eq!("sum".parse::<ObjectiveMode>().unwrap(), ObjectiveMode::Sum);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert_eq!(
            "lexicographic".parse::<ObjectiveMode>(),
            Err(SolverError::InvalidMode("lexicographic".to_owned()))
        );
    }

    #[test]
    fn default_is_lex() {
        assert_eq!(ObjectiveMode::default(), ObjectiveMode::Lex);
    }
}
