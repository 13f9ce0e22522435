//! Named decision variables and the finite domains bound to them.
//!
//! A [`Variable`] is built through [`var`] (general) or [`bool_var`] (the `{0,1}`
//! convenience), then bound to a domain with one of [`VariableBuilder::int_range`],
//! [`VariableBuilder::values`], or [`VariableBuilder::float_range`]. The domain must
//! be bound before the variable is registered with a [`crate::Solver`]; once
//! registered, further mutation of the originating [`Variable`] is not observed.

mod domain;

pub use domain::Domain;

use crate::arithmetic::ArithExpr;
use crate::basic_types::SolverError;
use crate::basic_types::Value;
use crate::boolean::BoolExpr;

/// A named finite-domain decision variable.
///
/// Cloning a `Variable` is cheap (the domain is reference-counted internally through
/// [`Domain`]) and is how the same variable is referenced from multiple expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    domain: Option<Domain>,
}

impl Variable {
    /// Construct a variable with a domain already bound, used by
    /// [`crate::Solver`] when recovering a variable from an expression tree.
    pub(crate) fn bound(name: impl Into<String>, domain: Domain) -> Self {
        Variable {
            name: name.into(),
            domain: Some(domain),
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's domain, if it has been bound.
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    /// `true` if this variable's domain is exactly `{0, 1}`, making it usable
    /// directly wherever a boolean expression is expected.
    pub fn is_boolean(&self) -> bool {
        match &self.domain {
            Some(domain) => domain.values() == [Value::Int(0), Value::Int(1)],
            None => false,
        }
    }

    /// Coerce this variable into the boolean expression `self = 1`.
    ///
    /// # Errors
    /// Returns [`SolverError::TypeError`] if the variable's domain is not exactly
    /// `{0, 1}`.
    pub fn as_bool_expr(&self) -> Result<BoolExpr, SolverError> {
        if self.is_boolean() {
            Ok(ArithExpr::from(self.clone()).eq(1_i64))
        } else {
            Err(SolverError::TypeError(format!(
                "variable `{}` is not a {{0,1}} variable and cannot be used as a boolean",
                self.name
            )))
        }
    }
}

/// A variable under construction: a name with no domain bound yet.
///
/// Returned by [`var`]; call one of its binding methods to produce a [`Variable`].
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    name: String,
}

impl VariableBuilder {
    /// Bind a closed integer interval `[lo, hi]`. `lo > hi` produces an empty domain,
    /// which is accepted: the solver will simply treat any problem using it as
    /// infeasible.
    pub fn int_range(self, lo: i64, hi: i64) -> Variable {
        Variable {
            domain: Some(Domain::from_interval(lo, hi)),
            name: self.name,
        }
    }

    /// Bind an explicit set of values, deduplicated while preserving the order of
    /// first occurrence.
    pub fn values(self, values: impl IntoIterator<Item = i64>) -> Variable {
        Variable {
            domain: Some(Domain::from_set(values)),
            name: self.name,
        }
    }

    /// Bind a stepped floating-point range `[lo, hi]` with step `step`, producing
    /// `lo, lo+step, lo+2*step, …` up to and including the last value `<= hi`.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidDomain`] if `step` is not strictly positive.
    pub fn float_range(self, lo: f64, hi: f64, step: f64) -> Result<Variable, SolverError> {
        Ok(Variable {
            domain: Some(Domain::from_stepped_range(lo, hi, step).map_err(|reason| {
                SolverError::InvalidDomain {
                    name: self.name.clone(),
                    reason,
                }
            })?),
            name: self.name,
        })
    }
}

/// Start building a variable with the given name.
///
/// ```
/// # use parsnip::variables::var;
/// let x = var("x").int_range(1, 9);
/// assert_eq!(x.name(), "x");
/// ```
pub fn var(name: impl Into<String>) -> VariableBuilder {
    VariableBuilder { name: name.into() }
}

/// Create a boolean variable: a convenience for `var(name).values([0, 1])`.
pub fn bool_var(name: impl Into<String>) -> Variable {
    var(name).values([0, 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_variable_is_recognised() {
        let b = bool_var("b");
        assert!(b.is_boolean());
        assert!(b.as_bool_expr().is_ok());
    }

    #[test]
    fn non_boolean_variable_rejects_coercion() {
        let x = var("x").int_range(0, 5);
        assert!(!x.is_boolean());
        assert!(matches!(
            x.as_bool_expr(),
            Err(SolverError::TypeError(_))
        ));
    }

    #[test]
    fn empty_interval_is_accepted() {
        let x = var("x").int_range(5, 1);
        assert_eq!(x.domain().unwrap().values().len(), 0);
    }
}
