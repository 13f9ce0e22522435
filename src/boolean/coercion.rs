use crate::basic_types::SolverError;
use crate::boolean::BoolExpr;
use crate::variables::Variable;

/// The coercion entry point for logical connectives: lifts a [`BoolExpr`] or a
/// `{0,1}` [`Variable`] into a [`BoolExpr`]. Mixing in an unbounded arithmetic
/// expression without a comparison does not implement this trait, so it fails to
/// compile rather than raising a runtime type error.
pub trait IntoBool {
    /// Lift `self` into a boolean expression.
    ///
    /// # Panics
    /// Coercing a [`Variable`] whose domain is not exactly `{0, 1}` panics, because
    /// operator-overloaded logical connectives (`&`, `|`, `^`, `!`) have no room to
    /// return a `Result`. Prefer [`TryIntoBool`] (or [`Variable::as_bool_expr`]
    /// directly) when the variable's domain is not statically known to be boolean.
    fn into_bool(self) -> BoolExpr;
}

impl IntoBool for BoolExpr {
    fn into_bool(self) -> BoolExpr {
        self
    }
}

impl IntoBool for &BoolExpr {
    fn into_bool(self) -> BoolExpr {
        self.clone()
    }
}

impl IntoBool for Variable {
    fn into_bool(self) -> BoolExpr {
        (&self).into_bool()
    }
}

impl IntoBool for &Variable {
    fn into_bool(self) -> BoolExpr {
        self.as_bool_expr().unwrap_or_else(|e| panic!("{e}"))
    }
}

/// The fallible counterpart to [`IntoBool`], used at call sites that already return a
/// `Result` (such as [`crate::Solver::require`]/[`crate::Solver::prefer`]) so a
/// non-`{0,1}` variable surfaces [`SolverError::TypeError`] instead of panicking.
pub trait TryIntoBool {
    /// Lift `self` into a boolean expression, or report why it cannot be.
    fn try_into_bool(self) -> Result<BoolExpr, SolverError>;
}

impl TryIntoBool for BoolExpr {
    fn try_into_bool(self) -> Result<BoolExpr, SolverError> {
        Ok(self)
    }
}

impl TryIntoBool for &BoolExpr {
    fn try_into_bool(self) -> Result<BoolExpr, SolverError> {
        Ok(self.clone())
    }
}

impl TryIntoBool for Variable {
    fn try_into_bool(self) -> Result<BoolExpr, SolverError> {
        self.as_bool_expr()
    }
}

impl TryIntoBool for &Variable {
    fn try_into_bool(self) -> Result<BoolExpr, SolverError> {
        self.as_bool_expr()
    }
}
