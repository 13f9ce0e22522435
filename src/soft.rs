//! Soft constraints and objectives: the scoring vocabulary a [`crate::Solver`]
//! optimises over once every hard constraint is satisfied.

use crate::arithmetic::ArithExpr;
use crate::arithmetic::Assignment;
use crate::arithmetic::EvalError;
use crate::boolean::BoolExpr;

/// A boolean predicate whose violation contributes a penalty, rather than pruning
/// the search outright.
#[derive(Debug, Clone)]
pub struct Soft {
    predicate: BoolExpr,
    penalty: i64,
    weight: f64,
    name: String,
}

impl Soft {
    pub(crate) fn new(predicate: BoolExpr, penalty: i64, weight: f64, name: Option<String>) -> Soft {
        let name = name.unwrap_or_else(|| predicate.name().to_owned());
        Soft {
            predicate,
            penalty,
            weight,
            name,
        }
    }

    /// This soft constraint's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The predicate this soft constraint wraps.
    pub fn predicate(&self) -> &BoolExpr {
        &self.predicate
    }

    /// `0` if satisfied under `assignment`, `self.penalty` otherwise.
    pub fn cost(&self, assignment: &Assignment) -> Result<i64, EvalError> {
        Ok(if self.predicate.eval(assignment)? { 0 } else { self.penalty })
    }

    /// `0.0` if satisfied under `assignment`, `penalty * weight` otherwise.
    pub fn weighted_cost(&self, assignment: &Assignment) -> Result<f64, EvalError> {
        Ok(if self.predicate.eval(assignment)? {
            0.0
        } else {
            self.penalty as f64 * self.weight
        })
    }
}

/// The optimisation sense of an [`Objective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Larger values of the expression are preferred.
    Maximize,
    /// Smaller values of the expression are preferred.
    Minimize,
}

impl Sense {
    /// `+1` for [`Sense::Maximize`], `-1` for [`Sense::Minimize`]: the multiplier
    /// applied to an evaluated expression before comparison.
    pub fn multiplier(self) -> f64 {
        match self {
            Sense::Maximize => 1.0,
            Sense::Minimize => -1.0,
        }
    }
}

/// An expression tagged with a sense and a weight, contributing one component to a
/// solver's score.
#[derive(Debug, Clone)]
pub struct Objective {
    expr: ArithExpr,
    sense: Sense,
    weight: f64,
}

impl Objective {
    pub(crate) fn new(expr: ArithExpr, sense: Sense, weight: f64) -> Objective {
        Objective { expr, sense, weight }
    }

    /// The wrapped expression.
    pub fn expr(&self) -> &ArithExpr {
        &self.expr
    }

    /// This objective's sense.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// This objective's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
