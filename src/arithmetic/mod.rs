//! The arithmetic expression tree: literals and variable references combined with
//! unary negation/absolute-value and the binary operators `+ − × / ⌊/⌋ mod ^`.
//!
//! Expressions are immutable and `Rc`-backed, so subexpressions can be shared between
//! multiple parents without cloning the tree. Every node carries its free set (the
//! names of the variables it transitively depends on), computed once at construction.

mod coercion;
mod node;
mod ops;

pub use coercion::IntoArith;

use std::collections::HashSet;
use std::rc::Rc;

use crate::basic_types::SolverError;
use crate::basic_types::Value;
use crate::boolean::BoolExpr;
use crate::boolean::Comparison;
use node::ArithNode;

/// A node in the arithmetic expression tree.
///
/// Clone is `Rc`-cheap: cloning an `ArithExpr` shares the underlying tree rather than
/// copying it.
#[derive(Debug, Clone)]
pub struct ArithExpr {
    node: Rc<ArithNode>,
    free: Rc<HashSet<String>>,
}

impl ArithExpr {
    fn leaf(node: ArithNode, free: HashSet<String>) -> ArithExpr {
        ArithExpr {
            node: Rc::new(node),
            free: Rc::new(free),
        }
    }

    fn unary(node: ArithNode, operand: &ArithExpr) -> ArithExpr {
        ArithExpr {
            node: Rc::new(node),
            free: Rc::clone(&operand.free),
        }
    }

    fn binary(node: ArithNode, lhs: &ArithExpr, rhs: &ArithExpr) -> ArithExpr {
        let free: HashSet<String> = lhs.free.union(&rhs.free).cloned().collect();
        ArithExpr {
            node: Rc::new(node),
            free: Rc::new(free),
        }
    }

    /// A constant expression.
    pub fn constant(value: impl Into<Value>) -> ArithExpr {
        ArithExpr::leaf(ArithNode::Const(value.into()), HashSet::new())
    }

    /// The set of variable names this expression transitively depends on.
    pub fn free_set(&self) -> &HashSet<String> {
        &self.free
    }

    /// Walk the tree collecting every referenced variable's name and (if bound)
    /// domain, used by [`crate::Solver`] to auto-register variables referenced in an
    /// expression without requiring an explicit `add_variables` call.
    pub(crate) fn collect_var_domains(&self, out: &mut Vec<(String, Option<crate::variables::Domain>)>) {
        match self.node.as_ref() {
            ArithNode::Const(_) => {}
            ArithNode::VarRef(name, domain) => out.push((name.clone(), domain.clone())),
            ArithNode::Neg(e) | ArithNode::Abs(e) => e.collect_var_domains(out),
            ArithNode::Add(l, r)
            | ArithNode::Sub(l, r)
            | ArithNode::Mul(l, r)
            | ArithNode::Div(l, r)
            | ArithNode::FloorDiv(l, r)
            | ArithNode::Mod(l, r)
            | ArithNode::Pow(l, r) => {
                l.collect_var_domains(out);
                r.collect_var_domains(out);
            }
        }
    }

    /// Evaluate this expression against a (possibly partial) assignment.
    ///
    /// # Errors
    /// Returns [`EvalError::MissingVariable`] if a variable this expression depends
    /// on is absent from `assignment`, or [`EvalError::Fatal`] on division/modulus by
    /// zero. Callers evaluating a boolean predicate over a partial assignment should
    /// use [`BoolExpr::eval_partial`] instead, which treats a missing variable as
    /// "not yet decidable" rather than an error.
    pub fn eval(&self, assignment: &Assignment) -> Result<Value, EvalError> {
        match self.node.as_ref() {
            ArithNode::Const(v) => Ok(*v),
            ArithNode::VarRef(name, _) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::MissingVariable(name.clone())),
            ArithNode::Neg(e) => Ok(e.eval(assignment)?.neg()),
            ArithNode::Abs(e) => Ok(e.eval(assignment)?.abs()),
            ArithNode::Add(l, r) => Ok(l.eval(assignment)?.add(r.eval(assignment)?)),
            ArithNode::Sub(l, r) => Ok(l.eval(assignment)?.sub(r.eval(assignment)?)),
            ArithNode::Mul(l, r) => Ok(l.eval(assignment)?.mul(r.eval(assignment)?)),
            ArithNode::Div(l, r) => Ok(l.eval(assignment)?.div(r.eval(assignment)?)?),
            ArithNode::FloorDiv(l, r) => Ok(l.eval(assignment)?.floor_div(r.eval(assignment)?)?),
            ArithNode::Mod(l, r) => Ok(l.eval(assignment)?.modulo(r.eval(assignment)?)?),
            ArithNode::Pow(l, r) => Ok(l.eval(assignment)?.pow(r.eval(assignment)?)),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> ArithExpr {
        ArithExpr::unary(ArithNode::Abs(self.clone()), self)
    }

    /// Floored integer division (`self.floor_div(other)` rounds towards negative
    /// infinity, unlike `/` which is exact/real division).
    pub fn floor_div(&self, other: impl IntoArith) -> ArithExpr {
        let other = other.into_arith();
        ArithExpr::binary(ArithNode::FloorDiv(self.clone(), other.clone()), self, &other)
    }

    /// Modulus (Euclidean remainder, always non-negative for a positive modulus).
    pub fn modulo(&self, other: impl IntoArith) -> ArithExpr {
        let other = other.into_arith();
        ArithExpr::binary(ArithNode::Mod(self.clone(), other.clone()), self, &other)
    }

    /// Exponentiation.
    pub fn pow(&self, other: impl IntoArith) -> ArithExpr {
        let other = other.into_arith();
        ArithExpr::binary(ArithNode::Pow(self.clone(), other.clone()), self, &other)
    }

    fn comparison(&self, other: impl IntoArith, op: Comparison) -> BoolExpr {
        BoolExpr::comparison(self.clone(), other.into_arith(), op)
    }

    /// `self = other`.
    pub fn eq(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Eq)
    }

    /// `self ≠ other`.
    pub fn ne(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Ne)
    }

    /// `self < other`.
    pub fn lt(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Lt)
    }

    /// `self ≤ other`.
    pub fn le(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Le)
    }

    /// `self > other`.
    pub fn gt(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Gt)
    }

    /// `self ≥ other`.
    pub fn ge(&self, other: impl IntoArith) -> BoolExpr {
        self.comparison(other, Comparison::Ge)
    }
}

/// An assignment of values to variable names, the common currency between
/// expressions, boolean predicates, and the solver.
pub type Assignment = std::collections::HashMap<String, Value>;

/// The error produced by evaluating an expression: either a fatal arithmetic error or
/// a variable absent from the assignment.
///
/// The solver's consistency check converts `MissingVariable` into
/// [`crate::boolean::Satisfied::Undetermined`] rather than surfacing it; any other
/// evaluation path (complete-assignment scoring, direct `eval` calls) propagates it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The expression references a variable not present in the assignment.
    #[error("assignment is missing variable `{0}`")]
    MissingVariable(String),
    /// A fatal arithmetic error (division or modulus by zero).
    #[error(transparent)]
    Fatal(#[from] SolverError),
}
