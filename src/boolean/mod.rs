//! The boolean expression tree: comparisons between arithmetic expressions, boolean
//! variables coerced as "value equals 1", and the logical connectives `¬ ∧ ∨ ⊕ →`.
//!
//! Like [`crate::arithmetic::ArithExpr`], a [`BoolExpr`] is immutable and
//! `Rc`-backed. Every node carries a free set and an optional display name (default
//! `<anon>`), which [`BoolExpr::named`] can rewrite without touching the semantics.

mod coercion;
mod node;
mod ops;

pub use coercion::IntoBool;
pub use coercion::TryIntoBool;

use std::collections::HashSet;
use std::rc::Rc;

use crate::arithmetic::ArithExpr;
use crate::arithmetic::Assignment;
use crate::arithmetic::EvalError;
use node::BoolNode;

/// A comparison operator between two arithmetic expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `=`
    Eq,
    /// `≠`
    Ne,
    /// `<`
    Lt,
    /// `≤`
    Le,
    /// `>`
    Gt,
    /// `≥`
    Ge,
}

impl Comparison {
    fn holds(self, lhs: crate::basic_types::Value, rhs: crate::basic_types::Value) -> bool {
        match self {
            Comparison::Eq => lhs == rhs,
            Comparison::Ne => lhs != rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Gt => lhs > rhs,
            Comparison::Ge => lhs >= rhs,
        }
    }
}

/// The three-valued result of evaluating a [`BoolExpr`] against a partial
/// assignment: `Undetermined` means "not yet decidable", not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfied {
    /// The predicate holds under this (possibly partial) assignment.
    True,
    /// The predicate does not hold; for a hard constraint, this prunes the branch.
    False,
    /// Not enough of the assignment is filled in to decide yet.
    Undetermined,
}

impl Satisfied {
    /// `true` for [`Satisfied::False`], the only outcome that prunes a partial
    /// assignment during search.
    pub fn is_false(self) -> bool {
        matches!(self, Satisfied::False)
    }
}

/// A node in the boolean expression tree.
#[derive(Debug, Clone)]
pub struct BoolExpr {
    node: Rc<BoolNode>,
    free: Rc<HashSet<String>>,
    name: Rc<str>,
}

const ANONYMOUS: &str = "<anon>";

impl BoolExpr {
    fn with_name(node: BoolNode, free: HashSet<String>, name: Rc<str>) -> BoolExpr {
        BoolExpr {
            node: Rc::new(node),
            free: Rc::new(free),
            name,
        }
    }

    fn anonymous(node: BoolNode, free: HashSet<String>) -> BoolExpr {
        BoolExpr::with_name(node, free, Rc::from(ANONYMOUS))
    }

    pub(crate) fn comparison(lhs: ArithExpr, rhs: ArithExpr, op: Comparison) -> BoolExpr {
        let free: HashSet<String> = lhs.free_set().union(rhs.free_set()).cloned().collect();
        BoolExpr::anonymous(BoolNode::Comparison(lhs, rhs, op), free)
    }

    /// A boolean expression that is always true.
    pub fn always_true() -> BoolExpr {
        BoolExpr::with_name(BoolNode::Const(true), HashSet::new(), Rc::from("true"))
    }

    /// A boolean expression that is always false.
    pub fn always_false() -> BoolExpr {
        BoolExpr::with_name(BoolNode::Const(false), HashSet::new(), Rc::from("false"))
    }

    /// This expression's display name (`<anon>` unless set through [`Self::named`]).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set of variable names this expression transitively depends on.
    pub fn free_set(&self) -> &HashSet<String> {
        &self.free
    }

    /// Walk the tree collecting every referenced variable's name and (if bound)
    /// domain, used by [`crate::Solver`] to auto-register variables referenced in a
    /// predicate without requiring an explicit `add_variables` call.
    pub(crate) fn collect_var_domains(&self, out: &mut Vec<(String, Option<crate::variables::Domain>)>) {
        match self.node.as_ref() {
            BoolNode::Const(_) => {}
            BoolNode::Comparison(lhs, rhs, _) => {
                lhs.collect_var_domains(out);
                rhs.collect_var_domains(out);
            }
            BoolNode::Not(e) => e.collect_var_domains(out),
            BoolNode::And(l, r) | BoolNode::Or(l, r) | BoolNode::Xor(l, r) | BoolNode::Implies(l, r) => {
                l.collect_var_domains(out);
                r.collect_var_domains(out);
            }
        }
    }

    /// Return a copy of this expression with a different display name. The
    /// underlying predicate is unchanged (the tree is shared, not rebuilt).
    pub fn named(&self, name: impl Into<String>) -> BoolExpr {
        BoolExpr {
            node: Rc::clone(&self.node),
            free: Rc::clone(&self.free),
            name: Rc::from(name.into().as_str()),
        }
    }

    /// Implication: `self → other`.
    pub fn implies(&self, other: impl IntoBool) -> BoolExpr {
        let other = other.into_bool();
        let free: HashSet<String> = self.free.union(&other.free).cloned().collect();
        BoolExpr::anonymous(BoolNode::Implies(self.clone(), other), free)
    }

    /// Evaluate against a complete assignment, returning a plain boolean.
    ///
    /// # Errors
    /// Returns [`EvalError::MissingVariable`] if a variable this expression depends
    /// on is absent, or [`EvalError::Fatal`] on a fatal arithmetic error. A complete
    /// assignment produced by the solver never triggers the former.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self.eval_partial(assignment)? {
            Satisfied::True => Ok(true),
            Satisfied::False => Ok(false),
            Satisfied::Undetermined => Err(EvalError::MissingVariable(
                self.free
                    .iter()
                    .find(|name| !assignment.contains_key(name.as_str()))
                    .cloned()
                    .unwrap_or_else(|| "<unknown>".to_owned()),
            )),
        }
    }

    /// Evaluate against a (possibly partial) assignment, returning a three-valued
    /// [`Satisfied`]. A variable missing from `assignment` makes the relevant
    /// sub-result [`Satisfied::Undetermined`] rather than an error; a fatal
    /// arithmetic error (division/modulus by zero) still propagates as an error.
    pub fn eval_partial(&self, assignment: &Assignment) -> Result<Satisfied, crate::basic_types::SolverError> {
        match self.node.as_ref() {
            BoolNode::Const(b) => Ok(if *b { Satisfied::True } else { Satisfied::False }),
            BoolNode::Comparison(lhs, rhs, op) => {
                match (lhs.eval(assignment), rhs.eval(assignment)) {
                    (Ok(l), Ok(r)) => Ok(if op.holds(l, r) {
                        Satisfied::True
                    } else {
                        Satisfied::False
                    }),
                    (Err(EvalError::MissingVariable(_)), _) | (_, Err(EvalError::MissingVariable(_))) => {
                        Ok(Satisfied::Undetermined)
                    }
                    (Err(EvalError::Fatal(e)), _) | (_, Err(EvalError::Fatal(e))) => Err(e),
                }
            }
            BoolNode::Not(e) => Ok(match e.eval_partial(assignment)? {
                Satisfied::True => Satisfied::False,
                Satisfied::False => Satisfied::True,
                Satisfied::Undetermined => Satisfied::Undetermined,
            }),
            BoolNode::And(l, r) => {
                let l = l.eval_partial(assignment)?;
                if l.is_false() {
                    return Ok(Satisfied::False);
                }
                let r = r.eval_partial(assignment)?;
                if r.is_false() {
                    return Ok(Satisfied::False);
                }
                Ok(if l == Satisfied::True && r == Satisfied::True {
                    Satisfied::True
                } else {
                    Satisfied::Undetermined
                })
            }
            BoolNode::Or(l, r) => {
                let l = l.eval_partial(assignment)?;
                if l == Satisfied::True {
                    return Ok(Satisfied::True);
                }
                let r = r.eval_partial(assignment)?;
                if r == Satisfied::True {
                    return Ok(Satisfied::True);
                }
                Ok(if l == Satisfied::False && r == Satisfied::False {
                    Satisfied::False
                } else {
                    Satisfied::Undetermined
                })
            }
            BoolNode::Xor(l, r) => {
                let l = l.eval_partial(assignment)?;
                let r = r.eval_partial(assignment)?;
                match (l, r) {
                    (Satisfied::Undetermined, _) | (_, Satisfied::Undetermined) => Ok(Satisfied::Undetermined),
                    (a, b) => Ok(if (a == Satisfied::True) ^ (b == Satisfied::True) {
                        Satisfied::True
                    } else {
                        Satisfied::False
                    }),
                }
            }
            BoolNode::Implies(l, r) => {
                let l = l.eval_partial(assignment)?;
                if l.is_false() {
                    return Ok(Satisfied::True);
                }
                let r = r.eval_partial(assignment)?;
                if r == Satisfied::True {
                    return Ok(Satisfied::True);
                }
                Ok(if l == Satisfied::True && r == Satisfied::False {
                    Satisfied::False
                } else {
                    Satisfied::Undetermined
                })
            }
        }
    }
}
