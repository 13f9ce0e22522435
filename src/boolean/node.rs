use crate::arithmetic::ArithExpr;
use crate::boolean::BoolExpr;
use crate::boolean::Comparison;

/// The tag enumerating boolean node kinds, dispatched on by
/// [`super::BoolExpr::eval_partial`].
#[derive(Debug, Clone)]
pub(super) enum BoolNode {
    Const(bool),
    Comparison(ArithExpr, ArithExpr, Comparison),
    Not(BoolExpr),
    And(BoolExpr, BoolExpr),
    Or(BoolExpr, BoolExpr),
    Xor(BoolExpr, BoolExpr),
    Implies(BoolExpr, BoolExpr),
}
