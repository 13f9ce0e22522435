use crate::arithmetic::ArithExpr;
use crate::basic_types::Value;
use crate::variables::Domain;

/// The tag enumerating arithmetic node kinds. Evaluation in [`super::ArithExpr::eval`]
/// is a recursive walk dispatched on this tag.
///
/// `VarRef` carries the referenced variable's domain (if bound) alongside its name, so
/// a [`crate::Solver`] can recover enough information from an expression tree alone to
/// auto-register the variables it mentions.
#[derive(Debug, Clone)]
pub(super) enum ArithNode {
    Const(Value),
    VarRef(String, Option<Domain>),
    Neg(ArithExpr),
    Abs(ArithExpr),
    Add(ArithExpr, ArithExpr),
    Sub(ArithExpr, ArithExpr),
    Mul(ArithExpr, ArithExpr),
    Div(ArithExpr, ArithExpr),
    FloorDiv(ArithExpr, ArithExpr),
    Mod(ArithExpr, ArithExpr),
    Pow(ArithExpr, ArithExpr),
}
