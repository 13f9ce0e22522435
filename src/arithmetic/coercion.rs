use std::collections::HashSet;

use crate::arithmetic::node::ArithNode;
use crate::arithmetic::ArithExpr;
use crate::variables::Variable;

/// The single coercion entry point used by every arithmetic operator: lifts a
/// variable, an existing expression, or an integer/float literal into an
/// [`ArithExpr`]. Operator impls are generic over this trait rather than branching on
/// the operand's runtime type.
pub trait IntoArith {
    /// Lift `self` into an arithmetic expression node.
    fn into_arith(self) -> ArithExpr;
}

impl IntoArith for ArithExpr {
    fn into_arith(self) -> ArithExpr {
        self
    }
}

impl IntoArith for &ArithExpr {
    fn into_arith(self) -> ArithExpr {
        self.clone()
    }
}

impl IntoArith for Variable {
    fn into_arith(self) -> ArithExpr {
        (&self).into_arith()
    }
}

impl IntoArith for &Variable {
    fn into_arith(self) -> ArithExpr {
        let mut free = HashSet::new();
        let _ = free.insert(self.name().to_owned());
        ArithExpr::leaf(
            ArithNode::VarRef(self.name().to_owned(), self.domain().cloned()),
            free,
        )
    }
}

impl IntoArith for i64 {
    fn into_arith(self) -> ArithExpr {
        ArithExpr::constant(self)
    }
}

impl IntoArith for f64 {
    fn into_arith(self) -> ArithExpr {
        ArithExpr::constant(self)
    }
}

impl From<Variable> for ArithExpr {
    fn from(value: Variable) -> Self {
        value.into_arith()
    }
}

impl From<&Variable> for ArithExpr {
    fn from(value: &Variable) -> Self {
        value.into_arith()
    }
}
