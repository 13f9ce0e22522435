use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::arithmetic::node::ArithNode;
use crate::arithmetic::ArithExpr;
use crate::arithmetic::IntoArith;
use crate::variables::Variable;

/// Generates `impl std::ops::$trait<$rhs> for $lhs` by coercing both sides through
/// [`IntoArith`] and building the matching [`ArithNode`]. This is the one place the
/// combinatorial `{variable, expr, literal} × {variable, expr, literal}` operand
/// matrix is spelled out, instead of repeating it by hand for every trait/type pair.
macro_rules! impl_arith_op {
    ($trait:ident, $method:ident, $node:ident, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = ArithExpr;

            fn $method(self, rhs: $rhs) -> ArithExpr {
                let lhs = self.into_arith();
                let rhs = rhs.into_arith();
                ArithExpr::binary(ArithNode::$node(lhs.clone(), rhs.clone()), &lhs, &rhs)
            }
        }
    };
}

macro_rules! impl_arith_op_for_all_operands {
    ($trait:ident, $method:ident, $node:ident) => {
        impl_arith_op!($trait, $method, $node, ArithExpr, ArithExpr);
        impl_arith_op!($trait, $method, $node, ArithExpr, &ArithExpr);
        impl_arith_op!($trait, $method, $node, ArithExpr, Variable);
        impl_arith_op!($trait, $method, $node, ArithExpr, &Variable);
        impl_arith_op!($trait, $method, $node, ArithExpr, i64);
        impl_arith_op!($trait, $method, $node, ArithExpr, f64);
        impl_arith_op!($trait, $method, $node, &ArithExpr, ArithExpr);
        impl_arith_op!($trait, $method, $node, &ArithExpr, &ArithExpr);
        impl_arith_op!($trait, $method, $node, &ArithExpr, Variable);
        impl_arith_op!($trait, $method, $node, &ArithExpr, &Variable);
        impl_arith_op!($trait, $method, $node, &ArithExpr, i64);
        impl_arith_op!($trait, $method, $node, &ArithExpr, f64);
        impl_arith_op!($trait, $method, $node, Variable, Variable);
        impl_arith_op!($trait, $method, $node, Variable, &Variable);
        impl_arith_op!($trait, $method, $node, Variable, ArithExpr);
        impl_arith_op!($trait, $method, $node, Variable, &ArithExpr);
        impl_arith_op!($trait, $method, $node, Variable, i64);
        impl_arith_op!($trait, $method, $node, Variable, f64);
        impl_arith_op!($trait, $method, $node, &Variable, &Variable);
        impl_arith_op!($trait, $method, $node, &Variable, Variable);
        impl_arith_op!($trait, $method, $node, &Variable, ArithExpr);
        impl_arith_op!($trait, $method, $node, &Variable, &ArithExpr);
        impl_arith_op!($trait, $method, $node, &Variable, i64);
        impl_arith_op!($trait, $method, $node, &Variable, f64);
    };
}

impl_arith_op_for_all_operands!(Add, add, Add);
impl_arith_op_for_all_operands!(Sub, sub, Sub);
impl_arith_op_for_all_operands!(Mul, mul, Mul);
impl_arith_op_for_all_operands!(Div, div, Div);

impl Neg for ArithExpr {
    type Output = ArithExpr;

    fn neg(self) -> ArithExpr {
        ArithExpr::unary(ArithNode::Neg(self.clone()), &self)
    }
}

impl Neg for &ArithExpr {
    type Output = ArithExpr;

    fn neg(self) -> ArithExpr {
        ArithExpr::unary(ArithNode::Neg(self.clone()), self)
    }
}

impl Neg for Variable {
    type Output = ArithExpr;

    fn neg(self) -> ArithExpr {
        -self.into_arith()
    }
}

impl Neg for &Variable {
    type Output = ArithExpr;

    fn neg(self) -> ArithExpr {
        -self.into_arith()
    }
}
