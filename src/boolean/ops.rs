use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Not;
use std::ops::Shr;

use crate::boolean::node::BoolNode;
use crate::boolean::BoolExpr;
use crate::boolean::IntoBool;
use crate::variables::Variable;

macro_rules! impl_bool_op {
    ($trait:ident, $method:ident, $node:ident, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = BoolExpr;

            fn $method(self, rhs: $rhs) -> BoolExpr {
                let lhs = self.into_bool();
                let rhs = rhs.into_bool();
                let free = lhs.free_set().union(rhs.free_set()).cloned().collect();
                BoolExpr::anonymous(BoolNode::$node(lhs, rhs), free)
            }
        }
    };
}

macro_rules! impl_bool_op_for_all_operands {
    ($trait:ident, $method:ident, $node:ident) => {
        impl_bool_op!($trait, $method, $node, BoolExpr, BoolExpr);
        impl_bool_op!($trait, $method, $node, BoolExpr, &BoolExpr);
        impl_bool_op!($trait, $method, $node, BoolExpr, Variable);
        impl_bool_op!($trait, $method, $node, BoolExpr, &Variable);
        impl_bool_op!($trait, $method, $node, &BoolExpr, BoolExpr);
        impl_bool_op!($trait, $method, $node, &BoolExpr, &BoolExpr);
        impl_bool_op!($trait, $method, $node, &BoolExpr, Variable);
        impl_bool_op!($trait, $method, $node, &BoolExpr, &Variable);
        impl_bool_op!($trait, $method, $node, Variable, BoolExpr);
        impl_bool_op!($trait, $method, $node, Variable, &BoolExpr);
        impl_bool_op!($trait, $method, $node, Variable, Variable);
        impl_bool_op!($trait, $method, $node, Variable, &Variable);
        impl_bool_op!($trait, $method, $node, &Variable, BoolExpr);
        impl_bool_op!($trait, $method, $node, &Variable, &BoolExpr);
        impl_bool_op!($trait, $method, $node, &Variable, Variable);
        impl_bool_op!($trait, $method, $node, &Variable, &Variable);
    };
}

impl_bool_op_for_all_operands!(BitAnd, bitand, And);
impl_bool_op_for_all_operands!(BitOr, bitor, Or);
impl_bool_op_for_all_operands!(BitXor, bitxor, Xor);

// `cond >> expr` reads as "cond implies expr".
impl_bool_op_for_all_operands!(Shr, shr, Implies);

impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        let free = self.free_set().clone();
        BoolExpr::anonymous(BoolNode::Not(self), free)
    }
}

impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        !self.clone()
    }
}

impl Not for Variable {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        !self.into_bool()
    }
}

impl Not for &Variable {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        !self.into_bool()
    }
}
