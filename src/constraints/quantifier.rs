//! Fluent sugar over [`super::forall`]/[`super::exists`] for the common case of
//! quantifying over a fixed collection of variables.

use crate::boolean::BoolExpr;
use crate::variables::Variable;

/// A quantifier bound to a collection of variables, awaiting its predicate.
///
/// ```
/// # use parsnip::arithmetic::IntoArith;
/// # use parsnip::constraints::Quantifier;
/// # use parsnip::variables::var;
/// let xs = vec![var("a").int_range(0, 3), var("b").int_range(0, 3)];
/// let all_nonneg = Quantifier::new(xs).all(|x| x.into_arith().ge(0_i64));
/// assert_eq!(all_nonneg.name(), "forall");
/// ```
#[derive(Debug, Clone)]
pub struct Quantifier {
    vars: Vec<Variable>,
}

impl Quantifier {
    /// Bind a quantifier to `vars`, to be completed with [`Self::all`] or [`Self::any`].
    pub fn new(vars: impl IntoIterator<Item = Variable>) -> Quantifier {
        Quantifier {
            vars: vars.into_iter().collect(),
        }
    }

    /// `∧ f(v)` over the bound variables.
    pub fn all(self, f: impl Fn(Variable) -> BoolExpr) -> BoolExpr {
        super::forall(self.vars, f)
    }

    /// `∨ f(v)` over the bound variables.
    pub fn any(self, f: impl Fn(Variable) -> BoolExpr) -> BoolExpr {
        super::exists(self.vars, f)
    }
}
