//! Higher-level predicates built on top of [`crate::boolean::BoolExpr`]:
//! distinctness, cardinality (`at_least_one` through `exactly_k`), quantifiers, the
//! arithmetic folds `sum_of`/`product_of`, and the `when(..).then(..)` implication
//! builder.
//!
//! The cardinality combinators enumerate combinations directly rather than building a
//! cardinality network. `n` is expected to stay small in practice.

mod quantifier;

pub use quantifier::Quantifier;

use crate::arithmetic::ArithExpr;
use crate::arithmetic::IntoArith;
use crate::boolean::BoolExpr;
use crate::boolean::IntoBool;
use crate::variables::Variable;

fn fold_and(xs: &[BoolExpr]) -> BoolExpr {
    match xs.split_first() {
        None => BoolExpr::always_true(),
        Some((head, tail)) => tail.iter().fold(head.clone(), |acc, x| acc & x),
    }
}

fn fold_or(xs: &[BoolExpr]) -> BoolExpr {
    match xs.split_first() {
        None => BoolExpr::always_false(),
        Some((head, tail)) => tail.iter().fold(head.clone(), |acc, x| acc | x),
    }
}

fn coerce_all(xs: impl IntoIterator<Item = impl IntoBool>) -> Vec<BoolExpr> {
    xs.into_iter().map(IntoBool::into_bool).collect()
}

/// All variables in `vs` take pairwise different values. Trivially true when `vs`
/// has zero or one elements.
pub fn distinct(vs: impl IntoIterator<Item = Variable>) -> BoolExpr {
    let vs: Vec<Variable> = vs.into_iter().collect();
    if vs.len() <= 1 {
        return BoolExpr::always_true().named("distinct");
    }
    let exprs: Vec<ArithExpr> = vs.iter().map(|v| v.clone().into_arith()).collect();
    let mut pairs = Vec::new();
    for i in 0..exprs.len() {
        for j in (i + 1)..exprs.len() {
            pairs.push(exprs[i].ne(exprs[j].clone()));
        }
    }
    fold_and(&pairs).named("distinct")
}

/// `∨ xs`. Empty ⇒ false.
pub fn at_least_one(xs: impl IntoIterator<Item = impl IntoBool>) -> BoolExpr {
    fold_or(&coerce_all(xs)).named("at_least_one")
}

/// `∧_{i<j} ¬(xs[i] ∧ xs[j])`. Empty ⇒ true.
pub fn at_most_one(xs: impl IntoIterator<Item = impl IntoBool>) -> BoolExpr {
    let xs = coerce_all(xs);
    let mut pairs = Vec::new();
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            pairs.push(!(xs[i].clone() & xs[j].clone()));
        }
    }
    fold_and(&pairs).named("at_most_one")
}

/// `at_least_one(xs) ∧ at_most_one(xs)`.
pub fn exactly_one(xs: impl IntoIterator<Item = impl IntoBool>) -> BoolExpr {
    let xs = coerce_all(xs);
    (at_least_one(xs.clone()) & at_most_one(xs)).named("exactly_one")
}

/// Any `k` of `xs` hold, built as the disjunction over every `k`-combination of
/// `xs`. `k <= 0` ⇒ true; `k > n` ⇒ false.
pub fn at_least_k(xs: impl IntoIterator<Item = impl IntoBool>, k: i64) -> BoolExpr {
    let xs = coerce_all(xs);
    let n = xs.len();
    if k <= 0 {
        return BoolExpr::always_true().named("at_least_k");
    }
    let k = k as usize;
    if k > n {
        return BoolExpr::always_false().named("at_least_k");
    }
    let combos = combinations(n, k);
    let terms: Vec<BoolExpr> = combos
        .into_iter()
        .map(|indices| fold_and(&indices.into_iter().map(|i| xs[i].clone()).collect::<Vec<_>>()))
        .collect();
    fold_or(&terms).named("at_least_k")
}

/// At most `k` of `xs` hold: `at_least_k(¬xs, n - k)`.
pub fn at_most_k(xs: impl IntoIterator<Item = impl IntoBool>, k: i64) -> BoolExpr {
    let xs = coerce_all(xs);
    let n = xs.len() as i64;
    let negated: Vec<BoolExpr> = xs.into_iter().map(|x| !x).collect();
    at_least_k(negated, n - k).named("at_most_k")
}

/// `at_least_k(xs, k) ∧ at_least_k(¬xs, n − k)`. `k < 0` or `k > n` ⇒ false.
pub fn exactly_k(xs: impl IntoIterator<Item = impl IntoBool>, k: i64) -> BoolExpr {
    let xs = coerce_all(xs);
    let n = xs.len() as i64;
    if k < 0 || k > n {
        return BoolExpr::always_false().named("exactly_k");
    }
    let negated: Vec<BoolExpr> = xs.iter().map(|x| !x).collect();
    (at_least_k(xs, k) & at_least_k(negated, n - k)).named("exactly_k")
}

/// `∧ f(v)` over `v ∈ vs`. Empty ⇒ true.
pub fn forall<V>(vs: impl IntoIterator<Item = V>, f: impl Fn(V) -> BoolExpr) -> BoolExpr {
    let terms: Vec<BoolExpr> = vs.into_iter().map(f).collect();
    fold_and(&terms).named("forall")
}

/// `∨ f(v)` over `v ∈ vs`. Empty ⇒ false.
pub fn exists<V>(vs: impl IntoIterator<Item = V>, f: impl Fn(V) -> BoolExpr) -> BoolExpr {
    let terms: Vec<BoolExpr> = vs.into_iter().map(f).collect();
    fold_or(&terms).named("exists")
}

/// Arithmetic sum. Empty ⇒ `0`.
pub fn sum_of(xs: impl IntoIterator<Item = impl IntoArith>) -> ArithExpr {
    xs.into_iter()
        .map(IntoArith::into_arith)
        .fold(ArithExpr::constant(0_i64), |acc, x| acc + x)
}

/// Arithmetic product. Empty ⇒ `1`.
pub fn product_of(xs: impl IntoIterator<Item = impl IntoArith>) -> ArithExpr {
    xs.into_iter()
        .map(IntoArith::into_arith)
        .fold(ArithExpr::constant(1_i64), |acc, x| acc * x)
}

/// The left-hand side of a `when(p).then(q)` implication builder.
#[derive(Debug, Clone)]
pub struct When(BoolExpr);

/// `when(p).then(q)` is equivalent to `p → q`.
pub fn when(p: impl IntoBool) -> When {
    When(p.into_bool())
}

impl When {
    /// Complete the implication: `p → q`.
    pub fn then(self, q: impl IntoBool) -> BoolExpr {
        self.0.implies(q.into_bool()).named("when_then")
    }
}

/// Every `k`-combination of `0..n`, as index sets, in ascending lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }
    let mut result = Vec::new();
    let mut current = (0..k).collect::<Vec<_>>();
    loop {
        result.push(current.clone());
        // Find the rightmost index that can be incremented.
        let mut i = k;
        loop {
            if i == 0 {
                return result;
            }
            i -= 1;
            if current[i] != i + n - k {
                break;
            }
        }
        current[i] += 1;
        for j in (i + 1)..k {
            current[j] = current[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Assignment;
    use crate::variables::bool_var;

    fn assignment(pairs: &[(&str, i64)]) -> Assignment {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), crate::basic_types::Value::Int(*v)))
            .collect()
    }

    #[test]
    fn empty_folds_match_spec() {
        assert_eq!(sum_of(Vec::<ArithExpr>::new()).eval(&Assignment::new()).unwrap(), crate::basic_types::Value::Int(0));
        assert_eq!(product_of(Vec::<ArithExpr>::new()).eval(&Assignment::new()).unwrap(), crate::basic_types::Value::Int(1));
        assert!(!at_least_one(Vec::<BoolExpr>::new()).eval(&Assignment::new()).unwrap());
        assert!(at_most_one(Vec::<BoolExpr>::new()).eval(&Assignment::new()).unwrap());
    }

    #[test]
    fn at_least_k_basic() {
        let bools: Vec<Variable> = (0..4).map(|i| bool_var(format!("p{i}"))).collect();
        let a = assignment(&[("p0", 1), ("p1", 0), ("p2", 1), ("p3", 0)]);
        assert!(at_least_k(bools.clone(), 2).eval(&a).unwrap());
        let all_ones = assignment(&[("p0", 1), ("p1", 1), ("p2", 1), ("p3", 1)]);
        assert!(at_least_k(bools.clone(), 3).eval(&all_ones).unwrap());
        assert!(!at_least_k(bools, 3).eval(&a).unwrap());
    }

    #[test]
    fn at_least_k_boundaries() {
        let bools = vec![bool_var("p0"), bool_var("p1")];
        let a = assignment(&[("p0", 0), ("p1", 1)]);
        assert!(at_least_k(bools.clone(), 0).eval(&a).unwrap());
        assert!(!at_least_k(bools, 3).eval(&a).unwrap());
    }

    #[test]
    fn exactly_k_basic() {
        let bools: Vec<Variable> = (0..3).map(|i| bool_var(format!("q{i}"))).collect();
        let a = assignment(&[("q0", 1), ("q1", 0), ("q2", 1)]);
        assert!(exactly_k(bools.clone(), 2).eval(&a).unwrap());
        let three_ones = assignment(&[("q0", 1), ("q1", 1), ("q2", 1)]);
        assert!(!exactly_k(bools.clone(), 2).eval(&three_ones).unwrap());
        let one_true = assignment(&[("q0", 0), ("q1", 1), ("q2", 0)]);
        assert!(!exactly_k(bools, 2).eval(&one_true).unwrap());
    }

    #[test]
    fn exactly_k_boundaries() {
        let bools = vec![bool_var("r0"), bool_var("r1")];
        let all_false = assignment(&[("r0", 0), ("r1", 0)]);
        let all_true = assignment(&[("r0", 1), ("r1", 1)]);
        assert!(exactly_k(bools.clone(), 0).eval(&all_false).unwrap());
        assert!(exactly_k(bools.clone(), 2).eval(&all_true).unwrap());
        assert!(!exactly_k(bools, 3).eval(&all_true).unwrap());
    }

    #[test]
    fn distinct_trivial_cases() {
        let a = crate::variables::var("a").int_range(1, 3);
        assert!(distinct(vec![a.clone()]).eval(&Assignment::new()).unwrap());
        assert!(distinct(Vec::<Variable>::new())
            .eval(&Assignment::new())
            .unwrap());
    }
}
