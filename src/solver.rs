//! The native backtracking solver: [`Solver`], its configuration ([`SolverOptions`]),
//! and the [`SolverBackend`] trait an alternative (e.g. SMT-based) engine can
//! implement to stand in behind the same call sites.

use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::trace;

use crate::arithmetic::ArithExpr;
use crate::arithmetic::Assignment;
use crate::arithmetic::EvalError;
use crate::basic_types::SolverError;
use crate::basic_types::Value;
use crate::boolean::BoolExpr;
use crate::boolean::TryIntoBool;
use crate::objective_mode::ObjectiveMode;
use crate::solution::ObjectiveScore;
use crate::solution::Solution;
use crate::soft::Objective;
use crate::soft::Sense;
use crate::soft::Soft;
use crate::variables::Domain;
use crate::variables::Variable;

/// Construction-time configuration for a [`Solver`].
///
/// A plain, `Default`-derived struct rather than a grab-bag of positional
/// constructor arguments.
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    /// How multiple objectives are aggregated and compared.
    pub objective_mode: ObjectiveMode,
}

/// A naive depth-first backtracking finite-domain solver.
///
/// Variables are searched in registration order; each variable's domain is tried in
/// its own iteration order. See the module docs for the full search and scoring
/// contract.
#[derive(Debug)]
pub struct Solver {
    vars: Vec<Variable>,
    hard: Vec<(String, BoolExpr)>,
    soft: Vec<Soft>,
    objectives: Vec<Objective>,
    mode: ObjectiveMode,
    failed_constraints: HashSet<String>,
}

impl Solver {
    /// Construct an empty solver with the given options.
    pub fn new(options: SolverOptions) -> Solver {
        Solver {
            vars: Vec::new(),
            hard: Vec::new(),
            soft: Vec::new(),
            objectives: Vec::new(),
            mode: options.objective_mode,
            failed_constraints: HashSet::new(),
        }
    }

    fn register(&mut self, name: String, domain: Option<Domain>) -> Result<(), SolverError> {
        if self.vars.iter().any(|v| v.name() == name) {
            return Ok(());
        }
        let domain = domain.ok_or(SolverError::MissingDomain { name: name.clone() })?;
        trace!("registering variable `{name}` with {} values", domain.len());
        self.vars.push(Variable::bound(name, domain));
        Ok(())
    }

    fn ensure_arith_vars(&mut self, expr: &ArithExpr) -> Result<(), SolverError> {
        let mut found = Vec::new();
        expr.collect_var_domains(&mut found);
        for (name, domain) in found {
            self.register(name, domain)?;
        }
        Ok(())
    }

    fn ensure_bool_vars(&mut self, expr: &BoolExpr) -> Result<(), SolverError> {
        let mut found = Vec::new();
        expr.collect_var_domains(&mut found);
        for (name, domain) in found {
            self.register(name, domain)?;
        }
        Ok(())
    }

    /// Explicitly register variables, ahead of referencing them in a constraint or
    /// objective. Already-registered names (by name) are skipped.
    ///
    /// # Errors
    /// Returns [`SolverError::MissingDomain`] if any variable has no domain bound.
    pub fn add_variables(&mut self, vars: impl IntoIterator<Item = Variable>) -> Result<(), SolverError> {
        for v in vars {
            self.register(v.name().to_owned(), v.domain().cloned())?;
        }
        Ok(())
    }

    /// Install a hard constraint: every feasible assignment must satisfy `predicate`.
    ///
    /// Any variable referenced by `predicate` that is not already registered is
    /// auto-registered, provided it has a bound domain.
    ///
    /// # Errors
    /// Returns [`SolverError::MissingDomain`] if `predicate` references a variable
    /// with no bound domain, or [`SolverError::TypeError`] if `predicate` is a
    /// variable whose domain is not exactly `{0, 1}`.
    pub fn require(&mut self, predicate: impl TryIntoBool, name: Option<String>) -> Result<(), SolverError> {
        let predicate = predicate.try_into_bool()?;
        self.ensure_bool_vars(&predicate)?;
        let name = name.unwrap_or_else(|| predicate.name().to_owned());
        self.hard.push((name, predicate));
        Ok(())
    }

    /// Install a soft constraint: violating `predicate` contributes `penalty` to the
    /// hard-penalty total (and `penalty * weight` to the weighted-sum aggregate).
    ///
    /// # Errors
    /// Returns [`SolverError::MissingDomain`] if `predicate` references a variable
    /// with no bound domain, or [`SolverError::TypeError`] if `predicate` is a
    /// variable whose domain is not exactly `{0, 1}`.
    pub fn prefer(
        &mut self,
        predicate: impl TryIntoBool,
        penalty: i64,
        weight: f64,
        name: Option<String>,
    ) -> Result<(), SolverError> {
        let predicate = predicate.try_into_bool()?;
        self.ensure_bool_vars(&predicate)?;
        self.soft.push(Soft::new(predicate, penalty, weight, name));
        Ok(())
    }

    /// Add an objective to maximise `expr`, weighted by `weight`.
    ///
    /// # Errors
    /// Returns [`SolverError::MissingDomain`] if `expr` references a variable with no
    /// bound domain.
    pub fn maximize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError> {
        self.ensure_arith_vars(&expr)?;
        self.objectives.push(Objective::new(expr, Sense::Maximize, weight));
        Ok(())
    }

    /// Add an objective to minimise `expr`, weighted by `weight`.
    ///
    /// # Errors
    /// Returns [`SolverError::MissingDomain`] if `expr` references a variable with no
    /// bound domain.
    pub fn minimize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError> {
        self.ensure_arith_vars(&expr)?;
        self.objectives.push(Objective::new(expr, Sense::Minimize, weight));
        Ok(())
    }

    fn score(&self, assignment: &Assignment) -> Result<(i64, ObjectiveScore), EvalError> {
        let mut penalty = 0_i64;
        for s in &self.soft {
            penalty += s.cost(assignment)?;
        }
        match self.mode {
            ObjectiveMode::Sum => {
                let mut soft_cost = 0.0;
                for s in &self.soft {
                    soft_cost += s.weighted_cost(assignment)?;
                }
                let mut objective = 0.0;
                for o in &self.objectives {
                    objective += o.weight() * o.sense().multiplier() * o.expr().eval(assignment)?.as_f64();
                }
                Ok((penalty, ObjectiveScore::Sum(objective - soft_cost)))
            }
            ObjectiveMode::Lex => {
                let mut vec = Vec::with_capacity(self.objectives.len());
                for o in &self.objectives {
                    vec.push(o.sense().multiplier() * o.expr().eval(assignment)?.as_f64());
                }
                Ok((penalty, ObjectiveScore::Lex(vec)))
            }
        }
    }

    fn better(new: &(i64, ObjectiveScore), best: &Option<(i64, ObjectiveScore)>) -> bool {
        let Some(best) = best else { return true };
        if new.0 != best.0 {
            return new.0 < best.0;
        }
        match (&new.1, &best.1) {
            (ObjectiveScore::Sum(n), ObjectiveScore::Sum(b)) => n > b,
            (ObjectiveScore::Lex(n), ObjectiveScore::Lex(b)) => {
                n.iter().zip(b.iter()).find(|(x, y)| x != y).is_some_and(|(x, y)| x > y)
            }
            _ => unreachable!("a solver's objective mode does not change between scores"),
        }
    }

    fn consistent(&mut self, partial: &Assignment) -> Result<bool, SolverError> {
        for (name, predicate) in &self.hard {
            match predicate.eval_partial(partial)? {
                crate::boolean::Satisfied::False => {
                    let _ = self.failed_constraints.insert(name.clone());
                    return Ok(false);
                }
                _ => continue,
            }
        }
        Ok(true)
    }

    fn deadline_passed(start: Instant, timeout: Option<Duration>) -> bool {
        match timeout {
            Some(limit) => start.elapsed() >= limit,
            None => false,
        }
    }

    /// Depth-first search. `solutions`, when `Some`, switches to enumeration mode:
    /// every leaf is appended rather than compared against a running best.
    #[allow(clippy::too_many_arguments)]
    fn backtrack(
        &mut self,
        idx: usize,
        assignment: &mut Assignment,
        solutions: &mut Option<&mut Vec<Solution>>,
        limit: Option<usize>,
        start: Instant,
        timeout: Option<Duration>,
        best: &mut Option<(i64, ObjectiveScore)>,
        best_assignment: &mut Option<Assignment>,
    ) -> Result<(), SolverError> {
        if Self::deadline_passed(start, timeout) {
            return Err(SolverError::Timeout);
        }
        if let Some(solutions) = solutions.as_deref() {
            if let Some(limit) = limit {
                if solutions.len() >= limit {
                    return Ok(());
                }
            }
        }

        if idx == self.vars.len() {
            let (penalty, score) = self.score(assignment).map_err(|e| match e {
                EvalError::Fatal(e) => e,
                EvalError::MissingVariable(name) => {
                    unreachable!("leaf assignment is complete but `{name}` is missing")
                }
            })?;
            if let Some(solutions) = solutions.as_deref_mut() {
                solutions.push(Solution::new(assignment.clone(), penalty, score));
            } else if Self::better(&(penalty, score.clone()), best) {
                debug!("new best: penalty={penalty}, score={score:?}");
                *best = Some((penalty, score));
                *best_assignment = Some(assignment.clone());
            }
            return Ok(());
        }

        let var = self.vars[idx].clone();
        for value in var.domain().expect("registered variables carry a bound domain").values() {
            let _ = assignment.insert(var.name().to_owned(), *value);
            if self.consistent(assignment)? {
                self.backtrack(idx + 1, assignment, solutions, limit, start, timeout, best, best_assignment)?;
                if let Some(solutions) = solutions.as_deref() {
                    if let Some(limit) = limit {
                        if solutions.len() >= limit {
                            let _ = assignment.remove(var.name());
                            return Ok(());
                        }
                    }
                }
            }
        }
        let _ = assignment.remove(var.name());
        Ok(())
    }

    /// Search for the assignment with minimal hard penalty, then optimal objective
    /// score, within the optional `timeout`.
    ///
    /// # Errors
    /// Returns [`SolverError::NoFeasibleSolution`] if the search space is exhausted
    /// with no feasible assignment, [`SolverError::Timeout`] if `timeout` elapses
    /// first, or a fatal arithmetic error (division/modulus by zero) if one occurs
    /// while scoring an assignment.
    pub fn solve(&mut self, timeout: Option<Duration>) -> Result<Solution, SolverError> {
        self.failed_constraints.clear();
        let start = Instant::now();
        if Self::deadline_passed(start, timeout) {
            return Err(SolverError::Timeout);
        }
        let mut best = None;
        let mut best_assignment = None;
        let mut assignment = Assignment::new();
        self.backtrack(0, &mut assignment, &mut None, None, start, timeout, &mut best, &mut best_assignment)?;
        match (best, best_assignment) {
            (Some((penalty, score)), Some(assignment)) => Ok(Solution::new(assignment, penalty, score)),
            _ => Err(SolverError::NoFeasibleSolution),
        }
    }

    /// Enumerate feasible assignments until `limit` is reached, `timeout` elapses, or
    /// the search tree is exhausted. A timeout returns whatever was collected so far,
    /// rather than erroring.
    ///
    /// # Errors
    /// Returns a fatal arithmetic error (division/modulus by zero) if one occurs while
    /// scoring an assignment; this is not swallowed the way a timeout is.
    pub fn all_solutions(&mut self, limit: Option<usize>, timeout: Option<Duration>) -> Result<Vec<Solution>, SolverError> {
        self.failed_constraints.clear();
        let start = Instant::now();
        let mut solutions = Vec::new();
        if Self::deadline_passed(start, timeout) {
            return Ok(solutions);
        }
        let mut assignment = Assignment::new();
        let mut best = None;
        let mut best_assignment = None;
        let mut out = Some(&mut solutions);
        match self.backtrack(0, &mut assignment, &mut out, limit, start, timeout, &mut best, &mut best_assignment) {
            Ok(()) | Err(SolverError::Timeout) => Ok(solutions),
            Err(other) => Err(other),
        }
    }

    /// The names of hard constraints that falsified at least one partial assignment
    /// during the most recent `solve`/`all_solutions` call, sorted for determinism.
    /// An over-approximation, not a minimal unsat core.
    pub fn why_unsat(&self) -> Vec<String> {
        let mut names: Vec<String> = self.failed_constraints.iter().cloned().collect();
        names.sort();
        names
    }

    /// Render `solution` as deterministic text: one right-justified `name : value`
    /// line per assignment entry (sorted by name), then the penalty, then the
    /// objective score if any objectives are registered. Matches the reference
    /// implementation's formatting byte-for-byte, tab characters included.
    pub fn pretty(&self, solution: &Solution) -> String {
        let mut names: Vec<&String> = solution.assignment().keys().collect();
        names.sort();
        let mut rows: Vec<String> = names
            .into_iter()
            .map(|name| format!("{:>10} : {}", name, solution.assignment()[name]))
            .collect();
        rows.push(format!("\tpenalty : {}", solution.penalty()));
        if !self.objectives.is_empty() {
            match solution.score() {
                ObjectiveScore::Sum(v) => rows.push(format!("\tobjective : {v}")),
                ObjectiveScore::Lex(v) => rows.push(format!(" objectives : ({})", format_tuple(v))),
            }
        }
        rows.join("\n")
    }
}

fn format_tuple(values: &[f64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

/// The lifecycle operations a solver backend must expose, so an alternative engine
/// (e.g. SMT-based) can be substituted behind the same call sites as the native
/// [`Solver`].
///
/// # Contract
/// Implementations MUST, for the same problem, produce a solution whose penalty is
/// minimal among feasible assignments and whose objective score is optimal subject to
/// that; they MAY return a different assignment than the native solver when ties
/// exist. They MUST translate engine-level unsat into
/// [`SolverError::NoFeasibleSolution`] and populate a diagnostic set retrievable
/// through [`SolverBackend::why_unsat`] (a minimal unsat core is acceptable and
/// preferred here, unlike the native solver's over-approximation). They MUST translate
/// an engine-level timeout into [`SolverError::Timeout`] for `solve` and into an early
/// return for `all_solutions`. Domain constraints MUST be imposed as disjunctions over
/// explicit values, never ranges, to preserve finite-domain semantics (including
/// discrete float steps).
pub trait SolverBackend {
    /// See [`Solver::add_variables`].
    fn add_variables(&mut self, vars: Vec<Variable>) -> Result<(), SolverError>;
    /// See [`Solver::require`].
    fn require(&mut self, predicate: BoolExpr, name: Option<String>) -> Result<(), SolverError>;
    /// See [`Solver::prefer`].
    fn prefer(&mut self, predicate: BoolExpr, penalty: i64, weight: f64, name: Option<String>) -> Result<(), SolverError>;
    /// See [`Solver::maximize`].
    fn maximize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError>;
    /// See [`Solver::minimize`].
    fn minimize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError>;
    /// See [`Solver::solve`].
    fn solve(&mut self, timeout: Option<Duration>) -> Result<Solution, SolverError>;
    /// See [`Solver::all_solutions`].
    fn all_solutions(&mut self, limit: Option<usize>, timeout: Option<Duration>) -> Result<Vec<Solution>, SolverError>;
    /// See [`Solver::why_unsat`].
    fn why_unsat(&self) -> Vec<String>;
}

impl SolverBackend for Solver {
    fn add_variables(&mut self, vars: Vec<Variable>) -> Result<(), SolverError> {
        Solver::add_variables(self, vars)
    }

    fn require(&mut self, predicate: BoolExpr, name: Option<String>) -> Result<(), SolverError> {
        Solver::require(self, predicate, name)
    }

    fn prefer(&mut self, predicate: BoolExpr, penalty: i64, weight: f64, name: Option<String>) -> Result<(), SolverError> {
        Solver::prefer(self, predicate, penalty, weight, name)
    }

    fn maximize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError> {
        Solver::maximize(self, expr, weight)
    }

    fn minimize(&mut self, expr: ArithExpr, weight: f64) -> Result<(), SolverError> {
        Solver::minimize(self, expr, weight)
    }

    fn solve(&mut self, timeout: Option<Duration>) -> Result<Solution, SolverError> {
        Solver::solve(self, timeout)
    }

    fn all_solutions(&mut self, limit: Option<usize>, timeout: Option<Duration>) -> Result<Vec<Solution>, SolverError> {
        Solver::all_solutions(self, limit, timeout)
    }

    fn why_unsat(&self) -> Vec<String> {
        Solver::why_unsat(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::IntoArith;
    use crate::variables::var;

    fn solver() -> Solver {
        Solver::new(SolverOptions::default())
    }

    #[test]
    fn maximizes_product_under_sum_constraint() {
        let mut s = solver();
        let x = var("x").int_range(1, 9);
        let y = var("y").values([2, 4, 6, 8]);
        s.require((x.clone().into_arith() + y.clone().into_arith()).eq(10_i64), Some("sum10".to_owned()))
            .unwrap();
        s.maximize(x.into_arith() * y.into_arith(), 1.0).unwrap();
        let sol = s.solve(None).unwrap();
        assert_eq!(sol.assignment()["x"], Value::Int(4));
        assert_eq!(sol.assignment()["y"], Value::Int(6));
    }

    #[test]
    fn distinct_all_different_maximise_sum() {
        let mut s = solver();
        let a = var("a").int_range(1, 3);
        let b = var("b").int_range(1, 3);
        let c = var("c").int_range(1, 3);
        s.require(crate::constraints::distinct(vec![a.clone(), b.clone(), c.clone()]), None)
            .unwrap();
        s.maximize(crate::constraints::sum_of(vec![a, b, c]), 1.0).unwrap();
        let sol = s.solve(None).unwrap();
        assert_eq!(sol.penalty(), 0);
        assert_eq!(sol.objectives().unwrap(), [6.0]);
    }

    #[test]
    fn unsat_reports_failing_constraint() {
        let mut s = solver();
        let x = var("x").values([1]);
        let y = var("y").values([2]);
        s.require(x.into_arith().eq(y.into_arith()).named("impossible"), None).unwrap();
        let result = s.solve(None);
        assert_eq!(result, Err(SolverError::NoFeasibleSolution));
        assert_eq!(s.why_unsat(), vec!["impossible".to_owned()]);
    }

    #[test]
    fn enumerates_solutions_in_dfs_order() {
        let mut s = solver();
        let x = var("x").int_range(1, 3);
        let y = var("y").int_range(1, 3);
        s.require(
            (x.clone().into_arith() + y.clone().into_arith()).eq(4_i64),
            None,
        )
        .unwrap();
        let sols = s.all_solutions(Some(2), None).unwrap();
        assert_eq!(sols.len(), 2);
        assert_eq!(sols[0].assignment()["x"], Value::Int(1));
        assert_eq!(sols[0].assignment()["y"], Value::Int(3));
        assert_eq!(sols[1].assignment()["x"], Value::Int(2));
        assert_eq!(sols[1].assignment()["y"], Value::Int(2));
    }

    #[test]
    fn zero_timeout_behaves_per_spec() {
        let mut s = solver();
        let x = var("x").int_range(1, 3);
        s.add_variables(vec![x]).unwrap();
        assert_eq!(s.solve(Some(Duration::ZERO)), Err(SolverError::Timeout));
        assert_eq!(s.all_solutions(None, Some(Duration::ZERO)).unwrap(), vec![]);
    }

    #[test]
    fn sum_mode_tie_break_prefers_satisfied_soft_constraint() {
        let mut s = Solver::new(SolverOptions {
            objective_mode: ObjectiveMode::Sum,
        });
        let x = var("x").values([0, 1]);
        s.prefer(x.clone().into_arith().eq(1_i64), 5, 1.0, Some("prefer_one".to_owned()))
            .unwrap();
        let sol = s.solve(None).unwrap();
        assert_eq!(sol.assignment()["x"], Value::Int(1));
        assert_eq!(sol.penalty(), 0);
    }

    #[test]
    fn require_reports_type_error_instead_of_panicking() {
        let mut s = solver();
        let x = var("x").int_range(0, 5);
        assert_eq!(
            s.require(x.clone(), None),
            Err(SolverError::TypeError(format!(
                "variable `{}` is not a {{0,1}} variable and cannot be used as a boolean",
                x.name()
            )))
        );
    }
}
