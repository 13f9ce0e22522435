//! # Parsnip
//!
//! Parsnip is an embeddable finite-domain constraint-satisfaction and optimisation
//! library. It lets you declare variables over small discrete domains, build
//! arithmetic and boolean expression trees over them, install hard and soft
//! constraints, and search for an assignment that satisfies the hard constraints
//! while optimising one or more objectives.
//!
//! The solver is a naive depth-first backtracking search, good enough for small
//! combinatorial demos and configuration problems, not a replacement for a
//! production SMT or CP solver on large instances. When a problem outgrows it,
//! [`SolverBackend`] lets an alternative engine stand in behind the same call sites.
//!
//! # Declaring variables and constraints
//!
//! ```rust
//! # use parsnip::variables::var;
//! // x ranges over 1..=9, y over the even values {2,4,6,8}
//! let x = var("x").int_range(1, 9);
//! let y = var("y").values([2, 4, 6, 8]);
//! assert_eq!(x.name(), "x");
//! ```
//!
//! Expressions are built with overloaded operators and coerce variables
//! automatically:
//!
//! ```rust
//! # use parsnip::arithmetic::IntoArith;
//! # use parsnip::variables::var;
//! let x = var("x").int_range(1, 9);
//! let y = var("y").values([2, 4, 6, 8]);
//! let sum_is_ten = (x.clone().into_arith() + y.clone().into_arith()).eq(10_i64);
//! assert_eq!(sum_is_ten.free_set().len(), 2);
//! ```
//!
//! # Solving
//!
//! Installing constraints and objectives on a [`Solver`] auto-registers the
//! variables they reference (provided each has a bound domain), then [`Solver::solve`]
//! searches for the best feasible assignment:
//!
//! ```rust
//! # use parsnip::arithmetic::IntoArith;
//! # use parsnip::variables::var;
//! # use parsnip::{Solver, SolverOptions};
//! let mut solver = Solver::new(SolverOptions::default());
//!
//! let x = var("x").int_range(1, 9);
//! let y = var("y").values([2, 4, 6, 8]);
//!
//! solver
//!     .require((x.clone().into_arith() + y.clone().into_arith()).eq(10_i64), Some("sum10".to_owned()))
//!     .unwrap();
//! solver.maximize(x.into_arith() * y.into_arith(), 1.0).unwrap();
//!
//! let solution = solver.solve(None).unwrap();
//! println!("{}", solver.pretty(&solution));
//! assert_eq!(solution.penalty(), 0);
//! ```
//!
//! # Combinators
//!
//! [`constraints`] supplies the usual cardinality and quantifier building blocks
//! (`distinct`, `at_least_one`, `exactly_k`, `forall`, `sum_of`, `when(..).then(..)`,
//! …) so most constraints never need to be hand-assembled from raw comparisons.

pub mod arithmetic;
pub mod basic_types;
pub mod boolean;
pub mod constraints;
mod objective_mode;
mod solution;
mod soft;
mod solver;
pub mod variables;

pub use basic_types::SolverError;
pub use basic_types::Value;
pub use objective_mode::ObjectiveMode;
pub use solution::ObjectiveScore;
pub use solution::Solution;
pub use soft::Objective;
pub use soft::Sense;
pub use soft::Soft;
pub use solver::Solver;
pub use solver::SolverBackend;
pub use solver::SolverOptions;
