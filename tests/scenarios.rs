use std::time::Duration;

use parsnip::arithmetic::IntoArith;
use parsnip::constraints;
use parsnip::variables::bool_var;
use parsnip::variables::var;
use parsnip::ObjectiveMode;
use parsnip::Solver;
use parsnip::SolverError;
use parsnip::SolverOptions;
use parsnip::Value;

#[test]
fn s1_maximise_product_under_sum_constraint() {
    let mut solver = Solver::new(SolverOptions::default());
    let x = var("x").int_range(1, 9);
    let y = var("y").values([2, 4, 6, 8]);
    solver
        .require((x.clone().into_arith() + y.clone().into_arith()).eq(10_i64), Some("sum10".to_owned()))
        .unwrap();
    solver.maximize(x.into_arith() * y.into_arith(), 1.0).unwrap();

    let solution = solver.solve(None).unwrap();
    let x_val = solution.assignment()["x"];
    let y_val = solution.assignment()["y"];
    assert!(
        (x_val, y_val) == (Value::Int(4), Value::Int(6)) || (x_val, y_val) == (Value::Int(6), Value::Int(4)),
        "unexpected assignment x={x_val:?} y={y_val:?}"
    );
    assert_eq!(solution.penalty(), 0);
    assert_eq!(solution.objectives().unwrap(), [24.0]);
}

#[test]
fn s2_distinct_maximise_sum() {
    let mut solver = Solver::new(SolverOptions::default());
    let a = var("a").int_range(1, 3);
    let b = var("b").int_range(1, 3);
    let c = var("c").int_range(1, 3);
    solver.require(constraints::distinct(vec![a.clone(), b.clone(), c.clone()]), None).unwrap();
    solver.maximize(constraints::sum_of(vec![a.clone(), b.clone(), c.clone()]), 1.0).unwrap();

    let solution = solver.solve(None).unwrap();
    let mut values: Vec<i64> = [a.name(), b.name(), c.name()]
        .iter()
        .map(|n| match solution.assignment()[*n] {
            Value::Int(i) => i,
            Value::Float(_) => panic!("expected int"),
        })
        .collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(solution.penalty(), 0);
    assert_eq!(solution.objectives().unwrap(), [6.0]);
}

#[test]
fn s3_unsat_reports_constraint_name() {
    let mut solver = Solver::new(SolverOptions::default());
    let x = var("x").values([1]);
    let y = var("y").values([2]);
    solver
        .require((x.into_arith() + y.into_arith()).eq(100_i64), Some("impossible".to_owned()))
        .unwrap();

    let result = solver.solve(None);
    assert_eq!(result, Err(SolverError::NoFeasibleSolution));
    assert_eq!(solver.why_unsat(), vec!["impossible".to_owned()]);
}

#[test]
fn s4_sum_mode_weighted_soft_constraints() {
    let mut solver = Solver::new(SolverOptions {
        objective_mode: ObjectiveMode::Sum,
    });
    let x = bool_var("x");
    let y = bool_var("y");
    solver.prefer(x.clone().into_arith().eq(1_i64), 1, 5.0, None).unwrap();
    solver.prefer(y.clone().into_arith().eq(1_i64), 1, 1.0, None).unwrap();
    solver.require((x.into_arith() + y.into_arith()).eq(1_i64), None).unwrap();

    let solution = solver.solve(None).unwrap();
    assert_eq!(solution.assignment()["x"], Value::Int(1));
    assert_eq!(solution.assignment()["y"], Value::Int(0));
    assert_eq!(solution.penalty(), 1);
    assert_eq!(solution.objective().unwrap(), -1.0);
}

#[test]
fn s5_enumeration_limit_and_order() {
    let mut solver = Solver::new(SolverOptions::default());
    let x = var("x").int_range(1, 3);
    let y = var("y").int_range(1, 3);
    solver.require((x.into_arith() + y.into_arith()).eq(4_i64), None).unwrap();

    let solutions = solver.all_solutions(Some(2), None).unwrap();
    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[0].assignment()["x"], Value::Int(1));
    assert_eq!(solutions[0].assignment()["y"], Value::Int(3));
    assert_eq!(solutions[1].assignment()["x"], Value::Int(2));
    assert_eq!(solutions[1].assignment()["y"], Value::Int(2));
}

#[test]
fn s6_three_house_zebra_style_puzzle() {
    // Houses are indexed 0..3 (left to right). Each variable names the house index
    // where that attribute holds.
    let mut solver = Solver::new(SolverOptions::default());
    let brit = var("brit").int_range(0, 2);
    let swede = var("swede").int_range(0, 2);
    let norwegian = var("norwegian").int_range(0, 2);
    let red = var("red").int_range(0, 2);
    let green = var("green").int_range(0, 2);
    let blue = var("blue").int_range(0, 2);
    let tea = var("tea").int_range(0, 2);
    let coffee = var("coffee").int_range(0, 2);
    let milk = var("milk").int_range(0, 2);

    solver
        .require(constraints::distinct(vec![brit.clone(), swede.clone(), norwegian.clone()]), None)
        .unwrap();
    solver
        .require(constraints::distinct(vec![red.clone(), green.clone(), blue.clone()]), None)
        .unwrap();
    solver
        .require(constraints::distinct(vec![tea.clone(), coffee.clone(), milk.clone()]), None)
        .unwrap();
    // brit -> red
    solver
        .require(brit.clone().into_arith().eq(red.clone().into_arith()), Some("brit_red".to_owned()))
        .unwrap();
    // swede -> tea
    solver
        .require(swede.clone().into_arith().eq(tea.clone().into_arith()), Some("swede_tea".to_owned()))
        .unwrap();
    // green is immediately right of red
    solver
        .require(
            green.clone().into_arith().eq(red.clone().into_arith() + 1_i64),
            Some("green_right_of_red".to_owned()),
        )
        .unwrap();
    // the middle house drinks milk
    solver.require(milk.clone().into_arith().eq(1_i64), Some("middle_milk".to_owned())).unwrap();
    // norwegian lives in the first house
    solver
        .require(norwegian.clone().into_arith().eq(0_i64), Some("norwegian_first".to_owned()))
        .unwrap();

    let solution = solver.solve(None).unwrap();
    assert_eq!(solution.penalty(), 0);
    assert_eq!(solution.assignment()["norwegian"], Value::Int(0));
    assert_eq!(solution.assignment()["milk"], Value::Int(1));
    assert_eq!(solution.assignment()["brit"], solution.assignment()["red"]);
    assert_eq!(
        solution.assignment()["green"],
        match solution.assignment()["red"] {
            Value::Int(i) => Value::Int(i + 1),
            Value::Float(_) => panic!("expected int"),
        }
    );

    let all = solver.all_solutions(None, None).unwrap();
    assert_eq!(all.len(), 1, "puzzle should have a unique solution");
}

#[test]
fn zero_timeout_matches_invariant_8() {
    let mut solver = Solver::new(SolverOptions::default());
    let x = var("x").int_range(1, 3);
    solver.add_variables(vec![x]).unwrap();
    assert_eq!(solver.solve(Some(Duration::ZERO)), Err(SolverError::Timeout));
    assert_eq!(solver.all_solutions(None, Some(Duration::ZERO)).unwrap(), vec![]);
}

#[test]
fn pretty_printing_matches_reference_format() {
    let mut solver = Solver::new(SolverOptions::default());
    let x = var("x").int_range(1, 9);
    let y = var("y").values([2, 4, 6, 8]);
    solver
        .require((x.clone().into_arith() + y.clone().into_arith()).eq(10_i64), Some("sum10".to_owned()))
        .unwrap();
    solver.maximize(x.into_arith() * y.into_arith(), 1.0).unwrap();
    let solution = solver.solve(None).unwrap();
    let rendered = solver.pretty(&solution);
    assert!(rendered.contains("\tpenalty : 0"));
    assert!(rendered.contains(" objectives : (24"));
    assert!(rendered.lines().next().unwrap().starts_with("         x :") || rendered.lines().next().unwrap().starts_with("         y :"));
}
