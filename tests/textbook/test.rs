use std::fs;

use approx::assert_abs_diff_eq;

use simplex_steps::io::{export_report, export_steps, import};
use simplex_steps::{Constraint, Error, History, Objective, PivotRuleKind, Problem, Settings, Solve};

use super::{get_test_file_path, read};

#[test]
fn textbook_maximization() {
    let problem = read("textbook_maximization");
    let report = problem.solve().unwrap();

    assert_abs_diff_eq!(report.solution.objective_value(), 12_f64);
    assert_abs_diff_eq!(report.solution.value(0), 4_f64);
    assert_abs_diff_eq!(report.solution.value(1), 0_f64);
    assert!(problem.is_feasible(report.solution.values(), Settings::<f64>::default().tolerance()));
    assert_abs_diff_eq!(
        problem.objective_value_at(report.solution.values()),
        report.solution.objective_value()
    );

    let last = report.steps.last().unwrap();
    assert!(last.is_final());
    assert_abs_diff_eq!(last.rows()[0].rhs, report.solution.objective_value());
    assert_eq!(last.description(), "Optimal solution reached. Optimal value: 12.00");

    assert_abs_diff_eq!(report.sensitivity[0].dual_price, 3_f64);
    assert_abs_diff_eq!(report.sensitivity[1].slack_surplus, 2_f64);
    let tolerance = Settings::<f64>::default().tolerance();
    assert!(report.sensitivity[0].is_binding(tolerance));
    assert!(!report.sensitivity[1].is_binding(tolerance));
}

#[test]
fn optimal_at_origin() {
    let report = read("optimal_at_origin").solve().unwrap();

    assert_eq!(report.iterations, 0);
    assert_eq!(report.solution.objective_value(), 0_f64);
    assert!(report.solution.objective_value().is_sign_positive());
    assert_eq!(report.solution.values(), &[0_f64, 0_f64]);
    assert_abs_diff_eq!(report.sensitivity[0].slack_surplus, 4_f64);
    assert_abs_diff_eq!(report.sensitivity[1].slack_surplus, 6_f64);
}

#[test]
fn negative_minimum() {
    let report = read("negative_minimum").solve().unwrap();

    assert_eq!(report.iterations, 2);
    assert_eq!(report.steps.len(), 3);
    assert_abs_diff_eq!(report.solution.objective_value(), -7_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(report.solution.value(0), 1_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(report.solution.value(1), 3_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(report.sensitivity[0].dual_price, -0.5_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(report.sensitivity[1].dual_price, -2.5_f64, epsilon = 1e-12);
    assert_eq!(
        report.steps.last().unwrap().description(),
        "Optimal solution reached. Optimal value: -7.00",
    );
}

#[test]
fn unbounded() {
    let result = read("unbounded").solve();
    assert_eq!(result, Err(Error::UnboundedProblem { column: 1 }));
}

#[test]
fn greater_constraint_is_rejected() {
    let problem = read("greater_constraint");
    let result = problem.solve();
    assert!(matches!(result, Err(Error::UnsupportedConstraintKind { index: 1, .. })));
}

#[test]
fn three_pivots() {
    let problem = read("three_pivots");
    for pivot_rule in [PivotRuleKind::SteepestDescent, PivotRuleKind::FirstProfitable] {
        let settings = Settings::default().with_pivot_rule(pivot_rule);
        let report = problem.solve_with(&settings).unwrap();

        assert_abs_diff_eq!(report.solution.objective_value(), 28_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.solution.value(0), 8_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.solution.value(1), 4_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.solution.value(2), 0_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.sensitivity[0].slack_surplus, 18_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.sensitivity[1].dual_price, 1_f64 / 6_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(report.sensitivity[2].dual_price, 2_f64 / 3_f64, epsilon = 1e-9);
    }
}

#[test]
fn iteration_limit() {
    let settings = Settings::default().with_max_iterations(1);
    let result = read("three_pivots").solve_with(&settings);
    assert_eq!(result, Err(Error::IterationLimit { iterations: 1 }));
}

#[test]
fn single_precision() {
    let problem = Problem::new(
        Objective::Maximize,
        vec![3_f32, 2_f32],
        vec![
            Constraint::less(vec![1_f32, 1_f32], 4_f32),
            Constraint::less(vec![1_f32, 3_f32], 6_f32),
        ],
    );
    let report = problem.solve().unwrap();

    assert_abs_diff_eq!(report.solution.objective_value(), 12_f32);
    assert_abs_diff_eq!(report.solution.value(0), 4_f32);
}

#[test]
fn steps_round_trip() {
    let report = read("three_pivots").solve().unwrap();
    let directory = tempfile::tempdir().unwrap();

    let steps_path = directory.path().join("steps.json");
    export_steps(&steps_path, &report.steps).unwrap();
    let restored: History<f64> = serde_json::from_str(&fs::read_to_string(&steps_path).unwrap()).unwrap();
    assert_eq!(restored, report.steps);
    assert_eq!(restored.len(), 4);

    let report_path = directory.path().join("report.json");
    export_report(&report_path, &report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["iterations"], 3);
    assert_eq!(json["steps"][0]["headers"][0], "X1");
    assert_eq!(json["steps"][0]["rows"][0]["Base"], "Z");
}

#[test]
fn import_rejects_inconsistent_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("inconsistent.json");
    let text = fs::read_to_string(get_test_file_path("textbook_maximization")).unwrap()
        .replace("\"numVars\": 2", "\"numVars\": 3");
    fs::write(&path, text).unwrap();

    assert!(import::<f64>(&path).is_err());
}
