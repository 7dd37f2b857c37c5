use knapsack_runtime::{output::*, parse::*};
use knapsack_solver::solve_with_placement;

#[test]
fn test_text_with_explicit_values() {
    let problem = build_problem(["10"], ["5=10", "4=7", "6=9"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(
        format_text(&problem, &solution).unwrap(),
        "17\n9(17)|10: 5(10) 4(7)\n"
    );
}

#[test]
fn test_text_with_implicit_values() {
    let problem = build_problem(["7", "2"], ["0*3"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(format_text(&problem, &solution).unwrap(), "6\n6|7: 2*3=6\n");
}

#[test]
fn test_text_mixed_entries() {
    let problem = build_problem(["12"], ["2*3", "2*3=4"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(
        format_text(&problem, &solution).unwrap(),
        "14\n12(14)|12: 2*3=6 2*3=6(2*4=8)\n"
    );
}

#[test]
fn test_text_float_values() {
    let problem = build_problem(["8"], ["0*3=1.5", "5=2.75"], float_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(
        format_text(&problem, &solution).unwrap(),
        "4.25\n8(4.25)|8: 3(1.5) 5(2.75)\n"
    );
}

#[test]
fn test_text_skips_empty_sacks() {
    let problem = build_problem(["3", "5"], ["5"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(format_text(&problem, &solution).unwrap(), "5\n5|5: 5\n");

    let problem = build_problem(["3"], ["5"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(format_text(&problem, &solution).unwrap(), "0\n");
}

#[test]
fn test_json() {
    let problem = build_problem(["5", "5"], ["2*5=5"], integer_value).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(
        format_json(&solution).unwrap(),
        "{\"sacks\":[{\"0\":1},{\"0\":1}],\"value\":10}\n"
    );
}
