use numroot::{Options, Report, solve_numeric};
use serde_json::{Value, json};

fn to_value(report: &Report) -> Value {
    let text = report.to_json().expect("serializable");
    serde_json::from_str(&text).expect("valid json")
}

#[test]
fn solved_report_shape() {
    let report = solve_numeric(&["x + y = 4", "x - y = 2"], &Options::new());

    let value = to_value(&report);

    assert_eq!(value["variables"], json!(["x", "y"]));
    assert_eq!(value["method"], json!("newton_raphson"));
    assert_eq!(value["solutions"].as_array().map(Vec::len), Some(1));
    assert!(value["solutions"][0]["x"].is_f64());
    assert!(value.get("warning").is_none());
    assert!(value.get("message").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn error_report_shape() {
    let report = solve_numeric::<&str>(&[], &Options::new());

    assert_eq!(
        to_value(&report),
        json!({
            "solutions": [],
            "variables": [],
            "method": "newton_raphson",
            "error": "No equations provided.",
        })
    );
}

#[test]
fn no_solution_report_shape() {
    let report = solve_numeric(&["x^2 + 1 = 0"], &Options::new());

    assert_eq!(
        to_value(&report),
        json!({
            "solutions": [],
            "variables": ["x"],
            "method": "newton_raphson",
            "message": "No solutions found in search range [-10, 10]. \
                        Try providing initial_guesses closer to expected solutions.",
        })
    );
}

#[test]
fn warning_is_serialized() {
    let report = solve_numeric(&["x + y = 1"], &Options::new());

    let value = to_value(&report);

    assert_eq!(
        value["warning"],
        json!("System has 1 equations and 2 variables.")
    );
}

#[test]
fn solution_keys_follow_variable_order() {
    let options = Options::new().with_variables(["y", "x"]);
    let report = solve_numeric(&["x + y = 4", "x - y = 2"], &options);

    let text = report.to_json().expect("serializable");

    let y = text.find("\"y\":").expect("y key");
    let x = text.find("\"x\":").expect("x key");
    assert!(y < x);
}

#[test]
fn parses_back_to_the_same_report() {
    let report = solve_numeric(&["x^2 = 2"], &Options::new());

    let parsed = Report::from_json(&report.to_json().expect("serializable")).expect("valid");

    assert_eq!(parsed.variables, report.variables);
    assert_eq!(parsed.method, report.method);
    assert_eq!(parsed.solutions.len(), 2);
    for (a, b) in parsed.solutions.iter().zip(&report.solutions) {
        let (x_a, x_b) = (a.get("x").unwrap(), b.get("x").unwrap());
        assert!((x_a - x_b).abs() < 1e-12);
    }
}

#[test]
fn tiny_root_stays_finite_through_json() {
    // The caller guess is already a root and is tried first, so it is the
    // representative kept for the root at zero.
    let options = Options::new().with_guesses(vec![vec![1e-305]]);
    let report = solve_numeric(&["x = 0"], &options);

    let x = report.solutions[0].get("x").expect("x is solved for");
    assert!(x.is_finite());
    assert!((x - 1e-305).abs() < 1e-315);

    let value = to_value(&report);
    assert!(value["solutions"][0]["x"].is_f64());

    let parsed = Report::from_json(&report.to_json().expect("serializable")).expect("valid");
    assert_eq!(parsed.solutions.len(), report.solutions.len());
}
