use std::fs;

use tengri::{
    interpreter::{evaluator::core::Options, value::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn sample_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "tg"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&script, Options::default()) {
            panic!("Script {path:?} failed:\n{script}\nError: {e}");
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

fn assert_value(src: &str, expected: Value) {
    match run(src, Options::default()) {
        Ok(value) => assert_eq!(value, Some(expected), "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run(src, Options::default()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn declarations_and_basic_arithmetic() {
    assert_value("— □ x : 1 + 2", Value::Integer(3));
    assert_value("— □ x : 7 * 9", Value::Integer(63));
    assert_value("— □ x : 8 - 5", Value::Integer(3));
    assert_value("— □ x : 10 / 2", Value::Integer(5));
    assert_value("Λ ⊡ x : 1.5 * 2", Value::Float(3.0));
}

#[test]
fn precedence_and_grouping() {
    assert_value("— □ x : 2 + 3 * 4", Value::Integer(14));
    assert_value("— □ x : (2 + 3) * 4", Value::Integer(20));
    assert_value("— □ x : 10 - 3 - 2", Value::Integer(5));
    assert_value("— □ x : 100 / 10 / 5", Value::Integer(2));
}

#[test]
fn the_last_declaration_is_the_result() {
    assert_value("— □ a : 10\nΛ □ b : 5\n— □ c : a * (b + 2)", Value::Integer(70));
    assert_value("— □ x : 10\n— □ x : x + 1", Value::Integer(11));
}

#[test]
fn user_defined_functions() {
    assert_value("Π square(□ n) → □ ( → n * n )\n— □ s : square(9)", Value::Integer(81));
    assert_value("Π add(□ a, □ b) ( → a + b )\n— □ s : add(2, 5) * 2", Value::Integer(14));
}

#[test]
fn comments_are_ignored() {
    assert_value("// header\n— □ x : 4 // four\n// trailer", Value::Integer(4));
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("— □ x : foo + 1");
}

#[test]
fn unrecognized_character_is_error() {
    assert_failure("— □ x : 1 $ 2");
}

#[test]
fn missing_assignment_is_error() {
    assert_failure("— □ x 1");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("— □ x : 1 / 0");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("Π f(□ x, □ y) ( → x + y )\n— □ r : f(3)");
}

#[test]
fn unbounded_recursion_is_error() {
    assert_failure("Π forever(□ n) ( → forever(n + 1) )\n— □ r : forever(0)");
}
