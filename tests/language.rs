use std::fs::{self};

use tiercalc::evaluate_str;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_calc_examples(&content).into_iter().enumerate() {
            count += 1;
            match evaluate_str(&expression) {
                Ok(value) => assert_eq!(value,
                                        expected,
                                        "Example {} in {:?} evaluated `{}` to {}",
                                        i + 1,
                                        path,
                                        expression,
                                        value),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 expression,
                                 e),
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

/// Collects `expression = value` lines from ```calc blocks.
fn extract_calc_examples(content: &str) -> Vec<(String, f64)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = trimmed.rsplit_once('=') {
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| panic!("Bad expected value in `{line}`: {e}"));
            examples.push((expression.trim().to_string(), expected));
        }
    }

    examples
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_str(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("Expression `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate_str(src) {
        panic!("Expression `{src}` evaluated to {value} but was expected to fail")
    }
}

#[test]
fn whitespace_is_ignored_by_the_front_door() {
    assert_value(" 1 + 2 ", 3.0);
    assert_value("2 *\t( 1 + 1 )\n", 4.0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 * 4 + 3 * 8 ^ 7 - 4 / 2", 6_291_462.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("7 - 8 - 8", -9.0);
}

#[test]
fn unary_operators() {
    assert_value("-(3 + 1)", -4.0);
    assert_value("3! - 2", 4.0);
    assert_value("(5 - 1)!", 24.0);
}

#[test]
fn negated_operand_of_tighter_operator_needs_brackets() {
    assert_value("2 * (-3)", -6.0);
    assert_value("2 ^ (-1)", 0.5);
    assert_failure("2 * -3");
    assert_failure("2 ^ -1");
}

#[test]
fn unrecognized_characters_are_errors() {
    assert_failure("2 % 5");
    assert_failure("x + 1");
    assert_failure("1.5");
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("1 +");
    assert_failure("");
    assert_failure("(-1)!");
}
