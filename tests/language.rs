use std::fs;

use intcalc::{error::ErrorKind, evaluate};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            match evaluate(&source) {
                Ok(value) => assert_eq!(value,
                                        expected,
                                        "case {} in {:?} gave the wrong value: {}",
                                        i + 1,
                                        path,
                                        source),
                Err(e) => panic!("case {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 source,
                                 e),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => value` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, i64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (source, expected) =
                   line.split_once("=>")
                       .unwrap_or_else(|| panic!("Case line without '=>': {line}"));
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
               (source.trim().to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error for {src:?}: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("42", 42);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("14 + 2 * 3 - 6 / 2", 17);
    assert_value("2 * 3 + 4 * 5", 26);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * (3 + 4) * (5 - 1)", 56);
    assert_value("((((7))))", 7);
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_value("8 - 3 - 2", 3);
    assert_value("20 / 4 / 5", 1);
    assert_value("10 - 4 + 3", 9);
    // Right-associative grouping would divide by 4 / 5 == 0.
    assert_failure("20 / (4 / 5)", ErrorKind::DivisionByZero);
}

#[test]
fn unary_chains() {
    assert_value("--5", 5);
    assert_value("-+-3", 3);
    assert_value("+7", 7);
    assert_value("- - - 2", -2);
    assert_value("5 - -2", 7);
    assert_value("-(2 + 3) * 2", -10);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
    assert_value("1 / 3", 0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("1+2"), evaluate(" 1 +  2 "));
    assert_value("\t3\t*\t4 ", 12);
    assert_value("12", 12);
}

#[test]
fn evaluation_is_repeatable() {
    let source = "(3 + 4) * -2 - 10 / 3";
    let first = evaluate(source);
    let second = evaluate(source);
    assert_eq!(first, second);
    assert_eq!(first, Ok(-17));
}

#[test]
fn failures_do_not_affect_later_lines() {
    assert_failure("5 / 0", ErrorKind::DivisionByZero);
    assert_value("5 / 1", 5);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5 / 0", ErrorKind::DivisionByZero);
    assert_failure("1 / (2 - 2)", ErrorKind::DivisionByZero);
    assert_failure("0 / 0", ErrorKind::DivisionByZero);
}

#[test]
fn malformed_input_is_syntax_error() {
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("1 + ", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("3 4", ErrorKind::Syntax);
    assert_failure("* 2", ErrorKind::Syntax);
    assert_failure("()", ErrorKind::Syntax);
    assert_failure("", ErrorKind::Syntax);
}

#[test]
fn invalid_character_is_error() {
    assert_failure("1 @ 2", ErrorKind::InvalidCharacter);
    assert_failure("2.5", ErrorKind::InvalidCharacter);
    assert_failure("x + 1", ErrorKind::InvalidCharacter);
}

#[test]
fn overflow_is_error() {
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775807 - 1", i64::MIN);
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_failure("9223372036854775808", ErrorKind::Overflow);
    assert_failure("(-9223372036854775807 - 1) / -1", ErrorKind::Overflow);
    assert_failure("-(-9223372036854775807 - 1)", ErrorKind::Overflow);
    assert_failure("4611686018427387904 * 2", ErrorKind::Overflow);
}

#[test]
fn error_messages_name_the_position() {
    let err = evaluate("1 @ 2").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 2: Invalid character '@'.");

    let err = evaluate("10 / (5 - 5)").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 3: Division by zero.");

    let err = evaluate("(1 + 2").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 6: Expected ')', found end of input.");
}
