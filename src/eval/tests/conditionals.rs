//! If/else evaluation tests.

use super::*;

#[test]
fn test_if_with_truthy_condition() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
}

#[test]
fn test_if_without_alternative_yields_null() {
    assert_null("if (false) { 10 }");
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn test_if_else_branches() {
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
}

#[test]
fn test_zero_and_empty_string_are_truthy() {
    assert_integer("if (0) { 1 } else { 2 }", 1);
    assert_integer(r#"if ("") { 1 } else { 2 }"#, 1);
}

#[test]
fn test_null_condition_is_falsy() {
    assert_integer("if (if (false) { 1 }) { 1 } else { 2 }", 2);
}

#[test]
fn test_if_is_an_expression() {
    assert_integer("let x = if (true) { 1 } else { 2 }; x + 10", 11);
}

#[test]
fn test_untaken_branch_is_not_evaluated() {
    // The alternative divides by zero; taking the consequence must not
    // touch it.
    assert_integer("if (true) { 1 } else { 1 / 0 }", 1);
}

#[test]
fn test_nested_if() {
    assert_integer(
        "if (true) { if (false) { 1 } else { 2 } } else { 3 }",
        2,
    );
}
