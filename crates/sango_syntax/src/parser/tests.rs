#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms (checked against the
/// canonical re-serialization) and on the parser's error recovery behavior.
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Program {
        match parse(source) {
            Ok(program) => program,
            Err(errors) => panic!("unexpected parse errors for {source:?}: {errors:?}"),
        }
    }

    fn parse_err(source: &str) -> Vec<SyntaxError> {
        parse(source).expect_err("expected parse errors")
    }

    fn dump(source: &str) -> String {
        parse_ok(source).to_string()
    }

    #[test]
    fn test_operator_precedence_grouping() {
        assert_eq!(dump("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(dump("1 * 2 + 3"), "((1 * 2) + 3)");
        assert_eq!(dump("-a * b"), "((-a) * b)");
        assert_eq!(dump("!a == b"), "((!a) == b)");
        assert_eq!(dump("a + b < c * d"), "((a + b) < (c * d))");
        assert_eq!(dump("a && b || c"), "((a && b) || c)");
        assert_eq!(dump("a & b | c ^ d"), "((a & b) | (c ^ d))");
        // Shifts sit below additive on the ladder, as in C.
        assert_eq!(dump("a << 1 + 2"), "(a << (1 + 2))");
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(dump("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
        assert_eq!(dump("2 ** 3 * 4"), "((2 ** 3) * 4)");
    }

    #[test]
    fn test_member_access_binds_tightest() {
        assert_eq!(dump("p.x + 1"), "((p . x) + 1)");
        assert_eq!(dump("a.b.c"), "((a . b) . c)");
        assert_eq!(dump("p.len()"), "(p . len)()");
    }

    #[test]
    fn test_grouping_and_tuples() {
        // A parenthesized expression unwraps; a trailing comma makes a tuple.
        assert_eq!(dump("(1)"), "1");
        assert_eq!(dump("(1,)"), "(1)");
        assert_eq!(dump("()"), "()");
        assert_eq!(dump("(1, 2, 3)"), "(1, 2, 3)");

        let program = parse_ok("(1,)");
        match &program.statements[0] {
            Statement::Expression {
                expression: Some(Expression::Tuple(elements)),
            } => assert_eq!(elements.len(), 1),
            other => panic!("expected tuple statement, got {other:?}"),
        }
    }

    #[test]
    fn test_call_arguments() {
        assert_eq!(dump("add(1, 2 * 3, [4, 5])"), "add(1, (2 * 3), [4, 5])");
        assert_eq!(dump("f()"), "f()");
    }

    #[test]
    fn test_array_literals() {
        assert_eq!(dump("[1, 2, 3]"), "[1, 2, 3]");
        assert_eq!(dump("[]"), "[]");
        // Typed empty array: the element annotation is consumed.
        assert_eq!(dump("val a = []int;"), "val a = [];");
    }

    #[test]
    fn test_index_and_slices() {
        assert_eq!(dump("a[0]"), "(a[0])");
        assert_eq!(dump("a[1..5]"), "(a[1..5])");
        assert_eq!(dump("a[1..=5]"), "(a[1..=5])");
        assert_eq!(dump("a[..5]"), "(a[..5])");
        assert_eq!(dump("a[1..]"), "(a[1..])");

        let program = parse_ok("a[1..]");
        match &program.statements[0] {
            Statement::Expression {
                expression: Some(Expression::Index { index, .. }),
            } => match index.as_deref() {
                Some(Expression::Range { start, end, inclusive }) => {
                    assert!(start.is_some());
                    assert!(end.is_none());
                    assert!(!inclusive);
                }
                other => panic!("expected range index, got {other:?}"),
            },
            other => panic!("expected index statement, got {other:?}"),
        }
    }

    #[test]
    fn test_val_and_var_bindings() {
        assert_eq!(dump("val x = 5;"), "val x = 5;");
        assert_eq!(dump("var count: int = 0;"), "var count: int = 0;");
        assert_eq!(dump("val a, b = (1, 2);"), "val a, b = (1, 2);");

        let program = parse_ok("val a, b: (int, int) = pair;");
        match &program.statements[0] {
            Statement::Val(binding) => {
                assert_eq!(binding.names, vec!["a".to_string(), "b".to_string()]);
                assert!(matches!(binding.ty, Some(TypeExpression::Tuple(_))));
            }
            other => panic!("expected val statement, got {other:?}"),
        }
    }

    #[test]
    fn test_assignment_statements() {
        assert_eq!(dump("x = 1"), "x = 1;");
        assert_eq!(dump("x += 2;"), "x += 2;");
        assert_eq!(dump("bits <<= 1"), "bits <<= 1;");
    }

    #[test]
    fn test_function_statement_and_literal() {
        assert_eq!(
            dump("def add(x: int, y: int): int = x + y"),
            "def add(x: int, y: int): int = (x + y)"
        );
        assert_eq!(dump("val f = def(x) = x * 2;"), "val f = def(x) = (x * 2);");

        let program = parse_ok("def greet(name: string) = { print(name) }");
        match &program.statements[0] {
            Statement::Function(function) => {
                assert_eq!(function.name.as_deref(), Some("greet"));
                assert_eq!(function.parameters.len(), 1);
                assert!(matches!(
                    function.body.as_deref(),
                    Some(Expression::Block(_))
                ));
            }
            other => panic!("expected function statement, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else_expression() {
        assert_eq!(dump("if (x > 0) { 1 } else { 2 }"), "if (x > 0) { 1 } else { 2 }");
        assert_eq!(dump("if (ok) { run() }"), "if (ok) { run() }");
    }

    #[test]
    fn test_struct_constructor_versus_block() {
        assert_eq!(dump("val p = Point { x: 1, y: 2 };"), "val p = Point { x: 1, y: 2 };");
        assert_eq!(dump("val p = Point {};"), "val p = Point {};");
        // Anonymous forms: named fields and C-style designators.
        assert_eq!(dump("val p = { x: 1 };"), "val p = { x: 1 };");
        assert_eq!(dump("val p = { .x = 1, .y = 2 };"), "val p = { x: 1, y: 2 };");
        // A brace that does not open fields stays a block, with no token lost to
        // the speculative look inside it.
        assert_eq!(dump("val b = { x + 1 };"), "val b = { (x + 1) };");
    }

    #[test]
    fn test_match_body_is_not_a_constructor() {
        let program = parse_ok("match v { 1 => one(); _ => other() }");
        match &program.statements[0] {
            Statement::Expression {
                expression: Some(Expression::Match { scrutinee, cases }),
            } => {
                assert!(matches!(
                    scrutinee.as_deref(),
                    Some(Expression::Identifier(name)) if name == "v"
                ));
                assert_eq!(cases.len(), 2);
                assert!(matches!(cases[1].pattern, Some(Expression::Wildcard)));
            }
            other => panic!("expected match statement, got {other:?}"),
        }
    }

    #[test]
    fn test_match_with_guard() {
        let program = parse_ok("match x { n if n > 0 => pos(); _ => rest() }");
        match &program.statements[0] {
            Statement::Expression {
                expression: Some(Expression::Match { cases, .. }),
            } => {
                assert!(cases[0].guard.is_some());
                assert!(cases[1].guard.is_none());
            }
            other => panic!("expected match statement, got {other:?}"),
        }
    }

    #[test]
    fn test_for_and_while_loops() {
        assert_eq!(dump("for x <- xs { use(x) }"), "for x <- xs { use(x) }");
        assert_eq!(dump("for i in 0..10 { use(i) }"), "for i in 0..10 { use(i) }");
        assert_eq!(dump("while (x < 10) { x += 1 }"), "while (x < 10) { x += 1; }");

        let program = parse_ok("for i in 0..10 { use(i) }");
        match &program.statements[0] {
            Statement::For { uses_in, iterable, .. } => {
                assert!(*uses_in);
                assert!(matches!(iterable, Some(Expression::Range { .. })));
            }
            other => panic!("expected for statement, got {other:?}"),
        }
    }

    #[test]
    fn test_defer_and_assert() {
        assert_eq!(dump("defer close(f)"), "defer close(f)");
        assert_eq!(dump("assert(x > 0)"), "assert((x > 0))");
    }

    #[test]
    fn test_sizeof_prefix() {
        assert_eq!(dump("sizeof(x)"), "(sizeof x)");
        assert_eq!(dump("sizeof x + 1"), "((sizeof x) + 1)");
    }

    #[test]
    fn test_struct_declaration() {
        let program = parse_ok("struct Point { x: int; y: int }");
        match &program.statements[0] {
            Statement::Struct { name, fields } => {
                assert_eq!(name, "Point");
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].name, "x");
            }
            other => panic!("expected struct statement, got {other:?}"),
        }
        // Newline-separated fields need no semicolons.
        let program = parse_ok("struct Size {\n  width: int\n  height: int\n}");
        match &program.statements[0] {
            Statement::Struct { fields, .. } => assert_eq!(fields.len(), 2),
            other => panic!("expected struct statement, got {other:?}"),
        }
    }

    #[test]
    fn test_impl_receivers() {
        for (source, kind) in [
            ("impl Point { def zero() = 0 }", ReceiverKind::Value),
            ("impl *Point { def zero() = 0 }", ReceiverKind::Pointer),
            ("impl &Point { def zero() = 0 }", ReceiverKind::Reference),
        ] {
            let program = parse_ok(source);
            match &program.statements[0] {
                Statement::Impl { receiver, methods } => {
                    assert_eq!(receiver.kind, kind);
                    assert_eq!(receiver.type_name, "Point");
                    assert_eq!(methods.len(), 1);
                }
                other => panic!("expected impl statement, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_type_alias_forms() {
        assert_eq!(dump("type Meters = int"), "type Meters = int");
        // The `=` is optional in older sources; the canonical form always carries it.
        assert_eq!(dump("type Meters int"), "type Meters = int");
        assert_eq!(dump("type Grid = [][]int"), "type Grid = [][]int");
        assert_eq!(dump("type Pair = (int, string)"), "type Pair = (int, string)");
        assert_eq!(dump("type Pred = (int) -> bool"), "type Pred = (int) -> bool");
        assert_eq!(dump("type Pred = int -> bool"), "type Pred = (int) -> bool");
        assert_eq!(dump("type Thunk = () -> void"), "type Thunk = () -> void");
        assert_eq!(dump("type Point = { x: int, y: int }"), "type Point = { x: int, y: int }");
        // A single parenthesized type with no comma and no arrow is just that type.
        assert_eq!(dump("type I = (int)"), "type I = int");
    }

    #[test]
    fn test_record_type_errors() {
        let errors = parse_err("type P = { 1: int }");
        assert!(errors[0].message.contains("expected field name in record type"));

        let errors = parse_err("type P = { x: int y: int }");
        assert!(errors[0].message.contains("expected ',' or '}' in record type"));
    }

    #[test]
    fn test_define_captures_rest_of_line() {
        let program = parse_ok("define MAX 100\ndefine SQUARE x * x");
        match (&program.statements[0], &program.statements[1]) {
            (
                Statement::Define { name, value },
                Statement::Define {
                    name: second_name,
                    value: second_value,
                },
            ) => {
                assert_eq!(name, "MAX");
                assert_eq!(value, "100");
                assert_eq!(second_name, "SQUARE");
                assert_eq!(second_value, "x * x");
            }
            other => panic!("expected two define statements, got {other:?}"),
        }
    }

    #[test]
    fn test_include_populates_registry() {
        let mut parser = Parser::new(Lexer::new("include \"stdio.h\"\ninclude \"math.h\""));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        assert_eq!(program.statements.len(), 2);
        assert!(parser.registry().has_header("stdio.h"));
        assert!(parser.registry().is_function("printf"));
        assert!(parser.registry().is_function("sqrt"));
        assert!(!parser.registry().is_function("strlen"));
    }

    #[test]
    fn test_import_is_rejected_with_recovery() {
        let errors = parse_err("import \"other.sango\"\nval x = 1;");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("import statements not fully implemented yet"));
    }

    #[test]
    fn test_error_accumulation_reaches_end() {
        // A dangling import and a missing `)` in a call: exactly two diagnostics, and
        // the cursor still drains the whole input.
        let errors = parse_err("import \"m\"\nval x = add(1, 2");
        assert_eq!(errors.len(), 2, "errors: {errors:?}");
        assert!(errors[0].message.contains("import"));
        assert!(errors[1].message.contains("expected next token to be )"));
    }

    #[test]
    fn test_expected_error_carries_location() {
        let errors = parse_err("val = 5");
        assert_eq!(
            errors[0].message,
            "expected next token to be IDENT, got = instead at line 1:5"
        );
    }

    #[test]
    fn test_no_prefix_error() {
        let errors = parse_err(")");
        assert!(errors[0].message.contains("no prefix parse function for )"));
        assert_eq!(errors[0].kind, ErrorKind::MissingPrefix);
    }

    #[test]
    fn test_integer_overflow_is_a_bad_literal() {
        let errors = parse_err("99999999999999999999999");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("could not parse"));
        assert_eq!(errors[0].kind, ErrorKind::BadLiteral);
    }

    #[test]
    fn test_main_arity_validation() {
        let errors = parse_err("def main(a, b) = 0");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "main function can have at most one parameter (args: []string)"
        );

        let errors = parse_err("def main(args) = 0");
        assert_eq!(
            errors[0].message,
            "main function parameter should have type []string"
        );

        parse_ok("def main(args: []string) = 0");
        parse_ok("def main() = 0");
    }

    #[test]
    fn test_multi_statement_program() {
        let source = "include \"stdio.h\"\n\
                      struct Point { x: int; y: int }\n\
                      def add(a: int, b: int): int = a + b\n\
                      def main() = {\n\
                          val p = Point { x: 1, y: 2 }\n\
                          val total = add(p.x, p.y)\n\
                          printf(\"%d\", total)\n\
                      }\n";
        let program = parse_ok(source);
        assert_eq!(program.statements.len(), 4);
        insta::assert_snapshot!(
            program.to_string(),
            @r#"include "stdio.h"struct Point { x: int; y: int }def add(a: int, b: int): int = (a + b)def main() = { val p = Point { x: 1, y: 2 }; val total = add((p . x), (p . y)); printf("%d", total) }"#
        );
    }

    #[test]
    fn test_return_statement() {
        assert_eq!(dump("return x + 1;"), "return (x + 1);");
    }
}
