use super::*;

use pretty_assertions::assert_eq;

fn literal(text: &str) -> Statement {
    Statement::Literal(text.to_string())
}

#[test]
fn test_sequence_is_flat() {
    let sequence = Statement::sequence(vec![literal("a"), literal("b"), literal("c")]);

    assert_eq!(
        sequence,
        Statement::Composite(vec![literal("a"), literal("b"), literal("c")])
    );
    assert_eq!(sequence.parts(), vec![&literal("a"), &literal("b"), &literal("c")]);
}

#[test]
fn test_sequence_splices_nested_composites() {
    let inner = Statement::sequence(vec![literal("b"), literal("c")]);
    let sequence = Statement::sequence(vec![literal("a"), inner, Statement::None, literal("d")]);

    assert_eq!(
        sequence,
        Statement::Composite(vec![literal("a"), literal("b"), literal("c"), literal("d")])
    );
}

#[test]
fn test_sequence_edge_cases() {
    assert_eq!(Statement::sequence(Vec::new()), Statement::None);
    assert_eq!(Statement::sequence(vec![literal("x")]), literal("x"));
    assert!(Statement::None.parts().is_empty());
}

#[test]
fn test_operators_lower_to_invocations() {
    let expression = Expression::binary(
        BinaryOperator::Add,
        Expression::symbol("a"),
        Expression::constant(1),
    );

    match &expression {
        Expression::Invoke { callee, arguments } => {
            assert!(matches!(**callee, Expression::Constant(Value::Function(_))));
            assert_eq!(arguments, &vec![Expression::symbol("a"), Expression::constant(1)]);
        }
        other => panic!("expected invoke, got {other:?}"),
    }
}

#[test]
fn test_store_mode_keywords() {
    assert_eq!(StoreMode::from_keyword("local"), Some(StoreMode::Local));
    assert_eq!(StoreMode::from_keyword("private"), Some(StoreMode::Private));
    assert_eq!(StoreMode::from_keyword("public"), None);
    assert_eq!(StoreMode::default(), StoreMode::Global);
    assert_eq!(StoreMode::Global.to_string(), "global");
}

// Dropping these on a 256 KiB stack would overflow with recursive drop glue.

fn on_small_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_deep_expression_drops_iteratively() {
    on_small_stack(|| {
        let mut expression = Expression::constant(1);
        for _ in 0..200_000 {
            expression = Expression::unary(UnaryOperator::Negate, expression);
        }
        drop(expression);
    });
}

#[test]
fn test_deep_statement_drops_iteratively() {
    on_small_stack(|| {
        let mut statement = literal("x");
        for _ in 0..200_000 {
            statement = Statement::If {
                condition: Expression::symbol("a"),
                body: Box::new(statement),
                next: Some(Box::new(Statement::Unwrap(Box::new(literal("y"))))),
            };
        }
        drop(statement);
    });
}
