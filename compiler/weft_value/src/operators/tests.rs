use super::*;

use pretty_assertions::assert_eq;

fn invoke(function: &Value, arguments: &[Value]) -> Value {
    let mut globals = Vec::new();
    let mut frame = Frame::new(&mut globals, 0);
    let mut output = String::new();
    function
        .as_function()
        .map(|f| f.invoke(&mut frame, arguments, &mut output))
        .unwrap_or_default()
}

#[test]
fn test_arithmetic_coerces_to_numbers() {
    fn n(x: impl Into<Value>) -> Value {
        x.into()
    }
    assert_eq!(BinaryOperator::Add.apply(&n(2), &n(3)), n(5));
    assert_eq!(BinaryOperator::Add.apply(&Value::string("2"), &Value::TRUE), n(3));
    assert_eq!(BinaryOperator::Sub.apply(&n(2), &n(3)), n(-1));
    assert_eq!(BinaryOperator::Mul.apply(&n(21), &n(2)), n(42));
    assert_eq!(BinaryOperator::Div.apply(&n(7), &n(2)), n(3.5));
    assert_eq!(BinaryOperator::Mod.apply(&n(7), &n(3)), n(1));
    assert_eq!(BinaryOperator::Mod.apply(&n(-7), &n(3)), n(-1));
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    fn n(x: impl Into<Value>) -> Value {
        x.into()
    }
    assert_eq!(BinaryOperator::Div.apply(&n(1), &n(0)), n(f64::INFINITY));
    assert!(BinaryOperator::Div.apply(&n(0), &n(0)).as_number().is_nan());
}

#[test]
fn test_comparisons() {
    fn n(x: impl Into<Value>) -> Value {
        x.into()
    }
    assert_eq!(BinaryOperator::Lower.apply(&n(1), &n(2)), Value::TRUE);
    assert_eq!(BinaryOperator::GreaterEqual.apply(&n(2), &n(2)), Value::TRUE);
    assert_eq!(BinaryOperator::Greater.apply(&Value::string("a"), &n(5)), Value::TRUE);
    assert_eq!(BinaryOperator::Equal.apply(&n(1), &Value::string("1")), Value::FALSE);
    assert_eq!(BinaryOperator::NotEqual.apply(&n(1), &n(2)), Value::TRUE);
    assert_eq!(BinaryOperator::Lower.apply(&n(f64::NAN), &n(1)), Value::FALSE);
    assert_eq!(BinaryOperator::Equal.apply(&n(f64::NAN), &n(f64::NAN)), Value::FALSE);
}

#[test]
fn test_logical_operators_use_truthiness() {
    let s = Value::string;
    assert_eq!(BinaryOperator::And.apply(&s("x"), &s("")), Value::FALSE);
    assert_eq!(BinaryOperator::Or.apply(&Value::Void, &s("x")), Value::TRUE);
    assert_eq!(UnaryOperator::Not.apply(&Value::empty_map()), Value::TRUE);
    assert_eq!(UnaryOperator::Negate.apply(&s("4")), Value::from(-4));
}

#[test]
fn test_operator_functions() {
    let add = BinaryOperator::Add.function();
    let negate = UnaryOperator::Negate.function();

    assert!(add.as_function().is_some_and(|f| f.is_pure()));
    assert_eq!(invoke(&add, &[Value::from(40), Value::from(2)]), Value::from(42));
    assert_eq!(invoke(&add, &[Value::from(40)]), Value::Void);
    assert_eq!(invoke(&negate, &[Value::from(1)]), Value::from(-1));
}

#[test]
fn test_operator_functions_are_shared() {
    assert_eq!(BinaryOperator::Mul.function(), BinaryOperator::Mul.function());
    assert_ne!(BinaryOperator::Mul.function(), BinaryOperator::Div.function());
    assert_eq!(UnaryOperator::Not.function(), UnaryOperator::Not.function());
}
