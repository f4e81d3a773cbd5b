use super::*;

use std::collections::hash_map::DefaultHasher;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use pretty_assertions::assert_eq;

use crate::{Arity, NativeFunction};

fn hash_value(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_truthiness() {
    assert!(!Value::Void.as_boolean());
    assert!(!Value::FALSE.as_boolean());
    assert!(Value::TRUE.as_boolean());
    assert!(!Value::from(0).as_boolean());
    assert!(Value::from(-2.5).as_boolean());
    assert!(Value::from(f64::NAN).as_boolean());
    assert!(!Value::string("").as_boolean());
    assert!(Value::string("0").as_boolean());
    assert!(!Value::empty_map().as_boolean());
    assert!(Value::array([Value::Void]).as_boolean());
    assert!(Value::from(NativeFunction::pure1(Clone::clone)).as_boolean());
}

#[test]
fn test_number_coercion() {
    assert_eq!(Value::TRUE.as_number(), 1.0);
    assert_eq!(Value::FALSE.as_number(), 0.0);
    assert_eq!(Value::string(" 17.5 ").as_number(), 17.5);
    assert_eq!(Value::string("seventeen").as_number(), 0.0);
    assert_eq!(Value::Void.as_number(), 0.0);
    assert_eq!(Value::array([Value::from(3)]).as_number(), 0.0);
}

#[test]
fn test_string_form() {
    assert_eq!(Value::Void.as_string(), "");
    assert_eq!(Value::TRUE.as_string(), "true");
    assert_eq!(Value::from(42).as_string(), "42");
    assert_eq!(Value::from(0.5).as_string(), "0.5");
    assert_eq!(Value::from(-3.25).as_string(), "-3.25");
    assert_eq!(Value::from(f64::NAN).as_string(), "NaN");
    assert_eq!(Value::from(f64::INFINITY).as_string(), "Infinity");
    assert_eq!(Value::from(f64::NEG_INFINITY).as_string(), "-Infinity");
    assert_eq!(Value::string("abc").as_string(), "abc");
    assert_eq!(Value::array([Value::from(1)]).as_string(), "");
}

#[test]
fn test_dump_form() {
    let value = Value::dictionary([
        (Value::string("name"), Value::string("say \"hi\"")),
        (Value::from(1), Value::array([Value::TRUE, Value::Void])),
    ]);

    assert_eq!(
        value.to_string(),
        r#"["name": "say \"hi\"", 1: [0: true, 1: <void>]]"#
    );
    assert_eq!(
        Value::from(NativeFunction::pure1(Clone::clone)).to_string(),
        "<function>"
    );
}

#[test]
fn test_numeric_inputs_normalize_to_double() {
    assert_eq!(Value::from(0), Value::from(0.0));
    assert_eq!(Value::from(7_u8), Value::from(7.0_f32));
    assert_eq!(Value::from(-1_i64), Value::Number(-1.0));
    assert_eq!(Value::from(0.0), Value::from(-0.0));
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    let nan = Value::from(f64::NAN);
    assert_ne!(nan, Value::from(f64::NAN));
    assert_ne!(nan, nan.clone());
    assert_eq!(nan.partial_cmp(&Value::from(1)), None);
}

#[test]
fn test_absent_string_is_void() {
    assert_eq!(Value::from(None::<&str>), Value::Void);
    assert_eq!(Value::from(Some("x")), Value::string("x"));
    assert_ne!(Value::from(None::<String>), Value::string(""));
}

#[test]
fn test_equality_is_kind_sensitive() {
    assert_ne!(Value::from(1), Value::string("1"));
    assert_ne!(Value::from(1), Value::TRUE);
    assert_ne!(Value::Void, Value::string(""));
    assert_ne!(Value::Void, Value::empty_map());
}

#[test]
fn test_map_equality_is_ordered_content() {
    let array = Value::array([Value::string("a"), Value::string("b")]);
    let same = Value::dictionary([
        (Value::from(0), Value::string("a")),
        (Value::from(1), Value::string("b")),
    ]);
    let reordered = Value::dictionary([
        (Value::from(1), Value::string("b")),
        (Value::from(0), Value::string("a")),
    ]);
    let generated = Value::generator(2, |i| Value::character(if i == 0 { 'a' } else { 'b' }));

    assert_eq!(array, same);
    assert_eq!(array, generated);
    assert_ne!(array, reordered);
    assert_eq!(hash_value(&array), hash_value(&same));
    assert_eq!(hash_value(&array), hash_value(&generated));
}

#[test]
fn test_function_equality_is_identity() {
    let first = Value::from(NativeFunction::pure(Arity::exactly(0), |_| Value::Void));
    let second = Value::from(NativeFunction::pure(Arity::exactly(0), |_| Value::Void));

    assert_eq!(first, first.clone());
    assert_ne!(first, second);
    assert_eq!(hash_value(&first), hash_value(&first.clone()));
}

#[test]
fn test_ordering_is_kind_then_content() {
    let ordered = [
        Value::Void,
        Value::FALSE,
        Value::TRUE,
        Value::from(-1),
        Value::from(10),
        Value::string("a"),
        Value::string("b"),
        Value::empty_map(),
        Value::array([Value::from(1)]),
        Value::from(NativeFunction::pure1(Clone::clone)),
    ];

    for pair in ordered.windows(2) {
        assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
    }
    assert!(Value::string("10") > Value::from(99));
}

#[test]
fn test_zero_signs_hash_alike() {
    assert_eq!(hash_value(&Value::from(0.0)), hash_value(&Value::from(-0.0)));
}

#[test]
fn test_lazy_is_transparent() {
    let eager = Value::array([Value::from(1), Value::from(2)]);
    let lazy = Value::lazy(|| Value::array([Value::from(1), Value::from(2)]));

    assert_eq!(lazy, eager);
    assert_eq!(eager, lazy);
    assert_eq!(lazy.kind(), Kind::Map);
    assert_eq!(hash_value(&lazy), hash_value(&eager));
    assert_eq!(lazy.to_string(), eager.to_string());
    assert_eq!(lazy.get(&Value::from(1)), Value::from(2));
}

#[test]
fn test_lazy_resolves_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let lazy = Value::lazy(|| {
        CALLS.fetch_add(1, AtomicOrdering::SeqCst);
        Value::string("computed")
    });
    let shared = lazy.clone();

    assert!(!lazy.is_resolved());
    assert_eq!(lazy.as_string(), "computed");
    assert_eq!(shared.as_string(), "computed");
    assert!(shared.is_resolved());
    assert_eq!(CALLS.load(AtomicOrdering::SeqCst), 1);
}

#[test]
fn test_nested_lazy_flattens() {
    let lazy = Value::lazy(|| Value::lazy(|| Value::from(3)));
    assert!(matches!(lazy.resolved(), Value::Number(n) if *n == 3.0));
}

#[test]
#[allow(clippy::mutable_key_type, reason = "value hashes depend on immutable content")]
fn test_value_as_hash_key() {
    use rustc_hash::FxHashMap;

    let mut map: FxHashMap<Value, &str> = FxHashMap::default();
    map.insert(Value::string("key"), "string");
    map.insert(Value::from(42), "number");
    map.insert(Value::lazy(|| Value::TRUE), "boolean");

    assert_eq!(map.get(&Value::string("key")), Some(&"string"));
    assert_eq!(map.get(&Value::from(42.0)), Some(&"number"));
    assert_eq!(map.get(&Value::TRUE), Some(&"boolean"));
    assert_eq!(map.get(&Value::Void), None);
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
