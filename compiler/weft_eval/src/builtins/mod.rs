//! Host functions available to every document.
//!
//! All builtins are pure. Following the rest of the engine they never fail:
//! a wrong argument count gives void, a wrong argument kind gives a neutral
//! value (0, "", an empty map).

use weft_ir::StoreMode;
use weft_value::{Arity, NativeFunction, Value};

use crate::store::Store;

/// Every builtin with its global name.
pub fn all() -> Vec<(&'static str, Value)> {
    vec![
        ("abs", NativeFunction::pure1(|n| Value::from(n.as_number().abs())).into()),
        ("cat", NativeFunction::pure(Arity::at_least(1), cat).into()),
        ("default", NativeFunction::pure2(default).into()),
        ("has", NativeFunction::pure2(has).into()),
        ("html", NativeFunction::pure1(|s| Value::from(escape_html(&s.as_string()))).into()),
        ("join", NativeFunction::pure(Arity::between(1, 2), join).into()),
        ("keys", NativeFunction::pure1(keys).into()),
        ("len", NativeFunction::pure1(len).into()),
        ("lower", NativeFunction::pure1(|s| Value::from(s.as_string().to_lowercase())).into()),
        ("max", NativeFunction::pure(Arity::at_least(1), |a| extremum(a, f64::max)).into()),
        ("min", NativeFunction::pure(Arity::at_least(1), |a| extremum(a, f64::min)).into()),
        ("range", NativeFunction::pure(Arity::between(1, 3), range).into()),
        ("round", NativeFunction::pure(Arity::between(1, 2), round).into()),
        ("type", NativeFunction::pure1(|v| Value::string(v.kind().name())).into()),
        ("upper", NativeFunction::pure1(|s| Value::from(s.as_string().to_uppercase())).into()),
        ("values", NativeFunction::pure1(values).into()),
    ]
}

/// Bind every builtin as a global of `store`.
pub fn register(store: &mut dyn Store) {
    for (name, function) in all() {
        store.set(name, function, StoreMode::Global);
    }
}

/// Concatenate maps into an array of their values, or anything else into
/// a string.
fn cat(arguments: &[Value]) -> Value {
    if arguments.iter().all(|argument| argument.as_map().is_some()) {
        let items = arguments
            .iter()
            .filter_map(Value::as_map)
            .flat_map(|map| map.pairs().map(|(_, value)| value).collect::<Vec<_>>());
        return Value::array(items);
    }

    let mut text = String::new();
    for argument in arguments {
        text.push_str(&argument.as_string());
    }
    Value::from(text)
}

fn default(primary: &Value, fallback: &Value) -> Value {
    if primary.as_boolean() {
        primary.clone()
    } else {
        fallback.clone()
    }
}

fn has(map: &Value, key: &Value) -> Value {
    Value::from(map.as_map().is_some_and(|map| map.get(key).is_some()))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// `join(map[, separator])`
fn join(arguments: &[Value]) -> Value {
    let separator = arguments.get(1).map(Value::as_string).unwrap_or_default();
    let Some(map) = arguments[0].as_map() else {
        return Value::from(arguments[0].as_string());
    };
    let parts: Vec<String> = map
        .pairs()
        .map(|(_, value)| value.as_string().into_owned())
        .collect();
    Value::from(parts.join(&*separator))
}

fn keys(map: &Value) -> Value {
    match map.as_map() {
        Some(map) => Value::array(map.pairs().map(|(key, _)| key).collect::<Vec<_>>()),
        None => Value::empty_map(),
    }
}

fn values(map: &Value) -> Value {
    match map.as_map() {
        Some(map) => Value::array(map.pairs().map(|(_, value)| value).collect::<Vec<_>>()),
        None => Value::empty_map(),
    }
}

/// Entry count of a map, character count of anything else.
fn len(value: &Value) -> Value {
    let length = match value.as_map() {
        Some(map) => map.len(),
        None => value.as_string().chars().count(),
    };
    Value::from(length)
}

fn extremum(arguments: &[Value], pick: fn(f64, f64) -> f64) -> Value {
    arguments
        .iter()
        .map(Value::as_number)
        .reduce(pick)
        .map_or(Value::Void, Value::from)
}

/// `range(stop)`, `range(start, stop)` or `range(start, stop, step)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "counts are checked finite and positive; indices stay far below 2^52"
)]
fn range(arguments: &[Value]) -> Value {
    let (start, stop, step) = match arguments {
        [stop] => (0.0, stop.as_number(), 1.0),
        [start, stop] => (start.as_number(), stop.as_number(), 1.0),
        [start, stop, step] => (start.as_number(), stop.as_number(), step.as_number()),
        _ => return Value::Void,
    };

    let steps = ((stop - start) / step).ceil();
    if !steps.is_finite() || steps <= 0.0 {
        return Value::empty_map();
    }
    Value::generator(steps as usize, move |index| {
        Value::from(start + index as f64 * step)
    })
}

/// `round(n[, digits])`, halves away from zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "digits are clamped to a small range first"
)]
fn round(arguments: &[Value]) -> Value {
    let number = arguments[0].as_number();
    let digits = arguments
        .get(1)
        .map_or(0.0, Value::as_number)
        .clamp(0.0, 15.0) as i32;
    let factor = 10f64.powi(digits);
    Value::from((number * factor).round() / factor)
}
