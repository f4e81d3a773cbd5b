//! Runtime values for the weft template engine.
//!
//! # Heap Enforcement
//!
//! Every heap-backed payload goes through a factory method on `Value`. The
//! `Heap<T>` wrapper has a private constructor, so external code cannot wrap
//! payloads directly:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let m = Value::array([Value::from(1)]);         // OK
//! let s = Value::String(Heap::new(...));          // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Laziness
//!
//! `Value::lazy` defers computing a value until first access. Every accessor
//! and every trait implementation below looks through the lazy cell, so a
//! lazy value behaves exactly like the value it resolves to. Code that
//! matches on variants directly must call [`Value::resolved`] first.
//!
//! # Thread Safety
//!
//! Payloads are shared through `Arc`, maps and functions are `Send + Sync`,
//! and lazy cells fill through `OnceLock`. Values can be shared freely across
//! concurrent renders.

mod heap;
mod lazy;
pub(crate) mod number;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use heap::Heap;
use lazy::Lazy;

use crate::function::Function;
use crate::map::{ArrayMap, DictionaryMap, GeneratorMap, Map};

/// Runtime value.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value; the result of every forgiven failure.
    #[default]
    Void,
    Boolean(bool),
    /// Every numeric input is normalized to a double.
    Number(f64),
    String(Heap<str>),
    Map(Heap<dyn Map>),
    Function(Heap<dyn Function>),
    /// Deferred value, resolved once on first access.
    Lazy(Heap<Lazy>),
}

/// Value kind, in the order used for type-then-content comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Void,
    Boolean,
    Number,
    String,
    Map,
    Function,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Void => "void",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Map => "map",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);

    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Heap::from_arc(Arc::from(s.as_ref())))
    }

    /// Create a single-character string value.
    pub fn character(c: char) -> Self {
        let mut buffer = [0; 4];
        Value::string(c.encode_utf8(&mut buffer))
    }

    /// Create a map whose keys are `0..n` in iteration order.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::map(ArrayMap::new(items.into_iter().collect()))
    }

    /// Create a map from key/value pairs.
    ///
    /// Duplicate keys keep the last value at the position of the first.
    pub fn dictionary(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::map(pairs.into_iter().collect::<DictionaryMap>())
    }

    /// Create a map with keys `0..count` whose values come from `generator`.
    pub fn generator(
        count: usize,
        generator: impl Fn(usize) -> Value + Send + Sync + 'static,
    ) -> Self {
        Value::map(GeneratorMap::new(count, generator))
    }

    /// Wrap any map implementation.
    pub fn map(map: impl Map + 'static) -> Self {
        let shared: Arc<dyn Map> = Arc::new(map);
        Value::Map(Heap::from_arc(shared))
    }

    pub fn empty_map() -> Self {
        Value::map(ArrayMap::new(Vec::new()))
    }

    /// Wrap any function implementation.
    ///
    /// Each call creates a distinct identity: two separately wrapped
    /// functions are never equal, even with identical behavior.
    pub fn function(function: impl Function + 'static) -> Self {
        let shared: Arc<dyn Function> = Arc::new(function);
        Value::Function(Heap::from_arc(shared))
    }

    /// Create a value computed on first access.
    pub fn lazy(resolver: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Value::Lazy(Heap::new(Lazy::new(resolver)))
    }
}

// Accessors

impl Value {
    /// This value with any lazy indirection resolved.
    #[inline]
    pub fn resolved(&self) -> &Value {
        match self {
            Value::Lazy(lazy) => lazy.force(),
            other => other,
        }
    }

    /// Whether a lazy value has already run its resolver.
    ///
    /// Eager values are always resolved.
    pub fn is_resolved(&self) -> bool {
        match self {
            Value::Lazy(lazy) => lazy.is_resolved(),
            _ => true,
        }
    }

    pub fn kind(&self) -> Kind {
        match self.resolved() {
            Value::Void | Value::Lazy(_) => Kind::Void,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Map(_) => Kind::Map,
            Value::Function(_) => Kind::Function,
        }
    }

    pub fn is_void(&self) -> bool {
        self.kind() == Kind::Void
    }

    /// Truthiness: void, `false`, zero, empty strings and empty maps are
    /// falsy. `NaN` is truthy.
    pub fn as_boolean(&self) -> bool {
        match self.resolved() {
            Value::Void | Value::Lazy(_) => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Map(m) => !m.is_empty(),
            Value::Function(_) => true,
        }
    }

    /// Numeric coercion; anything without a numeric reading is zero.
    pub fn as_number(&self) -> f64 {
        match self.resolved() {
            Value::Boolean(true) => 1.0,
            Value::Number(n) => *n,
            Value::String(s) => number::parse(s),
            Value::Void | Value::Lazy(_) | Value::Boolean(false) | Value::Map(_) | Value::Function(_) => 0.0,
        }
    }

    /// Canonical string form, as written by an echo.
    pub fn as_string(&self) -> Cow<'_, str> {
        match self.resolved() {
            Value::Boolean(true) => Cow::Borrowed("true"),
            Value::Boolean(false) => Cow::Borrowed("false"),
            Value::Number(n) => Cow::Owned(number::format(*n)),
            Value::String(s) => Cow::Borrowed(&**s),
            Value::Void | Value::Lazy(_) | Value::Map(_) | Value::Function(_) => Cow::Borrowed(""),
        }
    }

    /// The string payload, when this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self.resolved() {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&dyn Map> {
        match self.resolved() {
            Value::Map(m) => Some(&**m),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&dyn Function> {
        match self.resolved() {
            Value::Function(f) => Some(&**f),
            _ => None,
        }
    }

    /// Look `key` up in this value's map; void when absent or not a map.
    pub fn get(&self, key: &Value) -> Value {
        self.as_map()
            .and_then(|map| map.get(key))
            .unwrap_or_default()
    }
}

// Equality and Hashing

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.resolved(), other.resolved()) {
            (Value::Void, Value::Void) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => **a == **b,
            (Value::Map(a), Value::Map(b)) => {
                Heap::ptr_eq(a, b) || (a.len() == b.len() && a.pairs().eq(b.pairs()))
            }
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

// NaN makes equality non-reflexive for numbers, matching IEEE semantics.
// Values are still usable as map keys: a NaN key simply never matches.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let resolved = self.resolved();
        resolved.kind().hash(state);

        match resolved {
            Value::Void | Value::Lazy(_) => {}
            Value::Boolean(b) => b.hash(state),
            Value::Number(n) => {
                // 0.0 == -0.0, so both must hash alike.
                let normalized = if *n == 0.0 { 0.0 } else { *n };
                normalized.to_bits().hash(state);
            }
            Value::String(s) => (**s).hash(state),
            Value::Map(m) => {
                m.len().hash(state);
                for (key, value) in m.pairs() {
                    key.hash(state);
                    value.hash(state);
                }
            }
            Value::Function(f) => Heap::address(f).hash(state),
        }
    }
}

// Ordering: kind first, then content. Unordered numbers (NaN) make the
// whole comparison unordered.

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.resolved(), other.resolved());

        match (a, b) {
            (Value::Void, Value::Void) => Some(Ordering::Equal),
            (Value::Boolean(x), Value::Boolean(y)) => Some(x.cmp(y)),
            (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
            (Value::String(x), Value::String(y)) => Some((**x).cmp(&**y)),
            (Value::Map(x), Value::Map(y)) => {
                let mut left = x.pairs();
                let mut right = y.pairs();
                loop {
                    match (left.next(), right.next()) {
                        (None, None) => return Some(Ordering::Equal),
                        (None, Some(_)) => return Some(Ordering::Less),
                        (Some(_), None) => return Some(Ordering::Greater),
                        (Some((lk, lv)), Some((rk, rv))) => {
                            match lk.partial_cmp(&rk)? {
                                Ordering::Equal => {}
                                unequal => return Some(unequal),
                            }
                            match lv.partial_cmp(&rv)? {
                                Ordering::Equal => {}
                                unequal => return Some(unequal),
                            }
                        }
                    }
                }
            }
            (Value::Function(x), Value::Function(y)) => {
                Some(Heap::address(x).cmp(&Heap::address(y)))
            }
            _ => Some(a.kind().cmp(&b.kind())),
        }
    }
}

// Formatting

/// Dump form: an unambiguous rendering that keeps kinds apart.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved() {
            Value::Void | Value::Lazy(_) => f.write_str("<void>"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&number::format(*n)),
            Value::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
            Value::Map(m) => {
                f.write_str("[")?;
                for (i, (key, value)) in m.pairs().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("]")
            }
            Value::Function(_) => f.write_str("<function>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved() {
            Value::Void | Value::Lazy(_) => write!(f, "Void"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({:?})", &**s),
            Value::Map(m) => f.debug_map().entries(m.pairs()).finish(),
            Value::Function(func) => write!(f, "Function({:#x})", Heap::address(func)),
        }
    }
}

// Conversions

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    reason = "every numeric input is normalized to a double"
                )]
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for Value {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::character(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Heap::from_arc(Arc::from(s)))
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::string(s)
    }
}

/// `None` becomes void, never an empty string.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Void, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::map(ArrayMap::new(items))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter)
    }
}

impl FromIterator<(Value, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Value::dictionary(iter)
    }
}

#[cfg(test)]
mod tests;
