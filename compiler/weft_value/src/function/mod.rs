//! The function capability.
//!
//! Host functions implement [`Function`] directly or through
//! [`NativeFunction`]; template functions are produced by the interpreter.
//! Function values compare by identity, never by behavior.

use std::fmt;
use std::ops::RangeInclusive;

use crate::{Frame, Output, Value};

/// Invocable value.
pub trait Function: Send + Sync {
    /// Whether invoking this function can write to the output sink.
    fn is_pure(&self) -> bool;

    /// Invoke with already-evaluated arguments.
    ///
    /// `frame` is the caller's activation: implementations may read globals
    /// through it or echo into `output` with the caller's modifiers applied.
    fn invoke(&self, frame: &mut Frame<'_>, arguments: &[Value], output: &mut dyn Output) -> Value;
}

impl fmt::Debug for dyn Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<function>")
    }
}

/// Accepted argument count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` for variadic functions.
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exactly(count: usize) -> Self {
        Arity {
            min: count,
            max: Some(count),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Arity { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Arity {
            min,
            max: Some(max),
        }
    }

    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl From<RangeInclusive<usize>> for Arity {
    fn from(range: RangeInclusive<usize>) -> Self {
        Arity::between(*range.start(), *range.end())
    }
}

type Callback = dyn Fn(&mut Frame<'_>, &[Value], &mut dyn Output) -> Value + Send + Sync;

/// Host function backed by a closure.
///
/// Calls with an argument count outside [`Arity`] return void without
/// running the closure.
pub struct NativeFunction {
    pure: bool,
    arity: Arity,
    callback: Box<Callback>,
}

impl NativeFunction {
    /// Pure function of its arguments only.
    pub fn pure(
        arity: impl Into<Arity>,
        callback: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        NativeFunction {
            pure: true,
            arity: arity.into(),
            callback: Box::new(move |_, arguments, _| callback(arguments)),
        }
    }

    /// Pure function of exactly one argument.
    pub fn pure1(callback: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self::pure(Arity::exactly(1), move |arguments| callback(&arguments[0]))
    }

    /// Pure function of exactly two arguments.
    pub fn pure2(callback: impl Fn(&Value, &Value) -> Value + Send + Sync + 'static) -> Self {
        Self::pure(Arity::exactly(2), move |arguments| {
            callback(&arguments[0], &arguments[1])
        })
    }

    /// Function with access to the caller's frame and output.
    pub fn impure(
        arity: impl Into<Arity>,
        callback: impl Fn(&mut Frame<'_>, &[Value], &mut dyn Output) -> Value + Send + Sync + 'static,
    ) -> Self {
        NativeFunction {
            pure: false,
            arity: arity.into(),
            callback: Box::new(callback),
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }
}

impl Function for NativeFunction {
    fn is_pure(&self) -> bool {
        self.pure
    }

    fn invoke(&self, frame: &mut Frame<'_>, arguments: &[Value], output: &mut dyn Output) -> Value {
        if self.arity.accepts(arguments.len()) {
            (self.callback)(frame, arguments, output)
        } else {
            Value::Void
        }
    }
}

impl From<NativeFunction> for Value {
    fn from(function: NativeFunction) -> Self {
        Value::function(function)
    }
}
