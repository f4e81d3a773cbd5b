//! Execution frames.
//!
//! A [`Frame`] backs one activation: the render itself or one template
//! function call. Globals are shared by every frame of a render; locals
//! belong to the activation. Modifiers are the functions installed by
//! enclosing `wrap` blocks and apply to every echo of the activation.

use std::ops::Range;

use crate::{Output, Value};

/// Resolved storage location of a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Index into the render's globals, in first-reference order.
    Global(usize),
    /// Index into the current activation's locals.
    Local(usize),
}

/// Globals and locals of one activation.
pub struct Frame<'g> {
    globals: &'g mut [Value],
    locals: Vec<Value>,
    modifiers: Vec<Value>,
}

impl<'g> Frame<'g> {
    pub fn new(globals: &'g mut [Value], local_count: usize) -> Self {
        Frame {
            globals,
            locals: vec![Value::Void; local_count],
            modifiers: Vec::new(),
        }
    }

    /// Frame for a function call: same globals, fresh locals, no modifiers.
    pub fn for_function(&mut self, local_count: usize) -> Frame<'_> {
        Frame::new(&mut *self.globals, local_count)
    }

    /// Read a slot; out-of-range slots read as void.
    pub fn get(&self, symbol: Symbol) -> Value {
        let slot = match symbol {
            Symbol::Global(index) => self.globals.get(index),
            Symbol::Local(index) => self.locals.get(index),
        };
        slot.cloned().unwrap_or_default()
    }

    /// Write a slot; out-of-range writes are ignored.
    pub fn set(&mut self, symbol: Symbol, value: Value) {
        let slot = match symbol {
            Symbol::Global(index) => self.globals.get_mut(index),
            Symbol::Local(index) => self.locals.get_mut(index),
        };
        if let Some(slot) = slot {
            *slot = value;
        }
    }

    /// Reset a range of locals to void.
    pub fn clear(&mut self, locals: Range<usize>) {
        let end = locals.end.min(self.locals.len());
        let start = locals.start.min(end);
        self.locals[start..end].fill(Value::Void);
    }

    pub fn globals(&self) -> &[Value] {
        self.globals
    }

    /// Write the string form of `value`, passed through every active
    /// modifier from the innermost wrap outwards.
    pub fn echo(&mut self, value: &Value, output: &mut dyn Output) {
        if self.modifiers.is_empty() {
            output.write(&value.as_string());
            return;
        }

        // Modifiers run unwrapped so an echoing modifier cannot re-enter itself.
        let modifiers = std::mem::take(&mut self.modifiers);
        let mut current = value.clone();
        for modifier in modifiers.iter().rev() {
            current = match modifier.as_function() {
                Some(function) => function.invoke(self, std::slice::from_ref(&current), output),
                None => Value::Void,
            };
        }
        self.modifiers = modifiers;
        output.write(&current.as_string());
    }

    /// Run `body` with `modifier` applied to every echo.
    pub fn wrap<R>(&mut self, modifier: Value, body: impl FnOnce(&mut Self) -> R) -> R {
        self.modifiers.push(modifier);
        let result = body(self);
        self.modifiers.pop();
        result
    }

    /// Run `body` with every modifier suspended.
    pub fn unwrapped<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::take(&mut self.modifiers);
        let result = body(self);
        self.modifiers = saved;
        result
    }
}
