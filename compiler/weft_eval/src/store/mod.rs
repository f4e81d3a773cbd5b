//! Stores supplying global values to renders.
//!
//! A render reads each global its document references from the store once,
//! before executing. Stores are never written by a render, so rendering the
//! same document twice against an unchanged store gives the same output.
//!
//! Implementations:
//! - [`SimpleStore`]: a stack of name/value levels
//! - [`MonitorStore`]: a decorator recording every access

mod monitor;
mod simple;

use weft_ir::StoreMode;
use weft_value::Value;

pub use monitor::{Access, MonitorStore};
pub use simple::SimpleStore;

/// Named values organized in nested levels.
pub trait Store {
    /// Open a level.
    fn enter(&mut self);

    /// Close the innermost level; `false` when only the global level is
    /// left.
    fn leave(&mut self) -> bool;

    /// Bind `name`.
    ///
    /// `Global` writes the outermost level, `Local` the innermost one.
    /// `Private` updates the innermost level already holding `name`, or
    /// declares it in the innermost level.
    fn set(&mut self, name: &str, value: Value, mode: StoreMode);

    /// Look `name` up from the innermost level outwards.
    fn try_get(&self, name: &str) -> Option<Value>;

    /// [`Store::try_get`], void when absent.
    fn get(&self, name: &str) -> Value {
        self.try_get(name).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
