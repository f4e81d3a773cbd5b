//! Weft Value - runtime value model for the weft template engine.
//!
//! Templates manipulate a single tagged value type, [`Value`], whose only
//! composite kind is the ordered [`Map`]. Functions are values too: host
//! functions implement [`Function`] directly, template functions are
//! produced by the interpreter.
//!
//! # Modules
//!
//! - `value`: the [`Value`] union, coercions, equality, ordering, hashing
//! - `map`: the [`Map`] capability and its array, dictionary and generator
//!   implementations
//! - `function`: the [`Function`] capability and [`NativeFunction`]
//! - `frame`: resolved [`Symbol`] slots and the per-activation [`Frame`]
//! - `output`: the append-only [`Output`] sink
//! - `operators`: operator functions the parser lowers expressions onto
//! - `reflect`: conversion of `serde::Serialize` host data into values

mod frame;
mod function;
mod map;
pub mod operators;
mod output;
mod reflect;
mod value;

pub use frame::{Frame, Symbol};
pub use function::{Arity, Function, NativeFunction};
pub use map::{ArrayMap, DictionaryMap, GeneratorMap, Map, Pairs};
pub use output::{IoOutput, Output};
pub use reflect::from_serialize;
pub use value::{Heap, Kind, Value};
