//! The map capability.
//!
//! Maps are the only composite value kind: arrays, records and dictionaries
//! are all maps with an ordered enumeration of `(key, value)` pairs. The
//! trait is deliberately small so host code can expose its own collections
//! without copying them into a dictionary first.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::value::number::to_index;
use crate::Value;

/// Ordered `(key, value)` enumeration returned by [`Map::pairs`].
pub type Pairs<'a> = Box<dyn Iterator<Item = (Value, Value)> + 'a>;

/// Ordered key/value collection.
pub trait Map: Send + Sync {
    /// Number of keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &Value) -> Option<Value>;

    /// All pairs, in the map's enumeration order.
    fn pairs(&self) -> Pairs<'_>;
}

/// Contiguous integer keys `0..n`.
#[derive(Clone, Default)]
pub struct ArrayMap {
    items: Vec<Value>,
}

impl ArrayMap {
    pub fn new(items: Vec<Value>) -> Self {
        ArrayMap { items }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

impl Map for ArrayMap {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, key: &Value) -> Option<Value> {
        match key.resolved() {
            Value::Number(n) => to_index(*n, self.items.len()).map(|i| self.items[i].clone()),
            _ => None,
        }
    }

    fn pairs(&self) -> Pairs<'_> {
        Box::new(
            self.items
                .iter()
                .enumerate()
                .map(|(i, value)| (Value::from(i), value.clone())),
        )
    }
}

/// Arbitrary keys in insertion order.
///
/// Inserting an existing key replaces its value but keeps its position.
#[derive(Clone, Default)]
pub struct DictionaryMap {
    entries: IndexMap<Value, Value, FxBuildHasher>,
}

impl DictionaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Value, value: Value) {
        // Lazy keys are stored resolved so lookups never re-run resolvers.
        self.entries.insert(key.resolved().clone(), value);
    }
}

impl FromIterator<(Value, Value)> for DictionaryMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = DictionaryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Map for DictionaryMap {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, key: &Value) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn pairs(&self) -> Pairs<'_> {
        Box::new(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}

/// Keys `0..count`, values computed from the index on every access.
pub struct GeneratorMap {
    count: usize,
    generator: Box<dyn Fn(usize) -> Value + Send + Sync>,
}

impl GeneratorMap {
    pub fn new(count: usize, generator: impl Fn(usize) -> Value + Send + Sync + 'static) -> Self {
        GeneratorMap {
            count,
            generator: Box::new(generator),
        }
    }
}

impl Map for GeneratorMap {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, key: &Value) -> Option<Value> {
        match key.resolved() {
            Value::Number(n) => to_index(*n, self.count).map(|i| (self.generator)(i)),
            _ => None,
        }
    }

    fn pairs(&self) -> Pairs<'_> {
        Box::new((0..self.count).map(|i| (Value::from(i), (self.generator)(i))))
    }
}

impl fmt::Debug for dyn Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}

#[cfg(test)]
mod tests;
