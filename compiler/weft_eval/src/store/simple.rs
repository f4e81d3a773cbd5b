use rustc_hash::FxHashMap;
use weft_ir::StoreMode;
use weft_value::Value;

use super::Store;

/// Stack of levels; the first level holds globals and is never closed.
#[derive(Clone, Debug)]
pub struct SimpleStore {
    levels: Vec<FxHashMap<String, Value>>,
}

impl SimpleStore {
    pub fn new() -> Self {
        SimpleStore {
            levels: vec![FxHashMap::default()],
        }
    }

    /// Bind a global, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value.into(), StoreMode::Global);
        self
    }

    /// Number of open levels, the global level included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    fn innermost(&mut self) -> &mut FxHashMap<String, Value> {
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }
}

impl Default for SimpleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for SimpleStore {
    fn enter(&mut self) {
        self.levels.push(FxHashMap::default());
    }

    fn leave(&mut self) -> bool {
        if self.levels.len() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }

    fn set(&mut self, name: &str, value: Value, mode: StoreMode) {
        match mode {
            StoreMode::Global => {
                self.levels[0].insert(name.to_owned(), value);
            }
            StoreMode::Local => {
                self.innermost().insert(name.to_owned(), value);
            }
            StoreMode::Private => {
                let holder = self
                    .levels
                    .iter_mut()
                    .rev()
                    .find_map(|level| level.get_mut(name));
                match holder {
                    Some(slot) => *slot = value,
                    None => {
                        self.innermost().insert(name.to_owned(), value);
                    }
                }
            }
        }
    }

    fn try_get(&self, name: &str) -> Option<Value> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.get(name))
            .cloned()
    }
}

impl<N: AsRef<str>, V: Into<Value>> FromIterator<(N, V)> for SimpleStore {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut store = SimpleStore::new();
        store.extend(pairs);
        store
    }
}

impl<N: AsRef<str>, V: Into<Value>> Extend<(N, V)> for SimpleStore {
    /// Bind every pair as a global.
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, pairs: I) {
        for (name, value) in pairs {
            self.set(name.as_ref(), value.into(), StoreMode::Global);
        }
    }
}
