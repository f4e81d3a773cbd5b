use parking_lot::Mutex;
use weft_ir::StoreMode;
use weft_value::Value;

use super::Store;

/// One recorded store access.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    /// A lookup and the value it found.
    Read { name: String, found: Option<Value> },
    Write { name: String, mode: StoreMode },
}

/// Store decorator recording every read and write in order.
///
/// Reads go through `&self`, so the log sits behind a mutex.
#[derive(Debug)]
pub struct MonitorStore<S> {
    inner: S,
    accesses: Mutex<Vec<Access>>,
}

impl<S: Store> MonitorStore<S> {
    pub fn new(inner: S) -> Self {
        MonitorStore {
            inner,
            accesses: Mutex::new(Vec::new()),
        }
    }

    /// Accesses recorded so far.
    pub fn accesses(&self) -> Vec<Access> {
        self.accesses.lock().clone()
    }

    /// Names read so far, deduplicated, in first-read order.
    pub fn read_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for access in self.accesses.lock().iter() {
            if let Access::Read { name, .. } = access {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    pub fn clear(&self) {
        self.accesses.lock().clear();
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Store> Store for MonitorStore<S> {
    fn enter(&mut self) {
        self.inner.enter();
    }

    fn leave(&mut self) -> bool {
        self.inner.leave()
    }

    fn set(&mut self, name: &str, value: Value, mode: StoreMode) {
        self.accesses.get_mut().push(Access::Write {
            name: name.to_owned(),
            mode,
        });
        self.inner.set(name, value, mode);
    }

    fn try_get(&self, name: &str) -> Option<Value> {
        let found = self.inner.try_get(name);
        self.accesses.lock().push(Access::Read {
            name: name.to_owned(),
            found: found.clone(),
        });
        found
    }
}
