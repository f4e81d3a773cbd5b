//! Executable documents.

use tracing::{debug, trace};
use weft_ir::Statement;
use weft_value::{Frame, Output, Value};

use crate::assembler::assemble;
use crate::interpreter::{Interpreter, StatementExecutor};
use crate::store::Store;

/// A document lowered for the interpreter.
///
/// Immutable once built: any number of threads may render the same
/// program, each render owning its globals and frames.
#[derive(Debug)]
pub struct Program {
    root: StatementExecutor,
    globals: Vec<String>,
    local_count: usize,
}

impl Program {
    pub fn new(statement: &Statement) -> Self {
        let assembly = assemble(Interpreter, statement);
        debug!(
            globals = assembly.globals.len(),
            locals = assembly.local_count,
            "assembled program"
        );
        Program {
            root: assembly.root,
            globals: assembly.globals,
            local_count: assembly.local_count,
        }
    }

    /// Names of the globals the document reads or writes, in slot order.
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    pub fn local_count(&self) -> usize {
        self.local_count
    }

    /// Render into `output`, returning the value of a top-level `return`
    /// or void.
    ///
    /// Globals are read from `store` once; assignments made by the
    /// document stay local to this render.
    pub fn execute(&self, store: &dyn Store, output: &mut dyn Output) -> Value {
        let mut globals: Vec<Value> = self
            .globals
            .iter()
            .map(|name| {
                let value = store.try_get(name);
                trace!(name = %name, found = value.is_some(), "global");
                value.unwrap_or_default()
            })
            .collect();

        let mut frame = Frame::new(&mut globals, self.local_count);
        self.root.execute(&mut frame, output).unwrap_or_default()
    }

    /// Render into a new string.
    pub fn render(&self, store: &dyn Store) -> String {
        let mut output = String::new();
        self.execute(store, &mut output);
        output
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
