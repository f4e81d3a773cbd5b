//! Compile-time symbol resolution.
//!
//! Names resolve to [`Symbol`] slots while the assembler walks the tree.
//! Globals are numbered document-wide in first-reference order; locals are
//! numbered per function activation, starting from 0 for each function.
//!
//! Inside a function, blocks opened by [`Scope::enter`] hide the locals they
//! declare once [`Scope::leave`] closes them. Slot numbers are never reused
//! within a function, so a closed block's slots stay reserved and
//! `local_count` is the exact size of the activation's locals.

use std::ops::Range;

use rustc_hash::FxHashMap;
use weft_ir::StoreMode;
use weft_value::Symbol;

/// One lexical block of a function.
struct Block {
    names: FxHashMap<String, usize>,
    /// First slot this block may allocate.
    first_slot: usize,
}

impl Block {
    fn new(first_slot: usize) -> Self {
        Block {
            names: FxHashMap::default(),
            first_slot,
        }
    }
}

/// Blocks and slot counter of one function activation.
struct Function {
    blocks: Vec<Block>,
    next_slot: usize,
}

impl Function {
    fn new() -> Self {
        Function {
            blocks: vec![Block::new(0)],
            next_slot: 0,
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.blocks
            .iter()
            .rev()
            .find_map(|block| block.names.get(name).copied())
    }

    fn declare(&mut self, name: &str) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        if let Some(block) = self.blocks.last_mut() {
            block.names.insert(name.to_owned(), slot);
        }
        slot
    }
}

/// Resolution state of one assembly pass.
pub struct Scope {
    globals: Vec<String>,
    global_slots: FxHashMap<String, usize>,
    /// The render's own activation.
    root: Function,
    /// Enclosing function bodies, innermost last.
    functions: Vec<Function>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            globals: Vec::new(),
            global_slots: FxHashMap::default(),
            root: Function::new(),
            functions: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Function {
        self.functions.last_mut().unwrap_or(&mut self.root)
    }

    fn global(&mut self, name: &str) -> Symbol {
        if let Some(&slot) = self.global_slots.get(name) {
            return Symbol::Global(slot);
        }
        let slot = self.globals.len();
        self.globals.push(name.to_owned());
        self.global_slots.insert(name.to_owned(), slot);
        Symbol::Global(slot)
    }

    /// Resolve `name`, declaring it when it is not yet visible.
    ///
    /// - `Local`: the slot of `name` in the innermost block, declared there
    ///   on first reference.
    /// - `Global`/`Private`: the closest local of the current function
    ///   holding `name`, else the global slot.
    pub fn resolve(&mut self, name: &str, mode: StoreMode) -> Symbol {
        let function = self.current();
        match mode {
            StoreMode::Local => {
                let existing = function
                    .blocks
                    .last()
                    .and_then(|block| block.names.get(name).copied());
                Symbol::Local(existing.unwrap_or_else(|| function.declare(name)))
            }
            StoreMode::Global | StoreMode::Private => match function.find(name) {
                Some(slot) => Symbol::Local(slot),
                None => self.global(name),
            },
        }
    }

    /// Declare a fresh local in the innermost block, shadowing any visible
    /// binding of the same name.
    pub fn declare(&mut self, name: &str) -> Symbol {
        Symbol::Local(self.current().declare(name))
    }

    /// Open a block.
    pub fn enter(&mut self) {
        let function = self.current();
        let first_slot = function.next_slot;
        function.blocks.push(Block::new(first_slot));
    }

    /// Close the innermost block, returning the local slots allocated
    /// since it was opened (nested blocks included).
    pub fn leave(&mut self) -> Range<usize> {
        let function = self.current();
        // The function's root block is never closed.
        if function.blocks.len() > 1 {
            if let Some(block) = function.blocks.pop() {
                return block.first_slot..function.next_slot;
            }
        }
        function.next_slot..function.next_slot
    }

    /// Start the activation of a function body.
    pub fn push_function(&mut self) {
        self.functions.push(Function::new());
    }

    /// Finish a function body, returning its local count.
    pub fn pop_function(&mut self) -> usize {
        self.functions.pop().map_or(0, |function| function.next_slot)
    }

    /// Local count of the current activation.
    pub fn local_count(&self) -> usize {
        self.functions.last().unwrap_or(&self.root).next_slot
    }

    /// Global names in slot order.
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    pub fn into_globals(self) -> Vec<String> {
        self.globals
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
