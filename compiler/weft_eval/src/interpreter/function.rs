//! Functions declared by templates.

use tracing::trace;
use weft_value::{Frame, Function, Output, Symbol, Value};

use super::StatementExecutor;

/// Body of a `define` block.
///
/// Each call gets a fresh activation of `local_count` locals sharing the
/// caller's globals; nothing of the defining activation is captured.
#[derive(Debug)]
pub struct TemplateFunction {
    arguments: Vec<Symbol>,
    local_count: usize,
    body: StatementExecutor,
}

impl TemplateFunction {
    pub fn new(arguments: Vec<Symbol>, local_count: usize, body: StatementExecutor) -> Self {
        TemplateFunction {
            arguments,
            local_count,
            body,
        }
    }
}

impl Function for TemplateFunction {
    fn is_pure(&self) -> bool {
        false
    }

    /// Missing arguments are void; extra arguments are ignored.
    fn invoke(&self, frame: &mut Frame<'_>, arguments: &[Value], output: &mut dyn Output) -> Value {
        trace!(
            arguments = arguments.len(),
            locals = self.local_count,
            "invoke template function"
        );
        weft_stack::guarded(|| {
            let mut activation = frame.for_function(self.local_count);
            for (index, &symbol) in self.arguments.iter().enumerate() {
                let argument = arguments.get(index).cloned().unwrap_or_default();
                activation.set(symbol, argument);
            }
            self.body
                .execute(&mut activation, output)
                .unwrap_or_default()
        })
    }
}
