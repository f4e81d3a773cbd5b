//! Compiled templates.

use std::io::Read;

use tracing::debug;
use weft_eval::{Program, Store};
use weft_value::{Output, Value};

use crate::{Configuration, Error};

/// A template compiled once and rendered any number of times.
///
/// `Document` is `Send + Sync`; concurrent renders each own their frames.
#[derive(Debug)]
pub struct Document {
    program: Program,
}

impl Document {
    /// Compile `template`.
    ///
    /// Fails on invalid delimiters or on the first syntax error; there is
    /// no partially compiled document.
    #[tracing::instrument(level = "debug", skip_all, fields(len = template.len()))]
    pub fn new(template: &str, configuration: &Configuration) -> Result<Self, Error> {
        let delimiters = configuration.delimiters()?;
        let statement = weft_parse::parse(template, &delimiters, configuration.trimmer)?;
        let program = Program::new(&statement);
        debug!(
            globals = program.globals().len(),
            locals = program.local_count(),
            "compiled document"
        );
        Ok(Document { program })
    }

    /// Compile a template read from `reader`.
    pub fn from_reader(mut reader: impl Read, configuration: &Configuration) -> Result<Self, Error> {
        let mut template = String::new();
        reader.read_to_string(&mut template)?;
        Self::new(&template, configuration)
    }

    /// Render to a string.
    pub fn render(&self, store: &dyn Store) -> String {
        let mut output = String::new();
        self.render_to(store, &mut output);
        output
    }

    /// Render into `output`, returning the value of a top-level `return`,
    /// or void.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn render_to(&self, store: &dyn Store, output: &mut dyn Output) -> Value {
        self.program.execute(store, output)
    }

    /// Global names the document references, in first-reference order.
    pub fn globals(&self) -> &[String] {
        self.program.globals()
    }
}
