//! The `render` command: compile a template and write its output.

use std::fs;
use std::io::Write;

use tracing::debug;
use weft_value::{IoOutput, Value};

use super::{build_store, Options};
use crate::{Document, Error};

/// Render `options.template` into `writer`.
///
/// Returns the value of a top-level `return`, or void.
pub fn render_file(options: &Options, writer: impl Write) -> Result<Value, Error> {
    let template = fs::read_to_string(&options.template)?;
    let document = Document::new(&template, &options.configuration)?;

    let context = match &options.context {
        Some(path) => {
            debug!(path = %path.display(), "reading context");
            Some(serde_json::from_str(&fs::read_to_string(path)?)?)
        }
        None => None,
    };
    let store = build_store(context, &options.assignments)?;

    let mut output = IoOutput::new(writer);
    let result = document.render_to(&store, &mut output);
    output.finish()?;
    Ok(result)
}
