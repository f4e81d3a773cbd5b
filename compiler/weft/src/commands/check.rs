//! The `check` command: compile a template without rendering it.

use std::fs;

use super::Options;
use crate::{Document, Error};

/// Compile `options.template`, returning the globals it references.
pub fn check_file(options: &Options) -> Result<Vec<String>, Error> {
    let template = fs::read_to_string(&options.template)?;
    let document = Document::new(&template, &options.configuration)?;
    Ok(document.globals().to_vec())
}
