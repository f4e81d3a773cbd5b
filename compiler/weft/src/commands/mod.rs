//! Command handlers for the `weft` CLI.
//!
//! Argument parsing and store construction live here; each command is a
//! submodule returning [`Error`] instead of exiting, so `main` owns exit
//! codes.

use std::path::PathBuf;

use weft_eval::{builtins, SimpleStore, Store};
use weft_ir::StoreMode;
use weft_parse::Trimmer;
use weft_value::Value;

use crate::{Configuration, Error};

mod check;
mod render;

pub use check::check_file;
pub use render::render_file;

/// Settings of `weft render` and `weft check`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    pub template: PathBuf,
    /// JSON object whose members become globals.
    pub context: Option<PathBuf>,
    /// `--set name=value` pairs, in command-line order.
    pub assignments: Vec<(String, String)>,
    pub configuration: Configuration,
}

/// Parse the arguments following the command name.
pub fn parse_options(args: &[String]) -> Result<Options, Error> {
    let mut options = Options::default();
    let mut template = None;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .cloned()
                .ok_or_else(|| Error::Usage(format!("missing value for {arg}")))
        };

        match arg.as_str() {
            "--context" | "-c" => options.context = Some(PathBuf::from(value()?)),
            "--set" | "-s" => {
                let assignment = value()?;
                let Some((name, text)) = assignment.split_once('=') else {
                    return Err(Error::Usage(format!(
                        "expected name=value after --set, found '{assignment}'"
                    )));
                };
                options.assignments.push((name.to_owned(), text.to_owned()));
            }
            "--begin" => options.configuration.block_begin = value()?,
            "--continue" => options.configuration.block_continue = value()?,
            "--end" => options.configuration.block_end = value()?,
            "--escape" => {
                let text = value()?;
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(escape), None) => options.configuration.escape = escape,
                    _ => {
                        return Err(Error::Usage(format!(
                            "--escape takes a single character, found '{text}'"
                        )))
                    }
                }
            }
            "--trim" => {
                let name = value()?;
                options.configuration.trimmer = Trimmer::from_name(&name).ok_or_else(|| {
                    Error::Usage(format!(
                        "unknown trim mode '{name}' (expected nothing, enclosing, lines or collapse)"
                    ))
                })?;
            }
            flag if flag.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option '{flag}'")));
            }
            path if template.is_none() => template = Some(PathBuf::from(path)),
            extra => return Err(Error::Usage(format!("unexpected argument '{extra}'"))),
        }
    }

    options.template = template.ok_or_else(|| Error::Usage("missing template path".to_owned()))?;
    Ok(options)
}

/// Value of a `--set` assignment: a number when it parses as a finite
/// one, else a string.
pub fn parse_assignment(text: &str) -> Value {
    match text.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Value::from(number),
        _ => Value::from(text),
    }
}

/// Store holding the builtins, the members of `context` and the
/// assignments, later bindings replacing earlier ones.
pub fn build_store(
    context: Option<serde_json::Value>,
    assignments: &[(String, String)],
) -> Result<SimpleStore, Error> {
    let mut store = SimpleStore::new();
    builtins::register(&mut store);

    match context {
        None => {}
        Some(serde_json::Value::Object(members)) => {
            for (name, member) in members {
                store.set(&name, Value::from(member), StoreMode::Global);
            }
        }
        Some(_) => {
            return Err(Error::Usage("context must be a JSON object".to_owned()));
        }
    }

    for (name, text) in assignments {
        store.set(name, parse_assignment(text), StoreMode::Global);
    }
    Ok(store)
}
