//! Weft - a template engine.
//!
//! Templates mix literal text with blocks delimited by `{{` and `}}`:
//!
//! ```text
//! {{ for k, v in items }}{{ k }}={{ v }};{{ end }}
//! ```
//!
//! A [`Document`] is compiled once from a template and a [`Configuration`],
//! then rendered against any [`Store`] of global values. Compilation can
//! fail with a configuration or parse [`Error`]; rendering cannot: missing
//! names, missing keys and calls to non-functions all evaluate to void.
//!
//! The pipeline lives in one crate per stage: `weft_lexer`, `weft_parse`,
//! then `weft_eval` for symbol resolution, assembly and interpretation.

pub mod commands;
mod configuration;
mod document;
mod error;

use std::sync::Once;

pub use configuration::Configuration;
pub use document::Document;
pub use error::Error;

pub use weft_diagnostic::{ConfigurationError, ParseError};
pub use weft_eval::{builtins, Access, MonitorStore, SimpleStore, Store};
pub use weft_ir::{Location, StoreMode};
pub use weft_parse::Trimmer;
pub use weft_value::{
    Arity, DictionaryMap, Function, IoOutput, Map, NativeFunction, Output, Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=weft_parse=trace,weft=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry().with(filter).with(tree).try_init();
        }
    });
}
