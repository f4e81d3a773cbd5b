//! Concurrent rendering of one compiled document.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use weft::{builtins, Configuration, Document, MonitorStore, SimpleStore, Value};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_thread_safe() {
    assert_send_sync::<Document>();
    assert_send_sync::<Value>();
    assert_send_sync::<SimpleStore>();
    assert_send_sync::<MonitorStore<SimpleStore>>();
}

#[test]
fn test_parallel_renders_are_independent() {
    let document = Document::new(
        "{{ set total to 0 }}{{ for v in range(0, n) }}{{ set total to total + v }}{{ end }}\
         {{ name }}:{{ total }}",
        &Configuration::default(),
    )
    .unwrap();

    let outputs: Vec<String> = (0..64_usize)
        .into_par_iter()
        .map(|n| {
            let mut store = SimpleStore::new()
                .with("n", n)
                .with("name", format!("r{n}"));
            builtins::register(&mut store);
            document.render(&store)
        })
        .collect();

    for (n, output) in outputs.iter().enumerate() {
        let total: usize = (0..n).sum();
        assert_eq!(output, &format!("r{n}:{total}"));
    }
}

#[test]
fn test_shared_store_across_threads() {
    let document = Document::new(
        "{{ define twice(x) }}{{ return x * 2 }}{{ end }}{{ twice(base) }}",
        &Configuration::default(),
    )
    .unwrap();
    let store = SimpleStore::new().with("base", 21);

    let outputs: Vec<String> = (0..32)
        .into_par_iter()
        .map(|_| document.render(&store))
        .collect();

    assert!(outputs.iter().all(|output| output == "42"));
}

#[test]
fn test_lazy_value_shared_across_threads() {
    let store = SimpleStore::new().with(
        "items",
        Value::lazy(|| Value::array((1..=3).map(Value::from))),
    );
    let document = Document::new(
        "{{ for v in items }}{{ v }}{{ end }}",
        &Configuration::default(),
    )
    .unwrap();

    let outputs: Vec<String> = (0..16)
        .into_par_iter()
        .map(|_| document.render(&store))
        .collect();

    assert!(outputs.iter().all(|output| output == "123"));
}
