use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_globals_in_first_reference_order() {
    let mut scope = Scope::new();
    assert_eq!(scope.resolve("b", StoreMode::Global), Symbol::Global(0));
    assert_eq!(scope.resolve("a", StoreMode::Private), Symbol::Global(1));
    assert_eq!(scope.resolve("b", StoreMode::Global), Symbol::Global(0));
    assert_eq!(scope.globals(), ["b", "a"]);
}

#[test]
fn test_local_declares_once_per_block() {
    let mut scope = Scope::new();
    assert_eq!(scope.resolve("x", StoreMode::Local), Symbol::Local(0));
    assert_eq!(scope.resolve("x", StoreMode::Local), Symbol::Local(0));
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(0));
    assert_eq!(scope.local_count(), 1);
    assert!(scope.globals().is_empty());
}

#[test]
fn test_local_shadows_in_inner_block() {
    let mut scope = Scope::new();
    assert_eq!(scope.resolve("x", StoreMode::Local), Symbol::Local(0));
    scope.enter();
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(0));
    assert_eq!(scope.resolve("x", StoreMode::Local), Symbol::Local(1));
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(1));
    assert_eq!(scope.leave(), 1..2);
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(0));
}

#[test]
fn test_block_locals_hidden_after_leave() {
    let mut scope = Scope::new();
    scope.enter();
    assert_eq!(scope.resolve("i", StoreMode::Local), Symbol::Local(0));
    assert_eq!(scope.leave(), 0..1);

    // Outside the block the name falls back to a global.
    assert_eq!(scope.resolve("i", StoreMode::Global), Symbol::Global(0));

    // A second block gets a fresh slot; slots are never reused.
    scope.enter();
    assert_eq!(scope.resolve("i", StoreMode::Local), Symbol::Local(1));
    scope.leave();
    assert_eq!(scope.local_count(), 2);
}

#[test]
fn test_leave_range_covers_nested_blocks() {
    let mut scope = Scope::new();
    scope.resolve("outer", StoreMode::Local);
    scope.enter();
    scope.resolve("a", StoreMode::Local);
    scope.enter();
    scope.resolve("b", StoreMode::Local);
    assert_eq!(scope.leave(), 2..3);
    assert_eq!(scope.leave(), 1..3);
}

#[test]
fn test_leave_without_enter_is_empty() {
    let mut scope = Scope::new();
    scope.resolve("x", StoreMode::Local);
    assert_eq!(scope.leave(), 1..1);
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(0));
}

#[test]
fn test_function_locals_numbered_from_zero() {
    let mut scope = Scope::new();
    scope.resolve("a", StoreMode::Local);
    scope.resolve("b", StoreMode::Local);

    scope.push_function();
    assert_eq!(scope.declare("n"), Symbol::Local(0));
    // Enclosing locals are invisible inside a function body.
    assert_eq!(scope.resolve("a", StoreMode::Global), Symbol::Global(0));
    assert_eq!(scope.resolve("n", StoreMode::Global), Symbol::Local(0));
    assert_eq!(scope.pop_function(), 1);

    assert_eq!(scope.local_count(), 2);
    assert_eq!(scope.pop_function(), 0);
}

#[test]
fn test_declare_shadows_visible_binding() {
    let mut scope = Scope::new();
    scope.push_function();
    assert_eq!(scope.declare("x"), Symbol::Local(0));
    assert_eq!(scope.declare("x"), Symbol::Local(1));
    assert_eq!(scope.resolve("x", StoreMode::Global), Symbol::Local(1));
    assert_eq!(scope.pop_function(), 2);
}

#[test]
fn test_into_globals() {
    let mut scope = Scope::default();
    scope.resolve("x", StoreMode::Global);
    scope.resolve("y", StoreMode::Global);
    assert_eq!(scope.into_globals(), vec!["x".to_owned(), "y".to_owned()]);
}
