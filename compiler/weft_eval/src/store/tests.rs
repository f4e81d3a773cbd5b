use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_global_and_local_levels() {
    let mut store = SimpleStore::new();
    store.set("x", Value::from(1), StoreMode::Global);
    store.enter();
    store.set("x", Value::from(2), StoreMode::Local);
    assert_eq!(store.get("x"), Value::from(2));

    store.set("y", Value::from(3), StoreMode::Global);
    assert!(store.leave());
    assert_eq!(store.get("x"), Value::from(1));
    assert_eq!(store.get("y"), Value::from(3));
}

#[test]
fn test_leave_on_global_level_fails() {
    let mut store = SimpleStore::new();
    assert!(!store.leave());
    store.enter();
    assert_eq!(store.depth(), 2);
    assert!(store.leave());
    assert!(!store.leave());
    assert_eq!(store.depth(), 1);
}

#[test]
fn test_private_updates_holder() {
    let mut store = SimpleStore::new();
    store.set("x", Value::from(1), StoreMode::Global);
    store.enter();
    store.set("x", Value::from(2), StoreMode::Private);
    assert!(store.leave());
    // The global level held `x`, so it was updated in place.
    assert_eq!(store.get("x"), Value::from(2));
}

#[test]
fn test_private_declares_innermost_when_absent() {
    let mut store = SimpleStore::new();
    store.enter();
    store.set("z", Value::from(1), StoreMode::Private);
    assert_eq!(store.get("z"), Value::from(1));
    assert!(store.leave());
    assert_eq!(store.try_get("z"), None);
}

#[test]
fn test_missing_name_is_void() {
    let store = SimpleStore::new();
    assert_eq!(store.try_get("missing"), None);
    assert_eq!(store.get("missing"), Value::Void);
}

#[test]
fn test_builders() {
    let store = SimpleStore::new().with("a", 1).with("b", "two");
    assert_eq!(store.get("a"), Value::from(1));
    assert_eq!(store.get("b"), Value::from("two"));

    let collected: SimpleStore = [("n", 1), ("m", 2)].into_iter().collect();
    assert_eq!(collected.get("m"), Value::from(2));
}

#[test]
fn test_monitor_records_accesses() {
    let mut store = MonitorStore::new(SimpleStore::new());
    store.set("a", Value::from(1), StoreMode::Local);
    assert_eq!(store.try_get("a"), Some(Value::from(1)));
    assert_eq!(store.try_get("b"), None);
    store.try_get("a");

    assert_eq!(
        store.accesses(),
        vec![
            Access::Write {
                name: "a".to_owned(),
                mode: StoreMode::Local,
            },
            Access::Read {
                name: "a".to_owned(),
                found: Some(Value::from(1)),
            },
            Access::Read {
                name: "b".to_owned(),
                found: None,
            },
            Access::Read {
                name: "a".to_owned(),
                found: Some(Value::from(1)),
            },
        ]
    );
    assert_eq!(store.read_names(), ["a", "b"]);

    store.clear();
    assert!(store.accesses().is_empty());
    assert_eq!(store.into_inner().get("a"), Value::from(1));
}

#[test]
fn test_monitor_delegates_levels() {
    let mut store = MonitorStore::new(SimpleStore::new());
    store.enter();
    assert_eq!(store.inner().depth(), 2);
    assert!(store.leave());
    assert!(!store.leave());
}
