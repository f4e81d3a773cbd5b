use super::*;

use pretty_assertions::assert_eq;

fn keys(map: &dyn Map) -> Vec<Value> {
    map.pairs().map(|(key, _)| key).collect()
}

#[test]
fn test_array_lookup() {
    let map = ArrayMap::new(vec![Value::string("a"), Value::string("b")]);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Value::from(1)), Some(Value::string("b")));
    assert_eq!(map.get(&Value::from(2)), None);
    assert_eq!(map.get(&Value::from(-1)), None);
    assert_eq!(map.get(&Value::from(0.5)), None);
    assert_eq!(map.get(&Value::string("0")), None);
    assert_eq!(keys(&map), vec![Value::from(0), Value::from(1)]);
}

#[test]
fn test_dictionary_preserves_insertion_order() {
    let map: DictionaryMap = [
        (Value::string("b"), Value::from(1)),
        (Value::string("a"), Value::from(2)),
        (Value::from(7), Value::from(3)),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        keys(&map),
        vec![Value::string("b"), Value::string("a"), Value::from(7)]
    );
    assert_eq!(map.get(&Value::from(7.0)), Some(Value::from(3)));
    assert_eq!(map.get(&Value::string("c")), None);
}

#[test]
fn test_dictionary_duplicate_keys_keep_last_value() {
    let map: DictionaryMap = [
        (Value::string("k"), Value::from(1)),
        (Value::string("other"), Value::from(2)),
        (Value::string("k"), Value::from(3)),
    ]
    .into_iter()
    .collect();

    let pairs: Vec<_> = map.pairs().collect();
    assert_eq!(
        pairs,
        vec![
            (Value::string("k"), Value::from(3)),
            (Value::string("other"), Value::from(2)),
        ]
    );
}

#[test]
fn test_dictionary_round_trip() {
    let source = vec![
        (Value::string("x"), Value::from(1)),
        (Value::TRUE, Value::string("yes")),
        (Value::from(2), Value::Void),
    ];
    let value = Value::dictionary(source.clone());

    let pairs: Vec<_> = value.as_map().map(|map| map.pairs().collect()).unwrap_or_default();
    assert_eq!(pairs, source);
}

#[test]
fn test_dictionary_lazy_keys_match_eager_lookups() {
    let mut map = DictionaryMap::new();
    map.insert(Value::lazy(|| Value::string("k")), Value::from(1));

    assert_eq!(map.get(&Value::string("k")), Some(Value::from(1)));
}

#[test]
fn test_generator_bounds() {
    let map = GeneratorMap::new(5, |i| Value::from(i * 3));

    assert_eq!(map.len(), 5);
    assert_eq!(map.get(&Value::from(4)), Some(Value::from(12)));
    assert_eq!(map.get(&Value::from(5)), None);
    assert_eq!(Value::map(map).get(&Value::from(5)), Value::Void);
}

#[test]
fn test_generator_enumeration() {
    let map = GeneratorMap::new(3, |i| Value::from(i * i));
    let values: Vec<_> = map.pairs().map(|(_, value)| value).collect();

    assert_eq!(values, vec![Value::from(0), Value::from(1), Value::from(4)]);
}

#[test]
fn test_empty_maps() {
    assert!(ArrayMap::default().is_empty());
    assert!(DictionaryMap::new().is_empty());
    assert!(GeneratorMap::new(0, |_| Value::Void).is_empty());
}
