//! Coercion of host data into value trees, and the literal builders on top.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use jsonobj_core::{kv, obj, table, Kind, ObjMap, Table, Value};
use serde_json::json;

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn unsigned_integers_widen_to_integer() {
    assert_eq!(Value::from(7u8).get_int(), Some(7));
    assert_eq!(Value::from(7u32).kind(), Kind::Integer);
    assert_eq!(Value::from(7usize).get_int(), Some(7));
    assert_eq!(Value::from(u32::MAX).get_int(), Some(u32::MAX as i64));
}

#[test]
fn unsigned_above_i64_wraps_to_integer() {
    let v = Value::from(u64::MAX);
    assert_eq!(v.kind(), Kind::Integer);
    assert_eq!(v.get_int(), Some(-1));
    assert_eq!(Value::from(1u64 << 63).get_int(), Some(i64::MIN));
    assert_eq!(Value::from(i64::MAX as u64).get_int(), Some(i64::MAX));
    assert_eq!(Value::from(usize::MAX).kind(), Kind::Integer);
}

#[test]
fn signed_integers_of_every_width() {
    assert_eq!(Value::from(-5i8).get_int(), Some(-5));
    assert_eq!(Value::from(-500i16).get_int(), Some(-500));
    assert_eq!(Value::from(-5_000_000i32).get_int(), Some(-5_000_000));
    assert_eq!(Value::from(i64::MIN).get_int(), Some(i64::MIN));
    assert_eq!(Value::from(-3isize).get_int(), Some(-3));
}

#[test]
fn text_becomes_string() {
    assert_eq!(Value::from("lit").get_string(), Some("lit"));
    assert_eq!(Value::from(String::from("owned")).get_string(), Some("owned"));
    assert_eq!(Value::from(&String::from("borrowed")).get_string(), Some("borrowed"));
    assert_eq!(Value::from('c').get_string(), Some("c"));
    assert_eq!(
        Value::from(std::borrow::Cow::Borrowed("cow")).get_string(),
        Some("cow")
    );
}

#[test]
fn f32_widens_to_float() {
    let v = Value::from(1.5f32);
    assert_eq!(v.kind(), Kind::Float);
    assert_eq!(v.get_float(), Some(1.5));
}

#[test]
fn f64_is_float() {
    assert_eq!(Value::from(1.23).get_float(), Some(1.23));
}

#[test]
fn bool_is_boolean() {
    assert_eq!(Value::from(true).get_bool(), Some(true));
}

#[test]
fn none_and_unit_are_undefined() {
    assert!(Value::from(None::<i32>).is_undefined());
    assert!(Value::from(()).is_undefined());
    assert_eq!(Value::from(Some(4)).get_int(), Some(4));
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn vec_preserves_order() {
    let v = Value::from(vec!["one", "two", "THREE"]);
    let items = v.get_array().unwrap();
    let texts: Vec<&str> = items.iter().filter_map(Value::get_string).collect();
    assert_eq!(texts, ["one", "two", "THREE"]);
}

#[test]
fn heterogeneous_vec_of_values() {
    let v = Value::from(vec![obj!(1), obj!("two"), obj!(3.0)]);
    let kinds: Vec<Kind> = v.get_array().unwrap().iter().map(Value::kind).collect();
    assert_eq!(kinds, [Kind::Integer, Kind::String, Kind::Float]);
}

#[test]
fn slices_and_arrays() {
    let data = [1, 2, 3];
    assert_eq!(Value::from(&data[..]).get_array().unwrap().len(), 3);
    assert_eq!(Value::from(data).get_array().unwrap().len(), 3);
}

#[test]
fn nested_sequences_recurse() {
    let v = Value::from(vec![vec![1, 2], vec![3]]);
    let outer = v.get_array().unwrap();
    assert_eq!(outer[0].get_array().unwrap()[1].get_int(), Some(2));
}

#[test]
fn hash_map_becomes_map() {
    let mut host = HashMap::new();
    host.insert("one", 1);
    host.insert("two", 2);
    let v = Value::from(host);
    assert_eq!(v.kind(), Kind::Map);
    assert_eq!(v.get_map().unwrap().lookup("two").get_int(), Some(2));
}

#[test]
fn btree_map_becomes_map() {
    let host: BTreeMap<String, Vec<bool>> =
        [("flags".to_string(), vec![true, false])].into_iter().collect();
    let v = Value::from(host);
    let flags = v.get_map().unwrap().lookup("flags");
    assert_eq!(flags.get_array().unwrap()[1].get_bool(), Some(false));
}

#[test]
fn existing_value_is_copied_by_content() {
    let original = obj!(1, 2);
    let copy = Value::from(&original);
    assert_eq!(copy, original);

    let wrapped = Value::from(vec![original.clone()]);
    assert_eq!(wrapped.get_array().unwrap()[0], original);
}

#[test]
fn other_iterables_normalize_to_array() {
    let deque: VecDeque<i32> = [3, 4].into_iter().collect();
    assert_eq!(Value::from(deque).encode().unwrap(), "[3,4]");

    let set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    let v: Value = set.into_iter().collect();
    assert_eq!(v.encode().unwrap(), r#"["a","b"]"#);

    let squares: Value = (1..=3).map(|n| n * n).collect();
    assert_eq!(squares.encode().unwrap(), "[1,4,9]");
}

#[test]
fn assign_overwrites_in_place() {
    let mut v = obj!("before");
    v.assign(vec![1.5, 2.5]);
    assert_eq!(v.kind(), Kind::Array);
    v.assign(None::<i64>);
    assert!(v.is_undefined());
}

// ============================================================================
// Generic host trees (serde_json)
// ============================================================================

#[test]
fn json_tree_coerces_recursively() {
    let v = Value::from(json!({
        "int": 1,
        "float": 2.5,
        "neg": -3,
        "big": 18446744073709551615u64,
        "list": [null, true, "x"],
        "nested": {"k": {}}
    }));
    let map = v.get_map().unwrap();
    assert_eq!(map["int"].kind(), Kind::Integer);
    assert_eq!(map["float"].kind(), Kind::Float);
    assert_eq!(map["neg"].get_int(), Some(-3));
    assert_eq!(map["big"].kind(), Kind::Float);
    let list = map["list"].get_array().unwrap();
    assert!(list[0].is_undefined());
    assert_eq!(list[1].get_bool(), Some(true));
    let nested = map["nested"].get_map().unwrap();
    assert_eq!(nested["k"].get_map().map(|m| m.len()), Some(0));
}

#[test]
fn borrowed_json_tree_matches_owned() {
    let tree = json!([1, {"a": "b"}]);
    assert_eq!(Value::from(&tree), Value::from(tree.clone()));
}

// ============================================================================
// obj! arity
// ============================================================================

#[test]
fn no_arguments_is_undefined() {
    assert!(obj!().is_undefined());
}

#[test]
fn one_argument_is_coerced_alone() {
    assert_eq!(obj!(123).kind(), Kind::Integer);
    assert!(obj!(None::<i32>).is_undefined());
}

#[test]
fn several_arguments_become_one_array() {
    let v = obj!(1, 2.0, "three");
    assert_eq!(v.kind(), Kind::Array);
    let items = v.get_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind(), Kind::Integer);
    assert_eq!(items[1].kind(), Kind::Float);
    assert_eq!(items[2].get_string(), Some("three"));
}

#[test]
fn single_vec_argument_is_not_wrapped() {
    let v = obj!(vec![1, 2]);
    assert_eq!(v.get_array().unwrap().len(), 2);
    assert_eq!(v.get_array().unwrap()[0].kind(), Kind::Integer);
}

// ============================================================================
// kv / table literals
// ============================================================================

#[test]
fn kv_single_value() {
    let pair = kv("one", 1);
    assert_eq!(pair.key(), "one");
    assert_eq!(pair.value(), &obj!(1));
}

#[test]
fn kv_macro_packs_several_values() {
    let pair = jsonobj_core::kv!("sub", 1, 2.001, "3", 4);
    assert_eq!(pair.key(), "sub");
    assert_eq!(pair.value(), &obj!(1, 2.001, "3", 4));
}

#[test]
fn table_entries_keep_their_kinds() {
    let t: Table = table!(kv("one", 1), kv("two", 2.0));
    assert_eq!(t.len(), 2);
    assert_eq!(t.get("two").map(Value::kind), Some(Kind::Float));
    assert!(t.get("three").is_none());

    let v = obj!(t);
    let map = v.get_map().unwrap();
    assert_eq!(map["one"].kind(), Kind::Integer);
    assert_eq!(map["two"].kind(), Kind::Float);
}

#[test]
fn table_matches_direct_coercion_for_non_finite_floats() {
    let v = obj!(table!(
        kv("nan", f64::NAN),
        kv("inf", f64::INFINITY),
        kv!("both", f64::NEG_INFINITY, 1u64),
    ));
    let map = v.get_map().unwrap();
    assert_eq!(map["nan"].kind(), obj!(f64::NAN).kind());
    assert!(map["nan"].get_float().unwrap().is_nan());
    assert_eq!(map["inf"].get_float(), Some(f64::INFINITY));
    let both = map["both"].get_array().unwrap();
    assert_eq!(both[0].get_float(), Some(f64::NEG_INFINITY));
    assert_eq!(both[1].kind(), Kind::Integer);
}

#[test]
fn tables_nest_as_maps() {
    let v = obj!(table!(kv("outer", table!(kv("inner", json!([1, null]))))));
    let inner = &v.get_map().unwrap()["outer"].get_map().unwrap()["inner"];
    let items = inner.get_array().unwrap();
    assert_eq!(items[0].get_int(), Some(1));
    assert!(items[1].is_undefined());
}

#[test]
fn later_pairs_overwrite_earlier() {
    let t = table!(kv("k", 1), kv("k", "second"));
    assert_eq!(t.len(), 1);
    assert_eq!(obj!(t).get_map().unwrap()["k"].get_string(), Some("second"));
}

#[test]
fn empty_table_is_empty_map() {
    let v = obj!(table!());
    assert_eq!(v.kind(), Kind::Map);
    assert!(v.get_map().unwrap().is_empty());
}

#[test]
fn nested_tables_build_nested_maps() {
    let v = obj!(table!(
        kv("one", 1),
        kv("two", 2.00),
        kv("three", "three"),
        kv("four", table!(jsonobj_core::kv!("sub", 1, 2.001, "3", 4))),
    ));
    assert_eq!(
        v.encode().unwrap(),
        r#"{"four":{"sub":[1,2.001,"3",4]},"one":1,"three":"three","two":2.0}"#
    );
}

#[test]
fn values_can_be_table_entries() {
    let inner = obj!(true, "x");
    let v = obj!(table!(kv("inner", inner.clone())));
    assert_eq!(v.get_map().unwrap()["inner"], inner);
}

#[test]
fn build_then_edit_nested_map() {
    let mut root = Value::new();
    let top = root.make_map();
    let level = top.entry("level".into()).or_default().make_map();
    level.insert("map".into(), obj!(table!(kv("one", 1))));
    level.insert("array".into(), obj!(1234, 1.234, "one two three four"));

    let inner: &mut ObjMap = level
        .get_mut("map")
        .and_then(Value::get_map_mut)
        .unwrap();
    inner.insert("thingy".into(), obj!(vec!["one", "two", "THREE"]));

    assert_eq!(
        root.encode().unwrap(),
        r#"{"level":{"array":[1234,1.234,"one two three four"],"map":{"one":1,"thingy":["one","two","THREE"]}}}"#
    );
}
