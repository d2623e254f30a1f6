//! Constructors, setters and literal builders.
//!
//! Three layers, from most to least direct:
//!
//! - the `set_*` setters retype a value in place and return it for chaining;
//! - [`make_array`](Value::make_array) / [`make_map`](Value::make_map) retype
//!   a value and hand back a mutable borrow of its fresh container;
//! - [`obj!`], [`kv`]/[`kv!`] and [`Table`]/[`table!`] build trees from
//!   literals through the coercion engine.

use std::collections::HashMap;

use crate::value::{ObjMap, Payload, Value};

impl Value {
    pub fn set_int(&mut self, n: i64) -> &mut Self {
        self.payload = Payload::Integer(n);
        self
    }

    pub fn set_string(&mut self, s: impl Into<String>) -> &mut Self {
        self.payload = Payload::String(s.into());
        self
    }

    pub fn set_float(&mut self, x: f64) -> &mut Self {
        self.payload = Payload::Float(x);
        self
    }

    pub fn set_bool(&mut self, b: bool) -> &mut Self {
        self.payload = Payload::Boolean(b);
        self
    }

    /// Retype as Array holding `items`. Pass `Vec::new()` for an empty array.
    pub fn set_array(&mut self, items: Vec<Value>) -> &mut Self {
        self.payload = Payload::Array(items);
        self
    }

    /// Retype as Map holding `map`. Pass `ObjMap::new()` for an empty map.
    pub fn set_map(&mut self, map: ObjMap) -> &mut Self {
        self.payload = Payload::Map(map);
        self
    }

    pub fn set_undef(&mut self) -> &mut Self {
        self.payload = Payload::Undefined;
        self
    }

    /// Retype as Array seeded with `init` and return the array storage itself,
    /// so elements can be pushed straight into this value.
    ///
    /// ```
    /// use jsonobj_core::{obj, Value};
    ///
    /// let mut v = Value::new();
    /// let items = v.make_array(vec![obj!("one")]);
    /// items.push(obj!(2));
    /// assert_eq!(v.encode().unwrap(), r#"["one",2]"#);
    /// ```
    pub fn make_array(&mut self, init: Vec<Value>) -> &mut Vec<Value> {
        self.payload = Payload::Array(init);
        match &mut self.payload {
            Payload::Array(items) => items,
            _ => unreachable!("payload was just set to an array"),
        }
    }

    /// Retype as an empty Map and return the member table itself.
    pub fn make_map(&mut self) -> &mut ObjMap {
        self.payload = Payload::Map(ObjMap::new());
        match &mut self.payload {
            Payload::Map(map) => map,
            _ => unreachable!("payload was just set to a map"),
        }
    }
}

/// Build a [`Value`] from literals.
///
/// - `obj!()` is Undefined.
/// - `obj!(x)` coerces the single argument.
/// - `obj!(a, b, ...)` coerces the whole argument list as one Array.
///
/// ```
/// use jsonobj_core::{obj, Kind};
///
/// assert!(obj!().is_undefined());
/// assert_eq!(obj!(123).kind(), Kind::Integer);
/// assert_eq!(obj!(1, 2.0, "three").get_array().map(<[_]>::len), Some(3));
/// ```
#[macro_export]
macro_rules! obj {
    () => {
        $crate::Value::new()
    };
    ($single:expr $(,)?) => {
        $crate::Value::from($single)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::from(::std::vec![$($crate::Value::from($item)),+])
    };
}

/// Build a [`Pair`]; more than one value packs them into an array.
///
/// ```
/// use jsonobj_core::{kv, obj, table};
///
/// let v = obj!(table!(kv!("sub", 1, 2.5, "3")));
/// assert_eq!(v.encode().unwrap(), r#"{"sub":[1,2.5,"3"]}"#);
/// ```
#[macro_export]
macro_rules! kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::kv($key, $value)
    };
    ($key:expr, $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::kv(
            $key,
            ::std::vec![$crate::Value::from($first), $($crate::Value::from($rest)),+],
        )
    };
}

/// Collect [`Pair`]s into a [`Table`].
#[macro_export]
macro_rules! table {
    ($($pair:expr),* $(,)?) => {
        <$crate::Table as ::std::iter::FromIterator<$crate::Pair>>::from_iter([$($pair),*])
    };
}

/// A key and its coerced value.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    key: String,
    value: Value,
}

impl Pair {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Pair `key` with a single value. Use [`kv!`] to pack several values.
pub fn kv(key: impl Into<String>, value: impl Into<Value>) -> Pair {
    Pair {
        key: key.into(),
        value: value.into(),
    }
}

/// Unordered bag of keyed values used for literal construction.
///
/// Each entry is coerced when its [`Pair`] is built. The table becomes a Map
/// when turned into a [`Value`]. Later pairs overwrite earlier ones with the
/// same key. Tables nest: a table is itself a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table(HashMap<String, Value>);

impl Table {
    pub fn new() -> Self {
        Table(HashMap::new())
    }

    pub fn insert(&mut self, pair: Pair) {
        self.0.insert(pair.key, pair.value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Pair> for Table {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        let mut table = Table::new();
        for pair in iter {
            table.insert(pair);
        }
        table
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::from_payload(Payload::Map(ObjMap::from(table.0)))
    }
}
