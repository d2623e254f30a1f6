//! The tree node itself: [`Kind`], [`Value`] and the [`ObjMap`] member table.
//!
//! A `Value` owns exactly one payload. The payload lives in a private sum type,
//! so replacing it through a setter drops the previous variant wholesale and no
//! getter can ever observe data left over from an earlier kind.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut, Index};

/// The discriminant identifying which payload a [`Value`] currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    String,
    Integer,
    Float,
    Boolean,
    Array,
    Map,
}

impl Kind {
    /// Lower-case name used in diagnostics and the CLI dump.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Payload {
    #[default]
    Undefined,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Map(ObjMap),
}

/// One node of a JSON tree.
///
/// Created Undefined, retyped freely by the `set_*` methods, read back through
/// the `get_*` methods. Equality is structural; maps compare without regard to
/// member order.
#[derive(Clone, Default, PartialEq)]
pub struct Value {
    pub(crate) payload: Payload,
}

static UNDEFINED: Value = Value::new();

impl Value {
    /// A fresh Undefined value.
    pub const fn new() -> Self {
        Value {
            payload: Payload::Undefined,
        }
    }

    pub(crate) fn from_payload(payload: Payload) -> Self {
        Value { payload }
    }

    /// Shared Undefined value handed out by lookups that miss.
    pub fn undefined_ref() -> &'static Value {
        &UNDEFINED
    }

    /// The active kind.
    pub fn kind(&self) -> Kind {
        match self.payload {
            Payload::Undefined => Kind::Undefined,
            Payload::String(_) => Kind::String,
            Payload::Integer(_) => Kind::Integer,
            Payload::Float(_) => Kind::Float,
            Payload::Boolean(_) => Kind::Boolean,
            Payload::Array(_) => Kind::Array,
            Payload::Map(_) => Kind::Map,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.payload, Payload::Undefined)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Undefined => f.write_str("Undefined"),
            Payload::String(s) => f.debug_tuple("String").field(s).finish(),
            Payload::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Payload::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Payload::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Payload::Array(items) => f.debug_list().entries(items).finish(),
            Payload::Map(map) => f.debug_map().entries(map.iter()).finish(),
        }
    }
}

/// String-keyed member table of a Map value. Iteration order is unspecified.
///
/// Derefs to the underlying `HashMap`, so `insert`, `get`, `entry` and friends
/// are all available directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMap(HashMap<String, Value>);

impl ObjMap {
    pub fn new() -> Self {
        ObjMap(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ObjMap(HashMap::with_capacity(capacity))
    }

    /// Look up `key`, yielding an Undefined value instead of failing when it
    /// is absent.
    ///
    /// ```
    /// use jsonobj_core::{obj, ObjMap};
    ///
    /// let mut map = ObjMap::new();
    /// map.insert("n".into(), obj!(1));
    /// assert_eq!(map.lookup("n").get_int(), Some(1));
    /// assert!(map.lookup("missing").is_undefined());
    /// ```
    pub fn lookup(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(Value::undefined_ref())
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

impl Deref for ObjMap {
    type Target = HashMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ObjMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Index<&str> for ObjMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.lookup(key)
    }
}

impl From<HashMap<String, Value>> for ObjMap {
    fn from(map: HashMap<String, Value>) -> Self {
        ObjMap(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ObjMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for ObjMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ObjMap {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut ObjMap {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = std::collections::hash_map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}
