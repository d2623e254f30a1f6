//! Coercion of host data into [`Value`] trees.
//!
//! Every way of building a tree from Rust data funnels through `From<T> for
//! Value`. The impls below form a small closed classifier over the shapes a
//! host value can have, tried in this order:
//!
//! 1. unsigned integers: Integer, wrapping above `i64::MAX`
//! 2. signed integers of any width: Integer
//! 3. text: String
//! 4. `f32` (widened) and `f64`: Float
//! 5. `bool`: Boolean
//! 6. sequences (`Vec`, slices, arrays): Array, elements coerced in order
//! 7. string-keyed maps: Map, entries coerced
//! 8. an existing `Value`: copied by content
//! 9. anything else iterable: normalized through [`FromIterator`] into case 6
//! 10. `None`, `()` and JSON `null`: Undefined
//!
//! `serde_json::Value` is the generic untyped tree; the decoder parses into it
//! and then hands it to the same classifier.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};

use serde_json::Value as Json;

use crate::value::{ObjMap, Payload, Value};

impl Value {
    /// Overwrite this value in place with the coercion of `host`.
    ///
    /// ```
    /// use jsonobj_core::{Kind, Value};
    ///
    /// let mut v = Value::new();
    /// v.assign(vec![1, 2, 3]);
    /// assert_eq!(v.kind(), Kind::Array);
    /// v.assign("now a string");
    /// assert_eq!(v.get_string(), Some("now a string"));
    /// ```
    pub fn assign(&mut self, host: impl Into<Value>) -> &mut Self {
        *self = host.into();
        self
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::from_payload(Payload::Integer(n as i64))
                }
            }
        )*
    };
}

macro_rules! from_unsigned_narrow {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::from_payload(Payload::Integer(i64::from(n)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned_wide {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::from_payload(unsigned_payload(n as u64))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned_narrow!(u8, u16, u32);
from_unsigned_wide!(u64, usize);

/// Two's-complement reinterpretation: values above `i64::MAX` wrap negative.
fn unsigned_payload(n: u64) -> Payload {
    if n > i64::MAX as u64 {
        tracing::trace!(value = n, "unsigned integer exceeds i64, wrapping");
    }
    Payload::Integer(n as i64)
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::from_payload(Payload::Float(f64::from(x)))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::from_payload(Payload::Float(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_payload(Payload::Boolean(b))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::from_payload(Payload::String(s))
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::from_payload(Payload::String(s.clone()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from_payload(Payload::String(s.to_owned()))
    }
}

impl From<Box<str>> for Value {
    fn from(s: Box<str>) -> Self {
        Value::from_payload(Payload::String(s.into_string()))
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Value::from_payload(Payload::String(s.into_owned()))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::from_payload(Payload::String(c.to_string()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Value>> From<VecDeque<T>> for Value {
    fn from(items: VecDeque<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::from_payload(Payload::Map(map.into_iter().collect()))
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::from_payload(Payload::Map(map.into_iter().collect()))
    }
}

impl From<ObjMap> for Value {
    fn from(map: ObjMap) -> Self {
        Value::from_payload(Payload::Map(map))
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Value::new, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::new()
    }
}

/// Any iterable of coercible items becomes an Array.
///
/// ```
/// use std::collections::BTreeSet;
/// use jsonobj_core::{Kind, Value};
///
/// let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
/// let v: Value = set.into_iter().collect();
/// assert_eq!(v.kind(), Kind::Array);
/// assert_eq!(v.encode().unwrap(), "[1,2,3]");
/// ```
impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::from_payload(Payload::Array(iter.into_iter().map(Into::into).collect()))
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        let payload = match json {
            Json::Null => Payload::Undefined,
            Json::Bool(b) => Payload::Boolean(b),
            Json::Number(n) => number_payload(&n),
            Json::String(s) => Payload::String(s),
            Json::Array(items) => Payload::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(members) => Payload::Map(members.into_iter().collect()),
        };
        Value::from_payload(payload)
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Value::from(json.clone())
    }
}

/// Integers that fit `i64` stay integers; every other JSON number, including
/// integer text beyond `i64`, is a float.
fn number_payload(n: &serde_json::Number) -> Payload {
    match n.as_i64() {
        Some(i) => Payload::Integer(i),
        None => n.as_f64().map_or(Payload::Undefined, Payload::Float),
    }
}
