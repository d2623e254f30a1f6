//! Typed getters and the generic projection back to host data.
//!
//! Every getter checks the active kind before touching the payload and
//! returns `None` on a mismatch. Integers and floats read across each other:
//! `get_int` truncates a Float toward zero, `get_float` widens an Integer.
//! The `_or` variants substitute a caller default for `None`.

use serde_json::{Map, Number, Value as Json};

use crate::value::{ObjMap, Payload, Value};

impl Value {
    /// Integer exactly, or a Float truncated toward zero.
    ///
    /// ```
    /// use jsonobj_core::obj;
    ///
    /// assert_eq!(obj!(3.9).get_int(), Some(3));
    /// assert_eq!(obj!(-3.9).get_int(), Some(-3));
    /// assert_eq!(obj!("3").get_int(), None);
    /// ```
    pub fn get_int(&self) -> Option<i64> {
        match self.payload {
            Payload::Integer(n) => Some(n),
            Payload::Float(x) => Some(x as i64),
            _ => None,
        }
    }

    pub fn get_int_or(&self, default: i64) -> i64 {
        self.get_int().unwrap_or(default)
    }

    /// Float exactly, or an Integer widened to `f64`.
    pub fn get_float(&self) -> Option<f64> {
        match self.payload {
            Payload::Float(x) => Some(x),
            Payload::Integer(n) => Some(n as f64),
            _ => None,
        }
    }

    pub fn get_float_or(&self, default: f64) -> f64 {
        self.get_float().unwrap_or(default)
    }

    pub fn get_string(&self) -> Option<&str> {
        match &self.payload {
            Payload::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_string_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.get_string().unwrap_or(default)
    }

    pub fn get_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn get_bool_or(&self, default: bool) -> bool {
        self.get_bool().unwrap_or(default)
    }

    pub fn get_array(&self) -> Option<&[Value]> {
        match &self.payload {
            Payload::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn get_array_or<'a>(&'a self, default: &'a [Value]) -> &'a [Value] {
        self.get_array().unwrap_or(default)
    }

    /// Borrow the array storage for in-place edits.
    pub fn get_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match &mut self.payload {
            Payload::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn get_map(&self) -> Option<&ObjMap> {
        match &self.payload {
            Payload::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn get_map_or<'a>(&'a self, default: &'a ObjMap) -> &'a ObjMap {
        self.get_map().unwrap_or(default)
    }

    /// Borrow the member table for in-place edits.
    ///
    /// ```
    /// use jsonobj_core::{decode, obj};
    ///
    /// let mut v = decode(r#"{"a":1}"#).unwrap();
    /// if let Some(map) = v.get_map_mut() {
    ///     map.insert("b".into(), obj!(["x", "y"]));
    /// }
    /// assert_eq!(v.encode().unwrap(), r#"{"a":1,"b":["x","y"]}"#);
    /// ```
    pub fn get_map_mut(&mut self) -> Option<&mut ObjMap> {
        match &mut self.payload {
            Payload::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Deep-convert this subtree into the generic `serde_json` tree.
    ///
    /// Undefined becomes `null`. So does a non-finite float, which JSON has
    /// no number for.
    pub fn to_json(&self) -> Json {
        match &self.payload {
            Payload::Undefined => Json::Null,
            Payload::String(s) => Json::String(s.clone()),
            Payload::Integer(n) => Json::Number(Number::from(*n)),
            Payload::Float(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
            Payload::Boolean(b) => Json::Bool(*b),
            Payload::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Payload::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Json>>(),
            ),
        }
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}
