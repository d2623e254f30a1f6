//! Value → JSON text.
//!
//! `Value` implements `Serialize` with the usual JSON mapping; Undefined is
//! written as `null`. Map members are emitted in sorted key order, which
//! keeps the output deterministic even though `ObjMap` iteration is not.
//!
//! # Example
//! ```
//! use jsonobj_core::{encode, obj, Value};
//!
//! let mut v = Value::new();
//! let map = v.make_map();
//! map.insert("b".into(), obj!(true));
//! map.insert("a".into(), obj!(1, 2));
//! assert_eq!(encode(&v).unwrap(), r#"{"a":[1,2],"b":true}"#);
//! ```

use std::collections::BTreeMap;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::error::{ObjError, Result};
use crate::value::{Payload, Value};

/// Encode a value tree as compact JSON text.
///
/// Fails only if the tree holds a non-finite float.
pub fn encode(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(encode_error)
}

/// Encode a value tree as indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(encode_error)
}

fn encode_error(err: serde_json::Error) -> ObjError {
    tracing::debug!(error = %err, "json encode failed");
    ObjError::Encode(err)
}

impl Value {
    /// Compact JSON text for this subtree. See [`encode`].
    pub fn encode(&self) -> Result<String> {
        encode(self)
    }

    /// Indented JSON text for this subtree. See [`encode_pretty`].
    pub fn encode_pretty(&self) -> Result<String> {
        encode_pretty(self)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.payload {
            Payload::Undefined => serializer.serialize_unit(),
            Payload::String(s) => serializer.serialize_str(s),
            Payload::Integer(n) => serializer.serialize_i64(*n),
            // serde_json would silently print these as null
            Payload::Float(x) if !x.is_finite() => Err(S::Error::custom(format_args!(
                "float {x} has no JSON representation"
            ))),
            Payload::Float(x) => serializer.serialize_f64(*x),
            Payload::Boolean(b) => serializer.serialize_bool(*b),
            Payload::Array(items) => serializer.collect_seq(items),
            Payload::Map(map) => {
                let sorted: BTreeMap<&str, &Value> =
                    map.iter().map(|(k, v)| (k.as_str(), v)).collect();
                serializer.collect_map(sorted)
            }
        }
    }
}
