//! JSON text → Value.
//!
//! Decoding is two steps: `serde_json` parses the text into its generic
//! untyped tree, then the coercion engine (see [`crate::coerce`]) types it.
//! A parse failure aborts before any coercion runs and leaves the target of
//! an in-place decode untouched.
//!
//! Numbers that fit `i64` decode as Integer; all others decode as Float.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use crate::error::{ObjError, Result};
use crate::value::Value;

/// Decode JSON text into a new value tree.
///
/// ```
/// use jsonobj_core::{decode, Kind};
///
/// let v = decode(r#"[1, 2.5, "three", null]"#).unwrap();
/// let items = v.get_array().unwrap();
/// assert_eq!(items[0].kind(), Kind::Integer);
/// assert_eq!(items[1].kind(), Kind::Float);
/// assert!(items[3].is_undefined());
/// ```
pub fn decode(text: &str) -> Result<Value> {
    let generic: Json = serde_json::from_str(text).map_err(|err| {
        tracing::debug!(
            line = err.line(),
            column = err.column(),
            error = %err,
            "json decode failed"
        );
        ObjError::decode(err)
    })?;
    Ok(Value::from(generic))
}

impl Value {
    /// Decode `text` over this value, replacing whatever it held.
    pub fn decode_from(&mut self, text: &str) -> Result<&mut Self> {
        *self = decode(text)?;
        Ok(self)
    }
}

impl FromStr for Value {
    type Err = ObjError;

    fn from_str(text: &str) -> Result<Self> {
        decode(text)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Json::deserialize(deserializer).map(Value::from)
    }
}
