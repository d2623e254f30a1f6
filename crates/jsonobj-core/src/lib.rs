//! # jsonobj-core
//!
//! A dynamically-typed JSON value tree. One [`Value`] type holds any
//! JSON-representable value (undefined/null, string, integer, float, boolean,
//! array, map) with typed accessors, lossless text encoding, coercion from
//! ordinary Rust data and a kind-based dispatcher for consuming a value
//! without knowing its kind up front.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonobj_core::{decode, kv, obj, table, Kind, Value};
//!
//! // Literal construction through the coercion engine
//! let v = obj!(table!(kv("name", "Alice"), kv!("scores", 95, 87, 92)));
//! assert_eq!(v.kind(), Kind::Map);
//! assert_eq!(v.encode().unwrap(), r#"{"name":"Alice","scores":[95,87,92]}"#);
//!
//! // Text back into a tree
//! let back: Value = decode(r#"{"pi": 3.9}"#).unwrap();
//! assert_eq!(back.get_map().unwrap().lookup("pi").get_int(), Some(3));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Kind`, `Value` and `ObjMap`
//! - [`coerce`] — host data → `Value` conversions
//! - [`builder`] — constructors, setters, `kv`/`table` literals
//! - [`access`] — typed getters and the generic projection
//! - [`dispatch`] — kind-based callback dispatch
//! - [`encoder`] / [`decoder`] — JSON text codec
//! - [`error`] — error types

pub mod access;
pub mod builder;
pub mod coerce;
pub mod decoder;
pub mod dispatch;
pub mod encoder;
pub mod error;
pub mod value;

pub use builder::{kv, Pair, Table};
pub use decoder::decode;
pub use dispatch::{Arm, Callback, TypeCase};
pub use encoder::{encode, encode_pretty};
pub use error::ObjError;
pub use value::{Kind, ObjMap, Value};
