//! Kind-based callback dispatch ("type-case").
//!
//! A [`TypeCase`] holds at most one callback per [`Kind`] plus a catch-all.
//! Running it against a value invokes the callback for the value's active
//! kind if one is present, otherwise the catch-all if present, and reports
//! whether anything ran. Undefined values go to the `on_null` slot.
//!
//! There are two ways to fill the slots:
//!
//! - the typed builder methods (`on_int`, `on_string`, ...), where the
//!   compiler guarantees each callback fits its kind;
//! - a flat list of [`Arm`]s, each pairing a `Kind` with a [`Callback`].
//!   Arms are applied in order, so the last arm for a kind wins. An arm whose
//!   callback does not fit its kind empties that kind's slot instead of
//!   raising an error.
//!
//! ```
//! use jsonobj_core::{obj, Arm, Callback, Kind, TypeCase};
//!
//! let v = obj!(42);
//! let mut seen = String::new();
//! let handled = v.type_case_fixed(
//!     &mut TypeCase::new()
//!         .on_int(|n| seen = format!("INT {n}"))
//!         .on_string(|s| panic!("not a string: {s}")),
//! );
//! assert!(handled);
//! assert_eq!(seen, "INT 42");
//!
//! let mut fired = 0;
//! let handled = v.type_case([
//!     Arm::case(Kind::String, Callback::string(|_| {})),
//!     Arm::otherwise(|_| fired += 1),
//! ]);
//! assert!(handled);
//! assert_eq!(fired, 1);
//! ```

use std::collections::HashMap;

use crate::value::{Kind, ObjMap, Payload, Value};

/// Fixed dispatch table: one optional callback per kind plus a catch-all.
#[derive(Default)]
pub struct TypeCase<'a> {
    int: Option<Box<dyn FnMut(i64) + 'a>>,
    string: Option<Box<dyn FnMut(&str) + 'a>>,
    float: Option<Box<dyn FnMut(f64) + 'a>>,
    boolean: Option<Box<dyn FnMut(bool) + 'a>>,
    array: Option<Box<dyn FnMut(&[Value]) + 'a>>,
    map: Option<Box<dyn FnMut(&ObjMap) + 'a>>,
    null: Option<Box<dyn FnMut() + 'a>>,
    otherwise: Option<Box<dyn FnMut(&Value) + 'a>>,
}

impl<'a> TypeCase<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_int(mut self, f: impl FnMut(i64) + 'a) -> Self {
        self.int = Some(Box::new(f));
        self
    }

    /// Integer callback over `i32`; wider values are truncated as by `as`.
    pub fn on_int32(mut self, mut f: impl FnMut(i32) + 'a) -> Self {
        self.int = Some(Box::new(move |n: i64| f(n as i32)));
        self
    }

    pub fn on_string(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.string = Some(Box::new(f));
        self
    }

    pub fn on_float(mut self, f: impl FnMut(f64) + 'a) -> Self {
        self.float = Some(Box::new(f));
        self
    }

    pub fn on_float32(mut self, mut f: impl FnMut(f32) + 'a) -> Self {
        self.float = Some(Box::new(move |x: f64| f(x as f32)));
        self
    }

    pub fn on_bool(mut self, f: impl FnMut(bool) + 'a) -> Self {
        self.boolean = Some(Box::new(f));
        self
    }

    pub fn on_array(mut self, f: impl FnMut(&[Value]) + 'a) -> Self {
        self.array = Some(Box::new(f));
        self
    }

    pub fn on_map(mut self, f: impl FnMut(&ObjMap) + 'a) -> Self {
        self.map = Some(Box::new(f));
        self
    }

    /// Callback for Undefined values.
    pub fn on_null(mut self, f: impl FnMut() + 'a) -> Self {
        self.null = Some(Box::new(f));
        self
    }

    /// Catch-all, run with the whole value when no kind slot handled it.
    pub fn otherwise(mut self, f: impl FnMut(&Value) + 'a) -> Self {
        self.otherwise = Some(Box::new(f));
        self
    }

    /// Dispatch `value`. Returns whether any callback ran.
    pub fn run(&mut self, value: &Value) -> bool {
        let handled = match &value.payload {
            Payload::Integer(n) => fire(&mut self.int, |f| f(*n)),
            Payload::String(s) => fire(&mut self.string, |f| f(s.as_str())),
            Payload::Float(x) => fire(&mut self.float, |f| f(*x)),
            Payload::Boolean(b) => fire(&mut self.boolean, |f| f(*b)),
            Payload::Array(items) => fire(&mut self.array, |f| f(items.as_slice())),
            Payload::Map(map) => fire(&mut self.map, |f| f(map)),
            Payload::Undefined => fire(&mut self.null, |f| f()),
        };
        handled || fire(&mut self.otherwise, |f| f(value))
    }

    /// Apply one arm to the slots.
    fn apply(&mut self, arm: Arm<'a>) {
        let (kind, callback) = match arm {
            Arm::Otherwise(f) => {
                self.otherwise = Some(f);
                return;
            }
            Arm::Case(kind, callback) => (kind, callback),
        };
        match (kind, callback) {
            (Kind::Integer, Callback::Int(f)) => self.int = Some(f),
            (Kind::Integer, Callback::Int32(mut f)) => {
                self.int = Some(Box::new(move |n: i64| f(n as i32)));
            }
            (Kind::String, Callback::String(f)) => self.string = Some(f),
            (Kind::Float, Callback::Float(f)) => self.float = Some(f),
            (Kind::Float, Callback::Float32(mut f)) => {
                self.float = Some(Box::new(move |x: f64| f(x as f32)));
            }
            (Kind::Boolean, Callback::Bool(f)) => self.boolean = Some(f),
            (Kind::Array, Callback::Array(f)) => self.array = Some(f),
            (Kind::Map, Callback::Map(f)) => self.map = Some(f),
            (Kind::Map, Callback::HashMap(mut f)) => {
                self.map = Some(Box::new(move |m: &ObjMap| f(&**m)));
            }
            (Kind::Undefined, Callback::Null(f)) => self.null = Some(f),
            (kind, callback) => {
                tracing::trace!(
                    %kind,
                    callback = callback.name(),
                    "type-case arm does not fit its kind, leaving slot empty"
                );
                self.clear(kind);
            }
        }
    }

    fn clear(&mut self, kind: Kind) {
        match kind {
            Kind::Integer => self.int = None,
            Kind::String => self.string = None,
            Kind::Float => self.float = None,
            Kind::Boolean => self.boolean = None,
            Kind::Array => self.array = None,
            Kind::Map => self.map = None,
            Kind::Undefined => self.null = None,
        }
    }
}

fn fire<F: ?Sized>(slot: &mut Option<Box<F>>, call: impl FnOnce(&mut F)) -> bool {
    match slot {
        Some(f) => {
            call(&mut **f);
            true
        }
        None => false,
    }
}

impl<'a> FromIterator<Arm<'a>> for TypeCase<'a> {
    fn from_iter<I: IntoIterator<Item = Arm<'a>>>(iter: I) -> Self {
        let mut cases = TypeCase::new();
        cases.extend(iter);
        cases
    }
}

impl<'a> Extend<Arm<'a>> for TypeCase<'a> {
    fn extend<I: IntoIterator<Item = Arm<'a>>>(&mut self, iter: I) {
        for arm in iter {
            self.apply(arm);
        }
    }
}

/// The callback signatures an [`Arm`] may carry.
///
/// Integer accepts `Int` or `Int32`, Float accepts `Float` or `Float32`, Map
/// accepts `Map` or `HashMap`, Undefined accepts `Null`, and every other kind
/// accepts the variant of the same name.
pub enum Callback<'a> {
    Int(Box<dyn FnMut(i64) + 'a>),
    Int32(Box<dyn FnMut(i32) + 'a>),
    String(Box<dyn FnMut(&str) + 'a>),
    Float(Box<dyn FnMut(f64) + 'a>),
    Float32(Box<dyn FnMut(f32) + 'a>),
    Bool(Box<dyn FnMut(bool) + 'a>),
    Array(Box<dyn FnMut(&[Value]) + 'a>),
    Map(Box<dyn FnMut(&ObjMap) + 'a>),
    HashMap(Box<dyn FnMut(&HashMap<String, Value>) + 'a>),
    Null(Box<dyn FnMut() + 'a>),
}

impl<'a> Callback<'a> {
    pub fn int(f: impl FnMut(i64) + 'a) -> Self {
        Callback::Int(Box::new(f))
    }

    pub fn int32(f: impl FnMut(i32) + 'a) -> Self {
        Callback::Int32(Box::new(f))
    }

    pub fn string(f: impl FnMut(&str) + 'a) -> Self {
        Callback::String(Box::new(f))
    }

    pub fn float(f: impl FnMut(f64) + 'a) -> Self {
        Callback::Float(Box::new(f))
    }

    pub fn float32(f: impl FnMut(f32) + 'a) -> Self {
        Callback::Float32(Box::new(f))
    }

    pub fn bool(f: impl FnMut(bool) + 'a) -> Self {
        Callback::Bool(Box::new(f))
    }

    pub fn array(f: impl FnMut(&[Value]) + 'a) -> Self {
        Callback::Array(Box::new(f))
    }

    pub fn map(f: impl FnMut(&ObjMap) + 'a) -> Self {
        Callback::Map(Box::new(f))
    }

    pub fn hash_map(f: impl FnMut(&HashMap<String, Value>) + 'a) -> Self {
        Callback::HashMap(Box::new(f))
    }

    pub fn null(f: impl FnMut() + 'a) -> Self {
        Callback::Null(Box::new(f))
    }

    fn name(&self) -> &'static str {
        match self {
            Callback::Int(_) => "int",
            Callback::Int32(_) => "int32",
            Callback::String(_) => "string",
            Callback::Float(_) => "float",
            Callback::Float32(_) => "float32",
            Callback::Bool(_) => "bool",
            Callback::Array(_) => "array",
            Callback::Map(_) => "map",
            Callback::HashMap(_) => "hash_map",
            Callback::Null(_) => "null",
        }
    }
}

/// One entry of a variadic type-case: a kind with its callback, or a catch-all.
pub enum Arm<'a> {
    Case(Kind, Callback<'a>),
    Otherwise(Box<dyn FnMut(&Value) + 'a>),
}

impl<'a> Arm<'a> {
    pub fn case(kind: Kind, callback: Callback<'a>) -> Self {
        Arm::Case(kind, callback)
    }

    pub fn otherwise(f: impl FnMut(&Value) + 'a) -> Self {
        Arm::Otherwise(Box::new(f))
    }
}

impl Value {
    /// Run a prepared [`TypeCase`] against this value.
    pub fn type_case_fixed(&self, cases: &mut TypeCase<'_>) -> bool {
        cases.run(self)
    }

    /// Build a [`TypeCase`] from `arms` and run it against this value.
    pub fn type_case<'a>(&self, arms: impl IntoIterator<Item = Arm<'a>>) -> bool {
        arms.into_iter().collect::<TypeCase<'a>>().run(self)
    }
}
