use std::{
    collections::{BTreeMap, VecDeque},
    fmt,
    sync::{Arc, Mutex},
};

use ordered_float::OrderedFloat;
use quicklambda_base::{ErrorKind, Result};

use crate::Lambda;

/// A dynamically typed value: what deferred functions take and return.
///
/// Containers are behind `Arc` so cloning a value is always cheap; nothing
/// here is mutated in place except the cursor of an [`Iter`].
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(Arc<str>),
    List(Arc<[Value]>),
    Dict(Arc<BTreeMap<Arc<str>, Value>>),
    Object(Arc<Object>),
    Iter(Iter),
    Func(Lambda),
}

/// A value as a number, with bools counting as 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn to_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }
}

impl Value {
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn dict<K: Into<Arc<str>>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Value {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Value::Dict(Arc::new(map))
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::None => "NoneType".into(),
            Value::Bool(_) => "bool".into(),
            Value::Int(_) => "int".into(),
            Value::Float(_) => "float".into(),
            Value::Str(_) => "str".into(),
            Value::List(_) => "list".into(),
            Value::Dict(_) => "dict".into(),
            Value::Object(o) => o.class().into(),
            Value::Iter(_) => "iterator".into(),
            Value::Func(_) => "function".into(),
        }
    }

    pub fn as_number(&self) -> Option<Num> {
        match self {
            Value::Bool(b) => Some(Num::Int(*b as i64)),
            Value::Int(i) => Some(Num::Int(*i)),
            Value::Float(f) => Some(Num::Float(f.0)),
            _ => None,
        }
    }

    /// Integers and bools, the only things usable as an index.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Bool(b) => Some(*b as i64),
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Func(_))
    }

    /// Invoke this value as a function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Func(f) => f.call(args),
            other => Err(ErrorKind::NotCallable(other.type_name()).into()),
        }
    }

    /// The source-like rendering: strings are quoted, containers show their
    /// elements the same way. `Display` is the plain rendering.
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }
}

pub struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(s) => write_quoted(f, s),
            other => write!(f, "{}", other),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for c in s.chars() {
        match c {
            '\'' => write!(f, "\\'")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}inf", if x < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{:?}", x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write_float(f, x.0),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item.repr())?;
                }
                write!(f, "]")
            }
            Value::Dict(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_quoted(f, k)?;
                    write!(f, ": {}", v.repr())?;
                }
                write!(f, "}}")
            }
            Value::Object(o) => write!(f, "{}", o),
            Value::Iter(_) => write!(f, "<iterator>"),
            Value::Func(l) => write!(f, "{}", l.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Iter(a), Value::Iter(b)) => a.ptr_eq(b),
            (Value::Func(a), Value::Func(b)) => a.ptr_eq(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(Num::Int(a)), Some(Num::Int(b))) => a == b,
                (Some(a), Some(b)) => a.to_f64() == b.to_f64(),
                _ => false,
            },
        }
    }
}

/// A record with a class name and named fields, reached through attribute
/// access.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    class: Arc<str>,
    fields: BTreeMap<Arc<str>, Value>,
}

impl Object {
    pub fn new(class: impl Into<Arc<str>>) -> Self {
        Object {
            class: class.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class)?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", k, v.repr())?;
        }
        write!(f, ")")
    }
}

/// A consumable sequence. Clones share the cursor, so advancing one advances
/// them all.
#[derive(Clone)]
pub struct Iter(Arc<Mutex<VecDeque<Value>>>);

impl Iter {
    pub fn new<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Iter(Arc::new(Mutex::new(
            items.into_iter().map(Into::into).collect(),
        )))
    }

    pub fn next_value(&self) -> Result<Value> {
        // A panic elsewhere while holding the lock leaves the queue intact.
        let mut items = self.0.lock().unwrap_or_else(|p| p.into_inner());
        items
            .pop_front()
            .ok_or_else(|| ErrorKind::StopIteration.into())
    }

    pub fn ptr_eq(&self, other: &Iter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(OrderedFloat(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Arc::new(o))
    }
}

impl From<Iter> for Value {
    fn from(it: Iter) -> Self {
        Value::Iter(it)
    }
}

impl From<Lambda> for Value {
    fn from(l: Lambda) -> Self {
        Value::Func(l)
    }
}

/// An array of [`Value`]s, for passing arguments to a lambda:
/// `add.call(&vals![1, 2])`.
#[macro_export]
macro_rules! vals {
    ($($v:expr),* $(,)?) => {
        [$($crate::Value::from($v)),*]
    };
}
