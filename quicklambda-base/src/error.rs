// We want a few things here:
// 1. A way to create a new error with a backtrace
// 2. A kind the caller can match on, since evaluation failures are ordinary
//    outcomes of calling a lambda with the wrong arguments
// 3. A way to centralize setting a breakpoint to trap any error in the system
//    when it's created, and to emit it into the tracing/logging system

use backtrace_error::DynBacktraceError;
use std::borrow::Cow;
use std::fmt;
use tracing::error;

/// What went wrong. Messages follow the usual wording for these failures in
/// dynamic languages, so `to_string()` reads familiar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    IndexOutOfRange { index: i64, len: usize },
    KeyNotFound(String),
    BadOperands { op: &'static str, lhs: String, rhs: String },
    Unorderable { op: &'static str, lhs: String, rhs: String },
    BadOperand { op: &'static str, ty: String },
    BadIndex { container: String, key: String },
    NotSubscriptable(String),
    NotAnInteger(String),
    NotAnIterator(String),
    NotCallable(String),
    NoAttribute { ty: String, attr: String },
    ZeroDivision,
    Overflow(&'static str),
    NegativeShift,
    StopIteration,
    Other(Cow<'static, str>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            ErrorKind::KeyNotFound(key) => write!(f, "key not found: {}", key),
            ErrorKind::BadOperands { op, lhs, rhs } => write!(
                f,
                "unsupported operand type(s) for {}: '{}' and '{}'",
                op, lhs, rhs
            ),
            ErrorKind::Unorderable { op, lhs, rhs } => write!(
                f,
                "'{}' not supported between instances of '{}' and '{}'",
                op, lhs, rhs
            ),
            ErrorKind::BadOperand { op, ty } => {
                write!(f, "bad operand type for {}: '{}'", op, ty)
            }
            ErrorKind::BadIndex { container, key } => {
                write!(f, "{} indices must be integers, not '{}'", container, key)
            }
            ErrorKind::NotSubscriptable(ty) => write!(f, "'{}' object is not subscriptable", ty),
            ErrorKind::NotAnInteger(ty) => {
                write!(f, "'{}' object cannot be interpreted as an integer", ty)
            }
            ErrorKind::NotAnIterator(ty) => write!(f, "'{}' object is not an iterator", ty),
            ErrorKind::NotCallable(ty) => write!(f, "'{}' object is not callable", ty),
            ErrorKind::NoAttribute { ty, attr } => {
                write!(f, "'{}' object has no attribute '{}'", ty, attr)
            }
            ErrorKind::ZeroDivision => write!(f, "division by zero"),
            ErrorKind::Overflow(op) => write!(f, "integer overflow in {}", op),
            ErrorKind::NegativeShift => write!(f, "negative shift count"),
            ErrorKind::StopIteration => write!(f, "iterator exhausted"),
            ErrorKind::Other(msg) => write!(f, "{}", msg),
        }
    }
}

// The payload handed to backtrace-error, which wants a std error.
struct KindErr(ErrorKind);
impl fmt::Debug for KindErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Display for KindErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for KindErr {}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    trace: DynBacktraceError,
}
pub type Result<T> = std::result::Result<T, Error>;

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        error!(target: "quicklambda", "{}", kind);
        let trace = DynBacktraceError::from(KindErr(kind.clone()));
        Error { kind, trace }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// The error as captured at creation, backtrace included.
    pub fn trace(&self) -> &DynBacktraceError {
        &self.trace
    }
}

pub fn err(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::new(ErrorKind::Other(msg.into()))
}
