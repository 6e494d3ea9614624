use std::fmt;

use quicklambda_base::{ErrorKind, Result};
use quicklambda_lang::{Lambda, Value};

use crate::{defer, Operand};

/// A marker for one position in the argument list of an eventual call.
///
/// Positions are 1-based at construction (`Placeholder::new(1)` is `_1`) and
/// stored 0-based.
#[derive(Clone, Copy, Debug)]
pub struct Placeholder {
    index: usize,
    label: Option<&'static str>,
}

impl Placeholder {
    pub const fn new(n: usize) -> Self {
        assert!(n > 0, "placeholder positions start at 1");
        Placeholder {
            index: n - 1,
            label: None,
        }
    }

    /// A placeholder displayed as `_<label>` rather than `_<n>`.
    pub const fn labelled(n: usize, label: &'static str) -> Self {
        assert!(n > 0, "placeholder positions start at 1");
        Placeholder {
            index: n - 1,
            label: Some(label),
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn resolve(&self, args: &[Value]) -> Result<Value> {
        args.get(self.index).cloned().ok_or_else(|| {
            ErrorKind::IndexOutOfRange {
                index: i64::try_from(self.index).unwrap_or(i64::MAX),
                len: args.len(),
            }
            .into()
        })
    }

    /// The placeholder on its own: picks its argument out of the call.
    pub fn lambda(&self) -> Lambda {
        let p = *self;
        defer::build(self.to_string(), move |args| p.resolve(args))
    }

    /// Defer calling the argument at this position with `args`, each
    /// resolved against the same call: `_1.call(operands![_2])` is `|f, x| f(x)`.
    pub fn call(&self, args: impl IntoIterator<Item = Operand>) -> Lambda {
        defer::invoke(Operand::Arg(*self), self.to_string(), args.into_iter().collect())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "_{}", label),
            None => write!(f, "_{}", self.index + 1),
        }
    }
}

impl From<Placeholder> for Lambda {
    fn from(p: Placeholder) -> Self {
        p.lambda()
    }
}

/// An immediate value dressed up as a placeholder, so it can take part in
/// deferred expressions: `_v(1) + _1`.
#[derive(Clone, Debug)]
pub struct MagicPlaceholder {
    value: Value,
}

impl MagicPlaceholder {
    /// Where a non-callable wrapped value sends a call: the first argument.
    pub const POSITION: Placeholder = Placeholder::new(1);

    pub fn new(value: impl Into<Value>) -> Self {
        MagicPlaceholder {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The wrapped value as a constant function.
    pub fn lambda(&self) -> Lambda {
        let value = self.value.clone();
        defer::build(self.to_string(), move |_| Ok(value.clone()))
    }

    /// If the wrapped value is a function, defer calling it with `args`,
    /// each resolved against the eventual call. Otherwise this behaves like
    /// calling [`MagicPlaceholder::POSITION`].
    pub fn call(&self, args: impl IntoIterator<Item = Operand>) -> Lambda {
        let callee = if self.value.is_callable() {
            Operand::Bound(self.clone())
        } else {
            Operand::Arg(Self::POSITION)
        };
        defer::invoke(callee, self.to_string(), args.into_iter().collect())
    }
}

impl fmt::Display for MagicPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_({})", self.value.repr())
    }
}

impl From<MagicPlaceholder> for Lambda {
    fn from(m: MagicPlaceholder) -> Self {
        m.lambda()
    }
}
