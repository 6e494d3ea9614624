use std::fmt;

use quicklambda_base::Result;
use quicklambda_lang::{Iter, Lambda, Object, Value};

use crate::{MagicPlaceholder, Placeholder};

/// One side of a deferred operator, or one argument of a deferred call.
///
/// Resolving against the arguments of the eventual call gives, in order: the
/// argument at the placeholder's position, the wrapped value, or the literal.
#[derive(Clone, Debug)]
pub enum Operand {
    Arg(Placeholder),
    Bound(MagicPlaceholder),
    Value(Value),
}

impl Operand {
    pub fn resolve(&self, args: &[Value]) -> Result<Value> {
        match self {
            Operand::Arg(p) => p.resolve(args),
            Operand::Bound(m) => Ok(m.value().clone()),
            Operand::Value(v) => Ok(v.clone()),
        }
    }

    /// Defer calling whatever this operand resolves to.
    pub fn call(&self, args: impl IntoIterator<Item = Operand>) -> Lambda {
        match self {
            Operand::Arg(p) => p.call(args),
            Operand::Bound(m) => m.call(args),
            Operand::Value(v) => {
                crate::defer::invoke(self.clone(), v.repr().to_string(), args.into_iter().collect())
            }
        }
    }
}

pub(crate) fn resolve_all(args: &[Operand], outer: &[Value]) -> Result<Vec<Value>> {
    args.iter().map(|a| a.resolve(outer)).collect()
}

pub(crate) fn argspec(args: &[Operand]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Arg(p) => write!(f, "{}", p),
            Operand::Bound(m) => write!(f, "{}", m),
            Operand::Value(v) => write!(f, "{}", v.repr()),
        }
    }
}

impl From<Placeholder> for Operand {
    fn from(p: Placeholder) -> Self {
        Operand::Arg(p)
    }
}

impl From<&Placeholder> for Operand {
    fn from(p: &Placeholder) -> Self {
        Operand::Arg(*p)
    }
}

impl From<MagicPlaceholder> for Operand {
    fn from(m: MagicPlaceholder) -> Self {
        Operand::Bound(m)
    }
}

impl From<&MagicPlaceholder> for Operand {
    fn from(m: &MagicPlaceholder) -> Self {
        Operand::Bound(m.clone())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

macro_rules! literal_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

literal_operand!(bool, i32, i64, f64, &str, String, (), Object, Iter, Lambda);

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self {
        Operand::Value(Value::list(items))
    }
}

/// An array of [`Operand`]s, for the arguments of a deferred call:
/// `_v(add).call(operands![_1, 1])`.
#[macro_export]
macro_rules! operands {
    ($($v:expr),* $(,)?) => {
        [$($crate::Operand::from($v)),*]
    };
}
