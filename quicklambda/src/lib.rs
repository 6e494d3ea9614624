//! Quick lambdas: functions written as expressions over placeholders.
//!
//! `_1 + 1` is a [`Lambda`] that adds one to its first argument, and prints
//! as `_1 + 1`. `_v(f).call(operands![_1, 1])` defers a call to `f`, and
//! [`vals!`] builds the argument list a lambda is called with.

#![allow(non_upper_case_globals)]

pub use quicklambda_base::{err, Error, ErrorKind, Result};
pub use quicklambda_eval::{operands, ops, MagicPlaceholder, Operand, Placeholder};
pub use quicklambda_lang::{vals, BinOp, Iter, Lambda, Object, UnOp, Value};


pub const _1: Placeholder = Placeholder::new(1);
pub const _2: Placeholder = Placeholder::new(2);
pub const _3: Placeholder = Placeholder::new(3);

/// Wrap an immediate value so it can take part in a deferred expression.
pub fn _v(value: impl Into<Value>) -> MagicPlaceholder {
    MagicPlaceholder::new(value)
}

pub mod prelude {
    pub use crate::{_1, _2, _3, _v};
    pub use crate::{operands, vals, Lambda, Object, Operand, Value};
}
