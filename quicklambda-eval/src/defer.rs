use std::fmt;

use quicklambda_base::Result;
use quicklambda_lang::{BinLayout, BinOp, Lambda, UnOp, Value};
use tracing::trace;

use crate::operand::{argspec, resolve_all};
use crate::Operand;

pub(crate) fn build<F>(name: String, body: F) -> Lambda
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    trace!(target: "quicklambda", lambda = %name, "deferred");
    Lambda::new(name, body)
}

// Attribute names print bare: `_1.real`, not `_1.'real'`.
struct AttrName<'a>(&'a Operand);

impl fmt::Display for AttrName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Operand::Value(Value::Str(s)) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Defer `lhs op rhs`. Both sides are resolved against the eventual call,
/// left first.
pub fn binary(op: BinOp, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Lambda {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let name = match op.layout() {
        BinLayout::Attr => op.render(&lhs, &AttrName(&rhs)),
        _ => op.render(&lhs, &rhs),
    };
    build(name, move |args| {
        let l = lhs.resolve(args)?;
        let r = rhs.resolve(args)?;
        op.apply(&l, &r)
    })
}

/// Defer `op operand`.
pub fn unary(op: UnOp, operand: impl Into<Operand>) -> Lambda {
    let operand = operand.into();
    let name = op.render(&operand);
    build(name, move |args| op.apply(&operand.resolve(args)?))
}

// Shared by every deferred call: resolve the callee, then the arguments,
// then call.
pub(crate) fn invoke(callee: Operand, shown: String, args: Vec<Operand>) -> Lambda {
    let name = format!("{}({})", shown, argspec(&args));
    build(name, move |outer| {
        let f = callee.resolve(outer)?;
        let resolved = resolve_all(&args, outer)?;
        f.call(&resolved)
    })
}
