//! The whole catalog as plain functions, taking any kind of operand on
//! either side: `ops::pow(2, _1)`, `ops::lt(_1, _2)`.

use quicklambda_lang::{BinOp, Lambda, UnOp};

use crate::Operand;

pub use crate::defer::{binary, unary};

macro_rules! binary_fns {
    ($($name:ident => $op:expr),* $(,)?) => {
        $(
            pub fn $name(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Lambda {
                binary($op, lhs, rhs)
            }
        )*
    };
}

macro_rules! unary_fns {
    ($($name:ident => $op:expr),* $(,)?) => {
        $(
            pub fn $name(operand: impl Into<Operand>) -> Lambda {
                unary($op, operand)
            }
        )*
    };
}

binary_fns! {
    getattr => BinOp::GetAttr,
    lt => BinOp::Lt,
    le => BinOp::Le,
    eq => BinOp::Eq,
    ne => BinOp::Ne,
    ge => BinOp::Ge,
    gt => BinOp::Gt,
    add => BinOp::Add,
    and => BinOp::And,
    floordiv => BinOp::FloorDiv,
    lshift => BinOp::LShift,
    modulo => BinOp::Mod,
    mul => BinOp::Mul,
    or => BinOp::Or,
    pow => BinOp::Pow,
    rshift => BinOp::RShift,
    sub => BinOp::Sub,
    truediv => BinOp::TrueDiv,
    xor => BinOp::Xor,
    getitem => BinOp::GetItem,
}

unary_fns! {
    next => UnOp::Next,
    abs => UnOp::Abs,
    index => UnOp::Index,
    invert => UnOp::Invert,
    neg => UnOp::Neg,
    pos => UnOp::Pos,
}

/// Defer calling `callee` with `args`.
pub fn call(callee: impl Into<Operand>, args: impl IntoIterator<Item = Operand>) -> Lambda {
    callee.into().call(args)
}
