// Generates the operator surface of both placeholder kinds from the catalog.
//
// Rust lets `+ - * / % & | ^ << >>` and unary `- !` return a Lambda, so those
// get std::ops impls. Comparisons must return bool and indexing must return a
// reference, so those (and the operators Rust lacks) are named methods.
// Reflected impls (`1 + _1`) exist only where the catalog says the operator
// reflects, and only for the left-hand types listed below.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use quicklambda_lang::{BinOp, Lambda, UnOp, Value};

use crate::defer::{binary, unary};
use crate::{MagicPlaceholder, Operand, Placeholder};

macro_rules! infix {
    ($Trait:ident, $method:ident, $op:expr) => {
        impl<T: Into<Operand>> $Trait<T> for Placeholder {
            type Output = Lambda;
            fn $method(self, rhs: T) -> Lambda {
                binary($op, self, rhs)
            }
        }
        impl<T: Into<Operand>> $Trait<T> for MagicPlaceholder {
            type Output = Lambda;
            fn $method(self, rhs: T) -> Lambda {
                binary($op, self, rhs)
            }
        }
        impl<T: Into<Operand>> $Trait<T> for &MagicPlaceholder {
            type Output = Lambda;
            fn $method(self, rhs: T) -> Lambda {
                binary($op, self, rhs)
            }
        }
    };
    ($Trait:ident, $method:ident, $op:expr, reflected) => {
        infix!($Trait, $method, $op);
        reflected!($Trait, $method, $op, i64, f64, bool, Value);
    };
}

macro_rules! reflected {
    ($Trait:ident, $method:ident, $op:expr, $($Lhs:ty),*) => {
        $(
            impl $Trait<Placeholder> for $Lhs {
                type Output = Lambda;
                fn $method(self, rhs: Placeholder) -> Lambda {
                    binary($op, self, rhs)
                }
            }
            impl $Trait<MagicPlaceholder> for $Lhs {
                type Output = Lambda;
                fn $method(self, rhs: MagicPlaceholder) -> Lambda {
                    binary($op, self, rhs)
                }
            }
        )*
    };
}

macro_rules! prefix {
    ($Trait:ident, $method:ident, $op:expr) => {
        impl $Trait for Placeholder {
            type Output = Lambda;
            fn $method(self) -> Lambda {
                unary($op, self)
            }
        }
        impl $Trait for MagicPlaceholder {
            type Output = Lambda;
            fn $method(self) -> Lambda {
                unary($op, self)
            }
        }
        impl $Trait for &MagicPlaceholder {
            type Output = Lambda;
            fn $method(self) -> Lambda {
                unary($op, self)
            }
        }
    };
}

infix!(Add, add, BinOp::Add, reflected);
infix!(Sub, sub, BinOp::Sub, reflected);
infix!(Mul, mul, BinOp::Mul, reflected);
infix!(Div, div, BinOp::TrueDiv, reflected);
infix!(Rem, rem, BinOp::Mod, reflected);
infix!(BitAnd, bitand, BinOp::And, reflected);
infix!(BitOr, bitor, BinOp::Or, reflected);
infix!(BitXor, bitxor, BinOp::Xor, reflected);
infix!(Shl, shl, BinOp::LShift);
infix!(Shr, shr, BinOp::RShift);

prefix!(Neg, neg, UnOp::Neg);
prefix!(Not, not, UnOp::Invert);

macro_rules! methods {
    ($ty:ty) => {
        impl $ty {
            pub fn lt(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Lt, self, rhs)
            }
            pub fn le(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Le, self, rhs)
            }
            pub fn eq(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Eq, self, rhs)
            }
            pub fn ne(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Ne, self, rhs)
            }
            pub fn ge(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Ge, self, rhs)
            }
            pub fn gt(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Gt, self, rhs)
            }
            pub fn floordiv(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::FloorDiv, self, rhs)
            }
            pub fn pow(&self, rhs: impl Into<Operand>) -> Lambda {
                binary(BinOp::Pow, self, rhs)
            }
            /// `x.name`
            pub fn attr(&self, name: impl Into<Operand>) -> Lambda {
                binary(BinOp::GetAttr, self, name)
            }
            /// `x[key]`
            pub fn item(&self, key: impl Into<Operand>) -> Lambda {
                binary(BinOp::GetItem, self, key)
            }
            pub fn abs(&self) -> Lambda {
                unary(UnOp::Abs, self)
            }
            pub fn as_index(&self) -> Lambda {
                unary(UnOp::Index, self)
            }
            pub fn next(&self) -> Lambda {
                unary(UnOp::Next, self)
            }
            pub fn pos(&self) -> Lambda {
                unary(UnOp::Pos, self)
            }
            pub fn invert(&self) -> Lambda {
                unary(UnOp::Invert, self)
            }
        }
    };
}

methods!(Placeholder);
methods!(MagicPlaceholder);
