// The operator catalog: every operator a placeholder can defer, with its
// symbol, how its name is laid out, whether it has a reflected form, and what
// it does to values.
//
// Deliberately absent:
//
//  - contains: the `in` test is always coerced to a bool by the caller, so it
//    cannot hand back a deferred function.
//  - setitem / delitem: assignment and deletion are statements, not
//    expressions.
//  - in-place forms (+= and friends): statements again.

use std::{cmp::Ordering, fmt};

use quicklambda_base::{Error, ErrorKind, Result};

use crate::value::{Num, Value};

/// How a binary operator's name is laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinLayout {
    Infix,     // `l + r`
    Attr,      // `l.r`
    Subscript, // `l[r]`
}

/// How a unary operator's name is laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnLayout {
    Prefix, // `-x`
    Call,   // `abs(x)`
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BinOp {
    GetAttr,
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
    Add,
    And,
    FloorDiv,
    LShift,
    Mod,
    Mul,
    Or,
    Pow,
    RShift,
    Sub,
    TrueDiv,
    Xor,
    GetItem,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum UnOp {
    Next,
    Abs,
    Index,
    Invert,
    Neg,
    Pos,
}

impl BinOp {
    pub const ALL: [BinOp; 20] = [
        BinOp::GetAttr,
        BinOp::Lt,
        BinOp::Le,
        BinOp::Eq,
        BinOp::Ne,
        BinOp::Ge,
        BinOp::Gt,
        BinOp::Add,
        BinOp::And,
        BinOp::FloorDiv,
        BinOp::LShift,
        BinOp::Mod,
        BinOp::Mul,
        BinOp::Or,
        BinOp::Pow,
        BinOp::RShift,
        BinOp::Sub,
        BinOp::TrueDiv,
        BinOp::Xor,
        BinOp::GetItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinOp::GetAttr => "getattr",
            BinOp::Lt => "lt",
            BinOp::Le => "le",
            BinOp::Eq => "eq",
            BinOp::Ne => "ne",
            BinOp::Ge => "ge",
            BinOp::Gt => "gt",
            BinOp::Add => "add",
            BinOp::And => "and",
            BinOp::FloorDiv => "floordiv",
            BinOp::LShift => "lshift",
            BinOp::Mod => "mod",
            BinOp::Mul => "mul",
            BinOp::Or => "or",
            BinOp::Pow => "pow",
            BinOp::RShift => "rshift",
            BinOp::Sub => "sub",
            BinOp::TrueDiv => "truediv",
            BinOp::Xor => "xor",
            BinOp::GetItem => "getitem",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::GetAttr => ".",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Ge => ">=",
            BinOp::Gt => ">",
            BinOp::Add => "+",
            BinOp::And => "&",
            BinOp::FloorDiv => "//",
            BinOp::LShift => "<<",
            BinOp::Mod => "%",
            BinOp::Mul => "*",
            BinOp::Or => "|",
            BinOp::Pow => "**",
            BinOp::RShift => ">>",
            BinOp::Sub => "-",
            BinOp::TrueDiv => "/",
            BinOp::Xor => "^",
            BinOp::GetItem => "[]",
        }
    }

    pub fn layout(self) -> BinLayout {
        match self {
            BinOp::GetAttr => BinLayout::Attr,
            BinOp::GetItem => BinLayout::Subscript,
            _ => BinLayout::Infix,
        }
    }

    /// Whether the operator also defers with a placeholder on the right of a
    /// plain value, as in `1 + _1`.
    pub fn reflects(self) -> bool {
        matches!(
            self,
            BinOp::Add
                | BinOp::And
                | BinOp::FloorDiv
                | BinOp::Mod
                | BinOp::Mul
                | BinOp::Or
                | BinOp::Pow
                | BinOp::Sub
                | BinOp::TrueDiv
                | BinOp::Xor
        )
    }

    pub fn render(self, lhs: &dyn fmt::Display, rhs: &dyn fmt::Display) -> String {
        match self.layout() {
            BinLayout::Infix => format!("{} {} {}", lhs, self.symbol(), rhs),
            BinLayout::Attr => format!("{}.{}", lhs, rhs),
            BinLayout::Subscript => format!("{}[{}]", lhs, rhs),
        }
    }

    pub fn apply(self, lhs: &Value, rhs: &Value) -> Result<Value> {
        match self {
            BinOp::GetAttr => getattr(lhs, rhs),
            BinOp::GetItem => getitem(lhs, rhs),
            BinOp::Eq => Ok(Value::Bool(lhs == rhs)),
            BinOp::Ne => Ok(Value::Bool(lhs != rhs)),
            BinOp::Lt | BinOp::Le | BinOp::Ge | BinOp::Gt => {
                let ord = compare(self, lhs, rhs)?;
                Ok(Value::Bool(match ord {
                    None => false,
                    Some(ord) => match self {
                        BinOp::Lt => ord == Ordering::Less,
                        BinOp::Le => ord != Ordering::Greater,
                        BinOp::Ge => ord != Ordering::Less,
                        _ => ord == Ordering::Greater,
                    },
                }))
            }
            BinOp::Add => concat(lhs, rhs).unwrap_or_else(|| arith(self, lhs, rhs)),
            BinOp::Mul => repeat(lhs, rhs).unwrap_or_else(|| arith(self, lhs, rhs)),
            BinOp::Sub | BinOp::FloorDiv | BinOp::Mod | BinOp::Pow | BinOp::TrueDiv => {
                arith(self, lhs, rhs)
            }
            BinOp::And | BinOp::Or | BinOp::Xor => bitwise(self, lhs, rhs),
            BinOp::LShift | BinOp::RShift => shift(self, lhs, rhs),
        }
    }

    fn bad_operands(self, lhs: &Value, rhs: &Value) -> Error {
        ErrorKind::BadOperands {
            op: self.symbol(),
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }
        .into()
    }

    fn overflow(self) -> Error {
        ErrorKind::Overflow(self.symbol()).into()
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl UnOp {
    pub const ALL: [UnOp; 6] = [
        UnOp::Next,
        UnOp::Abs,
        UnOp::Index,
        UnOp::Invert,
        UnOp::Neg,
        UnOp::Pos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnOp::Next => "next",
            UnOp::Abs => "abs",
            UnOp::Index => "index",
            UnOp::Invert => "invert",
            UnOp::Neg => "neg",
            UnOp::Pos => "pos",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Next => "next",
            UnOp::Abs => "abs",
            UnOp::Index => "index",
            UnOp::Invert => "~",
            UnOp::Neg => "-",
            UnOp::Pos => "+",
        }
    }

    pub fn layout(self) -> UnLayout {
        match self {
            UnOp::Next | UnOp::Abs | UnOp::Index => UnLayout::Call,
            UnOp::Invert | UnOp::Neg | UnOp::Pos => UnLayout::Prefix,
        }
    }

    pub fn render(self, operand: &dyn fmt::Display) -> String {
        match self.layout() {
            UnLayout::Prefix => format!("{}{}", self.symbol(), operand),
            UnLayout::Call => format!("{}({})", self.symbol(), operand),
        }
    }

    pub fn apply(self, operand: &Value) -> Result<Value> {
        match self {
            UnOp::Next => match operand {
                Value::Iter(it) => it.next_value(),
                other => Err(ErrorKind::NotAnIterator(other.type_name()).into()),
            },
            UnOp::Index => match operand.as_int() {
                Some(i) => Ok(Value::Int(i)),
                None => Err(ErrorKind::NotAnInteger(operand.type_name()).into()),
            },
            UnOp::Invert => match operand.as_int() {
                Some(i) => Ok(Value::Int(!i)),
                None => Err(self.bad_operand(operand)),
            },
            UnOp::Neg => match operand.as_number() {
                Some(Num::Int(i)) => i
                    .checked_neg()
                    .map(Value::Int)
                    .ok_or_else(|| ErrorKind::Overflow(self.symbol()).into()),
                Some(Num::Float(x)) => Ok(Value::from(-x)),
                None => Err(self.bad_operand(operand)),
            },
            UnOp::Pos => match operand.as_number() {
                Some(Num::Int(i)) => Ok(Value::Int(i)),
                Some(Num::Float(x)) => Ok(Value::from(x)),
                None => Err(self.bad_operand(operand)),
            },
            UnOp::Abs => match operand.as_number() {
                Some(Num::Int(i)) => i
                    .checked_abs()
                    .map(Value::Int)
                    .ok_or_else(|| ErrorKind::Overflow(self.symbol()).into()),
                Some(Num::Float(x)) => Ok(Value::from(x.abs())),
                None => Err(self.bad_operand(operand)),
            },
        }
    }

    fn bad_operand(self, operand: &Value) -> Error {
        let op = match self {
            UnOp::Invert => "unary ~",
            UnOp::Neg => "unary -",
            UnOp::Pos => "unary +",
            UnOp::Abs => "abs()",
            UnOp::Index => "index()",
            UnOp::Next => "next()",
        };
        ErrorKind::BadOperand {
            op,
            ty: operand.type_name(),
        }
        .into()
    }
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn getattr(obj: &Value, name: &Value) -> Result<Value> {
    let Some(attr) = name.as_str() else {
        return Err(BinOp::GetAttr.bad_operands(obj, name));
    };
    let field = match obj {
        Value::Object(o) => o.field(attr).cloned(),
        _ => None,
    };
    field.ok_or_else(|| {
        ErrorKind::NoAttribute {
            ty: obj.type_name(),
            attr: attr.to_string(),
        }
        .into()
    })
}

// Negative indices count back from the end.
fn normalize_index(index: i64, len: usize) -> Result<usize> {
    let out_of_range = || -> Error { ErrorKind::IndexOutOfRange { index, len }.into() };
    let adjusted = if index < 0 {
        index.checked_add(i64::try_from(len).map_err(|_| out_of_range())?)
    } else {
        Some(index)
    };
    match adjusted.and_then(|i| usize::try_from(i).ok()) {
        Some(i) if i < len => Ok(i),
        _ => Err(out_of_range()),
    }
}

fn getitem(container: &Value, key: &Value) -> Result<Value> {
    match container {
        Value::List(items) => {
            let index = key.as_int().ok_or_else(|| bad_index(container, key))?;
            let i = normalize_index(index, items.len())?;
            Ok(items[i].clone())
        }
        Value::Str(s) => {
            let index = key.as_int().ok_or_else(|| bad_index(container, key))?;
            let len = s.chars().count();
            let i = normalize_index(index, len)?;
            Ok(s.chars().nth(i).map(String::from).map(Value::from).unwrap_or_default())
        }
        Value::Dict(map) => {
            let Some(k) = key.as_str() else {
                return Err(ErrorKind::KeyNotFound(key.repr().to_string()).into());
            };
            map.get(k)
                .cloned()
                .ok_or_else(|| ErrorKind::KeyNotFound(key.repr().to_string()).into())
        }
        other => Err(ErrorKind::NotSubscriptable(other.type_name()).into()),
    }
}

fn bad_index(container: &Value, key: &Value) -> Error {
    ErrorKind::BadIndex {
        container: container.type_name(),
        key: key.type_name(),
    }
    .into()
}

// Ok(None) means the pair is ordered but incomparable, as with NaN.
fn compare(op: BinOp, lhs: &Value, rhs: &Value) -> Result<Option<Ordering>> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                if x != y {
                    return compare(op, x, y);
                }
            }
            Ok(Some(a.len().cmp(&b.len())))
        }
        _ => match (lhs.as_number(), rhs.as_number()) {
            (Some(Num::Int(a)), Some(Num::Int(b))) => Ok(Some(a.cmp(&b))),
            (Some(a), Some(b)) => Ok(a.to_f64().partial_cmp(&b.to_f64())),
            _ => Err(ErrorKind::Unorderable {
                op: op.symbol(),
                lhs: lhs.type_name(),
                rhs: rhs.type_name(),
            }
            .into()),
        },
    }
}

fn concat(lhs: &Value, rhs: &Value) -> Option<Result<Value>> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Some(Ok(Value::from(format!("{}{}", a, b)))),
        (Value::List(a), Value::List(b)) => Some(Ok(Value::List(
            a.iter().chain(b.iter()).cloned().collect(),
        ))),
        _ => None,
    }
}

fn repeat(lhs: &Value, rhs: &Value) -> Option<Result<Value>> {
    let (seq, count) = match (lhs, rhs) {
        (Value::Str(_) | Value::List(_), n) => (lhs, n.as_int()?),
        (n, Value::Str(_) | Value::List(_)) => (rhs, n.as_int()?),
        _ => return None,
    };
    let count = match usize::try_from(count) {
        Ok(count) => count,
        Err(_) if count < 0 => 0,
        Err(_) => return Some(Err(BinOp::Mul.overflow())),
    };
    Some(match seq {
        Value::Str(s) => repeat_str(s, count),
        Value::List(items) => repeat_list(items, count),
        _ => return None,
    })
}

// Sized and reserved up front: a count too large to hold is an overflow.
fn repeat_str(s: &str, count: usize) -> Result<Value> {
    if s.is_empty() || count == 0 {
        return Ok(Value::from(""));
    }
    let len = s.len().checked_mul(count).ok_or_else(|| BinOp::Mul.overflow())?;
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| BinOp::Mul.overflow())?;
    for _ in 0..count {
        out.push_str(s);
    }
    Ok(Value::from(out))
}

fn repeat_list(items: &[Value], count: usize) -> Result<Value> {
    if items.is_empty() || count == 0 {
        return Ok(Value::List(Vec::new().into()));
    }
    let len = items
        .len()
        .checked_mul(count)
        .ok_or_else(|| BinOp::Mul.overflow())?;
    let mut out: Vec<Value> = Vec::new();
    out.try_reserve_exact(len).map_err(|_| BinOp::Mul.overflow())?;
    for _ in 0..count {
        out.extend_from_slice(items);
    }
    Ok(Value::List(out.into()))
}

fn arith(op: BinOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(Num::Int(a)), Some(Num::Int(b))) => int_arith(op, a, b),
        (Some(a), Some(b)) => float_arith(op, a.to_f64(), b.to_f64()),
        _ => Err(op.bad_operands(lhs, rhs)),
    }
}

fn int_arith(op: BinOp, a: i64, b: i64) -> Result<Value> {
    let checked = |r: Option<i64>| r.map(Value::Int).ok_or_else(|| op.overflow());
    match op {
        BinOp::Add => checked(a.checked_add(b)),
        BinOp::Sub => checked(a.checked_sub(b)),
        BinOp::Mul => checked(a.checked_mul(b)),
        BinOp::TrueDiv => {
            if b == 0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            Ok(Value::from(a as f64 / b as f64))
        }
        BinOp::FloorDiv => {
            if b == 0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            let q = a.checked_div(b).ok_or_else(|| op.overflow())?;
            // Truncation rounds toward zero; floor rounds down.
            if a % b != 0 && ((a < 0) != (b < 0)) {
                Ok(Value::Int(q - 1))
            } else {
                Ok(Value::Int(q))
            }
        }
        BinOp::Mod => {
            if b == 0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            // i64::MIN % -1 overflows in Rust but is 0 mathematically.
            let r = a.checked_rem(b).unwrap_or(0);
            if r != 0 && ((r < 0) != (b < 0)) {
                Ok(Value::Int(r + b))
            } else {
                Ok(Value::Int(r))
            }
        }
        BinOp::Pow => {
            if b < 0 {
                if a == 0 {
                    return Err(ErrorKind::ZeroDivision.into());
                }
                return Ok(Value::from((a as f64).powf(b as f64)));
            }
            match (a, u32::try_from(b)) {
                (_, Ok(exp)) => checked(a.checked_pow(exp)),
                // Only these bases stay in range past a u32 exponent.
                (0 | 1, Err(_)) => Ok(Value::Int(a)),
                (-1, Err(_)) => Ok(Value::Int(if b % 2 == 0 { 1 } else { -1 })),
                (_, Err(_)) => Err(op.overflow()),
            }
        }
        _ => Err(ErrorKind::BadOperands {
            op: op.symbol(),
            lhs: "int".into(),
            rhs: "int".into(),
        }
        .into()),
    }
}

fn float_arith(op: BinOp, a: f64, b: f64) -> Result<Value> {
    let x = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::TrueDiv => {
            if b == 0.0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            a / b
        }
        BinOp::FloorDiv => {
            if b == 0.0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            (a / b).floor()
        }
        BinOp::Mod => {
            if b == 0.0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            let r = a % b;
            if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                r + b
            } else {
                r
            }
        }
        BinOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(ErrorKind::ZeroDivision.into());
            }
            a.powf(b)
        }
        _ => {
            return Err(ErrorKind::BadOperands {
                op: op.symbol(),
                lhs: "float".into(),
                rhs: "float".into(),
            }
            .into())
        }
    };
    Ok(Value::from(x))
}

fn bitwise(op: BinOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    if let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) {
        return Ok(Value::Bool(match op {
            BinOp::And => a & b,
            BinOp::Or => a | b,
            _ => a ^ b,
        }));
    }
    let (Some(a), Some(b)) = (lhs.as_int(), rhs.as_int()) else {
        return Err(op.bad_operands(lhs, rhs));
    };
    Ok(Value::Int(match op {
        BinOp::And => a & b,
        BinOp::Or => a | b,
        _ => a ^ b,
    }))
}

fn shift(op: BinOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    let (Some(a), Some(b)) = (lhs.as_int(), rhs.as_int()) else {
        return Err(op.bad_operands(lhs, rhs));
    };
    if b < 0 {
        return Err(ErrorKind::NegativeShift.into());
    }
    match op {
        BinOp::LShift => {
            if a == 0 {
                return Ok(Value::Int(0));
            }
            // Shifting must not lose bits: only fits if it shifts back.
            let shifted = u32::try_from(b)
                .ok()
                .filter(|&b| b < 64)
                .map(|b| (a << b, b))
                .filter(|&(s, b)| s >> b == a)
                .map(|(s, _)| s);
            shifted.map(Value::Int).ok_or_else(|| op.overflow())
        }
        _ => {
            if b >= 64 {
                Ok(Value::Int(if a < 0 { -1 } else { 0 }))
            } else {
                Ok(Value::Int(a >> b))
            }
        }
    }
}
