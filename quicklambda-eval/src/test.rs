#![allow(non_upper_case_globals)]

use crate::{operands, ops, MagicPlaceholder, Operand, Placeholder};
use quicklambda_base::{ErrorKind, Result};
use quicklambda_lang::{vals, BinOp, Lambda, Object, UnOp, Value};
use test_log::test;

mod overload;

const _1: Placeholder = Placeholder::new(1);
const _2: Placeholder = Placeholder::new(2);
const _3: Placeholder = Placeholder::new(3);

fn _v(value: impl Into<Value>) -> MagicPlaceholder {
    MagicPlaceholder::new(value)
}

#[test]
fn test_placeholder_positions() -> Result<()> {
    assert_eq!(_1.index(), 0);
    assert_eq!(_3.index(), 2);
    assert_eq!(_2.to_string(), "_2");
    assert_eq!(Placeholder::labelled(1, "x").to_string(), "_x");
    assert_eq!(_2.resolve(&vals![1, 2, 3])?, Value::from(2));
    assert_eq!(
        _3.resolve(&vals![1]).unwrap_err().into_kind(),
        ErrorKind::IndexOutOfRange { index: 2, len: 1 }
    );
    Ok(())
}

#[test]
#[should_panic(expected = "placeholder positions start at 1")]
fn test_placeholder_zero() {
    let n = std::hint::black_box(0);
    let _ = Placeholder::new(n);
}

#[test]
fn test_placeholder_as_lambda() -> Result<()> {
    let second: Lambda = _2.into();
    assert_eq!(second.name(), "_2");
    assert_eq!(second.call(&vals!["a", "b"])?, Value::from("b"));
    Ok(())
}

#[test]
fn test_magic_as_lambda() -> Result<()> {
    let five = _v(5).lambda();
    assert_eq!(five.name(), "_(5)");
    assert_eq!(five.call(&[])?, Value::from(5));
    assert_eq!(five.call(&vals![1, 2])?, Value::from(5));
    assert_eq!(_v("a").to_string(), "_('a')");
    assert_eq!(_v(vec![10, 20, 30]).to_string(), "_([10, 20, 30])");
    Ok(())
}

#[test]
fn test_operand_resolution() -> Result<()> {
    let args = vals![1, 2];
    assert_eq!(Operand::from(_2).resolve(&args)?, Value::from(2));
    assert_eq!(Operand::from(_v(7)).resolve(&args)?, Value::from(7));
    assert_eq!(Operand::from("x").resolve(&args)?, Value::from("x"));
    assert_eq!(Operand::from(_2).to_string(), "_2");
    assert_eq!(Operand::from(_v(7)).to_string(), "_(7)");
    assert_eq!(Operand::from("x").to_string(), "'x'");
    Ok(())
}

// Every catalog operator, deferred with a placeholder on each side, agrees
// with applying it directly.
#[test]
fn test_every_binop_defers() -> Result<()> {
    let x = Value::from(12);
    let v = Value::from(5);
    for op in BinOp::ALL {
        let (x, v) = match op {
            BinOp::GetAttr => (Value::from(Object::new("P").with("f", 1)), Value::from("f")),
            BinOp::GetItem => (Value::from(vec![1, 2, 3]), Value::from(1)),
            _ => (x.clone(), v.clone()),
        };
        let args = [Value::None, x.clone(), Value::None];
        let direct = op.apply(&x, &v)?;
        assert_eq!(ops::binary(op, _2, v.clone()).call(&args)?, direct, "{}", op);
        if op.reflects() {
            let args = [Value::None, Value::None, x.clone()];
            let direct = op.apply(&v, &x)?;
            assert_eq!(ops::binary(op, v.clone(), _3).call(&args)?, direct, "r{}", op);
        }
    }
    Ok(())
}

#[test]
fn test_every_unop_defers() -> Result<()> {
    for op in UnOp::ALL {
        let x = match op {
            UnOp::Next => Value::from(quicklambda_lang::Iter::new([9])),
            _ => Value::from(-4),
        };
        let expected = match op {
            UnOp::Next => Value::from(9),
            _ => op.apply(&x)?,
        };
        assert_eq!(ops::unary(op, _1).call(&[x])?, expected, "{}", op);
    }
    Ok(())
}

#[test]
fn test_operands_macro() {
    let args = operands![_1, 1, "a", _v(2)];
    let shown: Vec<String> = args.iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["_1", "1", "'a'", "_(2)"]);
}
