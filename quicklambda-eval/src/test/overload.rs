use super::{_1, _2, _3, _v};
use crate::ops;
use quicklambda_base::{ErrorKind, Result};
use quicklambda_lang::{vals, Iter, Object, Value};
use test_log::test;

#[test]
fn test_add_names_and_values() -> Result<()> {
    let f = _1 + 1;
    assert_eq!(f.to_string(), "_1 + 1");
    assert_eq!(f.call(&vals![1, 2, 3])?, Value::from(2));

    let f = 1 + _1;
    assert_eq!(f.to_string(), "1 + _1");
    assert_eq!(f.call(&vals![1, 2, 3])?, Value::from(2));

    let f = _2 + 1;
    assert_eq!(f.call(&vals![1, 2, 3])?, Value::from(3));

    let add = _1 + _2;
    assert_eq!(add.to_string(), "_1 + _2");
    assert_eq!(add.call(&vals![1, 2])?, Value::from(3));
    assert_eq!(add.call(&vals!["a", "b"])?, Value::from("ab"));
    Ok(())
}

#[test]
fn test_magic_operands() -> Result<()> {
    let f = _v(1) + _v(2);
    assert_eq!(f.to_string(), "_(1) + _(2)");
    assert_eq!(f.call(&[])?, Value::from(3));

    let f = _1 + _v(1);
    assert_eq!(f.to_string(), "_1 + _(1)");
    assert_eq!(f.call(&vals![1, 2, 3])?, Value::from(2));

    let f = _v(1) - _1;
    assert_eq!(f.to_string(), "_(1) - _1");
    assert_eq!(f.call(&vals![5])?, Value::from(-4));

    let one = _v(1);
    let f = &one - 3;
    assert_eq!(f.call(&[])?, Value::from(-2));
    Ok(())
}

#[test]
fn test_sub_forms() -> Result<()> {
    let args = vals![1, 2, 3];
    assert_eq!((_1 - 1).call(&args)?, Value::from(0));
    assert_eq!((1 - _1).call(&args)?, Value::from(0));
    assert_eq!((_2 - 1).call(&args)?, Value::from(1));
    assert_eq!((_1 - _2).call(&args)?, Value::from(-1));
    assert_eq!((_v(1) - _v(2)).call(&args)?, Value::from(-1));
    assert_eq!((_1 - _v(1)).call(&args)?, Value::from(0));
    Ok(())
}

#[test]
fn test_reflected_magic_uses_wrapped_value() -> Result<()> {
    // The wrapped value is the right-hand side even when the call supplies
    // arguments.
    let f = 10 - _v(3);
    assert_eq!(f.to_string(), "10 - _(3)");
    assert_eq!(f.call(&vals![100])?, Value::from(7));
    Ok(())
}

#[test]
fn test_arith_and_bitwise_operators() -> Result<()> {
    let args = vals![7, 2];
    assert_eq!((_1 * _2).call(&args)?, Value::from(14));
    assert_eq!((_1 / _2).call(&args)?, Value::from(3.5));
    assert_eq!((_1 % _2).call(&args)?, Value::from(1));
    assert_eq!((_1 & 3).call(&args)?, Value::from(3));
    assert_eq!((_1 | 8).call(&args)?, Value::from(15));
    assert_eq!((_1 ^ _2).call(&args)?, Value::from(5));
    assert_eq!((_1 << _2).call(&args)?, Value::from(28));
    assert_eq!((_1 >> 1).call(&args)?, Value::from(3));
    assert_eq!((2.0 * _2).call(&args)?, Value::from(4.0));
    assert_eq!((true & _v(false)).call(&[])?, Value::from(false));
    assert_eq!((_1 >> 1).to_string(), "_1 >> 1");
    assert_eq!((_1 / _2).to_string(), "_1 / _2");
    Ok(())
}

#[test]
fn test_named_methods() -> Result<()> {
    let args = vals![7, 2];
    assert_eq!(_1.lt(_2).call(&args)?, Value::from(false));
    assert_eq!(_1.ge(7).call(&args)?, Value::from(true));
    assert_eq!(_1.eq(7.0).call(&args)?, Value::from(true));
    assert_eq!(_1.ne(_2).call(&args)?, Value::from(true));
    assert_eq!(_1.floordiv(_2).call(&args)?, Value::from(3));
    assert_eq!(_2.pow(3).call(&args)?, Value::from(8));
    assert_eq!(_1.lt(_2).to_string(), "_1 < _2");
    assert_eq!(_1.floordiv(_2).to_string(), "_1 // _2");
    assert_eq!(_2.pow(3).to_string(), "_2 ** 3");
    Ok(())
}

#[test]
fn test_reflected_integer_literals() -> Result<()> {
    let args = vals![4];
    let f = 3 - _1;
    assert_eq!(f.call(&args)?, Value::from(-1));
    let f = 3 * _1;
    assert_eq!(f.to_string(), "3 * _1");
    assert_eq!(f.call(&args)?, Value::from(12));
    assert_eq!((9 % _1).call(&args)?, Value::from(1));
    assert_eq!((1 | _1).call(&args)?, Value::from(5));
    assert_eq!((6 ^ _v(2)).call(&[])?, Value::from(4));
    assert_eq!((1 / _1).call(&args)?, Value::from(0.25));
    Ok(())
}

#[test]
fn test_reflected_combinators() -> Result<()> {
    let f = ops::pow(2, _1);
    assert_eq!(f.to_string(), "2 ** _1");
    assert_eq!(f.call(&vals![5])?, Value::from(32));
    let f = ops::floordiv(7, _1);
    assert_eq!(f.call(&vals![2])?, Value::from(3));
    let f = ops::lt(0, _1);
    assert_eq!(f.to_string(), "0 < _1");
    assert_eq!(f.call(&vals![-1])?, Value::from(false));
    Ok(())
}

#[test]
fn test_unary() -> Result<()> {
    let args = vals![-3];
    assert_eq!((-_1).to_string(), "-_1");
    assert_eq!((-_1).call(&args)?, Value::from(3));
    assert_eq!((!_1).to_string(), "~_1");
    assert_eq!((!_1).call(&args)?, Value::from(2));
    assert_eq!(_1.abs().to_string(), "abs(_1)");
    assert_eq!(_1.abs().call(&args)?, Value::from(3));
    assert_eq!(_1.pos().to_string(), "+_1");
    assert_eq!(_1.as_index().to_string(), "index(_1)");
    assert_eq!(_1.as_index().call(&vals![true])?, Value::from(1));
    assert_eq!(_1.invert().call(&args)?, Value::from(2));
    Ok(())
}

#[test]
fn test_magic_unary_uses_wrapped_value() -> Result<()> {
    let f = -_v(4);
    assert_eq!(f.to_string(), "-_(4)");
    assert_eq!(f.call(&vals![100])?, Value::from(-4));
    assert_eq!(_v(-2).abs().call(&vals![-100])?, Value::from(2));
    Ok(())
}

#[test]
fn test_next() -> Result<()> {
    let it = Iter::new([1, 2]);
    let f = _1.next();
    assert_eq!(f.to_string(), "next(_1)");
    assert_eq!(f.call(&vals![it.clone()])?, Value::from(1));
    assert_eq!(f.call(&vals![it.clone()])?, Value::from(2));
    assert_eq!(
        f.call(&vals![it]).unwrap_err().into_kind(),
        ErrorKind::StopIteration
    );
    Ok(())
}

#[test]
fn test_indexing() -> Result<()> {
    let f = _v(vec![10, 20, 30]).item(_1);
    assert_eq!(f.to_string(), "_([10, 20, 30])[_1]");
    assert_eq!(f.call(&vals![0, 1, 2])?, Value::from(10));
    assert_eq!(f.call(&vals![1, 0, 2])?, Value::from(20));

    let f = _1.item("k");
    assert_eq!(f.to_string(), "_1['k']");
    assert_eq!(f.call(&[Value::dict([("k", 3)])])?, Value::from(3));

    let f = _1.item(_2);
    assert_eq!(f.call(&vals![vec![1, 2, 3], -1])?, Value::from(3));
    assert_eq!(
        f.call(&vals![vec![1], 5]).unwrap_err().into_kind(),
        ErrorKind::IndexOutOfRange { index: 5, len: 1 }
    );
    Ok(())
}

#[test]
fn test_attributes() -> Result<()> {
    let f = _1.attr("x");
    assert_eq!(f.to_string(), "_1.x");
    let p = Object::new("Point").with("x", 4).with("y", 5);
    assert_eq!(f.call(&vals![p.clone()])?, Value::from(4));
    assert_eq!(
        _1.attr("z").call(&vals![p]).unwrap_err().into_kind(),
        ErrorKind::NoAttribute {
            ty: "Point".into(),
            attr: "z".into()
        }
    );
    Ok(())
}

#[test]
fn test_failures_surface_at_call() {
    let f = _1 + "a";
    assert_eq!(f.to_string(), "_1 + 'a'");
    assert_eq!(
        f.call(&vals![1]).unwrap_err().into_kind(),
        ErrorKind::BadOperands {
            op: "+",
            lhs: "int".into(),
            rhs: "str".into()
        }
    );
    assert_eq!(
        (_3 + 1).call(&vals![1]).unwrap_err().into_kind(),
        ErrorKind::IndexOutOfRange { index: 2, len: 1 }
    );
    assert_eq!(
        (_1 / 0).call(&vals![1]).unwrap_err().into_kind(),
        ErrorKind::ZeroDivision
    );
}

#[test]
fn test_lambda_literal_operand() {
    // A Lambda on the other side is a plain value, not a sub-expression.
    let inner = _1 + 1;
    let f = _1 + inner;
    assert_eq!(f.to_string(), "_1 + _1 + 1");
    assert_eq!(
        f.call(&vals![1]).unwrap_err().into_kind(),
        ErrorKind::BadOperands {
            op: "+",
            lhs: "int".into(),
            rhs: "function".into()
        }
    );
}

#[test]
fn test_reflected_value_lhs() -> Result<()> {
    let f = Value::from("x") + _1;
    assert_eq!(f.to_string(), "'x' + _1");
    assert_eq!(f.call(&vals!["y"])?, Value::from("xy"));
    Ok(())
}
