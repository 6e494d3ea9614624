// Lang holds the values quick lambdas compute over, the lambdas themselves,
// and the fixed catalog of operators a placeholder can defer.
//
// Nothing in here knows about placeholders: an operator is just a function
// from values to a value, plus the bits needed to print an expression built
// from it.

mod lambda;
mod ops;
mod value;


pub use lambda::Lambda;
pub use ops::{BinLayout, BinOp, UnLayout, UnOp};
pub use value::{Iter, Num, Object, Repr, Value};
