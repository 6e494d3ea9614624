// Eval turns the operator catalog into deferred functions.
//
// A Placeholder stands for an argument of the eventual call; a
// MagicPlaceholder stands for a value fixed now. Applying an operator to
// either one evaluates nothing: it builds a Lambda that does the work when
// called, and names it after the expression that built it.
//
// Nothing here holds state after construction. Each operator application
// makes a new Lambda and leaves its inputs untouched.

mod defer;
mod operand;
mod overload;
mod placeholder;

pub mod ops;

#[cfg(test)]
mod test;

pub use operand::Operand;
pub use placeholder::{MagicPlaceholder, Placeholder};
