/*!
## Rust Machine Module

This Rust module holds the arrays, the verbs and the evaluator.

*/

mod array;
mod operation;
mod print;
mod runtime;
mod var;
mod verb;

pub use array::size_of;
pub use array::Array;
pub use array::ArrayRef;
pub use array::Data;
pub use array::Kind;
pub use array::MAX_DEPTH;
pub use array::MAX_ELEMENTS;
pub use array::MAX_RANK;
pub use operation::Operation;
pub use print::render;
pub use runtime::Runtime;
pub use runtime::MAX_TOKENS;
pub use var::Var;
pub use verb::{dyad, monad, Dyad, Monad};
