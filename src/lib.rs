//! # incunabulum
//!
//! A tiny array language read right to left. A line is made of
//! single digits, the letters `a` to `z`, assignment with `=` and
//! six verb symbols. Each verb has a monadic and a dyadic meaning.
//!
//! | Symbol | Monadic  | Dyadic      |
//! |--------|----------|-------------|
//! | `+`    | identity | plus        |
//! | `{`    | size     | from        |
//! | `~`    | iota     | find        |
//! | `<`    | box      |             |
//! | `#`    | shape    | reshape     |
//! | `,`    |          | concatenate |
//!
//! `i.` may be written for monadic `~`. There is no precedence:
//! `x+2#3` is `x+(2#3)`.
//!
//! ```
//! let mut runtime = incunabulum::mach::Runtime::new();
//! assert_eq!(runtime.interpret("x=2#3"), "2\n3 3\n");
//! assert_eq!(runtime.interpret("x+i.2"), "2\n3 4\n");
//! assert_eq!(runtime.interpret("3~4"), "Error: not implemented (1..2); find\n");
//! ```

pub mod lang;
pub mod mach;
pub mod term;

/// Evaluates one line in a fresh session.
pub fn interpret(source: &str) -> String {
    mach::Runtime::new().interpret(source)
}
