use super::{ArrayRef, Operation};
use crate::error;
use crate::lang::{Error, Verb};

type Result<T> = std::result::Result<T, Error>;

pub type Monad = fn(ArrayRef) -> Result<ArrayRef>;
pub type Dyad = fn(ArrayRef, ArrayRef) -> Result<ArrayRef>;

/// Monadic verbs indexed by verb code. Slot 0 is never used.
static MONADIC: [Option<Monad>; 7] = [
    None,
    Some(Operation::identity as Monad),
    Some(Operation::size as Monad),
    Some(Operation::iota as Monad),
    Some(Operation::r#box as Monad),
    Some(Operation::shape as Monad),
    None,
];

/// Dyadic verbs indexed by verb code. Slot 0 is never used.
static DYADIC: [Option<Dyad>; 7] = [
    None,
    Some(Operation::plus as Dyad),
    Some(Operation::from as Dyad),
    Some(Operation::find as Dyad),
    None,
    Some(Operation::reshape as Dyad),
    Some(Operation::concatenate as Dyad),
];

pub fn monad(verb: Verb) -> Result<Monad> {
    match MONADIC.get(verb.code()).copied().flatten() {
        Some(f) => Ok(f),
        None => Err(error!(NotImplemented; &format!("monadic {}", verb))),
    }
}

pub fn dyad(verb: Verb) -> Result<Dyad> {
    match DYADIC.get(verb.code()).copied().flatten() {
        Some(f) => Ok(f),
        None => Err(error!(NotImplemented; &format!("dyadic {}", verb))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_empty_slots() {
        assert!(monad(Verb::Comma).unwrap_err().is(ErrorCode::NotImplemented));
        assert!(dyad(Verb::Less).unwrap_err().is(ErrorCode::NotImplemented));
        assert!(monad(Verb::Tilde).is_ok());
        assert!(dyad(Verb::Tilde).is_ok());
    }
}
