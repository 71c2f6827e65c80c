use super::ArrayRef;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One slot per lowercase letter.

#[derive(Debug, Default, Clone)]
pub struct Var {
    slots: [Option<ArrayRef>; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn is_name(name: char) -> bool {
        name.is_ascii_lowercase()
    }

    fn index(name: char) -> Result<usize> {
        if Var::is_name(name) {
            Ok((name as u8 - b'a') as usize)
        } else {
            Err(error!(UnrecognizedInput; &format!("'{}' is not a name", name)))
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    pub fn fetch(&self, name: char) -> Result<ArrayRef> {
        match &self.slots[Var::index(name)?] {
            Some(array) => Ok(array.clone()),
            None => Err(error!(UnboundVariable; &format!("'{}' has no value", name))),
        }
    }

    pub fn store(&mut self, name: char, value: ArrayRef) -> Result<()> {
        self.slots[Var::index(name)?] = Some(value);
        Ok(())
    }

    /// Names that currently hold a value, in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .zip('a'..='z')
            .filter(|(slot, _)| slot.is_some())
            .map(|(_, name)| name)
    }
}
