use crate::mach::ArrayRef;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(ArrayRef),
    Verb(Verb),
    Name(char),
}

impl Token {
    pub fn is_assign(&self) -> bool {
        *self == Token::Name('=')
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(a) => write!(f, "{}", a.as_scalar().unwrap_or_default()),
            Verb(v) => write!(f, "{}", v),
            Name(c) => write!(f, "{}", c),
        }
    }
}

/// The six verb symbols. The discriminant is the code used to
/// index the monadic and dyadic dispatch tables.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verb {
    Plus = 1,
    Brace = 2,
    Tilde = 3,
    Less = 4,
    Hash = 5,
    Comma = 6,
}

impl Verb {
    pub const SYMBOLS: &'static str = "+{~<#,";

    pub fn from_char(ch: char) -> Option<Verb> {
        use Verb::*;
        match ch {
            '+' => Some(Plus),
            '{' => Some(Brace),
            '~' => Some(Tilde),
            '<' => Some(Less),
            '#' => Some(Hash),
            ',' => Some(Comma),
            _ => None,
        }
    }

    pub fn code(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Verb::*;
        match self {
            Plus => write!(f, "+"),
            Brace => write!(f, "{{"),
            Tilde => write!(f, "~"),
            Less => write!(f, "<"),
            Hash => write!(f, "#"),
            Comma => write!(f, ","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_symbol_order() {
        for (index, ch) in Verb::SYMBOLS.chars().enumerate() {
            let verb = Verb::from_char(ch).unwrap();
            assert_eq!(verb.code(), index + 1);
            assert_eq!(verb.to_string(), ch.to_string());
        }
        assert_eq!(Verb::from_char('='), None);
    }
}
