use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Attaches a source position unless one is already known.
    /// Verb errors are raised without a column and picked up by
    /// the evaluator at the verb's token.
    pub fn in_column(self, column: &Column) -> Error {
        if self.column != (0..0) {
            return self;
        }
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    UnboundVariable = 8,
    ShapeMismatch = 9,
    IndexOutOfRange = 10,
    RankError = 11,
    InvalidArgument = 12,
    NotImplemented = 13,
    UnrecognizedInput = 14,
    LineBufferOverflow = 23,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "syntax error",
            6 => "overflow",
            7 => "out of memory",
            8 => "unbound variable",
            9 => "shape mismatch",
            10 => "index out of range",
            11 => "rank error",
            12 => "invalid argument",
            13 => "not implemented",
            14 => "unrecognized input",
            23 => "line buffer overflow",
            51 => "internal error",
            53 => "file not found",
            _ => "",
        };
        let mut suffix = String::new();
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "program error {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(IndexOutOfRange, ..&(3..4); "7 is not below 3");
        assert_eq!(e.to_string(), "index out of range (3..4); 7 is not below 3");
        assert_eq!(error!(NotImplemented).to_string(), "not implemented");
    }

    #[test]
    fn test_first_column_wins() {
        let e = error!(RankError, ..&(1..2)).in_column(&(5..6));
        assert_eq!(e.column(), 1..2);
        assert!(e.is(ErrorCode::RankError));
    }
}
