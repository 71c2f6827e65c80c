use super::{print, verb, ArrayRef, Var};
use crate::error;
use crate::lang::{lex, Column, Error, Token, Verb};
use log::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Longest line, in tokens, the evaluator accepts.
pub const MAX_TOKENS: usize = 1024;

/// ## Evaluator
///
/// A session: the symbol table plus the right-to-left evaluator.
/// Each session is independent; hosts serving several users
/// keep one `Runtime` per user.

#[derive(Debug, Default)]
pub struct Runtime {
    vars: Var,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Evaluates one line and renders the result. Errors come back
    /// as text starting with `Error: `.
    pub fn interpret(&mut self, source: &str) -> String {
        match self.evaluate_str(source) {
            Ok(array) => print::render(&array),
            Err(error) => format!("Error: {}\n", error),
        }
    }

    pub fn evaluate_str(&mut self, source: &str) -> Result<ArrayRef> {
        debug!("evaluating {:?}", source);
        let tokens = lex(source);
        if tokens.len() > MAX_TOKENS {
            return Err(error!(LineBufferOverflow; &format!(
                "{} tokens is above {}",
                tokens.len(),
                MAX_TOKENS
            )));
        }
        let (array, next) = self.evaluate(&tokens, 0)?;
        if next != tokens.len() {
            return Err(error!(InternalError; "unconsumed input"));
        }
        Ok(array)
    }

    /// Evaluates `tokens[pos..]` and returns the value along with the
    /// position after the last consumed token. The rest of the line is
    /// always evaluated before the token at `pos` is applied to it.
    ///
    /// Tokens are scanned left to right onto a stack of pending verbs
    /// and assignments until the rightmost noun is reached. The stack
    /// is then unwound, so stack use does not grow with line length.
    fn evaluate(&mut self, tokens: &[(Column, Token)], mut pos: usize) -> Result<(ArrayRef, usize)> {
        let mut pending: Vec<Pending> = vec![];
        let mut value = loop {
            let (col, token) = match tokens.get(pos) {
                Some(t) => t,
                None => return Err(missing_operand(tokens)),
            };
            let noun = match token {
                Token::Name(name) if tokens.get(pos + 1).map_or(false, |(_, t)| t.is_assign()) => {
                    if !Var::is_name(*name) {
                        return Err(error!(UnrecognizedInput, ..col; &format!(
                            "cannot assign to '{}'",
                            name
                        )));
                    }
                    pending.push(Pending::Assign(*name));
                    pos += 2;
                    continue;
                }
                Token::Name(name) => self.vars.fetch(*name).map_err(|e| e.in_column(col))?,
                Token::Verb(v) => {
                    pending.push(Pending::Monad(*v, col));
                    pos += 1;
                    continue;
                }
                Token::Literal(array) => array.clone(),
            };
            match tokens.get(pos + 1) {
                None => {
                    pos += 1;
                    break noun;
                }
                Some((col, Token::Verb(v))) => {
                    pending.push(Pending::Dyad(noun, *v, col));
                    pos += 2;
                }
                Some((col, token)) => {
                    return Err(error!(SyntaxError, ..col; &format!(
                        "expected a verb before '{}'",
                        token
                    )))
                }
            }
        };
        while let Some(step) = pending.pop() {
            value = match step {
                Pending::Monad(v, col) => {
                    trace!("monadic {} on {:?}", v, value.shape());
                    let f = verb::monad(v).map_err(|e| e.in_column(col))?;
                    f(value).map_err(|e| e.in_column(col))?
                }
                Pending::Dyad(a, v, col) => {
                    trace!("dyadic {} on {:?} and {:?}", v, a.shape(), value.shape());
                    let f = verb::dyad(v).map_err(|e| e.in_column(col))?;
                    f(a, value).map_err(|e| e.in_column(col))?
                }
                Pending::Assign(name) => {
                    debug!("{} = {:?}", name, value.shape());
                    self.vars.store(name, value.clone())?;
                    value
                }
            };
        }
        Ok((value, pos))
    }
}

/// Work left of the current position, applied once the value to
/// its right is known.
enum Pending<'a> {
    Monad(Verb, &'a Column),
    Dyad(ArrayRef, Verb, &'a Column),
    Assign(char),
}

fn missing_operand(tokens: &[(Column, Token)]) -> Error {
    match tokens.last() {
        Some((col, _)) => error!(SyntaxError, ..&(col.end..col.end + 1); "missing operand"),
        None => error!(SyntaxError; "missing operand"),
    }
}
