//! Micro-expression tokenizer and parser
//!
//! Parses expressions like:
//! - `3 > 2`
//! - `"abc" == "abc"`
//! - `3 > 2 && 3 < 4 || false`

use super::ast::{CompareOp, Connector, Expression, Literal, Term};
use crate::kit::error::{ParseError, ParseErrorKind};
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(Literal),
    Compare(CompareOp),
    Connector(Connector),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(l) => write!(f, "{}", l),
            Token::Compare(op) => write!(f, "{}", op),
            Token::Connector(c) => write!(f, "{}", c),
        }
    }
}

/// Parse an expression string into an AST
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, input, None));
    }

    let mut cursor = Cursor {
        input,
        tokens,
        index: 0,
    };

    let first = cursor.term()?;
    let mut rest = Vec::new();
    while let Some((pos, token)) = cursor.next() {
        match token {
            Token::Connector(connector) => rest.push((connector, cursor.term()?)),
            other => return Err(cursor.error(ParseErrorKind::UnexpectedToken(other.to_string()), pos)),
        }
    }

    Ok(Expression {
        source: input.to_string(),
        first,
        rest,
    })
}

struct Cursor<'a> {
    input: &'a str,
    tokens: Vec<(usize, Token)>,
    index: usize,
}

impl Cursor<'_> {
    fn next(&mut self) -> Option<(usize, Token)> {
        let item = self.tokens.get(self.index).cloned();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, t)| t)
    }

    fn error(&self, kind: ParseErrorKind, pos: usize) -> ParseError {
        ParseError::new(kind, self.input, Some(pos))
    }

    fn operand(&mut self) -> Result<Literal, ParseError> {
        match self.next() {
            Some((_, Token::Literal(literal))) => Ok(literal),
            Some((pos, _)) => Err(self.error(ParseErrorKind::ExpectedOperand, pos)),
            None => Err(self.error(ParseErrorKind::ExpectedOperand, self.input.len())),
        }
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        let left = self.operand()?;
        if let Some(Token::Compare(op)) = self.peek() {
            let op = *op;
            self.index += 1;
            let right = self.operand()?;
            return Ok(Term::Compare { left, op, right });
        }
        Ok(Term::Bare(left))
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    let err = |kind, pos| ParseError::new(kind, input, Some(pos));

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let token = match c {
            '"' | '\'' => Token::Literal(Literal::String(read_string(&mut chars, input)?)),
            '0'..='9' | '.' => Token::Literal(read_number(&mut chars, input)?),
            '-' => {
                let signed_number = input[pos + 1..]
                    .chars()
                    .next()
                    .is_some_and(|n| n.is_ascii_digit() || n == '.');
                if !signed_number {
                    return Err(err(ParseErrorKind::UnexpectedChar('-'), pos));
                }
                Token::Literal(read_number(&mut chars, input)?)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut word = String::new();
                while let Some(&(_, w)) = chars.peek() {
                    if !(w.is_alphanumeric() || w == '_') {
                        break;
                    }
                    word.push(w);
                    chars.next();
                }
                match word.as_str() {
                    "true" => Token::Literal(Literal::Boolean(true)),
                    "false" => Token::Literal(Literal::Boolean(false)),
                    _ => return Err(err(ParseErrorKind::UnknownWord(word), pos)),
                }
            }
            _ => {
                chars.next();
                let next = chars.peek().map(|&(_, n)| n);
                let (token, pair) = match (c, next) {
                    ('=', Some('=')) => (Token::Compare(CompareOp::Eq), true),
                    ('!', Some('=')) => (Token::Compare(CompareOp::NotEq), true),
                    ('>', Some('=')) => (Token::Compare(CompareOp::Gte), true),
                    ('<', Some('=')) => (Token::Compare(CompareOp::Lte), true),
                    ('>', _) => (Token::Compare(CompareOp::Gt), false),
                    ('<', _) => (Token::Compare(CompareOp::Lt), false),
                    ('&', Some('&')) => (Token::Connector(Connector::And), true),
                    ('|', Some('|')) => (Token::Connector(Connector::Or), true),
                    _ => return Err(err(ParseErrorKind::UnexpectedChar(c), pos)),
                };
                if pair {
                    chars.next();
                }
                token
            }
        };
        tokens.push((pos, token));
    }

    Ok(tokens)
}

fn read_string(chars: &mut Peekable<CharIndices<'_>>, input: &str) -> Result<String, ParseError> {
    let (start, quote) = match chars.next() {
        Some(item) => item,
        None => return Err(ParseError::new(ParseErrorKind::UnterminatedString, input, None)),
    };

    let mut value = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            c if c == quote => return Ok(value),
            c => value.push(c),
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnterminatedString,
        input,
        Some(start),
    ))
}

/// Integers stay exact; a fraction, or a magnitude beyond `i64`, makes a float
fn read_number(chars: &mut Peekable<CharIndices<'_>>, input: &str) -> Result<Literal, ParseError> {
    let mut text = String::new();
    let mut start = None;
    while let Some(&(pos, c)) = chars.peek() {
        let sign = c == '-' && text.is_empty();
        if !(c.is_ascii_digit() || c == '.' || sign) {
            break;
        }
        start.get_or_insert(pos);
        text.push(c);
        chars.next();
    }

    if let Ok(i) = text.parse::<i64>() {
        return Ok(Literal::Int(i));
    }
    text.parse::<f64>().map(Literal::Number).map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidNumber(text.clone()), input, start)
    })
}
