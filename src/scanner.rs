//! Tokenizer for path data.
//!
//! Separators follow the SVG path grammar: whitespace is insignificant, and a
//! single comma may separate two consecutive arguments. A comma is never
//! allowed directly after a command letter, and two commas in a row are an
//! error. Where sign or decimal point boundaries make the split unambiguous
//! (`10-20`, `1.5.5`) no separator is needed at all.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
};

use crate::error::ParseError;

fn is_wsp(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn starts_number(c: char) -> bool {
    matches!(c, '+' | '-' | '.' | '0'..='9')
}

///Recognizes `sign? (digits ('.' digits?)? | '.' digits) exponent?`
fn number_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
	opt(one_of("+-")),
	alt((
	    recognize(pair(digit1, opt(pair(char('.'), digit0)))),
	    recognize(pair(char('.'), digit1)),
	)),
	opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Cursor over a path data string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    after_command: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
	Scanner {
	    input,
	    pos: 0,
	    after_command: false,
	}
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
	self.pos
    }

    fn rest(&self) -> &'a str {
	&self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
	self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
	let rest = self.rest();
	self.pos += rest.len() - rest.trim_start_matches(is_wsp).len();
    }

    ///Skips whitespace and, unless a command letter was just read, one comma
    fn skip_separator(&mut self) {
	self.skip_whitespace();

	if !self.after_command && self.peek() == Some(',') {
	    self.pos += 1;
	    self.skip_whitespace();
	}
    }

    /// True when only whitespace remains.
    pub fn is_exhausted(&self) -> bool {
	self.rest().trim_start_matches(is_wsp).is_empty()
    }

    /// True when the next token, after any allowed separator, starts a number.
    ///
    /// Used to decide whether a repeated argument list continues.
    pub fn next_is_numeric_token(&self) -> bool {
	let mut rest = self.rest().trim_start_matches(is_wsp);

	if !self.after_command && rest.starts_with(',') {
	    rest = rest[1..].trim_start_matches(is_wsp);
	}

	rest.chars().next().map_or(false, starts_number)
    }

    /// Reads the character in command position together with its offset.
    ///
    /// Returns `None` once only whitespace remains. The character is consumed
    /// whether or not it names a command.
    pub fn read_command(&mut self) -> Option<(char, usize)> {
	self.skip_whitespace();

	let position = self.pos;
	let letter = self.peek()?;
	self.pos += letter.len_utf8();
	self.after_command = true;

	Some((letter, position))
    }

    pub fn read_number(&mut self) -> Result<f64, ParseError> {
	self.skip_separator();

	let position = self.pos;
	if self.rest().is_empty() {
	    return Err(ParseError::UnexpectedEndOfInput { position });
	}

	let malformed = ParseError::MalformedNumber { position };
	let (_, literal) = number_literal(self.rest()).map_err(|_| malformed.clone())?;
	let value: f64 = literal.parse().map_err(|_| malformed.clone())?;

	if !value.is_finite() {
	    return Err(malformed);
	}

	self.pos += literal.len();
	self.after_command = false;

	Ok(value)
    }

    pub fn read_flag(&mut self) -> Result<bool, ParseError> {
	self.skip_separator();

	let position = self.pos;
	let flag = match self.peek() {
	    None => return Err(ParseError::UnexpectedEndOfInput { position }),
	    Some('0') => false,
	    Some('1') => true,
	    Some(_) => return Err(ParseError::MalformedFlag { position }),
	};

	self.pos += 1;
	self.after_command = false;

	Ok(flag)
    }
}
