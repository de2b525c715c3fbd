use std::fmt::{self, Display, Formatter};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, take_while},
    character::complete::{anychar, char, satisfy},
    combinator::{map, recognize, value},
    multi::many0,
    sequence::{delimited, pair},
};

use crate::error::FormatError;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind<'a> {
    Colon,
    Comma,
    Dot,
    Ident(&'a str),
    LBrace,
    LParen,
    RBrace,
    RParen,
    SemiColon,
    /// The literal including its quotes and escape sequences.
    StringLiteral(&'a str),
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Ident(ident) => write!(f, "{}", ident),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::SemiColon => write!(f, ";"),
            TokenKind::StringLiteral(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! define_token_parser {
    ($name:ident, $char:expr, $kind:expr) => {
        fn $name(input: &str) -> IResult<&str, TokenKind<'_>> {
            value($kind, char($char)).parse(input)
        }
    };
}

define_token_parser!(colon, ':', TokenKind::Colon);
define_token_parser!(comma, ',', TokenKind::Comma);
define_token_parser!(dot, '.', TokenKind::Dot);
define_token_parser!(l_brace, '{', TokenKind::LBrace);
define_token_parser!(l_paren, '(', TokenKind::LParen);
define_token_parser!(r_brace, '}', TokenKind::RBrace);
define_token_parser!(r_paren, ')', TokenKind::RParen);
define_token_parser!(semi_colon, ';', TokenKind::SemiColon);

fn punctuation(input: &str) -> IResult<&str, TokenKind<'_>> {
    alt((
        colon, comma, dot, l_brace, l_paren, r_brace, r_paren, semi_colon,
    ))
    .parse(input)
}

// Hyphens are accepted so that custom element names survive as constructor names.
fn ident(input: &str) -> IResult<&str, TokenKind<'_>> {
    map(
        recognize(pair(
            satisfy(|c| c.is_ascii_alphabetic() || c == '_' || c == '$'),
            take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-')),
        )),
        TokenKind::Ident,
    )
    .parse(input)
}

fn string_literal(input: &str) -> IResult<&str, TokenKind<'_>> {
    map(
        recognize(delimited(
            char('"'),
            many0(alt((is_not("\"\\"), recognize(pair(char('\\'), anychar))))),
            char('"'),
        )),
        TokenKind::StringLiteral,
    )
    .parse(input)
}

fn token(input: &str) -> IResult<&str, TokenKind<'_>> {
    alt((string_literal, ident, punctuation)).parse(input)
}

pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, FormatError> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    loop {
        let trimmed = remaining.trim_start();
        if trimmed.is_empty() {
            break;
        }

        let offset = input.len() - trimmed.len();
        match token(trimmed) {
            Ok((rest, kind)) => {
                tokens.push(Token { kind, offset });
                remaining = rest;
            }
            Err(_) => {
                return Err(FormatError::UnexpectedCharacter {
                    found: trimmed.chars().next().unwrap_or_default(),
                    offset,
                });
            }
        }
    }

    Ok(tokens)
}
