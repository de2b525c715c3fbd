use crate::{
    ast::{Expr, Function},
    error::FormatError,
    lexer::{Token, TokenKind},
};

pub struct Parser<'a, 't> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'a, 't> Parser<'a, 't> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse_function(&mut self) -> Result<Function<'a>, FormatError> {
        self.expect_keyword("function")?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        self.expect_keyword("return")?;
        let body = self.parse_expr()?;
        self.eat(TokenKind::SemiColon);
        self.expect(TokenKind::RBrace)?;

        match self.peek() {
            Some(token) => Err(unexpected(token)),
            None => Ok(Function { name, body }),
        }
    }

    pub fn parse_expr(&mut self) -> Result<Expr<'a>, FormatError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.eat(TokenKind::Dot) {
                let name = self.expect_ident()?;
                expr = Expr::Member(Box::new(expr), name);
            } else if self.eat(TokenKind::LParen) {
                let args = self.parse_args()?;
                expr = Expr::Call(Box::new(expr), args);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr<'a>, FormatError> {
        let token = self.next().ok_or(FormatError::UnexpectedEOFDetected)?;

        match token.kind {
            TokenKind::Ident(ident) => Ok(Expr::Ident(ident)),
            TokenKind::StringLiteral(literal) => Ok(Expr::Literal(literal)),
            TokenKind::LBrace => self.parse_object(),
            _ => Err(unexpected(token)),
        }
    }

    fn parse_args(&mut self) -> Result<Vec<Expr<'a>>, FormatError> {
        let mut args = Vec::new();

        loop {
            if self.eat(TokenKind::RParen) {
                return Ok(args);
            }

            args.push(self.parse_expr()?);

            if !self.eat(TokenKind::Comma) {
                self.expect(TokenKind::RParen)?;
                return Ok(args);
            }
        }
    }

    fn parse_object(&mut self) -> Result<Expr<'a>, FormatError> {
        let mut entries = Vec::new();

        loop {
            if self.eat(TokenKind::RBrace) {
                return Ok(Expr::Object(entries));
            }

            let token = self.next().ok_or(FormatError::UnexpectedEOFDetected)?;
            let key = match token.kind {
                TokenKind::StringLiteral(key) | TokenKind::Ident(key) => key,
                _ => return Err(unexpected(token)),
            };
            self.expect(TokenKind::Colon)?;
            entries.push((key, self.parse_expr()?));

            if !self.eat(TokenKind::Comma) {
                self.expect(TokenKind::RBrace)?;
                return Ok(Expr::Object(entries));
            }
        }
    }

    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'t Token<'a>> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind<'_>) -> bool {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, kind: TokenKind<'_>) -> Result<(), FormatError> {
        let token = self.next().ok_or(FormatError::UnexpectedEOFDetected)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(token))
        }
    }

    fn expect_ident(&mut self) -> Result<&'a str, FormatError> {
        let token = self.next().ok_or(FormatError::UnexpectedEOFDetected)?;
        match token.kind {
            TokenKind::Ident(ident) => Ok(ident),
            _ => Err(unexpected(token)),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), FormatError> {
        let token = self.next().ok_or(FormatError::UnexpectedEOFDetected)?;
        match token.kind {
            TokenKind::Ident(ident) if ident == keyword => Ok(()),
            _ => Err(unexpected(token)),
        }
    }
}

#[cold]
fn unexpected(token: &Token<'_>) -> FormatError {
    FormatError::UnexpectedToken {
        token: token.kind.to_string(),
        offset: token.offset,
    }
}
