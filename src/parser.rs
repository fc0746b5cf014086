//! Parser for the shape-descriptor format.
//!
//! ```text
//! # a record type's surface, as declared by its producer
//! shape User {
//!     new(login: String, emailAddress: String)
//!     get login: String
//!     get emailAddress: String
//!     set login=: String
//! }
//! ```
//!
//! Setter names may carry a trailing `=` assignment marker; types may be
//! generic (`List<String>`, `Map<String, i32>`).

use crate::lexer::{LexError, Lexer, Token};
use crate::shape::{ObjectShape, Property};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Unexpected token: {0:?}, expected {1}")]
    Unexpected(Token, &'static str),
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> &Token {
        let tok = self.tokens.get(self.pos).unwrap_or(&Token::Eof);
        self.pos += 1;
        tok
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.advance().clone() {
            Token::Ident(s) => Ok(s),
            tok => Err(ParseError::Unexpected(tok, "identifier")),
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        let tok = self.advance().clone();
        if tok == expected {
            Ok(())
        } else {
            Err(ParseError::Unexpected(tok, "specific token"))
        }
    }

    fn check_ident(&self, name: &str) -> bool {
        matches!(self.peek(), Token::Ident(s) if s == name)
    }

    pub fn parse(&mut self) -> Result<ObjectShape, ParseError> {
        if !self.check_ident("shape") {
            return Err(ParseError::Unexpected(self.peek().clone(), "shape"));
        }
        self.advance();

        let mut shape = ObjectShape::new(&self.expect_ident()?);
        self.expect(Token::LBrace)?;

        while *self.peek() != Token::RBrace {
            if self.check_ident("new") {
                self.advance();
                shape.params = self.parse_params()?;
            } else if self.check_ident("get") {
                self.advance();
                shape.getters.push(self.parse_accessor()?);
            } else if self.check_ident("set") {
                self.advance();
                shape.setters.push(self.parse_accessor()?);
            } else {
                return Err(ParseError::Unexpected(
                    self.peek().clone(),
                    "new, get, or set",
                ));
            }
        }

        self.expect(Token::RBrace)?;
        Ok(shape)
    }

    /// `(name: Type, name: Type, ...)` - possibly empty.
    fn parse_params(&mut self) -> Result<Vec<Property>, ParseError> {
        self.expect(Token::LParen)?;
        let mut params = Vec::new();

        while *self.peek() != Token::RParen {
            if !params.is_empty() {
                self.expect(Token::Comma)?;
            }
            let name = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let typ = self.parse_type()?;
            params.push(Property { name, typ });
        }

        self.expect(Token::RParen)?;
        Ok(params)
    }

    /// `name: Type` with an optional `=` assignment marker after the name.
    fn parse_accessor(&mut self) -> Result<Property, ParseError> {
        let mut name = self.expect_ident()?;
        if *self.peek() == Token::Eq {
            self.advance();
            name.push('=');
        }
        self.expect(Token::Colon)?;
        let typ = self.parse_type()?;
        Ok(Property { name, typ })
    }

    /// `Ident` or `Ident<type, ...>`, rendered back to its canonical string
    /// form (`Map<String, i32>`) for the type oracle.
    fn parse_type(&mut self) -> Result<String, ParseError> {
        let mut typ = self.expect_ident()?;

        if *self.peek() == Token::Lt {
            self.advance();
            typ.push('<');
            typ.push_str(&self.parse_type()?);
            while *self.peek() == Token::Comma {
                self.advance();
                typ.push_str(", ");
                typ.push_str(&self.parse_type()?);
            }
            self.expect(Token::Gt)?;
            typ.push('>');
        }

        Ok(typ)
    }
}
