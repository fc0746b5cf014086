use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),

    LBrace, // {
    RBrace, // }
    LParen, // (
    RParen, // )
    Comma,  // ,
    Colon,  // :
    Eq,     // =
    Lt,     // <
    Gt,     // >

    Eof,
}

#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(c) if c.is_whitespace() => {
                    self.chars.next();
                }
                Some('#') => {
                    while let Some(&c) = self.chars.peek() {
                        self.chars.next();
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn read_ident(&mut self, first: char) -> String {
        let mut s = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                s.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        s
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let c = match self.chars.next() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let tok = match c {
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            ':' => Token::Colon,
            '=' => Token::Eq,
            '<' => Token::Lt,
            '>' => Token::Gt,
            // `$` starts an identifier too: synthetic member names keep their
            // marker so synthesis can recognize and drop them.
            c if c.is_alphabetic() || c == '_' || c == '$' => Token::Ident(self.read_ident(c)),
            _ => return Err(LexError::UnexpectedChar(c)),
        };

        Ok(tok)
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            if tok == Token::Eof {
                tokens.push(tok);
                break;
            }
            tokens.push(tok);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens = Lexer::new("shape User { }").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("shape".into()),
                Token::Ident("User".into()),
                Token::LBrace,
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_accessor_tokens() {
        let tokens = Lexer::new("set login=: String").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("set".into()),
                Token::Ident("login".into()),
                Token::Eq,
                Token::Colon,
                Token::Ident("String".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_generic_type_tokens() {
        let tokens = Lexer::new("Map<String, i32>").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("Map".into()),
                Token::Lt,
                Token::Ident("String".into()),
                Token::Comma,
                Token::Ident("i32".into()),
                Token::Gt,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_synthetic_marker_in_ident() {
        let tokens = Lexer::new("outer$inner").tokenize().unwrap();
        assert_eq!(tokens[0], Token::Ident("outer$inner".into()));
    }

    #[test]
    fn test_comments() {
        let input = "# comment\nshape User { # inline\n}";
        let tokens = Lexer::new(input).tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("shape".into()),
                Token::Ident("User".into()),
                Token::LBrace,
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unicode_ident() {
        let tokens = Lexer::new("shape 利用者 { }").tokenize().unwrap();
        assert_eq!(tokens[1], Token::Ident("利用者".into()));
    }
}
