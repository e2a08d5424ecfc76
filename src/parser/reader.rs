use super::ast::Form;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// LL(1) recursive descent reader over the token sequence
///
/// One token of lookahead decides every production: a word token is a word
/// form, `'` reads exactly one following form, `(` reads forms until the
/// matching `)`. Tokens are consumed strictly in source order through a
/// front cursor.
pub struct Reader {
    tokens: Vec<Token>,
    current: usize,
}

impl Reader {
    /// Creates a new reader over a token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Reader { tokens, current: 0 }
    }

    /// Reads all top-level forms until the tokens are exhausted.
    ///
    /// The parse is atomic: any syntax error fails the whole input and no
    /// partial tree is returned.
    pub fn parse(&mut self) -> Result<Vec<Form>> {
        let mut forms = Vec::new();

        while !self.is_at_end() {
            forms.push(self.read_form()?);
        }

        Ok(forms)
    }

    /// Reads exactly one form, selected by the next token.
    ///
    /// Callers must ensure at least one token remains; the "no more input"
    /// case belongs to [`Reader::parse`] and to the quote/list productions,
    /// which each give it a different meaning.
    fn read_form(&mut self) -> Result<Form> {
        match self.peek().kind() {
            TokenKind::Word => {
                let token = self.advance();
                Ok(Form::Word(token.into_text()))
            }
            TokenKind::Quote => {
                self.advance();
                self.read_quoted()
            }
            TokenKind::OpenParen => {
                self.advance();
                self.read_list_body()
            }
            TokenKind::CloseParen => Err(Error::UnexpectedClose),
        }
    }

    /// Reads the single form following a consumed `'`
    fn read_quoted(&mut self) -> Result<Form> {
        if self.is_at_end() {
            return Err(Error::ExpectedQuotedForm);
        }
        let inner = self.read_form()?;
        Ok(Form::Quote(Box::new(inner)))
    }

    /// Reads list items following a consumed `(`, through the matching `)`
    fn read_list_body(&mut self) -> Result<Form> {
        let mut items = Vec::new();

        loop {
            if self.is_at_end() {
                return Err(Error::UnterminatedList);
            }
            if self.peek().kind() == TokenKind::CloseParen {
                self.advance();
                return Ok(Form::List(items));
            }
            items.push(self.read_form()?);
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }
}
