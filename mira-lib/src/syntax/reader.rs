use super::{
    error::{SyntaxError, SyntaxErrorKind},
    token::Token,
};

#[derive(Clone)]
pub struct TokenReader<'src> {
    pub tokens: Vec<Token>,
    pub idx: usize,
    pub source: &'src str,
}

impl<'src> TokenReader<'src> {
    pub fn new(tokens: Vec<Token>, source: &'src str) -> Self {
        Self {
            tokens,
            idx: 0,
            source,
        }
    }

    pub fn cur(&self) -> Option<&Token> {
        self.tokens.get(self.idx)
    }

    pub fn advance(&mut self) {
        if self.idx < self.tokens.len() {
            self.idx += 1;
        }
    }

    pub fn create_error(&self, message: String, span: std::ops::Range<usize>) -> SyntaxError {
        SyntaxError::at(SyntaxErrorKind::Parse, message, self.source, span)
    }

    /// Error for a missing expression at the current token or at end of input.
    pub fn expected_expression(&self) -> SyntaxError {
        match self.cur() {
            Some(t) => self.create_error(
                format!("Expected expression, found {}", t.describe()),
                t.span.clone(),
            ),
            None => {
                let end = self.source.len();
                self.create_error("Expected expression, found end of input".into(), end..end)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::tokenize;
    use crate::syntax::token::TokenType;

    #[test]
    fn test_cursor_moves_forward() {
        let source = "a + b";
        let mut r = TokenReader::new(tokenize(source).unwrap(), source);
        assert_eq!(r.cur().map(|t| t.token_type), Some(TokenType::Identifier));
        r.advance();
        assert_eq!(r.cur().map(|t| t.token_type), Some(TokenType::Plus));
        r.advance();
        r.advance();
        assert!(r.cur().is_none());
        r.advance();
        assert_eq!(r.idx, 3);
        assert!(r.cur().is_none());
    }

    #[test]
    fn test_expected_expression_at_eof() {
        let source = "1 +\n";
        let mut r = TokenReader::new(tokenize(source).unwrap(), source);
        r.advance();
        r.advance();
        let err = r.expected_expression();
        assert_eq!(err.kind, SyntaxErrorKind::Parse);
        assert_eq!(err.message, "Expected expression, found end of input");
        assert_eq!(err.span, 4..4);
        assert_eq!((err.line, err.column), (2, 1));
    }

    #[test]
    fn test_expected_expression_at_token() {
        let source = "+ 1";
        let r = TokenReader::new(tokenize(source).unwrap(), source);
        let err = r.expected_expression();
        assert_eq!(err.message, "Expected expression, found '+'");
        assert_eq!(err.span, 0..1);
    }
}
