use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    LineComment,
    BlockComment,
    Number,
    Integer,
    Identifier,
    Plus,
}

impl TokenType {
    /// Tokens that can close an operand. A `+` read right after one of
    /// these is the addition operator, never a sign.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenType::Number | TokenType::Integer | TokenType::Identifier
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenType::LineComment | TokenType::BlockComment)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::LineComment => write!(f, "LineComment"),
            TokenType::BlockComment => write!(f, "BlockComment"),
            TokenType::Number => write!(f, "Number"),
            TokenType::Integer => write!(f, "Integer"),
            TokenType::Identifier => write!(f, "Identifier"),
            TokenType::Plus => write!(f, "Plus"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub span: std::ops::Range<usize>,
}

impl Token {
    /// Short human description used in parse errors.
    pub fn describe(&self) -> String {
        match self.token_type {
            TokenType::Plus => "'+'".to_string(),
            TokenType::LineComment => "comment".to_string(),
            TokenType::BlockComment => "block comment".to_string(),
            TokenType::Number => format!("number literal '{}'", self.value),
            TokenType::Integer => format!("integer literal '{}'", self.value),
            TokenType::Identifier => format!("identifier '{}'", self.value),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}..{} {:?}",
            self.token_type, self.span.start, self.span.end, self.value
        )
    }
}
