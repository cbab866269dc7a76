use super::token::TokenType;
use lazy_static::lazy_static;
use regex::Regex;

/// One lexical rule. Patterns are anchored at the current position.
pub struct LexRule {
    pub token_type: TokenType,
    /// Tiebreak between matches of equal length; higher wins.
    pub rank: u8,
    pub pattern: Regex,
}

lazy_static! {
    pub static ref LEX_RULES: Vec<LexRule> = vec![
        LexRule {
            token_type: TokenType::BlockComment,
            rank: 2,
            pattern: Regex::new(r"^##(?s:.*?)##").unwrap(),
        },
        LexRule {
            token_type: TokenType::LineComment,
            rank: 0,
            pattern: Regex::new(r"^#[^#\r\n][^\r\n]*").unwrap(),
        },
        LexRule {
            token_type: TokenType::Number,
            rank: 2,
            pattern: Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]*|[eE][+-]?[0-9]+)").unwrap(),
        },
        LexRule {
            token_type: TokenType::Integer,
            rank: 1,
            pattern: Regex::new(r"^[+-]?[0-9]+").unwrap(),
        },
        LexRule {
            token_type: TokenType::Identifier,
            rank: 0,
            pattern: Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*").unwrap(),
        },
        LexRule {
            token_type: TokenType::Plus,
            rank: 0,
            pattern: Regex::new(r"^\+").unwrap(),
        },
    ];
    pub static ref WHITESPACE: Regex = Regex::new(r"^[ \t\r\n]+").unwrap();
    pub static ref UNCLOSED_BLOCK_COMMENT: Regex = Regex::new(r"^##").unwrap();
}
