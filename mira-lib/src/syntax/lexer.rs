//! Lexer for mira source text.
//!
//! Every rule in [`LEX_RULES`] is tried at the current position. The
//! longest match wins and equal lengths go to the higher rank, which is how
//! a number literal beats an integer literal over the same digit run.

use super::{
    error::{SyntaxError, SyntaxErrorKind},
    rules::{LexRule, LEX_RULES, UNCLOSED_BLOCK_COMMENT, WHITESPACE},
    token::{Token, TokenType},
};

/// Whether the lexer sits where an operand or an operator is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Start of input, or after `+` or a comment. A leading `+` may sign
    /// a numeric literal.
    #[default]
    ExpectOperand,
    /// Right after a literal or identifier. A `+` here is always the
    /// operator.
    AfterOperand,
}

impl LexMode {
    pub fn after(token_type: TokenType) -> LexMode {
        if token_type.ends_operand() {
            LexMode::AfterOperand
        } else {
            LexMode::ExpectOperand
        }
    }

    fn admits(&self, token_type: TokenType, text: &str) -> bool {
        match self {
            LexMode::ExpectOperand => true,
            LexMode::AfterOperand => {
                !(matches!(token_type, TokenType::Number | TokenType::Integer)
                    && text.starts_with('+'))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    token_type: TokenType,
    rank: u8,
    len: usize,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        self.len > other.len || (self.len == other.len && self.rank > other.rank)
    }
}

fn best_candidate<'a, I>(rules: I, remaining: &str, mode: LexMode) -> Option<Candidate>
where
    I: IntoIterator<Item = &'a LexRule>,
{
    let mut best: Option<Candidate> = None;
    for rule in rules {
        let Some(mat) = rule.pattern.find(remaining) else {
            continue;
        };
        if mat.start() != 0 || mat.end() == 0 || !mode.admits(rule.token_type, mat.as_str()) {
            continue;
        }
        let candidate = Candidate {
            token_type: rule.token_type,
            rank: rule.rank,
            len: mat.end(),
        };
        if best.map_or(true, |b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }
    best
}

/// Scans the next token at or after `position`, skipping whitespace.
///
/// Returns `Ok(None)` once only whitespace remains. The second element of
/// the pair is the position just past the token.
pub fn next_token(
    source: &str,
    position: usize,
    mode: LexMode,
) -> Result<Option<(Token, usize)>, SyntaxError> {
    let mut position = position.min(source.len());
    if !source.is_char_boundary(position) {
        return Err(SyntaxError::at(
            SyntaxErrorKind::Lex,
            "Position is not on a character boundary".into(),
            source,
            position..position,
        ));
    }
    if let Some(ws) = WHITESPACE.find(&source[position..]) {
        position += ws.end();
    }
    let remaining = &source[position..];
    if remaining.is_empty() {
        return Ok(None);
    }

    match best_candidate(LEX_RULES.iter(), remaining, mode) {
        Some(candidate) => {
            let end = position + candidate.len;
            let token = Token {
                token_type: candidate.token_type,
                value: source[position..end].to_string(),
                span: position..end,
            };
            Ok(Some((token, end)))
        }
        None => Err(unmatched(source, position)),
    }
}

fn unmatched(source: &str, position: usize) -> SyntaxError {
    let remaining = &source[position..];
    if UNCLOSED_BLOCK_COMMENT.is_match(remaining) {
        return SyntaxError::at(
            SyntaxErrorKind::Lex,
            "Unterminated block comment".into(),
            source,
            position..source.len(),
        );
    }
    let ch = remaining.chars().next().unwrap_or_default();
    SyntaxError::at(
        SyntaxErrorKind::Lex,
        format!("Unexpected character '{ch}'"),
        source,
        position..position + ch.len_utf8(),
    )
}

/// Tokenizes the whole input, failing on the first unmatched character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut position = 0;
    let mut mode = LexMode::default();
    while let Some((token, next)) = next_token(input, position, mode)? {
        mode = LexMode::after(token.token_type);
        position = next;
        tokens.push(token);
    }
    Ok(tokens)
}
