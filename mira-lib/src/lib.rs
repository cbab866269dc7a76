//! Lexer and parser for the mira expression language.
//!
//! ```text
//! source → tokenize → Vec<Token> → parse_tokens → ParseTree
//! ```
//!
//! [`parse`] runs both stages and returns the first lexical or syntactic
//! error it meets. Parsing is a pure function of its input; the rule table
//! is compiled once and shared read-only, so independent inputs may be
//! parsed from several threads at once.
//!
//! Trees are walked, compared and dropped without recursion, so a long
//! `a + b + ...` chain is as safe as a short one. Only the serde form is
//! bounded, by [`MAX_SERIALIZE_DEPTH`].

pub mod syntax;

pub use syntax::{
    next_token, parse, parse_tokens, tokenize, LexMode, NodeKind, ParseTree, Span, SyntaxError,
    SyntaxErrorKind, SyntaxNode, Token, TokenType, MAX_SERIALIZE_DEPTH,
};
