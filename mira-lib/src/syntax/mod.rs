pub mod error;
pub mod lexer;
pub mod parser;
pub mod reader;
pub mod rules;
pub mod token;
pub mod tree;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use lexer::{next_token, tokenize, LexMode};
pub use parser::{parse, parse_tokens};
pub use token::{Token, TokenType};
pub use tree::{NodeKind, ParseTree, Span, SyntaxNode, MAX_SERIALIZE_DEPTH};
