//! Pratt parser for mira.
//!
//! ```text
//! module            := (comment | block_comment | expr)*
//! expr              := binary_expression | atom
//! atom              := number_literal | integer_literal | identifier
//! binary_expression := expr '+' expr
//! ```
//!
//! The module loop sits at a module item; an expression item parses one
//! atom and then keeps folding `+ atom` onto the left operand while a `+`
//! follows. Comments end an expression and become module items of their
//! own. Adding an operator only means adding a row to
//! [`infix_binding_power`].

use super::{
    error::SyntaxError,
    lexer::tokenize,
    reader::TokenReader,
    token::{Token, TokenType},
    tree::{ParseTree, SyntaxNode},
};

/// Binding power of an infix operator as `(left, right)`.
///
/// Left-associative operators use `right = left + 1`.
pub fn infix_binding_power(token_type: TokenType) -> Option<(u8, u8)> {
    match token_type {
        TokenType::Plus => Some((1, 2)),
        _ => None,
    }
}

/// Parses `source` into a module tree, stopping at the first error.
pub fn parse(source: &str) -> Result<ParseTree, SyntaxError> {
    let tokens = tokenize(source)?;
    parse_tokens(tokens, source)
}

/// Builds the tree from an already lexed token stream of `source`.
pub fn parse_tokens(tokens: Vec<Token>, source: &str) -> Result<ParseTree, SyntaxError> {
    let mut r = TokenReader::new(tokens, source);
    let mut items = Vec::new();

    while let Some(tok) = r.cur() {
        if tok.token_type.is_comment() {
            if let Some(node) = SyntaxNode::leaf(tok) {
                items.push(node);
            }
            r.advance();
            continue;
        }
        items.push(parse_expression(&mut r, 0)?);
    }

    Ok(ParseTree::new(items, source.len()))
}

fn parse_expression(r: &mut TokenReader, min_bp: u8) -> Result<SyntaxNode, SyntaxError> {
    let mut lhs = parse_atom(r)?;

    loop {
        let Some(op) = r.cur() else {
            break;
        };
        let Some((left_bp, right_bp)) = infix_binding_power(op.token_type) else {
            break;
        };
        if left_bp < min_bp {
            break;
        }
        let operator = op.span.clone();
        r.advance();
        let rhs = parse_expression(r, right_bp)?;
        lhs = SyntaxNode::binary(lhs, operator, rhs);
    }

    Ok(lhs)
}

fn parse_atom(r: &mut TokenReader) -> Result<SyntaxNode, SyntaxError> {
    let node = match r.cur() {
        Some(t)
            if matches!(
                t.token_type,
                TokenType::Number | TokenType::Integer | TokenType::Identifier
            ) =>
        {
            SyntaxNode::leaf(t)
        }
        _ => None,
    };
    match node {
        Some(node) => {
            r.advance();
            Ok(node)
        }
        None => Err(r.expected_expression()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::error::SyntaxErrorKind;
    use crate::syntax::tree::NodeKind;

    /// Compact s-expression used to compare tree shapes.
    fn shape(node: &SyntaxNode) -> String {
        match node {
            SyntaxNode::Module { children, .. } => {
                let inner: Vec<String> = children.iter().map(shape).collect();
                format!("(module {})", inner.join(" "))
            }
            SyntaxNode::BinaryExpression { left, right, .. } => {
                format!("(+ {} {})", shape(left), shape(right))
            }
            leaf => leaf.text().unwrap_or_default().to_string(),
        }
    }

    fn parse_shape(source: &str) -> String {
        shape(parse(source).unwrap().module())
    }

    #[test]
    fn test_single_addition() {
        assert_eq!(parse_shape("1+2"), "(module (+ 1 2))");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(parse_shape("1+2+3"), "(module (+ (+ 1 2) 3))");
        assert_eq!(parse_shape("a + b + c + d"), "(module (+ (+ (+ a b) c) d))");
    }

    #[test]
    fn test_items_without_operator_stay_separate() {
        assert_eq!(parse_shape("1 2\nx"), "(module 1 2 x)");
        assert_eq!(parse_shape("1 -2"), "(module 1 -2)");
    }

    #[test]
    fn test_signed_operands() {
        assert_eq!(parse_shape("1+-2"), "(module (+ 1 -2))");
        assert_eq!(parse_shape("+1 + +2"), "(module (+ +1 +2))");
    }

    #[test]
    fn test_comment_ends_expression() {
        let tree = parse("1 # one\n+2").unwrap();
        let kinds: Vec<NodeKind> = tree.items().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::IntegerLiteral, NodeKind::Comment, NodeKind::IntegerLiteral]
        );
    }

    #[test]
    fn test_empty_module() {
        let tree = parse("").unwrap();
        assert!(tree.items().is_empty());
        assert_eq!(tree.module().span(), 0..0);

        let tree = parse("  \n\t").unwrap();
        assert!(tree.items().is_empty());
        assert_eq!(tree.module().span(), 0..4);
    }

    #[test]
    fn test_operator_span_kept() {
        let tree = parse("a  +  b").unwrap();
        match &tree.items()[0] {
            SyntaxNode::BinaryExpression { span, operator, .. } => {
                assert_eq!(*span, 0..7);
                assert_eq!(*operator, 3..4);
            }
            other => panic!("expected binary expression, got {other:?}"),
        }
    }

    #[test]
    fn test_leading_operator_is_parse_error() {
        let err = parse("+ 1").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::Parse);
        assert_eq!(err.message, "Expected expression, found '+'");
        assert_eq!(err.span, 0..1);
    }

    #[test]
    fn test_dangling_operator_is_parse_error() {
        let err = parse("1 +").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::Parse);
        assert_eq!(err.message, "Expected expression, found end of input");
        assert_eq!(err.span, 3..3);
    }

    #[test]
    fn test_comment_after_operator_is_parse_error() {
        let err = parse("1 + # why\n2").unwrap_err();
        assert_eq!(err.message, "Expected expression, found comment");
        assert_eq!((err.line, err.column), (1, 5));

        let err = parse("1 + ## why ## 2").unwrap_err();
        assert_eq!(err.message, "Expected expression, found block comment");
    }

    #[test]
    fn test_double_operator_is_parse_error() {
        let err = parse("1 + + 2").unwrap_err();
        assert_eq!(err.message, "Expected expression, found '+'");
        assert_eq!(err.span, 4..5);
    }

    #[test]
    fn test_lex_error_propagates() {
        let err = parse("1 + ?").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::Lex);
    }

    #[test]
    fn test_binding_power_table() {
        assert_eq!(infix_binding_power(TokenType::Plus), Some((1, 2)));
        assert_eq!(infix_binding_power(TokenType::Integer), None);
        assert_eq!(infix_binding_power(TokenType::LineComment), None);
    }
}
