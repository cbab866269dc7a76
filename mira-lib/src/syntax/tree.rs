//! Concrete syntax tree produced by the parser.
//!
//! Nodes are built once per parse and never mutated. Comments are kept as
//! module items, so walking the leaves of a tree visits every token of the
//! source in order.

use super::token::Token;
use serde::ser::{Error as _, SerializeStruct, Serializer};
use serde::Serialize;
use std::{fmt, mem};

pub type Span = std::ops::Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Module,
    Comment,
    BlockComment,
    NumberLiteral,
    IntegerLiteral,
    Identifier,
    BinaryExpression,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Module => "Module",
            NodeKind::Comment => "Comment",
            NodeKind::BlockComment => "BlockComment",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::IntegerLiteral => "IntegerLiteral",
            NodeKind::Identifier => "Identifier",
            NodeKind::BinaryExpression => "BinaryExpression",
        };
        write!(f, "{name}")
    }
}

/// Deepest nesting the JSON form of a tree may reach. Serialization goes
/// through serde and recurses once per level, so deeper trees are refused
/// with a serializer error instead of exhausting the stack.
pub const MAX_SERIALIZE_DEPTH: usize = 512;

pub enum SyntaxNode {
    Module {
        span: Span,
        children: Vec<SyntaxNode>,
    },
    Comment {
        span: Span,
        text: String,
    },
    BlockComment {
        span: Span,
        text: String,
    },
    NumberLiteral {
        span: Span,
        text: String,
    },
    IntegerLiteral {
        span: Span,
        text: String,
    },
    Identifier {
        span: Span,
        text: String,
    },
    BinaryExpression {
        span: Span,
        left: Box<SyntaxNode>,
        operator: Span,
        right: Box<SyntaxNode>,
    },
}

/// One step of a pre-order walk: a node or the `+` between two operands,
/// with its depth below the walk's start.
#[derive(Clone, Copy)]
enum Step<'a> {
    Node(&'a SyntaxNode, usize),
    Operator(&'a Span, usize),
}

/// Source-order walk over a tree. Long `+` chains nest one level per
/// operator, so the walk keeps its own stack.
struct Walk<'a> {
    stack: Vec<Step<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Step<'a>> {
        let step = self.stack.pop()?;
        if let Step::Node(node, depth) = step {
            match node {
                SyntaxNode::Module { children, .. } => {
                    self.stack
                        .extend(children.iter().rev().map(|c| Step::Node(c, depth + 1)));
                }
                SyntaxNode::BinaryExpression {
                    left,
                    operator,
                    right,
                    ..
                } => {
                    self.stack.push(Step::Node(right.as_ref(), depth + 1));
                    self.stack.push(Step::Operator(operator, depth + 1));
                    self.stack.push(Step::Node(left.as_ref(), depth + 1));
                }
                _ => {}
            }
        }
        Some(step)
    }
}

impl SyntaxNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Module { .. } => NodeKind::Module,
            SyntaxNode::Comment { .. } => NodeKind::Comment,
            SyntaxNode::BlockComment { .. } => NodeKind::BlockComment,
            SyntaxNode::NumberLiteral { .. } => NodeKind::NumberLiteral,
            SyntaxNode::IntegerLiteral { .. } => NodeKind::IntegerLiteral,
            SyntaxNode::Identifier { .. } => NodeKind::Identifier,
            SyntaxNode::BinaryExpression { .. } => NodeKind::BinaryExpression,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxNode::Module { span, .. }
            | SyntaxNode::Comment { span, .. }
            | SyntaxNode::BlockComment { span, .. }
            | SyntaxNode::NumberLiteral { span, .. }
            | SyntaxNode::IntegerLiteral { span, .. }
            | SyntaxNode::Identifier { span, .. }
            | SyntaxNode::BinaryExpression { span, .. } => span.clone(),
        }
    }

    /// Matched source text of a leaf node; `None` for composite nodes.
    pub fn text(&self) -> Option<&str> {
        match self {
            SyntaxNode::Comment { text, .. }
            | SyntaxNode::BlockComment { text, .. }
            | SyntaxNode::NumberLiteral { text, .. }
            | SyntaxNode::IntegerLiteral { text, .. }
            | SyntaxNode::Identifier { text, .. } => Some(text),
            SyntaxNode::Module { .. } | SyntaxNode::BinaryExpression { .. } => None,
        }
    }

    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Module { children, .. } => children.iter().collect(),
            SyntaxNode::BinaryExpression { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Wraps a comment or atom token into its leaf node.
    pub fn leaf(token: &Token) -> Option<SyntaxNode> {
        use super::token::TokenType;

        let span = token.span.clone();
        let text = token.value.clone();
        match token.token_type {
            TokenType::LineComment => Some(SyntaxNode::Comment { span, text }),
            TokenType::BlockComment => Some(SyntaxNode::BlockComment { span, text }),
            TokenType::Number => Some(SyntaxNode::NumberLiteral { span, text }),
            TokenType::Integer => Some(SyntaxNode::IntegerLiteral { span, text }),
            TokenType::Identifier => Some(SyntaxNode::Identifier { span, text }),
            TokenType::Plus => None,
        }
    }

    pub fn binary(left: SyntaxNode, operator: Span, right: SyntaxNode) -> SyntaxNode {
        let span = left.span().start..right.span().end;
        SyntaxNode::BinaryExpression {
            span,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Step::Node(self, 0)],
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(Span, &'a str)>) {
        for step in self.walk() {
            match step {
                Step::Operator(operator, _) => out.push((operator.clone(), "+")),
                Step::Node(node, _) => {
                    if let Some(text) = node.text() {
                        out.push((node.span(), text));
                    }
                }
            }
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.walk() {
            match step {
                Step::Operator(operator, depth) => writeln!(
                    f,
                    "{}Plus {}..{} \"+\"",
                    "  ".repeat(depth),
                    operator.start,
                    operator.end
                )?,
                Step::Node(node, depth) => {
                    let pad = "  ".repeat(depth);
                    let span = node.span();
                    match node.text() {
                        Some(text) => writeln!(
                            f,
                            "{pad}{} {}..{} {:?}",
                            node.kind(),
                            span.start,
                            span.end,
                            text
                        )?,
                        None => writeln!(f, "{pad}{} {}..{}", node.kind(), span.start, span.end)?,
                    }
                }
            }
        }
        Ok(())
    }

    /// Moves the direct children of `self` onto `out`, leaving `self`
    /// childless.
    fn detach_children(&mut self, out: &mut Vec<SyntaxNode>) {
        match self {
            SyntaxNode::Module { children, .. } => out.append(children),
            SyntaxNode::BinaryExpression { left, right, .. } => {
                out.push(mem::replace(left.as_mut(), SyntaxNode::placeholder()));
                out.push(mem::replace(right.as_mut(), SyntaxNode::placeholder()));
            }
            _ => {}
        }
    }

    fn placeholder() -> SyntaxNode {
        SyntaxNode::Identifier {
            span: 0..0,
            text: String::new(),
        }
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.kind() != b.kind() || a.span() != b.span() || a.text() != b.text() {
                return false;
            }
            match (a, b) {
                (
                    SyntaxNode::Module { children: ac, .. },
                    SyntaxNode::Module { children: bc, .. },
                ) => {
                    if ac.len() != bc.len() {
                        return false;
                    }
                    pending.extend(ac.iter().zip(bc.iter()));
                }
                (
                    SyntaxNode::BinaryExpression {
                        left: al,
                        operator: ao,
                        right: ar,
                        ..
                    },
                    SyntaxNode::BinaryExpression {
                        left: bl,
                        operator: bo,
                        right: br,
                        ..
                    },
                ) => {
                    if ao != bo {
                        return false;
                    }
                    pending.push((al.as_ref(), bl.as_ref()));
                    pending.push((ar.as_ref(), br.as_ref()));
                }
                _ => {}
            }
        }
        true
    }
}

/// Serializes a node with a bound on how many more levels may follow.
struct Bounded<'a> {
    node: &'a SyntaxNode,
    levels: usize,
}

impl Serialize for Bounded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let levels = self.levels.checked_sub(1).ok_or_else(|| {
            S::Error::custom(format!(
                "syntax tree nests deeper than {MAX_SERIALIZE_DEPTH} levels"
            ))
        })?;
        let node = self.node;
        match node {
            SyntaxNode::Module { span, children } => {
                let children: Vec<Bounded<'_>> = children
                    .iter()
                    .map(|node| Bounded { node, levels })
                    .collect();
                let mut state = serializer.serialize_struct("SyntaxNode", 3)?;
                state.serialize_field("kind", &node.kind())?;
                state.serialize_field("span", span)?;
                state.serialize_field("children", &children)?;
                state.end()
            }
            SyntaxNode::BinaryExpression {
                span,
                left,
                operator,
                right,
            } => {
                let mut state = serializer.serialize_struct("SyntaxNode", 5)?;
                state.serialize_field("kind", &node.kind())?;
                state.serialize_field("span", span)?;
                state.serialize_field("left", &Bounded {
                        node: left.as_ref(),
                        levels,
                    })?;
                state.serialize_field("operator", operator)?;
                state.serialize_field("right", &Bounded {
                        node: right.as_ref(),
                        levels,
                    })?;
                state.end()
            }
            leaf => {
                let mut state = serializer.serialize_struct("SyntaxNode", 3)?;
                state.serialize_field("kind", &leaf.kind())?;
                state.serialize_field("span", &leaf.span())?;
                state.serialize_field("text", leaf.text().unwrap_or_default())?;
                state.end()
            }
        }
    }
}

/// JSON shape: `{ "kind": <NodeKind>, "span": {..}, ... }` with the fields
/// of the variant. Fails past [`MAX_SERIALIZE_DEPTH`] levels.
impl Serialize for SyntaxNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Bounded {
            node: self,
            levels: MAX_SERIALIZE_DEPTH,
        }
        .serialize(serializer)
    }
}

/// Debug output is the outline, which stays flat for deep trees.
impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f)
    }
}

/// Result of a successful parse: a single module node.
#[derive(Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParseTree {
    root: SyntaxNode,
}

impl ParseTree {
    pub(crate) fn new(children: Vec<SyntaxNode>, source_len: usize) -> Self {
        Self {
            root: SyntaxNode::Module {
                span: 0..source_len,
                children,
            },
        }
    }

    pub fn module(&self) -> &SyntaxNode {
        &self.root
    }

    /// Top-level items in source order.
    pub fn items(&self) -> &[SyntaxNode] {
        match &self.root {
            SyntaxNode::Module { children, .. } => children,
            _ => &[],
        }
    }

    /// Every leaf text, including each `+`, with its span, in source order.
    pub fn leaves(&self) -> Vec<(Span, &str)> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
