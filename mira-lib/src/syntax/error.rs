#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// No lexical rule matches at the error position.
    Lex,
    /// An expression was expected but the next token cannot start one.
    Parse,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorKind::Lex => write!(f, "Lexical error"),
            SyntaxErrorKind::Parse => write!(f, "Parse error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub span: std::ops::Range<usize>,
    pub file_path: Option<String>,
}

impl SyntaxError {
    pub fn new(
        kind: SyntaxErrorKind,
        message: String,
        line: usize,
        column: usize,
        span: std::ops::Range<usize>,
    ) -> Self {
        Self {
            kind,
            message,
            line,
            column,
            span,
            file_path: None,
        }
    }

    /// Builds an error positioned at `span.start` of `source`.
    pub fn at(
        kind: SyntaxErrorKind,
        message: String,
        source: &str,
        span: std::ops::Range<usize>,
    ) -> Self {
        let (line, column) = get_line_col(source, span.start);
        Self::new(kind, message, line, column, span)
    }

    pub fn with_file(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// Byte offset the error points at.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file_path {
            write!(
                f,
                "{} in {} at line {}, column {}: {}",
                self.kind, file, self.line, self.column, self.message
            )
        } else {
            write!(
                f,
                "{} at line {}, column {}: {}",
                self.kind, self.line, self.column, self.message
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

/// 1-based line and column for a byte offset. Columns count chars.
pub fn get_line_col(source: &str, pos: usize) -> (usize, usize) {
    if pos > source.len() || !source.is_char_boundary(pos) {
        return (1, 1);
    }
    let prefix = &source[..pos];
    let line = prefix.matches('\n').count() + 1;
    let last_line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = prefix[last_line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        assert_eq!(get_line_col("1 + 2", 0), (1, 1));
        assert_eq!(get_line_col("1 + 2", 4), (1, 5));
    }

    #[test]
    fn test_line_col_after_newlines() {
        let source = "# c\n1\n  x";
        assert_eq!(get_line_col(source, 4), (2, 1));
        assert_eq!(get_line_col(source, 8), (3, 3));
        assert_eq!(get_line_col(source, source.len()), (3, 4));
    }

    #[test]
    fn test_line_col_counts_chars() {
        let source = "# é\n";
        assert_eq!(get_line_col(source, source.len() - 1), (1, 4));
    }

    #[test]
    fn test_display_without_file() {
        let err = SyntaxError::at(
            SyntaxErrorKind::Lex,
            "Unexpected character '$'".into(),
            "1 $",
            2..3,
        );
        assert_eq!(
            err.to_string(),
            "Lexical error at line 1, column 3: Unexpected character '$'"
        );
    }

    #[test]
    fn test_display_with_file() {
        let err = SyntaxError::at(
            SyntaxErrorKind::Parse,
            "Expected expression, found end of input".into(),
            "1 +\n",
            4..4,
        )
        .with_file("demo.mira".into());
        assert_eq!(
            err.to_string(),
            "Parse error in demo.mira at line 2, column 1: Expected expression, found end of input"
        );
        assert_eq!(err.position(), 4);
    }
}
