/// Grammar classification of a code token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Keyword,
    String,
    Type,
    Call,
    Number,
    Comment,
    Property,
    DotAccess,
    Preprocessing,
}

/// One classified span of code text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeComponent {
    Token(String, TokenKind),
    Plain(String),
    Whitespace(String),
}

impl CodeComponent {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, CodeComponent::Whitespace(_))
    }

    pub fn text(&self) -> &str {
        match self {
            CodeComponent::Token(text, _) => text,
            CodeComponent::Plain(text) => text,
            CodeComponent::Whitespace(text) => text,
        }
    }
}

/// One line of tokenized code
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    components: Vec<CodeComponent>,
}

impl Line {
    pub fn components(&self) -> &[CodeComponent] {
        &self.components
    }

    /// True when the line holds nothing but whitespace. A line with no
    /// components at all is blank.
    pub fn is_blank(&self) -> bool {
        self.components.iter().all(CodeComponent::is_whitespace)
    }

    /// The line's original text, reassembled
    pub fn text(&self) -> String {
        self.components.iter().map(CodeComponent::text).collect()
    }
}

/// Accumulates a flat component stream into lines. Only whitespace
/// components may carry newlines; each newline terminates the current line.
/// The output always has exactly one more line than the source has `\n`s.
#[derive(Debug)]
pub(crate) struct LineBuilder {
    lines: Vec<Line>,
}

impl LineBuilder {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![Line::default()],
        }
    }

    pub(crate) fn push(&mut self, component: CodeComponent) {
        match component {
            CodeComponent::Whitespace(text) => self.push_whitespace(&text),
            other => {
                debug_assert!(
                    !other.text().contains('\n'),
                    "scanner emitted a newline inside a non-whitespace component"
                );
                self.current().components.push(other);
            }
        }
    }

    fn push_whitespace(&mut self, text: &str) {
        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                self.current()
                    .components
                    .push(CodeComponent::Whitespace(piece.to_string()));
            }
            if pieces.peek().is_some() {
                self.lines.push(Line::default());
            }
        }
    }

    pub(crate) fn build(self) -> Vec<Line> {
        self.lines
    }

    fn current(&mut self) -> &mut Line {
        self.lines.last_mut().expect("builder always has a line")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitespace(text: &str) -> CodeComponent {
        CodeComponent::Whitespace(text.to_string())
    }

    fn plain(text: &str) -> CodeComponent {
        CodeComponent::Plain(text.to_string())
    }

    #[test]
    fn test_newlines_split_lines() {
        let mut builder = LineBuilder::new();
        builder.push(plain("a"));
        builder.push(whitespace("\n  \n"));
        builder.push(plain("b"));

        let lines = builder.build();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "  ");
        assert_eq!(lines[2].text(), "b");
    }

    #[test]
    fn test_indentation_stays_on_its_line() {
        let mut builder = LineBuilder::new();
        builder.push(plain("fn"));
        builder.push(whitespace("\n    "));
        builder.push(plain("body"));

        let lines = builder.build();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text(), "    body");
    }

    #[test]
    fn test_blank_detection() {
        let mut builder = LineBuilder::new();
        builder.push(whitespace("  \n"));
        builder.push(plain("x"));
        builder.push(whitespace(" "));
        builder.push(whitespace("\n"));

        let lines = builder.build();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].is_blank());
        assert!(!lines[1].is_blank());
        // trailing newline leaves an empty final line, which is blank
        assert!(lines[2].components().is_empty());
        assert!(lines[2].is_blank());
    }

    #[test]
    fn test_empty_input_is_one_blank_line() {
        let lines = LineBuilder::new().build();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
    }
}
