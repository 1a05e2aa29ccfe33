//! Syntax highlighting: a pluggable grammar scans code text into classified
//! components, which are then grouped into lines and styled from a
//! [`CodeTheme`](crate::theme::CodeTheme).

pub mod grammar;
mod lexer;
mod line;

pub use grammar::{Grammar, Language, NoGrammar, RustGrammar, SwiftGrammar};
pub use line::{CodeComponent, Line, TokenKind};

use crate::theme::{CodeTheme, Color, FontDesc, Theme};
use line::LineBuilder;

/// Tokenize source text into lines of classified components.
///
/// The output always has exactly `1 + newline count` lines, and
/// concatenating every component's text (with `\n` between lines)
/// reproduces the source.
pub fn tokenize(source: &str, grammar: &dyn Grammar) -> Vec<Line> {
    let mut builder = LineBuilder::new();
    for component in grammar.scan(source) {
        builder.push(component);
    }
    builder.build()
}

/// One colored span of a styled code line
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub color: Color,
    pub font: FontDesc,
}

/// One render-ready code line
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
    pub background: Color,
    pub highlighted: bool,
}

/// Style tokenized lines against a theme. The line at `focused` (if any)
/// uses the highlighted code theme; every other line uses the normal one.
/// Token kinds missing from the theme's color table fall back to its
/// plain-text color.
pub fn styled_lines(lines: &[Line], focused: Option<usize>, theme: &Theme) -> Vec<StyledLine> {
    styled_lines_with(lines, focused, &theme.code, &theme.code_highlighted)
}

/// [`styled_lines`] with the two code themes passed explicitly, for callers
/// holding an already-resolved pair
pub fn styled_lines_with(
    lines: &[Line],
    focused: Option<usize>,
    normal: &CodeTheme,
    highlighted_theme: &CodeTheme,
) -> Vec<StyledLine> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let highlighted = focused == Some(index);
            let code_theme = if highlighted {
                highlighted_theme
            } else {
                normal
            };

            let spans = line
                .components()
                .iter()
                .map(|component| {
                    let color = match component {
                        CodeComponent::Token(_, kind) => code_theme.color_for(*kind),
                        _ => code_theme.plain_text_color,
                    };
                    StyledSpan {
                        text: component.text().to_string(),
                        color,
                        font: code_theme.font,
                    }
                })
                .collect();

            StyledLine {
                spans,
                background: code_theme.background_color,
                highlighted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newline_count(s: &str) -> usize {
        s.chars().filter(|&c| c == '\n').count()
    }

    fn reassemble(lines: &[Line]) -> String {
        lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_line_count_invariant() {
        for source in [
            "",
            "\n",
            "one line",
            "a\nb\nc",
            "trailing\n",
            "\n\nleading blank lines",
            "fn main() {\n    println!(\"hi\");\n}\n",
        ] {
            let lines = tokenize(source, &RustGrammar);
            assert_eq!(
                lines.len(),
                1 + newline_count(source),
                "line count for {source:?}"
            );
            assert_eq!(reassemble(&lines), source, "round trip for {source:?}");
        }
    }

    #[test]
    fn test_no_grammar_single_plain_run_per_word() {
        let lines = tokenize("just words\nhere", &NoGrammar);
        assert_eq!(lines.len(), 2);
        assert!(lines[0]
            .components()
            .iter()
            .all(|c| !matches!(c, CodeComponent::Token(..))));
    }

    #[test]
    fn test_styled_lines_highlight_cursor() {
        let theme = Theme::black();
        let lines = tokenize("let a = 1;\nlet b = 2;", &RustGrammar);
        let styled = styled_lines(&lines, Some(1), &theme);

        assert!(!styled[0].highlighted);
        assert!(styled[1].highlighted);
        assert_eq!(styled[0].background, theme.code.background_color);
        assert_eq!(styled[1].background, theme.code_highlighted.background_color);
        // the black preset's highlighted style flips the foreground
        assert_eq!(
            styled[1].spans[0].color,
            theme.code_highlighted.plain_text_color
        );
    }

    #[test]
    fn test_styled_lines_token_colors() {
        let theme = Theme::dark();
        let lines = tokenize("let x", &RustGrammar);
        let styled = styled_lines(&lines, None, &theme);

        // dark preset carries the xcode_dark token table
        assert_eq!(styled[0].spans[0].text, "let");
        assert_eq!(styled[0].spans[0].color, theme.code.color_for(TokenKind::Keyword));
        assert_ne!(styled[0].spans[0].color, theme.code.plain_text_color);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // printable ASCII plus newline and tab, so line splits are exercised
        const SOURCE: &str = "[ -~\\n\\t]{0,200}";

        proptest! {
            #[test]
            fn tokenize_line_count_matches_newlines(source in SOURCE) {
                let lines = tokenize(&source, &RustGrammar);
                prop_assert_eq!(lines.len(), 1 + newline_count(&source));
            }

            #[test]
            fn tokenize_round_trips(source in SOURCE) {
                let lines = tokenize(&source, &RustGrammar);
                prop_assert_eq!(reassemble(&lines), source);
            }

            #[test]
            fn no_grammar_round_trips(source in SOURCE) {
                let lines = tokenize(&source, &NoGrammar);
                prop_assert_eq!(reassemble(&lines), source);
            }
        }
    }
}
