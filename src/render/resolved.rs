// Resolved slide structures - fully themed and ready for rendering

use crate::deck::{Alignment, BulletStyle, HorizontalAlignment, MediaKind, NodeId, RawContent};
use crate::highlight::{styled_lines_with, Line, StyledLine};
use crate::theme::{CodeTheme, Color, Foreground};

/// A span of text with its resolved foreground
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub foreground: Foreground,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, foreground: Foreground) -> Self {
        Self {
            text: text.into(),
            foreground,
        }
    }
}

/// A fully resolved slide ready for rendering
#[derive(Debug, Clone)]
pub struct ResolvedSlide {
    pub background: Color,
    pub alignment: Alignment,
    pub horizontal_alignment: HorizontalAlignment,
    pub padding: f32,
    pub comment: Option<String>,
    pub items: Vec<ResolvedContent>,
}

/// One resolved content node; `id` is the authored node's identity, for
/// list diffing
#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub id: NodeId,
    pub body: ResolvedBody,
}

#[derive(Debug, Clone)]
pub enum ResolvedBody {
    Title {
        title: TextSpan,
        subtitle: Option<TextSpan>,
    },
    Text(TextSpan),
    Bullets {
        style: BulletStyle,
        items: Vec<TextSpan>,
    },
    Code(ResolvedCode),
    Media(MediaKind),
    Columns(Vec<ResolvedColumn>),
    Raw(RawContent),
}

/// A code block tokenized and paired with its resolved code themes. The
/// focus cursor stays external (it is navigation state); pass it in when
/// styling.
#[derive(Debug, Clone)]
pub struct ResolvedCode {
    pub lines: Vec<Line>,
    pub enable_line_highlight: bool,
    pub theme: CodeTheme,
    pub highlighted_theme: CodeTheme,
}

impl ResolvedCode {
    /// Render-ready styled lines with the given focus cursor applied
    pub fn styled(&self, focused: Option<usize>) -> Vec<StyledLine> {
        styled_lines_with(&self.lines, focused, &self.theme, &self.highlighted_theme)
    }
}

/// One resolved column; `width_fraction` is always `1 / column count`
#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    pub id: NodeId,
    pub width_fraction: f32,
    pub items: Vec<ResolvedContent>,
}
