use std::collections::HashMap;

use super::color::Color;
use super::font::{FontDesc, FontWeight, Foreground};
use crate::highlight::TokenKind;

/// Styling for code blocks: one font, a plain-text color, a background, and
/// per-token-kind colors. Kinds absent from `token_colors` render with
/// `plain_text_color`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeTheme {
    pub font: FontDesc,
    pub plain_text_color: Color,
    pub background_color: Color,
    pub token_colors: HashMap<TokenKind, Color>,
}

impl CodeTheme {
    pub fn new(
        font: FontDesc,
        plain_text_color: Color,
        background_color: Color,
        token_colors: HashMap<TokenKind, Color>,
    ) -> Self {
        Self {
            font,
            plain_text_color,
            background_color,
            token_colors,
        }
    }

    /// A monochrome code theme from a single foreground, with a transparent
    /// background and no per-token colors
    pub fn from_foreground(foreground: Foreground) -> Self {
        Self {
            font: foreground.font,
            plain_text_color: foreground.color,
            background_color: Color::CLEAR,
            token_colors: HashMap::new(),
        }
    }

    /// Like [`CodeTheme::from_foreground`] but with an explicit background,
    /// used for the highlighted-line style
    pub fn highlighted(background: Color, foreground: Foreground) -> Self {
        Self {
            background_color: background,
            ..Self::from_foreground(foreground)
        }
    }

    pub fn color_for(&self, kind: TokenKind) -> Color {
        self.token_colors
            .get(&kind)
            .copied()
            .unwrap_or(self.plain_text_color)
    }

    /// Token colors modeled on Xcode's default dark scheme
    pub fn xcode_dark() -> Self {
        let token_colors = HashMap::from([
            (TokenKind::Keyword, Color::hex("FC5FA3")),
            (TokenKind::String, Color::hex("FC6A5D")),
            (TokenKind::Type, Color::hex("9EF1DD")),
            (TokenKind::Call, Color::hex("67B7A4")),
            (TokenKind::Number, Color::hex("D0BF69")),
            (TokenKind::Comment, Color::hex("6C7986")),
            (TokenKind::Property, Color::hex("67B7A4")),
            (TokenKind::DotAccess, Color::hex("67B7A4")),
            (TokenKind::Preprocessing, Color::hex("FD8F3F")),
        ]);

        Self {
            font: FontDesc::monospace(22.0, FontWeight::Regular),
            plain_text_color: Color::hex("FFFFFF"),
            background_color: Color::hex("1F1F24"),
            token_colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_falls_back_to_plain_text() {
        let theme = CodeTheme::from_foreground(Foreground::new(
            Color::white(),
            FontDesc::monospace(22.0, FontWeight::Regular),
        ));
        assert_eq!(theme.color_for(TokenKind::Keyword), Color::white());
    }

    #[test]
    fn test_color_lookup_uses_token_table() {
        let theme = CodeTheme::xcode_dark();
        assert_eq!(theme.color_for(TokenKind::Keyword), Color::hex("FC5FA3"));
        assert_eq!(theme.color_for(TokenKind::Comment), Color::hex("6C7986"));
    }
}
