//! Theme types: named style slots with merge semantics and built-in presets.
//!
//! A [`Theme`] always has every slot populated; partial overrides are
//! expressed as a [`ThemePatch`] and layered on with [`Theme::merge`]. This
//! is the mechanism behind deck defaults, per-slide overrides, and per-node
//! `themed(...)` decorators.

pub mod code;
pub mod color;
pub mod font;

pub use code::CodeTheme;
pub use color::{Color, ColorParseError};
pub use font::{FontDesc, FontFamily, FontWeight, Foreground};

/// The closed set of style slots used when rendering a slide
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub background: Color,
    pub title: Foreground,
    pub subtitle: Foreground,
    pub body: Foreground,
    pub code: CodeTheme,
    pub code_highlighted: CodeTheme,
}

impl Theme {
    pub fn new(
        background: Color,
        title: Foreground,
        subtitle: Foreground,
        body: Foreground,
        code: CodeTheme,
        code_highlighted: CodeTheme,
    ) -> Self {
        Self {
            background,
            title,
            subtitle,
            body,
            code,
            code_highlighted,
        }
    }

    /// Returns this theme with the patch's set slots layered on top. Unset
    /// slots are untouched, so chained merges give the last writer priority
    /// per slot.
    #[must_use]
    pub fn merge(&self, patch: &ThemePatch) -> Theme {
        let mut merged = self.clone();
        if let Some(background) = patch.background {
            merged.background = background;
        }
        if let Some(title) = patch.title {
            merged.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            merged.subtitle = subtitle;
        }
        if let Some(body) = patch.body {
            merged.body = body;
        }
        if let Some(code) = &patch.code {
            merged.code = code.clone();
        }
        if let Some(code_highlighted) = &patch.code_highlighted {
            merged.code_highlighted = code_highlighted.clone();
        }
        merged
    }

    pub fn standard() -> Self {
        Self::black()
    }

    pub fn dark() -> Self {
        Theme::new(
            Color::hex("221d29"),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(80.0, FontWeight::Bold),
            ),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(40.0, FontWeight::Light).italic(),
            ),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(40.0, FontWeight::Regular),
            ),
            CodeTheme::xcode_dark(),
            CodeTheme::highlighted(
                Color::hex("000000"),
                Foreground::new(
                    Color::hex("FFFFFF"),
                    FontDesc::monospace(22.0, FontWeight::Heavy),
                ),
            ),
        )
    }

    pub fn black() -> Self {
        Theme::new(
            Color::hex("000000"),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(80.0, FontWeight::Bold),
            ),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(50.0, FontWeight::Light).italic(),
            ),
            Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::system(40.0, FontWeight::Regular),
            ),
            CodeTheme::from_foreground(Foreground::new(
                Color::hex("FFFFFF"),
                FontDesc::monospace(22.0, FontWeight::Regular),
            )),
            CodeTheme::highlighted(
                Color::hex("CCCCCC"),
                Foreground::new(
                    Color::hex("000000"),
                    FontDesc::monospace(22.0, FontWeight::Heavy),
                ),
            ),
        )
    }

    pub fn white() -> Self {
        Theme::new(
            Color::hex("FFFFFF"),
            Foreground::new(
                Color::hex("000000"),
                FontDesc::system(80.0, FontWeight::Bold),
            ),
            Foreground::new(
                Color::hex("000000"),
                FontDesc::system(40.0, FontWeight::Light).italic(),
            ),
            Foreground::new(
                Color::hex("000000"),
                FontDesc::system(40.0, FontWeight::Regular),
            ),
            CodeTheme::from_foreground(Foreground::new(
                Color::hex("000000"),
                FontDesc::monospace(22.0, FontWeight::Regular),
            )),
            CodeTheme::highlighted(
                Color::hex("000000"),
                Foreground::new(
                    Color::hex("FFFFFF"),
                    FontDesc::monospace(22.0, FontWeight::Heavy),
                ),
            ),
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::black()
    }
}

/// A partial theme: only the slots explicitly set here are applied by
/// [`Theme::merge`]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemePatch {
    pub background: Option<Color>,
    pub title: Option<Foreground>,
    pub subtitle: Option<Foreground>,
    pub body: Option<Foreground>,
    pub code: Option<CodeTheme>,
    pub code_highlighted: Option<CodeTheme>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that sets every slot to the given theme's values
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            background: Some(theme.background),
            title: Some(theme.title),
            subtitle: Some(theme.subtitle),
            body: Some(theme.body),
            code: Some(theme.code),
            code_highlighted: Some(theme.code_highlighted),
        }
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn title(mut self, title: Foreground) -> Self {
        self.title = Some(title);
        self
    }

    pub fn subtitle(mut self, subtitle: Foreground) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn body(mut self, body: Foreground) -> Self {
        self.body = Some(body);
        self
    }

    pub fn code(mut self, code: CodeTheme) -> Self {
        self.code = Some(code);
        self
    }

    pub fn code_highlighted(mut self, code_highlighted: CodeTheme) -> Self {
        self.code_highlighted = Some(code_highlighted);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_slot_wise() {
        let base = Theme::black();
        let patch = ThemePatch::new().background(Color::hex("221d29"));
        let merged = base.merge(&patch);

        assert_eq!(merged.background, Color::hex("221d29"));
        assert_eq!(merged.title, base.title);
        assert_eq!(merged.subtitle, base.subtitle);
        assert_eq!(merged.body, base.body);
        assert_eq!(merged.code, base.code);
        assert_eq!(merged.code_highlighted, base.code_highlighted);
    }

    #[test]
    fn test_chained_merges_last_writer_wins() {
        let base = Theme::black();
        let b = ThemePatch::new()
            .background(Color::hex("111111"))
            .body(Foreground::new(
                Color::hex("AAAAAA"),
                FontDesc::system(30.0, FontWeight::Regular),
            ));
        let c = ThemePatch::new().background(Color::hex("222222"));

        let merged = base.merge(&b).merge(&c);
        // c wins the slot it sets, b keeps the slot c leaves unset
        assert_eq!(merged.background, Color::hex("222222"));
        assert_eq!(merged.body.color, Color::hex("AAAAAA"));
        assert_eq!(merged.title, base.title);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = Theme::dark();
        assert_eq!(base.merge(&ThemePatch::new()), base);
    }

    #[test]
    fn test_full_patch_replaces_everything() {
        let merged = Theme::black().merge(&ThemePatch::from_theme(Theme::white()));
        assert_eq!(merged, Theme::white());
    }
}
