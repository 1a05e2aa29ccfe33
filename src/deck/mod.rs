//! The declarative deck model: a [`Deck`] of [`Slide`]s, each holding a tree
//! of [`ContentItem`]s. Trees are immutable once built; all builders are
//! chainable, support conditional inclusion, and splice nested sequences.

mod content;
mod slide;

pub use content::{
    BulletStyle, CodeBlock, Column, ContentItem, ContentKind, MediaKind, NodeId, RawContent,
    Words, WordsStyle,
};
pub use slide::{Alignment, HorizontalAlignment, Slide, DEFAULT_PADDING};

use crate::theme::Theme;

/// An ordered collection of slides with a title and a default theme
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    theme: Theme,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: Theme::standard(),
            slides: Vec::new(),
        }
    }

    /// Default theme for every slide that doesn't override it
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn slides(mut self, slides: impl IntoIterator<Item = Slide>) -> Self {
        self.slides.extend(slides);
        self
    }

    pub fn slide_if(self, condition: bool, slide: impl FnOnce() -> Slide) -> Self {
        if condition {
            self.slide(slide())
        } else {
            self
        }
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn default_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn slide_at(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn all_slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_counts_and_order() {
        let deck = Deck::new("Conf 2026")
            .slide(Slide::new().content(ContentItem::title("One")))
            .slides(vec![Slide::new(), Slide::new()])
            .slide_if(false, Slide::new);

        assert_eq!(deck.title_text(), "Conf 2026");
        assert_eq!(deck.slide_count(), 3);
        assert!(matches!(
            deck.slide_at(0).unwrap().items()[0].kind(),
            ContentKind::Title { .. }
        ));
        assert!(deck.slide_at(3).is_none());
    }

    #[test]
    fn test_default_theme_is_standard() {
        let deck = Deck::new("T");
        assert_eq!(*deck.default_theme(), Theme::standard());
    }
}
