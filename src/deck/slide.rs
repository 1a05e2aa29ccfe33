use super::content::{ContentItem, NodeId};
use crate::present::SlideTransition;
use crate::theme::ThemePatch;

/// Where a slide's content block sits in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

/// Stacking alignment for the items inside the content block; slides always
/// stack leading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

pub const DEFAULT_PADDING: f32 = 40.0;

/// One screen's worth of content plus layout, theme, transition, and
/// speaker-note metadata. Configured through the chainable builder methods;
/// renderers read the resolved form produced by [`crate::render`].
#[derive(Debug, Clone)]
pub struct Slide {
    id: NodeId,
    pub(crate) alignment: Alignment,
    pub(crate) horizontal_alignment: HorizontalAlignment,
    pub(crate) padding: f32,
    pub(crate) comment: Option<String>,
    pub(crate) theme: Option<ThemePatch>,
    pub(crate) transition: Option<SlideTransition>,
    pub(crate) content: Vec<ContentItem>,
}

impl Slide {
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            alignment: Alignment::TopLeading,
            horizontal_alignment: HorizontalAlignment::Leading,
            padding: DEFAULT_PADDING,
            comment: None,
            theme: None,
            transition: None,
            content: Vec::new(),
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Speaker notes shown in the presenter-notes window, never on the slide
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Theme slots that override the deck default for this slide only
    pub fn theme(mut self, patch: ThemePatch) -> Self {
        self.theme = Some(patch);
        self
    }

    /// Transition direction override used when navigating to or from this
    /// slide
    pub fn transition(mut self, transition: SlideTransition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn content(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    pub fn contents(mut self, items: impl IntoIterator<Item = ContentItem>) -> Self {
        self.content.extend(items);
        self
    }

    pub fn content_if(self, condition: bool, item: impl FnOnce() -> ContentItem) -> Self {
        if condition {
            self.content(item())
        } else {
            self
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.content
    }

    pub fn speaker_note(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}
