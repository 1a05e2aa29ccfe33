use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::highlight::Language;
use crate::theme::{Foreground, ThemePatch};

/// Stable identity assigned at construction, used by renderers for list
/// diffing and keying. Cloning a built tree keeps the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NodeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// One renderable node in a slide's content tree
#[derive(Debug, Clone)]
pub struct ContentItem {
    id: NodeId,
    kind: ContentKind,
}

/// The closed set of content-node variants
#[derive(Debug, Clone)]
pub enum ContentKind {
    Title {
        text: String,
        subtitle: Option<String>,
    },
    Words(Words),
    Bullets {
        style: BulletStyle,
        items: Vec<Words>,
    },
    Code(CodeBlock),
    Media(MediaKind),
    Columns(Vec<Column>),
    Raw(RawContent),
    /// Decorator: merges `patch` into a copy of the inherited theme before
    /// resolving `child`; sibling subtrees are unaffected
    Themed {
        patch: ThemePatch,
        child: Box<ContentItem>,
    },
}

impl ContentItem {
    fn with_kind(kind: ContentKind) -> Self {
        Self {
            id: NodeId::next(),
            kind,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::with_kind(ContentKind::Title {
            text: text.into(),
            subtitle: None,
        })
    }

    pub fn title_with_subtitle(text: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::with_kind(ContentKind::Title {
            text: text.into(),
            subtitle: Some(subtitle.into()),
        })
    }

    pub fn words(text: impl Into<String>) -> Self {
        Self::with_kind(ContentKind::Words(Words::new(text)))
    }

    pub fn words_styled(text: impl Into<String>, style: WordsStyle) -> Self {
        Self::with_kind(ContentKind::Words(Words::styled(text, style)))
    }

    pub fn bullets(style: BulletStyle, items: impl IntoIterator<Item = Words>) -> Self {
        Self::with_kind(ContentKind::Bullets {
            style,
            items: items.into_iter().collect(),
        })
    }

    /// A code block with line-by-line highlight stepping enabled
    pub fn code(language: Language, source: impl Into<String>) -> Self {
        Self::with_kind(ContentKind::Code(CodeBlock {
            source: source.into(),
            language,
            enable_line_highlight: true,
        }))
    }

    /// A code block that ignores highlight stepping
    pub fn code_plain(language: Language, source: impl Into<String>) -> Self {
        Self::with_kind(ContentKind::Code(CodeBlock {
            source: source.into(),
            language,
            enable_line_highlight: false,
        }))
    }

    pub fn media(kind: MediaKind) -> Self {
        Self::with_kind(ContentKind::Media(kind))
    }

    pub fn columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Self::with_kind(ContentKind::Columns(columns.into_iter().collect()))
    }

    /// An opaque, externally rendered view; the core passes it through
    /// untouched
    pub fn raw(payload: impl Any + Send + Sync) -> Self {
        Self::with_kind(ContentKind::Raw(RawContent::new(payload)))
    }

    /// Wrap this node so it resolves against the inherited theme with
    /// `patch` merged in. Chained calls nest: resolution applies the
    /// outermost (latest) wrapper first and works inward, so when two
    /// wrappers set the same slot the innermost (earliest) call has the
    /// final say.
    pub fn themed(self, patch: ThemePatch) -> Self {
        Self::with_kind(ContentKind::Themed {
            patch,
            child: Box::new(self),
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &ContentKind {
        &self.kind
    }
}

/// A run of text with an optional fixed style
#[derive(Debug, Clone, PartialEq)]
pub struct Words {
    pub text: String,
    pub style: WordsStyle,
}

impl Words {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: WordsStyle::Body,
        }
    }

    pub fn styled(text: impl Into<String>, style: WordsStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Which theme slot a [`Words`] run draws from; `Custom` pins an exact
/// foreground regardless of theme
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WordsStyle {
    Title,
    Subtitle,
    #[default]
    Body,
    Custom(Foreground),
}

/// Bullet list marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletStyle {
    #[default]
    Bullet,
    Dash,
}

impl BulletStyle {
    pub fn marker(&self) -> &'static str {
        match self {
            BulletStyle::Bullet => "\u{2022}",
            BulletStyle::Dash => "\u{2013}",
        }
    }
}

/// Source text plus language for a code block
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub source: String,
    pub language: Language,
    pub enable_line_highlight: bool,
}

/// Media references are descriptions only; loading and playback belong to
/// the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    RemoteImage(String),
    AssetImage(String),
    BundleImage(String),
    BundleVideo { name: String, autoplay: bool },
}

/// Opaque payload for externally rendered content. Renderers downcast to
/// whatever concrete type they agreed on with the deck author.
#[derive(Clone)]
pub struct RawContent(Arc<dyn Any + Send + Sync>);

impl RawContent {
    pub fn new(payload: impl Any + Send + Sync) -> Self {
        Self(Arc::new(payload))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for RawContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawContent(..)")
    }
}

/// One column inside a Columns node
#[derive(Debug, Clone)]
pub struct Column {
    id: NodeId,
    theme: Option<ThemePatch>,
    items: Vec<ContentItem>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            theme: None,
            items: Vec::new(),
        }
    }

    pub fn theme(mut self, patch: ThemePatch) -> Self {
        self.theme = Some(patch);
        self
    }

    pub fn item(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ContentItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn item_if(self, condition: bool, item: impl FnOnce() -> ContentItem) -> Self {
        if condition {
            self.item(item())
        } else {
            self
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn theme_patch(&self) -> Option<&ThemePatch> {
        self.theme.as_ref()
    }

    pub fn content(&self) -> &[ContentItem] {
        &self.items
    }
}
