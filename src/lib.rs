//! Podium: declarative slide-deck authoring and presentation core.
//!
//! Decks are composed once as a tree of typed content nodes and handed to a
//! [`PresentationState`](present::PresentationState), which tracks the
//! current slide, transition direction, and code-line highlighting. A
//! rendering collaborator asks [`render`] for theme-resolved, render-ready
//! slide descriptions; this crate never draws pixels itself.
//!
//! ```
//! use podium::deck::{ContentItem, Deck, Slide};
//! use podium::present::PresentationState;
//! use podium::theme::Theme;
//!
//! let deck = Deck::new("SomeConf 2026")
//!     .theme(Theme::dark())
//!     .slide(Slide::new().content(ContentItem::title("Welcome")))
//!     .slide(Slide::new().content(ContentItem::words("Some useful content")));
//!
//! let mut state = PresentationState::new(deck);
//! state.next_slide(false);
//! assert_eq!(state.slide_index(), 1);
//! ```

pub mod deck;
pub mod demo;
pub mod highlight;
pub mod present;
pub mod render;
pub mod theme;

pub use deck::{ContentItem, Deck, Slide};
pub use present::PresentationState;
pub use theme::{Theme, ThemePatch};
