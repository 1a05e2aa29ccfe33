// Render module - theme resolution and render-ready descriptions, plus
// optional export backends

mod resolved;
mod resolver;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use resolved::{
    ResolvedBody, ResolvedCode, ResolvedColumn, ResolvedContent, ResolvedSlide, TextSpan,
};
pub use resolver::{effective_theme, resolve_content, resolve_deck, resolve_slide};
