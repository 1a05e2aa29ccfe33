//! Presentation runtime: the slide-navigation state machine and the
//! line-highlight sub-stepping for code blocks.
//!
//! [`PresentationState`] is an explicitly constructed value owned by
//! whoever composes the presenter; there is no process-wide shared
//! instance. All reads and writes are expected to happen on the host UI
//! thread; the type is not safe for concurrent mutation.

mod line_focus;
mod transition;

pub use line_focus::LineFocus;
pub use transition::{SlideTransition, Transition};

use tracing::{debug, warn};

use crate::deck::{ContentItem, ContentKind, Deck, Slide};
use crate::highlight::tokenize;

/// Default presenter design resolution in pixels
pub const DEFAULT_RESOLUTION: (f64, f64) = (1920.0, 1080.0);

/// Scale applied to fit the design resolution into a frame while keeping
/// aspect ratio
pub fn scale_factor(resolution: (f64, f64), frame: (f64, f64)) -> f64 {
    let width_scale = frame.0 / resolution.0;
    let height_scale = frame.1 / resolution.1;

    let resolution_aspect = resolution.0 / resolution.1;
    let frame_aspect = frame.0 / frame.1;

    if resolution_aspect < frame_aspect {
        height_scale
    } else {
        width_scale
    }
}

/// Navigation state for one running presentation.
///
/// Holds the deck, the current slide index, the looping policy, and the
/// transition direction the renderer should use for the next slide swap.
/// Navigation is the only mutation; the deck itself never changes.
pub struct PresentationState {
    deck: Deck,
    looping: bool,
    transition_style: Option<SlideTransition>,
    slide_index: usize,
    active_transition: Transition,
    pending_index: Option<usize>,
    line_focus: Vec<LineFocus>,
}

impl PresentationState {
    pub fn new(deck: Deck) -> Self {
        if deck.is_empty() {
            warn!(title = deck.title_text(), "presenting an empty deck; navigation will do nothing");
        }
        let line_focus = line_focus_for(deck.slide_at(0));
        Self {
            deck,
            looping: false,
            transition_style: Some(SlideTransition::Horizontal),
            slide_index: 0,
            active_transition: Transition::FromTrailing,
            pending_index: None,
            line_focus,
        }
    }

    /// Wrap from the last slide to the first and back instead of stopping
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Default transition direction for slides without their own override;
    /// `None` disables the slide-swap effect
    pub fn transition_style(mut self, style: Option<SlideTransition>) -> Self {
        self.transition_style = style;
        self
    }

    /// Advance to the next slide. At the last slide this wraps when looping
    /// and otherwise leaves both the index and the transition untouched.
    ///
    /// With `animated`, the transition direction is updated immediately but
    /// the index change is deferred to [`commit_pending`]: the renderer's
    /// exit effect is chosen from the direction in effect before the index
    /// swap, so the direction must settle one render tick ahead. The host
    /// loop calls `commit_pending` on its next tick.
    ///
    /// [`commit_pending`]: PresentationState::commit_pending
    pub fn next_slide(&mut self, animated: bool) {
        let count = self.deck.slide_count();
        if count == 0 {
            warn!("next_slide on an empty deck");
            return;
        }

        let target = if self.slide_index >= count - 1 {
            if self.looping {
                0
            } else {
                return;
            }
        } else {
            self.slide_index + 1
        };

        // the slide being navigated *to* picks the direction
        let overridden = self
            .deck
            .slide_at(target)
            .and_then(|slide| slide.transition);
        self.active_transition = Transition::for_next(overridden.or(self.transition_style));

        if animated {
            self.pending_index = Some(target);
        } else {
            self.apply_index(target);
        }
    }

    /// Go back one slide; the mirror of [`next_slide`](PresentationState::next_slide)
    pub fn previous_slide(&mut self, animated: bool) {
        let count = self.deck.slide_count();
        if count == 0 {
            warn!("previous_slide on an empty deck");
            return;
        }

        let target = if self.slide_index == 0 {
            if self.looping {
                count - 1
            } else {
                return;
            }
        } else {
            self.slide_index - 1
        };

        // the slide being navigated *away from* picks the direction
        let overridden = self
            .deck
            .slide_at(self.slide_index)
            .and_then(|slide| slide.transition);
        self.active_transition = Transition::for_previous(overridden.or(self.transition_style));

        if animated {
            self.pending_index = Some(target);
        } else {
            self.apply_index(target);
        }
    }

    /// Commit a deferred animated index change. Idempotent; the latest
    /// deferred navigation wins and an immediate navigation cancels any
    /// pending one.
    pub fn commit_pending(&mut self) {
        if let Some(target) = self.pending_index.take() {
            self.apply_index(target);
        }
    }

    fn apply_index(&mut self, target: usize) {
        self.pending_index = None;
        self.slide_index = target;
        self.line_focus = line_focus_for(self.deck.slide_at(target));
        debug!(index = target, "slide committed");
    }

    /// Step the highlight cursor of every opted-in code block on the
    /// current slide down one non-blank line
    pub fn advance_line(&mut self) {
        for focus in &mut self.line_focus {
            focus.advance();
        }
    }

    /// Step the highlight cursors back one non-blank line
    pub fn retreat_line(&mut self) {
        for focus in &mut self.line_focus {
            focus.retreat();
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slide_at(self.slide_index)
    }

    /// Speaker notes of the current slide, for the notes window
    pub fn speaker_notes(&self) -> Option<&str> {
        self.current_slide().and_then(Slide::speaker_note)
    }

    pub fn active_transition(&self) -> Transition {
        self.active_transition
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Focused line of the `code_index`-th code block on the current slide
    /// (document order, columns left to right), if one is focused
    pub fn focused_line(&self, code_index: usize) -> Option<usize> {
        self.line_focus.get(code_index)?.focused_line()
    }

    pub fn code_block_count(&self) -> usize {
        self.line_focus.len()
    }
}

/// Build highlight cursors for every code block on a slide, in document
/// order. The resolver walks the tree in the same order, so cursor index i
/// matches the i-th resolved code block.
fn line_focus_for(slide: Option<&Slide>) -> Vec<LineFocus> {
    let mut out = Vec::new();
    if let Some(slide) = slide {
        collect_code(slide.items(), &mut out);
    }
    out
}

fn collect_code(items: &[ContentItem], out: &mut Vec<LineFocus>) {
    for item in items {
        match item.kind() {
            ContentKind::Code(block) => {
                let lines = tokenize(&block.source, block.language.grammar());
                out.push(LineFocus::new(&lines, block.enable_line_highlight));
            }
            ContentKind::Columns(columns) => {
                for column in columns {
                    collect_code(column.content(), out);
                }
            }
            ContentKind::Themed { child, .. } => {
                collect_code(std::slice::from_ref(child), out);
            }
            _ => {}
        }
    }
}
