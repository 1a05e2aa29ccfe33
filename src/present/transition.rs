/// Configured slide-swap direction, per deck or per slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideTransition {
    Horizontal,
    Vertical,
}

/// The resolved directional effect the renderer applies when the displayed
/// slide changes. `Identity` means no movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FromLeading,
    FromTrailing,
    FromTop,
    FromBottom,
    Identity,
}

impl Transition {
    /// Direction for forward navigation: slide in from the trailing edge
    /// (horizontal) or from the bottom (vertical)
    pub fn for_next(direction: Option<SlideTransition>) -> Self {
        match direction {
            Some(SlideTransition::Horizontal) => Transition::FromTrailing,
            Some(SlideTransition::Vertical) => Transition::FromBottom,
            None => Transition::Identity,
        }
    }

    /// Direction for backward navigation: slide in from the leading edge
    /// (horizontal) or from the top (vertical)
    pub fn for_previous(direction: Option<SlideTransition>) -> Self {
        match direction {
            Some(SlideTransition::Horizontal) => Transition::FromLeading,
            Some(SlideTransition::Vertical) => Transition::FromTop,
            None => Transition::Identity,
        }
    }
}
