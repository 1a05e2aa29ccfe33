//! A ready-made example deck showing the authoring surface, in the spirit
//! of the sample deck the presenter falls back to when none is supplied.

use indoc::indoc;

use crate::deck::{Alignment, BulletStyle, Column, ContentItem, Deck, Slide, Words};
use crate::highlight::Language;
use crate::theme::Theme;

/// Build the example deck. Useful as a starting point and as a fixture.
pub fn sample_deck() -> Deck {
    Deck::new("Podium Example")
        .theme(Theme::dark())
        .slide(
            Slide::new()
                .alignment(Alignment::Center)
                .comment("Speaker notes go into Slide::comment and show up in the notes window")
                .content(ContentItem::title_with_subtitle(
                    "Podium",
                    "Declarative slide decks",
                )),
        )
        .slide(
            Slide::new()
                .content(ContentItem::title("Getting Started"))
                .content(ContentItem::columns([
                    Column::new().item(ContentItem::code(
                        Language::Rust,
                        indoc! {r#"
                            use podium::deck::{ContentItem, Deck, Slide};
                            use podium::present::PresentationState;

                            fn deck() -> Deck {
                                Deck::new("SomeConf 2026")
                                    .slide(
                                        Slide::new()
                                            .alignment(Alignment::Center)
                                            .content(ContentItem::title("Welcome")),
                                    )
                                    .slide(
                                        Slide::new()
                                            .content(ContentItem::title("Slide 1"))
                                            .content(ContentItem::words("Some useful content")),
                                    )
                            }

                            let mut state = PresentationState::new(deck());
                            state.next_slide(false);
                        "#},
                    )),
                    Column::new().item(ContentItem::bullets(
                        BulletStyle::Bullet,
                        [
                            Words::new("Build a Deck out of Slides"),
                            Words::new("Hand it to a PresentationState"),
                            Words::new("Your renderer draws the resolved slides"),
                        ],
                    )),
                ])),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::PresentationState;
    use crate::render::{resolve_deck, ResolvedBody};

    #[test]
    fn test_sample_deck_resolves() {
        let deck = sample_deck();
        assert_eq!(deck.slide_count(), 2);

        let resolved = resolve_deck(&deck);
        assert_eq!(resolved.len(), 2);
        assert!(matches!(
            resolved[0].items[0].body,
            ResolvedBody::Title { .. }
        ));
    }

    #[test]
    fn test_sample_deck_presents() {
        let mut state = PresentationState::new(sample_deck());
        assert!(state.speaker_notes().is_some());
        state.next_slide(false);
        assert_eq!(state.slide_index(), 1);
        // the code column opted into line stepping
        assert_eq!(state.code_block_count(), 1);
        state.advance_line();
        assert_eq!(state.focused_line(0), Some(0));
    }
}
