// Logic to resolve authored slides against a theme into render-ready form

use crate::deck::{ContentItem, ContentKind, Deck, Slide, Words, WordsStyle};
use crate::highlight::tokenize;
use crate::theme::Theme;

use super::resolved::{
    ResolvedBody, ResolvedCode, ResolvedColumn, ResolvedContent, ResolvedSlide, TextSpan,
};

/// The theme a slide is actually rendered with: the deck default with the
/// slide's own patch, if any, layered on top
pub fn effective_theme(deck_theme: &Theme, slide: &Slide) -> Theme {
    match &slide.theme {
        Some(patch) => deck_theme.merge(patch),
        None => deck_theme.clone(),
    }
}

/// Resolve every slide of a deck in order: the batch contract used by
/// exporters
pub fn resolve_deck(deck: &Deck) -> Vec<ResolvedSlide> {
    deck.all_slides()
        .iter()
        .map(|slide| resolve_slide(slide, deck.default_theme()))
        .collect()
}

/// Resolve a single slide against the deck theme
pub fn resolve_slide(slide: &Slide, deck_theme: &Theme) -> ResolvedSlide {
    let theme = effective_theme(deck_theme, slide);
    let items = slide
        .items()
        .iter()
        .map(|item| resolve_content(item, &theme))
        .collect();

    ResolvedSlide {
        background: theme.background,
        alignment: slide.alignment,
        horizontal_alignment: slide.horizontal_alignment,
        padding: slide.padding,
        comment: slide.comment.clone(),
        items,
    }
}

/// Resolve one content node against the theme in effect at its position.
/// Theme decorators merge into a copy on the way down, so sibling subtrees
/// never see each other's overrides.
pub fn resolve_content(item: &ContentItem, theme: &Theme) -> ResolvedContent {
    let body = match item.kind() {
        ContentKind::Title { text, subtitle } => ResolvedBody::Title {
            title: TextSpan::new(text.clone(), theme.title),
            subtitle: subtitle
                .as_ref()
                .map(|sub| TextSpan::new(sub.clone(), theme.subtitle)),
        },
        ContentKind::Words(words) => ResolvedBody::Text(span_for(words, theme)),
        ContentKind::Bullets { style, items } => ResolvedBody::Bullets {
            style: *style,
            items: items.iter().map(|words| span_for(words, theme)).collect(),
        },
        ContentKind::Code(block) => ResolvedBody::Code(ResolvedCode {
            lines: tokenize(&block.source, block.language.grammar()),
            enable_line_highlight: block.enable_line_highlight,
            theme: theme.code.clone(),
            highlighted_theme: theme.code_highlighted.clone(),
        }),
        ContentKind::Media(kind) => ResolvedBody::Media(kind.clone()),
        ContentKind::Columns(columns) => {
            let count = columns.len().max(1);
            ResolvedBody::Columns(
                columns
                    .iter()
                    .map(|column| {
                        let column_theme = match column.theme_patch() {
                            Some(patch) => theme.merge(patch),
                            None => theme.clone(),
                        };
                        ResolvedColumn {
                            id: column.id(),
                            width_fraction: 1.0 / count as f32,
                            items: column
                                .content()
                                .iter()
                                .map(|item| resolve_content(item, &column_theme))
                                .collect(),
                        }
                    })
                    .collect(),
            )
        }
        ContentKind::Raw(raw) => ResolvedBody::Raw(raw.clone()),
        ContentKind::Themed { patch, child } => {
            return resolve_content(child, &theme.merge(patch));
        }
    };

    ResolvedContent {
        id: item.id(),
        body,
    }
}

fn span_for(words: &Words, theme: &Theme) -> TextSpan {
    let foreground = match words.style {
        WordsStyle::Title => theme.title,
        WordsStyle::Subtitle => theme.subtitle,
        WordsStyle::Body => theme.body,
        WordsStyle::Custom(foreground) => foreground,
    };
    TextSpan::new(words.text.clone(), foreground)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{BulletStyle, Column, ContentItem};
    use crate::highlight::Language;
    use crate::theme::{Color, FontDesc, FontWeight, Foreground, ThemePatch};

    fn text_color_of(item: &ContentItem, theme: &Theme) -> Color {
        match resolve_content(item, theme).body {
            ResolvedBody::Text(span) => span.foreground.color,
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn test_slide_patch_overrides_deck_theme() {
        let deck_theme = Theme::black();
        let slide = Slide::new()
            .theme(ThemePatch::new().background(Color::hex("221d29")))
            .content(ContentItem::words("x"));

        let resolved = resolve_slide(&slide, &deck_theme);
        assert_eq!(resolved.background, Color::hex("221d29"));
    }

    #[test]
    fn test_slide_without_patch_uses_deck_theme() {
        let resolved = resolve_slide(&Slide::new(), &Theme::white());
        assert_eq!(resolved.background, Color::hex("FFFFFF"));
    }

    #[test]
    fn test_nested_node_override_beats_slide_override() {
        // slide patch and a node decorator contest the body slot; the node
        // decorator merges later on the way down, so it wins
        let node_body = Foreground::new(
            Color::hex("00FF00"),
            FontDesc::system(40.0, FontWeight::Regular),
        );
        let slide_body = Foreground::new(
            Color::hex("FF0000"),
            FontDesc::system(40.0, FontWeight::Regular),
        );

        let slide = Slide::new()
            .theme(ThemePatch::new().body(slide_body))
            .content(ContentItem::words("x").themed(ThemePatch::new().body(node_body)));

        let theme = effective_theme(&Theme::black(), &slide);
        let color = text_color_of(&slide.items()[0], &theme);
        assert_eq!(color, Color::hex("00FF00"));
    }

    #[test]
    fn test_sibling_subtrees_unaffected_by_decorator() {
        let patched = ContentItem::words("a").themed(ThemePatch::new().body(Foreground::new(
            Color::hex("00FF00"),
            FontDesc::system(40.0, FontWeight::Regular),
        )));
        let plain = ContentItem::words("b");

        let theme = Theme::black();
        assert_eq!(text_color_of(&patched, &theme), Color::hex("00FF00"));
        assert_eq!(text_color_of(&plain, &theme), theme.body.color);
    }

    #[test]
    fn test_chained_decorators_last_call_applies_first() {
        let item = ContentItem::words("x")
            .themed(ThemePatch::new().body(Foreground::new(
                Color::hex("111111"),
                FontDesc::system(40.0, FontWeight::Regular),
            )))
            .themed(ThemePatch::new().body(Foreground::new(
                Color::hex("222222"),
                FontDesc::system(40.0, FontWeight::Regular),
            )));

        // the outermost wrapper is the later call; the inner wrapper merges
        // after it on the way down, so the first `.themed` is the last
        // writer for the contested slot
        assert_eq!(text_color_of(&item, &Theme::black()), Color::hex("111111"));
    }

    #[test]
    fn test_column_width_fractions() {
        for k in 1..=4 {
            let columns = (0..k).map(|_| Column::new()).collect::<Vec<_>>();
            let item = ContentItem::columns(columns);
            let resolved = resolve_content(&item, &Theme::black());
            let ResolvedBody::Columns(resolved_columns) = resolved.body else {
                panic!("expected columns");
            };
            assert_eq!(resolved_columns.len(), k);
            for column in &resolved_columns {
                assert_eq!(column.width_fraction, 1.0 / k as f32);
            }
        }
    }

    #[test]
    fn test_column_theme_patch_scopes_to_its_column() {
        let green = Foreground::new(
            Color::hex("00FF00"),
            FontDesc::system(40.0, FontWeight::Regular),
        );
        let item = ContentItem::columns([
            Column::new()
                .theme(ThemePatch::new().body(green))
                .item(ContentItem::words("left")),
            Column::new().item(ContentItem::words("right")),
        ]);

        let theme = Theme::black();
        let resolved = resolve_content(&item, &theme);
        let ResolvedBody::Columns(columns) = resolved.body else {
            panic!("expected columns");
        };
        let ResolvedBody::Text(left) = &columns[0].items[0].body else {
            panic!("expected text");
        };
        let ResolvedBody::Text(right) = &columns[1].items[0].body else {
            panic!("expected text");
        };
        assert_eq!(left.foreground.color, Color::hex("00FF00"));
        assert_eq!(right.foreground.color, theme.body.color);
    }

    #[test]
    fn test_words_styles_draw_their_slots() {
        let theme = Theme::black();
        let title = resolve_content(&ContentItem::words_styled("t", WordsStyle::Title), &theme);
        let ResolvedBody::Text(span) = title.body else {
            panic!("expected text");
        };
        assert_eq!(span.foreground, theme.title);

        let fixed = Foreground::new(
            Color::hex("ABCDEF"),
            FontDesc::system(12.0, FontWeight::Bold),
        );
        let custom = resolve_content(
            &ContentItem::words_styled("c", WordsStyle::Custom(fixed)),
            &theme,
        );
        let ResolvedBody::Text(span) = custom.body else {
            panic!("expected text");
        };
        assert_eq!(span.foreground, fixed);
    }

    #[test]
    fn test_code_resolution_attaches_both_themes() {
        let theme = Theme::dark();
        let item = ContentItem::code(Language::Rust, "let x = 1;");
        let resolved = resolve_content(&item, &theme);
        let ResolvedBody::Code(code) = resolved.body else {
            panic!("expected code");
        };
        assert_eq!(code.lines.len(), 1);
        assert!(code.enable_line_highlight);
        assert_eq!(code.theme, theme.code);
        assert_eq!(code.highlighted_theme, theme.code_highlighted);
    }

    #[test]
    fn test_bullets_resolve_to_body_spans() {
        use crate::deck::Words;

        let theme = Theme::black();
        let item =
            ContentItem::bullets(BulletStyle::Dash, [Words::new("one"), Words::new("two")]);
        let resolved = resolve_content(&item, &theme);
        let ResolvedBody::Bullets { style, items } = resolved.body else {
            panic!("expected bullets");
        };
        assert_eq!(style, BulletStyle::Dash);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].foreground, theme.body);
    }

    #[test]
    fn test_resolve_deck_covers_all_slides_in_order() {
        let deck = Deck::new("T")
            .theme(Theme::white())
            .slide(Slide::new().content(ContentItem::title("A")))
            .slide(
                Slide::new()
                    .theme(ThemePatch::new().background(Color::hex("000000")))
                    .content(ContentItem::title("B")),
            );

        let resolved = resolve_deck(&deck);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].background, Color::hex("FFFFFF"));
        assert_eq!(resolved[1].background, Color::hex("000000"));
    }

    #[test]
    fn test_raw_content_passes_through() {
        let item = ContentItem::raw("payload".to_string());
        let resolved = resolve_content(&item, &Theme::black());
        let ResolvedBody::Raw(raw) = resolved.body else {
            panic!("expected raw");
        };
        assert_eq!(
            raw.downcast_ref::<String>().map(String::as_str),
            Some("payload")
        );
    }
}
