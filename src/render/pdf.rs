// PDF export using printpdf for vector-based output: one page per slide,
// slides resolved against the deck theme in order

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use thiserror::Error;
use tracing::{debug, warn};

use super::resolved::{ResolvedBody, ResolvedColumn, ResolvedContent, ResolvedSlide, TextSpan};
use super::resolver::resolve_deck;
use crate::deck::{Deck, MediaKind};
use crate::theme::{Color as ThemeColor, FontDesc, FontFamily, FontWeight};

/// Error type for PDF export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdf error: {0}")]
    Pdf(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("image error: {0}")]
    Image(String),
}

// Page width is fixed; height follows the requested pixel aspect ratio.
// 270mm fits nicely on A4/Letter.
const PAGE_WIDTH_MM: f32 = 270.0;

/// PDF exporter for batch slide output
pub struct PdfExporter {
    doc: PdfDocumentReference,
    page_width_mm: f32,
    page_height_mm: f32,
    pixel_width: f32,
    body: IndirectFontRef,
    body_bold: IndirectFontRef,
    body_italic: IndirectFontRef,
    mono: IndirectFontRef,
    mono_bold: IndirectFontRef,
    current_page: Option<(PdfPageIndex, PdfLayerIndex)>,
    slide_count: usize,
}

impl PdfExporter {
    /// Create an exporter targeting the given pixel size (the presenter's
    /// design resolution)
    pub fn new(title: &str, pixel_size: (f32, f32)) -> Result<Self, ExportError> {
        let (pixel_width, pixel_height) = pixel_size;
        let page_width_mm = PAGE_WIDTH_MM;
        let page_height_mm = page_width_mm * pixel_height / pixel_width;

        let (doc, page1, layer1) =
            PdfDocument::new(title, Mm(page_width_mm), Mm(page_height_mm), "Layer 1");

        let builtin = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| ExportError::Font(format!("failed to add font: {e:?}")))
        };

        let body = builtin(BuiltinFont::Helvetica)?;
        let body_bold = builtin(BuiltinFont::HelveticaBold)?;
        let body_italic = builtin(BuiltinFont::HelveticaOblique)?;
        let mono = builtin(BuiltinFont::Courier)?;
        let mono_bold = builtin(BuiltinFont::CourierBold)?;

        Ok(Self {
            doc,
            page_width_mm,
            page_height_mm,
            pixel_width,
            body,
            body_bold,
            body_italic,
            mono,
            mono_bold,
            current_page: Some((page1, layer1)),
            slide_count: 0,
        })
    }

    fn px_to_mm(&self, px: f32) -> f32 {
        px * (self.page_width_mm / self.pixel_width)
    }

    fn font_for(&self, font: &FontDesc) -> &IndirectFontRef {
        match (font.family, font.weight, font.italic) {
            (FontFamily::Monospace, FontWeight::Bold | FontWeight::Heavy, _) => &self.mono_bold,
            (FontFamily::Monospace, _, _) => &self.mono,
            (FontFamily::Default, FontWeight::Bold | FontWeight::Heavy, _) => &self.body_bold,
            (FontFamily::Default, _, true) => &self.body_italic,
            (FontFamily::Default, _, false) => &self.body,
        }
    }

    /// Render one resolved slide to its own page. `assets_dir` anchors
    /// relative media paths.
    pub fn render_slide(
        &mut self,
        slide: &ResolvedSlide,
        assets_dir: &Path,
    ) -> Result<(), ExportError> {
        if self.slide_count > 0 {
            let (page, layer) =
                self.doc
                    .add_page(Mm(self.page_width_mm), Mm(self.page_height_mm), "Layer 1");
            self.current_page = Some((page, layer));
        }

        let (page_idx, layer_idx) = self.current_page.expect("a page is always open");
        let layer = self.doc.get_page(page_idx).get_layer(layer_idx);

        self.fill_rect(
            &layer,
            0.0,
            0.0,
            self.page_width_mm,
            self.page_height_mm,
            &slide.background,
        );

        let padding_mm = self.px_to_mm(slide.padding);
        let mut y = self.page_height_mm - padding_mm;
        self.render_items(
            &layer,
            &slide.items,
            padding_mm,
            self.page_width_mm - 2.0 * padding_mm,
            &mut y,
            assets_dir,
        )?;

        self.slide_count += 1;
        Ok(())
    }

    fn render_items(
        &self,
        layer: &PdfLayerReference,
        items: &[ResolvedContent],
        x: f32,
        width: f32,
        y: &mut f32,
        assets_dir: &Path,
    ) -> Result<(), ExportError> {
        for item in items {
            match &item.body {
                ResolvedBody::Title { title, subtitle } => {
                    self.draw_text_block(layer, title, x, y);
                    if let Some(subtitle) = subtitle {
                        self.draw_text_block(layer, subtitle, x, y);
                    }
                    // titles keep the original's bottom spacing
                    *y -= self.px_to_mm(20.0);
                }
                ResolvedBody::Text(span) => {
                    self.draw_text_block(layer, span, x, y);
                }
                ResolvedBody::Bullets { style, items } => {
                    for span in items {
                        let marker = TextSpan::new(
                            format!("{} {}", style.marker(), span.text),
                            span.foreground,
                        );
                        self.draw_text_block(layer, &marker, x, y);
                    }
                }
                ResolvedBody::Code(code) => {
                    // exports show the full block; the highlight cursor is
                    // presentation state
                    for line in code.styled(None) {
                        let size_mm = self.px_to_mm(code.theme.font.size);
                        let mut span_x = x;
                        for span in &line.spans {
                            layer.set_fill_color(pdf_color(&span.color));
                            layer.use_text(
                                &span.text,
                                pt_size(size_mm),
                                Mm(span_x),
                                Mm(*y - size_mm),
                                self.font_for(&span.font),
                            );
                            span_x += span.text.chars().count() as f32 * size_mm * 0.5;
                        }
                        *y -= size_mm * 1.2;
                    }
                }
                ResolvedBody::Media(kind) => {
                    self.render_media(layer, kind, x, width, y, assets_dir)?;
                }
                ResolvedBody::Columns(columns) => {
                    self.render_columns(layer, columns, x, width, y, assets_dir)?;
                }
                ResolvedBody::Raw(_) => {
                    debug!("skipping raw view in PDF export");
                }
            }
        }
        Ok(())
    }

    fn render_columns(
        &self,
        layer: &PdfLayerReference,
        columns: &[ResolvedColumn],
        x: f32,
        width: f32,
        y: &mut f32,
        assets_dir: &Path,
    ) -> Result<(), ExportError> {
        let top = *y;
        let mut lowest = *y;
        let mut column_x = x;
        for column in columns {
            let column_width = width * column.width_fraction;
            let mut column_y = top;
            self.render_items(
                layer,
                &column.items,
                column_x,
                column_width,
                &mut column_y,
                assets_dir,
            )?;
            lowest = lowest.min(column_y);
            column_x += column_width;
        }
        *y = lowest;
        Ok(())
    }

    /// Draw a text span line by line, advancing the cursor
    fn draw_text_block(&self, layer: &PdfLayerReference, span: &TextSpan, x: f32, y: &mut f32) {
        let size_mm = self.px_to_mm(span.foreground.font.size);
        layer.set_fill_color(pdf_color(&span.foreground.color));
        for line in span.text.lines() {
            if !line.is_empty() {
                layer.use_text(
                    line,
                    pt_size(size_mm),
                    Mm(x),
                    Mm(*y - size_mm),
                    self.font_for(&span.foreground.font),
                );
            }
            *y -= size_mm * 1.2;
        }
    }

    fn render_media(
        &self,
        layer: &PdfLayerReference,
        kind: &MediaKind,
        x: f32,
        width: f32,
        y: &mut f32,
        assets_dir: &Path,
    ) -> Result<(), ExportError> {
        let name = match kind {
            MediaKind::AssetImage(name) | MediaKind::BundleImage(name) => name,
            MediaKind::RemoteImage(url) => {
                warn!(url = %url, "remote images are not fetched during PDF export");
                return Ok(());
            }
            MediaKind::BundleVideo { name, .. } => {
                debug!(name = %name, "skipping video in PDF export");
                return Ok(());
            }
        };

        let path = assets_dir.join(name);
        if !path.exists() {
            warn!(path = %path.display(), "media asset missing, skipping");
            return Ok(());
        }

        let dynamic_image = ::image::open(&path)
            .map_err(|e| ExportError::Image(format!("failed to load image: {e}")))?;
        let rgb_image = dynamic_image.to_rgb8();
        let (img_width, img_height) = rgb_image.dimensions();

        let pdf_image = Image::from(ImageXObject {
            width: Px(img_width as usize),
            height: Px(img_height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: rgb_image.into_raw(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        });

        // fit to the available width, keep aspect ratio
        let aspect = img_width as f32 / img_height as f32;
        let drawn_width = width;
        let drawn_height = drawn_width / aspect;
        *y -= drawn_height;

        pdf_image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(*y)),
                scale_x: Some(drawn_width / img_width as f32),
                scale_y: Some(drawn_height / img_height as f32),
                ..Default::default()
            },
        );

        Ok(())
    }

    fn fill_rect(
        &self,
        layer: &PdfLayerReference,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &ThemeColor,
    ) {
        let points = vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y + height)), false),
            (Point::new(Mm(x), Mm(y + height)), false),
        ];
        let polygon = Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };
        layer.set_fill_color(pdf_color(color));
        layer.add_polygon(polygon);
    }

    /// Finalize the PDF and save to file
    pub fn finalize(self, output_path: &Path) -> Result<(), ExportError> {
        let file = File::create(output_path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Pdf(format!("failed to save PDF: {e:?}")))?;
        Ok(())
    }
}

/// Export a deck to PDF: every slide theme-resolved and rendered to one
/// page, in slide order
pub fn export_pdf(
    deck: &Deck,
    pixel_size: (f32, f32),
    assets_dir: &Path,
    output_path: &Path,
) -> Result<(), ExportError> {
    let mut exporter = PdfExporter::new(deck.title_text(), pixel_size)?;

    for slide in resolve_deck(deck) {
        exporter.render_slide(&slide, assets_dir)?;
    }

    exporter.finalize(output_path)?;
    debug!(path = %output_path.display(), "PDF export complete");
    Ok(())
}

/// printpdf wants points; 1 point = 0.3528mm
fn pt_size(size_mm: f32) -> f32 {
    size_mm / 0.3528
}

fn pdf_color(color: &ThemeColor) -> Color {
    Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}
