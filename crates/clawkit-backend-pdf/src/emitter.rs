//! Deck-to-PDF emission

use crate::shapes::{circle_points, rounded_rect_points, wedge_points};
use clawkit_deck::{text_width, DrawCmd, Font, Page, Stroke, TextAlign};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Pt, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// PDF emission errors
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Deck has no pages")]
    EmptyDeck,

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a deck to `path` as a multi-page PDF
pub fn write_deck(title: &str, pages: &[Page], path: impl AsRef<Path>) -> Result<(), PdfError> {
    let first = pages.first().ok_or(PdfError::EmptyDeck)?;

    let (doc, page_idx, layer_idx) =
        PdfDocument::new(title, mm(first.width), mm(first.height), "content");
    let fonts = Fonts::load(&doc)?;

    render_page(&doc.get_page(page_idx).get_layer(layer_idx), first, &fonts);
    for page in &pages[1..] {
        let (page_idx, layer_idx) = doc.add_page(mm(page.width), mm(page.height), "content");
        render_page(&doc.get_page(page_idx).get_layer(layer_idx), page, &fonts);
    }

    let file = File::create(path.as_ref())?;
    doc.save(&mut BufWriter::new(file))?;
    Ok(())
}

/// The three built-in faces the decks use
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, PdfError> {
        Ok(Self {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
            oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.regular,
            Font::HelveticaBold => &self.bold,
            Font::HelveticaOblique => &self.oblique,
        }
    }
}

fn mm(pt: f32) -> Mm {
    Mm::from(Pt(pt))
}

fn point(x: f32, y: f32) -> Point {
    Point::new(mm(x), mm(y))
}

fn pdf_color(color: clawkit_core::Color) -> PdfColor {
    let [r, g, b] = color.to_f32();
    PdfColor::Rgb(Rgb::new(r, g, b, None))
}

fn ring(points: &[(f32, f32)]) -> Vec<(Point, bool)> {
    points.iter().map(|&(x, y)| (point(x, y), false)).collect()
}

fn fill_polygon(layer: &PdfLayerReference, points: &[(f32, f32)], mode: PaintMode) {
    layer.add_polygon(Polygon {
        rings: vec![ring(points)],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

fn apply_stroke(layer: &PdfLayerReference, stroke: &Stroke) {
    layer.set_outline_color(pdf_color(stroke.color));
    layer.set_outline_thickness(stroke.width);
}

fn render_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for cmd in &page.commands {
        match cmd {
            DrawCmd::Rect {
                x,
                y,
                width,
                height,
                corner_radius,
                fill,
                stroke,
            } => {
                let points = rounded_rect_points(*x, *y, *width, *height, *corner_radius);
                if let Some(fill) = fill {
                    layer.set_fill_color(pdf_color(*fill));
                }
                if let Some(stroke) = stroke {
                    apply_stroke(layer, stroke);
                }
                let mode = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => PaintMode::FillStroke,
                    (true, false) => PaintMode::Fill,
                    (false, true) => PaintMode::Stroke,
                    (false, false) => continue,
                };
                fill_polygon(layer, &points, mode);
            }

            DrawCmd::Circle {
                cx,
                cy,
                radius,
                fill,
            } => {
                layer.set_fill_color(pdf_color(*fill));
                fill_polygon(layer, &circle_points(*cx, *cy, *radius), PaintMode::Fill);
            }

            DrawCmd::Wedge {
                cx,
                cy,
                radius,
                start_deg,
                sweep_deg,
                fill,
            } => {
                layer.set_fill_color(pdf_color(*fill));
                fill_polygon(
                    layer,
                    &wedge_points(*cx, *cy, *radius, *start_deg, *sweep_deg),
                    PaintMode::Fill,
                );
            }

            DrawCmd::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                dash,
            } => {
                apply_stroke(layer, stroke);
                if let Some((on, off)) = dash {
                    layer.set_line_dash_pattern(LineDashPattern {
                        offset: 0,
                        dash_1: Some(*on as i64),
                        gap_1: Some(*off as i64),
                        ..LineDashPattern::default()
                    });
                }
                layer.add_line(Line {
                    points: vec![(point(*x1, *y1), false), (point(*x2, *y2), false)],
                    is_closed: false,
                });
                if dash.is_some() {
                    layer.set_line_dash_pattern(LineDashPattern::default());
                }
            }

            DrawCmd::Text {
                x,
                y,
                content,
                font,
                size,
                color,
                align,
            } => {
                let left = match align {
                    TextAlign::Left => *x,
                    TextAlign::Center => x - text_width(content, *font, *size) / 2.0,
                    TextAlign::Right => x - text_width(content, *font, *size),
                };
                layer.set_fill_color(pdf_color(*color));
                layer.use_text(content.clone(), *size, mm(left), mm(*y), fonts.get(*font));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawkit_core::Color;
    use std::io::Read;

    fn sample_page() -> Page {
        let mut page = Page::landscape_letter();
        page.fill_rect(0.0, 0.0, 792.0, 612.0, Color::hex(0x030712));
        page.round_rect(50.0, 50.0, 200.0, 100.0, 10.0, Color::hex(0x111827));
        page.circle(400.0, 300.0, 60.0, Color::hex(0x8B5CF6));
        page.wedge(500.0, 300.0, 80.0, 0.0, 252.0, Color::hex(0x3B82F6));
        page.dashed_line(
            100.0,
            330.0,
            700.0,
            330.0,
            Stroke {
                color: Color::hex(0x8B5CF6),
                width: 3.0,
            },
            (6.0, 3.0),
        );
        page.text_centered(396.0, 500.0, "Clawdbot Arena", Font::HelveticaBold, 48.0, Color::WHITE);
        page
    }

    #[test]
    fn test_writes_pdf_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pdf");

        write_deck("test deck", &[sample_page(), sample_page()], &path).unwrap();

        let mut header = [0u8; 5];
        File::open(&path).unwrap().read_exact(&mut header).unwrap();
        assert_eq!(&header, b"%PDF-");
    }

    #[test]
    fn test_empty_deck_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");
        let err = write_deck("empty", &[], &path).unwrap_err();
        assert!(matches!(err, PdfError::EmptyDeck));
        assert!(!path.exists());
    }
}
