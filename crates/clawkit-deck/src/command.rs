//! Draw commands and pages
//!
//! Pages collect draw commands through canvas-style helpers so the deck
//! definitions read like the layout tables they transcribe. Y grows upward.

use clawkit_core::Color;
use serde::{Deserialize, Serialize};

/// Landscape letter width in points
pub const PAGE_WIDTH: f32 = 792.0;
/// Landscape letter height in points
pub const PAGE_HEIGHT: f32 = 612.0;

/// Built-in font faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// `x` is the left edge
    Left,
    /// `x` is the center
    Center,
    /// `x` is the right edge
    Right,
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Axis-aligned rectangle, optionally rounded, filled and/or stroked
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        corner_radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Filled circle
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Color,
    },
    /// Filled pie wedge; angles in degrees, counter-clockwise from +x
    Wedge {
        cx: f32,
        cy: f32,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        fill: Color,
    },
    /// Straight stroked line, optionally dashed as `(on, off)` lengths
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
        dash: Option<(f32, f32)>,
    },
    /// A single text run
    Text {
        x: f32,
        y: f32,
        content: String,
        font: Font,
        size: f32,
        color: Color,
        align: TextAlign,
    },
}

/// One page of a deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

impl Page {
    /// A blank landscape-letter page
    pub fn landscape_letter() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            commands: Vec::new(),
        }
    }

    /// Filled rectangle
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Color) {
        self.commands.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill: Some(fill),
            stroke: None,
        });
    }

    /// Filled rounded rectangle
    pub fn round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, r: f32, fill: Color) {
        self.commands.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            corner_radius: r,
            fill: Some(fill),
            stroke: None,
        });
    }

    /// Filled and stroked rounded rectangle
    #[allow(clippy::too_many_arguments)]
    pub fn round_rect_stroked(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        r: f32,
        fill: Color,
        stroke: Stroke,
    ) {
        self.commands.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            corner_radius: r,
            fill: Some(fill),
            stroke: Some(stroke),
        });
    }

    /// Filled circle
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32, fill: Color) {
        self.commands.push(DrawCmd::Circle {
            cx,
            cy,
            radius,
            fill,
        });
    }

    /// Filled pie wedge
    pub fn wedge(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        fill: Color,
    ) {
        self.commands.push(DrawCmd::Wedge {
            cx,
            cy,
            radius,
            start_deg,
            sweep_deg,
            fill,
        });
    }

    /// Solid line
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke) {
        self.commands.push(DrawCmd::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            dash: None,
        });
    }

    /// Dashed line with `(on, off)` pattern
    #[allow(clippy::too_many_arguments)]
    pub fn dashed_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
        dash: (f32, f32),
    ) {
        self.commands.push(DrawCmd::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            dash: Some(dash),
        });
    }

    /// Left-anchored text
    pub fn text(&mut self, x: f32, y: f32, s: impl Into<String>, font: Font, size: f32, color: Color) {
        self.push_text(x, y, s, font, size, color, TextAlign::Left);
    }

    /// Center-anchored text
    pub fn text_centered(
        &mut self,
        cx: f32,
        y: f32,
        s: impl Into<String>,
        font: Font,
        size: f32,
        color: Color,
    ) {
        self.push_text(cx, y, s, font, size, color, TextAlign::Center);
    }

    /// Right-anchored text
    pub fn text_right(
        &mut self,
        x: f32,
        y: f32,
        s: impl Into<String>,
        font: Font,
        size: f32,
        color: Color,
    ) {
        self.push_text(x, y, s, font, size, color, TextAlign::Right);
    }

    #[allow(clippy::too_many_arguments)]
    fn push_text(
        &mut self,
        x: f32,
        y: f32,
        s: impl Into<String>,
        font: Font,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        self.commands.push(DrawCmd::Text {
            x,
            y,
            content: s.into(),
            font,
            size,
            color,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_dimensions() {
        let page = Page::landscape_letter();
        assert_eq!(page.width, 792.0);
        assert_eq!(page.height, 612.0);
        assert!(page.commands.is_empty());
    }

    #[test]
    fn test_helpers_append() {
        let mut page = Page::landscape_letter();
        page.fill_rect(0.0, 0.0, 10.0, 10.0, Color::BLACK);
        page.circle(5.0, 5.0, 2.0, Color::WHITE);
        page.text(1.0, 1.0, "hi", Font::Helvetica, 12.0, Color::WHITE);
        assert_eq!(page.commands.len(), 3);

        match &page.commands[2] {
            DrawCmd::Text { content, align, .. } => {
                assert_eq!(content, "hi");
                assert_eq!(*align, TextAlign::Left);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_serializes() {
        let mut page = Page::landscape_letter();
        page.round_rect(30.0, 532.0, 732.0, 60.0, 10.0, Color::hex(0x12121A));
        let json = serde_json::to_string(&page).unwrap();
        let decoded: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, page);
    }
}
