//! Helvetica width approximation
//!
//! Centered and right-aligned runs, and the cursor-advanced betting-flow
//! strip, need a width estimate for the built-in faces. The bucketed
//! advances below track real Helvetica metrics closely enough for slide
//! layout; nothing downstream needs exact text extents.

use crate::command::Font;

/// Approximate advance of one character, in 1/1000 em
fn char_advance(ch: char) -> u32 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 225,
        'I' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' | '"' | ' ' => 320,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 890,
        'A'..='Z' | '0'..='9' | '$' | '+' | '#' | '&' | '?' => 660,
        _ => 520,
    }
}

/// Estimated width of a run, in points
pub fn text_width(s: &str, font: Font, size: f32) -> f32 {
    let em_units: u32 = s.chars().map(char_advance).sum();
    let bold_factor = match font {
        Font::HelveticaBold => 1.05,
        Font::Helvetica | Font::HelveticaOblique => 1.0,
    };
    em_units as f32 / 1000.0 * size * bold_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(text_width("", Font::Helvetica, 12.0), 0.0);
    }

    #[test]
    fn test_scales_with_size() {
        let small = text_width("Arena", Font::Helvetica, 10.0);
        let large = text_width("Arena", Font::Helvetica, 20.0);
        assert!((large - small * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_bold_wider() {
        let regular = text_width("Arena", Font::Helvetica, 14.0);
        let bold = text_width("Arena", Font::HelveticaBold, 14.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_narrow_vs_wide() {
        let narrow = text_width("iiii", Font::Helvetica, 12.0);
        let wide = text_width("mmmm", Font::Helvetica, 12.0);
        assert!(wide > narrow * 2.0);
    }

    #[test]
    fn test_plausible_magnitude() {
        // ~11 chars at 11pt should land in the 50-90pt range
        let w = text_width("Bot A wins!", Font::Helvetica, 11.0);
        assert!(w > 50.0 && w < 90.0, "width was {w}");
    }
}
