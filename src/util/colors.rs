//! Terminal colors for named palette colors and marker codes.

use crate::cells::style::{LineStyle, Marker, NamedColor};
use ratatui::style::Color;
use ratatui::symbols;

/// Background of a cell whose last render failed (`#FFCCCC`).
pub const FAILED_CELL_BG: Color = Color::Rgb(255, 204, 204);

/// Foreground used on top of [`FAILED_CELL_BG`].
pub const FAILED_CELL_FG: Color = Color::Rgb(40, 40, 40);

impl NamedColor {
    /// Map to an RGB terminal color.
    pub fn color(self) -> Color {
        let (r, g, b) = match self.name() {
            "red" => (255, 0, 0),
            "blue" => (0, 0, 255),
            "green" => (0, 128, 0),
            "yellow" => (255, 255, 0),
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "purple" => (128, 0, 128),
            "orange" => (255, 165, 0),
            "pink" => (255, 192, 203),
            "brown" => (165, 42, 42),
            "gray" => (128, 128, 128),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "lime" => (0, 255, 0),
            "navy" => (0, 0, 128),
            "gold" => (255, 215, 0),
            "teal" => (0, 128, 128),
            "violet" => (238, 130, 238),
            "indigo" => (75, 0, 130),
            "olive" => (128, 128, 0),
            _ => (255, 255, 255),
        };
        Color::Rgb(r, g, b)
    }
}

/// Closest terminal glyph for a marker code, `None` for the blank marker.
pub fn marker_symbol(marker: Marker) -> Option<symbols::Marker> {
    if marker.is_none() {
        return None;
    }
    Some(match marker.code() {
        "." | "," => symbols::Marker::Dot,
        "o" | "s" | "p" | "*" | "h" | "H" | "D" | "d" => symbols::Marker::Block,
        "v" | "^" | "<" | ">" | "1" | "2" | "3" | "4" | "|" | "_" => symbols::Marker::Bar,
        _ => symbols::Marker::HalfBlock,
    })
}

/// Glyph used to draw a line of the given style.
pub fn line_symbol(style: LineStyle) -> symbols::Marker {
    match style {
        LineStyle::Solid | LineStyle::None => symbols::Marker::Braille,
        LineStyle::Dashed | LineStyle::DashDot => symbols::Marker::HalfBlock,
        LineStyle::Dotted => symbols::Marker::Dot,
    }
}
