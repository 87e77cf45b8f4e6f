//! Style vocabularies offered by the cell forms.

use crate::error::{CellplotError, Result};
use std::fmt;
use std::str::FromStr;

/// Colors offered by every color field, first entry is the default.
pub const COLORS: [&str; 20] = [
    "red", "blue", "green", "yellow", "black", "white", "purple", "orange", "pink", "brown",
    "gray", "cyan", "magenta", "lime", "navy", "gold", "teal", "violet", "indigo", "olive",
];

/// Marker codes, `" "` means no marker.
pub const MARKERS: [&str; 24] = [
    " ", ".", ",", "o", "v", "^", "<", ">", "1", "2", "3", "4", "s", "p", "*", "h", "H", "+", "x",
    "X", "D", "d", "|", "_",
];

/// Line style names in menu order.
pub const LINE_STYLES: [&str; 5] = ["solid", "dashed", "dashdot", "dotted", "None"];

/// A color from [`COLORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor(&'static str);

impl NamedColor {
    /// Default color of new cells.
    pub const DEFAULT: NamedColor = NamedColor(COLORS[0]);

    /// Get the color name.
    pub fn name(self) -> &'static str {
        self.0
    }

    /// Color used for the n-th wedge of a pie, cycling through the palette.
    pub fn cycle(n: usize) -> Self {
        // Skip white and black, they vanish against the gruvbox backgrounds.
        const WEDGES: [usize; 10] = [1, 7, 2, 0, 6, 9, 8, 10, 19, 11];
        NamedColor(COLORS[WEDGES[n % WEDGES.len()]])
    }
}

impl FromStr for NamedColor {
    type Err = CellplotError;

    fn from_str(s: &str) -> Result<Self> {
        COLORS
            .into_iter()
            .find(|c| *c == s)
            .map(NamedColor)
            .ok_or_else(|| CellplotError::invalid_choice("color", s))
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A marker from [`MARKERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(&'static str);

impl Marker {
    /// No marker.
    pub const NONE: Marker = Marker(MARKERS[0]);
    /// Point marker, the scatter default.
    pub const POINT: Marker = Marker(MARKERS[1]);

    /// Get the marker code.
    pub fn code(self) -> &'static str {
        self.0
    }

    /// Check if this is the blank marker.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl FromStr for Marker {
    type Err = CellplotError;

    fn from_str(s: &str) -> Result<Self> {
        MARKERS
            .into_iter()
            .find(|m| *m == s)
            .map(Marker)
            .ok_or_else(|| CellplotError::invalid_choice("marker", s))
    }
}

/// Line style of a plot series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dash-dot line.
    DashDot,
    /// Dotted line.
    Dotted,
    /// No line, markers only.
    None,
}

impl LineStyle {
    /// Get the style name as shown in the form.
    pub fn name(self) -> &'static str {
        match self {
            LineStyle::Solid => LINE_STYLES[0],
            LineStyle::Dashed => LINE_STYLES[1],
            LineStyle::DashDot => LINE_STYLES[2],
            LineStyle::Dotted => LINE_STYLES[3],
            LineStyle::None => LINE_STYLES[4],
        }
    }

    /// Check if a line is drawn at all.
    pub fn is_visible(self) -> bool {
        self != LineStyle::None
    }
}

impl FromStr for LineStyle {
    type Err = CellplotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solid" => Ok(LineStyle::Solid),
            "dashed" => Ok(LineStyle::Dashed),
            "dashdot" => Ok(LineStyle::DashDot),
            "dotted" => Ok(LineStyle::Dotted),
            "None" => Ok(LineStyle::None),
            other => Err(CellplotError::invalid_choice("line style", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_style_parses() {
        for name in LINE_STYLES {
            assert_eq!(name.parse::<LineStyle>().unwrap().name(), name);
        }
        for name in COLORS {
            assert_eq!(name.parse::<NamedColor>().unwrap().name(), name);
        }
        for code in MARKERS {
            assert_eq!(code.parse::<Marker>().unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!("chartreuse".parse::<NamedColor>().is_err());
    }

    #[test]
    fn wedge_colors_avoid_black_and_white() {
        for n in 0..25 {
            let c = NamedColor::cycle(n);
            assert_ne!(c.name(), "white");
            assert_ne!(c.name(), "black");
        }
    }
}
