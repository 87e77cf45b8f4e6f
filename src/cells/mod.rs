//! Chart cells - per-kind configuration records and their draw calls.
//!
//! A cell owns the raw strings typed into its form. Nothing is validated
//! while editing (except closed choices); the strings are parsed when the
//! cell is drawn onto a [`Figure`], and any problem surfaces as an error
//! from [`Cell::draw`].

pub mod style;
pub mod values;

pub use values::{parse_list, Value};

use crate::error::{CellplotError, Result};
use crate::figure::{Figure, LineOptions, ScatterOptions, MAX_BINS};
use std::fmt;
use std::str::FromStr;
use style::{LineStyle, Marker, NamedColor, COLORS, LINE_STYLES, MARKERS};

/// Bins used when the histogram bins field is left empty.
pub const DEFAULT_BINS: usize = 10;

/// Extra marker size added to the line width for plots with explicit x.
const PLOT_MARKER_PADDING: f64 = 4.5;

/// Chart type of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Line plot.
    Plot,
    /// Scatter plot.
    Scatter,
    /// Bar chart.
    Bar,
    /// Histogram.
    Histogram,
    /// Pie chart.
    Pie,
}

impl CellKind {
    /// All kinds in menu order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Plot,
        CellKind::Scatter,
        CellKind::Bar,
        CellKind::Histogram,
        CellKind::Pie,
    ];

    /// Get the kind name.
    pub fn name(self) -> &'static str {
        match self {
            CellKind::Plot => "plot",
            CellKind::Scatter => "scatter",
            CellKind::Bar => "bar",
            CellKind::Histogram => "histogram",
            CellKind::Pie => "pie",
        }
    }

    /// Get the position in menu order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Get the next kind in menu order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous kind in menu order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Fields shown in the form of this kind, top to bottom.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            CellKind::Plot => &[
                FieldId::Label,
                FieldId::X,
                FieldId::Y,
                FieldId::Color,
                FieldId::LineWidth,
                FieldId::LineStyle,
                FieldId::Marker,
            ],
            CellKind::Scatter => &[
                FieldId::Label,
                FieldId::X,
                FieldId::Y,
                FieldId::Color,
                FieldId::Marker,
                FieldId::MarkerSize,
            ],
            CellKind::Bar => &[FieldId::Label, FieldId::X, FieldId::Y, FieldId::Color],
            CellKind::Histogram => &[FieldId::Label, FieldId::Data, FieldId::Bins, FieldId::Color],
            CellKind::Pie => &[FieldId::Label, FieldId::Data],
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellKind {
    type Err = CellplotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CellplotError::invalid_choice("graph type", s))
    }
}

/// Identifier of a cell, unique for the lifetime of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u64);

impl CellId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A form field of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Legend label (comma list of wedge labels for pies).
    Label,
    /// X values.
    X,
    /// Y values.
    Y,
    /// Series color.
    Color,
    /// Line width.
    LineWidth,
    /// Line style.
    LineStyle,
    /// Marker code.
    Marker,
    /// Marker size.
    MarkerSize,
    /// Histogram samples or pie wedges.
    Data,
    /// Histogram bin count.
    Bins,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    /// Free text.
    Text,
    /// One of a fixed list.
    Choice(&'static [&'static str]),
    /// Number stepped within a range.
    Spin {
        /// Lowest value.
        min: f64,
        /// Highest value.
        max: f64,
        /// Step per increment.
        step: f64,
    },
}

impl FieldId {
    /// Get the field name used in errors.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Label => "label",
            FieldId::X => "x",
            FieldId::Y => "y",
            FieldId::Color => "color",
            FieldId::LineWidth => "line width",
            FieldId::LineStyle => "line style",
            FieldId::Marker => "marker",
            FieldId::MarkerSize => "marker size",
            FieldId::Data => "data",
            FieldId::Bins => "bins",
        }
    }

    /// Get the caption shown above the field.
    pub fn caption(self, kind: CellKind) -> &'static str {
        match self {
            FieldId::Label if kind == CellKind::Pie => "Labels",
            FieldId::Label => "Label",
            FieldId::X => "x",
            FieldId::Y => "y",
            FieldId::Color => "Color",
            FieldId::LineWidth => "Line width",
            FieldId::LineStyle => "Line style",
            FieldId::Marker => "Marker",
            FieldId::MarkerSize => "Marker size",
            FieldId::Data => "Data",
            FieldId::Bins => "Bins",
        }
    }

    /// Get the input style.
    pub fn input(self) -> FieldInput {
        const SPIN: FieldInput = FieldInput::Spin {
            min: 0.0,
            max: 30.0,
            step: 0.5,
        };
        match self {
            FieldId::Color => FieldInput::Choice(&COLORS),
            FieldId::LineStyle => FieldInput::Choice(&LINE_STYLES),
            FieldId::Marker => FieldInput::Choice(&MARKERS),
            FieldId::LineWidth | FieldId::MarkerSize => SPIN,
            _ => FieldInput::Text,
        }
    }
}

/// Fields of a plot cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// X values, may be empty.
    pub x: String,
    /// Y values.
    pub y: String,
    /// Color name.
    pub color: String,
    /// Line width.
    pub line_width: String,
    /// Line style name.
    pub line_style: String,
    /// Marker code.
    pub marker: String,
}

/// Fields of a scatter cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterConfig {
    /// X values.
    pub x: String,
    /// Y values.
    pub y: String,
    /// Color name.
    pub color: String,
    /// Marker code.
    pub marker: String,
    /// Marker size.
    pub marker_size: String,
}

/// Fields of a bar cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    /// Bar positions.
    pub x: String,
    /// Bar heights.
    pub y: String,
    /// Color name.
    pub color: String,
}

/// Fields of a histogram cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    /// Samples.
    pub data: String,
    /// Bin count, empty for the default.
    pub bins: String,
    /// Color name.
    pub color: String,
}

/// Fields of a pie cell. Wedge labels live in the cell label.
#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    /// Wedge sizes.
    pub data: String,
}

/// Kind-specific configuration of a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellConfig {
    /// Line plot.
    Plot(PlotConfig),
    /// Scatter plot.
    Scatter(ScatterConfig),
    /// Bar chart.
    Bar(BarConfig),
    /// Histogram.
    Histogram(HistogramConfig),
    /// Pie chart.
    Pie(PieConfig),
}

impl CellConfig {
    /// Create the default configuration of a kind.
    pub fn new(kind: CellKind) -> Self {
        let color = NamedColor::DEFAULT.name().to_string();
        match kind {
            CellKind::Plot => CellConfig::Plot(PlotConfig {
                x: String::new(),
                y: String::new(),
                color,
                line_width: "1.5".to_string(),
                line_style: LineStyle::Solid.name().to_string(),
                marker: Marker::NONE.code().to_string(),
            }),
            CellKind::Scatter => CellConfig::Scatter(ScatterConfig {
                x: String::new(),
                y: String::new(),
                color,
                marker: Marker::POINT.code().to_string(),
                marker_size: "6.0".to_string(),
            }),
            CellKind::Bar => CellConfig::Bar(BarConfig {
                x: String::new(),
                y: String::new(),
                color,
            }),
            CellKind::Histogram => CellConfig::Histogram(HistogramConfig {
                data: String::new(),
                bins: String::new(),
                color,
            }),
            CellKind::Pie => CellConfig::Pie(PieConfig {
                data: String::new(),
            }),
        }
    }

    /// Get the kind of this configuration.
    pub fn kind(&self) -> CellKind {
        match self {
            CellConfig::Plot(_) => CellKind::Plot,
            CellConfig::Scatter(_) => CellKind::Scatter,
            CellConfig::Bar(_) => CellKind::Bar,
            CellConfig::Histogram(_) => CellKind::Histogram,
            CellConfig::Pie(_) => CellKind::Pie,
        }
    }
}

/// One configured chart item.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    label: String,
    config: CellConfig,
    failed: bool,
}

impl Cell {
    /// Create a cell of `kind` with default fields.
    pub fn new(id: CellId, kind: CellKind) -> Self {
        Self {
            id,
            label: String::new(),
            config: CellConfig::new(kind),
            failed: false,
        }
    }

    /// Get the cell id.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Get the cell kind.
    pub fn kind(&self) -> CellKind {
        self.config.kind()
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the kind-specific configuration.
    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    /// Check if the last render failed on this cell.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(crate) fn set_failed(&mut self, failed: bool) {
        self.failed = failed;
    }

    /// Fields of this cell, top to bottom.
    pub fn fields(&self) -> &'static [FieldId] {
        self.kind().fields()
    }

    /// Get the current text of a field.
    pub fn field(&self, id: FieldId) -> Option<&str> {
        if id == FieldId::Label {
            return Some(self.label.as_str());
        }
        let slot = match (&self.config, id) {
            (CellConfig::Plot(c), FieldId::X) => &c.x,
            (CellConfig::Plot(c), FieldId::Y) => &c.y,
            (CellConfig::Plot(c), FieldId::Color) => &c.color,
            (CellConfig::Plot(c), FieldId::LineWidth) => &c.line_width,
            (CellConfig::Plot(c), FieldId::LineStyle) => &c.line_style,
            (CellConfig::Plot(c), FieldId::Marker) => &c.marker,
            (CellConfig::Scatter(c), FieldId::X) => &c.x,
            (CellConfig::Scatter(c), FieldId::Y) => &c.y,
            (CellConfig::Scatter(c), FieldId::Color) => &c.color,
            (CellConfig::Scatter(c), FieldId::Marker) => &c.marker,
            (CellConfig::Scatter(c), FieldId::MarkerSize) => &c.marker_size,
            (CellConfig::Bar(c), FieldId::X) => &c.x,
            (CellConfig::Bar(c), FieldId::Y) => &c.y,
            (CellConfig::Bar(c), FieldId::Color) => &c.color,
            (CellConfig::Histogram(c), FieldId::Data) => &c.data,
            (CellConfig::Histogram(c), FieldId::Bins) => &c.bins,
            (CellConfig::Histogram(c), FieldId::Color) => &c.color,
            (CellConfig::Pie(c), FieldId::Data) => &c.data,
            _ => return None,
        };
        Some(slot.as_str())
    }

    fn field_mut(&mut self, id: FieldId) -> Result<&mut String> {
        if id == FieldId::Label {
            return Ok(&mut self.label);
        }
        let kind = self.kind();
        let slot = match (&mut self.config, id) {
            (CellConfig::Plot(c), FieldId::X) => &mut c.x,
            (CellConfig::Plot(c), FieldId::Y) => &mut c.y,
            (CellConfig::Plot(c), FieldId::Color) => &mut c.color,
            (CellConfig::Plot(c), FieldId::LineWidth) => &mut c.line_width,
            (CellConfig::Plot(c), FieldId::LineStyle) => &mut c.line_style,
            (CellConfig::Plot(c), FieldId::Marker) => &mut c.marker,
            (CellConfig::Scatter(c), FieldId::X) => &mut c.x,
            (CellConfig::Scatter(c), FieldId::Y) => &mut c.y,
            (CellConfig::Scatter(c), FieldId::Color) => &mut c.color,
            (CellConfig::Scatter(c), FieldId::Marker) => &mut c.marker,
            (CellConfig::Scatter(c), FieldId::MarkerSize) => &mut c.marker_size,
            (CellConfig::Bar(c), FieldId::X) => &mut c.x,
            (CellConfig::Bar(c), FieldId::Y) => &mut c.y,
            (CellConfig::Bar(c), FieldId::Color) => &mut c.color,
            (CellConfig::Histogram(c), FieldId::Data) => &mut c.data,
            (CellConfig::Histogram(c), FieldId::Bins) => &mut c.bins,
            (CellConfig::Histogram(c), FieldId::Color) => &mut c.color,
            (CellConfig::Pie(c), FieldId::Data) => &mut c.data,
            _ => {
                return Err(CellplotError::UnknownField {
                    kind,
                    field: id.name(),
                })
            },
        };
        Ok(slot)
    }

    /// Set a field. Choice fields only accept values from their list.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if let FieldInput::Choice(options) = id.input() {
            if !options.contains(&value.as_str()) {
                return Err(CellplotError::invalid_choice(id.name(), value));
            }
        }
        *self.field_mut(id)? = value;
        Ok(())
    }

    /// Step a field: choices move to the neighbouring option and spins move
    /// by one step within their range. Text fields are left alone.
    pub fn cycle_field(&mut self, id: FieldId, forward: bool) -> Result<()> {
        let slot = self.field_mut(id)?;
        match id.input() {
            FieldInput::Text => {},
            FieldInput::Choice(options) => {
                let len = options.len();
                let next = match options.iter().position(|o| *o == slot.as_str()) {
                    Some(i) if forward => (i + 1) % len,
                    Some(i) => (i + len - 1) % len,
                    None => 0,
                };
                *slot = options[next].to_string();
            },
            FieldInput::Spin { min, max, step } => {
                let current = slot.trim().parse::<f64>().unwrap_or(min);
                let stepped = if forward {
                    current + step
                } else {
                    current - step
                };
                *slot = format!("{:.1}", stepped.clamp(min, max));
            },
        }
        Ok(())
    }

    /// Forward this cell to the figure.
    pub fn draw(&self, figure: &mut Figure) -> Result<()> {
        match &self.config {
            CellConfig::Plot(c) => {
                let x = parse_list(&c.x);
                let y = parse_list(&c.y);
                let line_width = parse_number(&c.line_width)?;
                let marker_size = if x.is_empty() {
                    None
                } else {
                    Some(line_width + PLOT_MARKER_PADDING)
                };
                figure.plot(
                    &x,
                    &y,
                    LineOptions {
                        color: c.color.parse()?,
                        label: self.label.clone(),
                        line_width,
                        line_style: c.line_style.parse()?,
                        marker: c.marker.parse()?,
                        marker_size,
                    },
                )
            },
            CellConfig::Scatter(c) => {
                let size = parse_number(&c.marker_size)?;
                if size < 0.0 {
                    return Err(CellplotError::Negative {
                        field: "marker size",
                        value: size,
                    });
                }
                figure.scatter(
                    &parse_list(&c.x),
                    &parse_list(&c.y),
                    ScatterOptions {
                        color: c.color.parse()?,
                        label: self.label.clone(),
                        marker: c.marker.parse()?,
                        area: size * size,
                    },
                )
            },
            CellConfig::Bar(c) => figure.bar(
                &parse_list(&c.x),
                &parse_list(&c.y),
                c.color.parse()?,
                self.label.as_str(),
            ),
            CellConfig::Histogram(c) => {
                let bins = parse_bins(&c.bins)?;
                figure.hist(
                    &parse_list(&c.data),
                    bins,
                    c.color.parse()?,
                    self.label.as_str(),
                )
            },
            CellConfig::Pie(c) => figure.pie(&parse_list(&c.data), &parse_list(&self.label)),
        }
    }
}

/// Parse a spin value.
fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CellplotError::not_a_number(text))
}

/// Parse the histogram bins field, empty meaning [`DEFAULT_BINS`].
pub fn parse_bins(text: &str) -> Result<usize> {
    if text.is_empty() {
        return Ok(DEFAULT_BINS);
    }
    let bins = text
        .trim()
        .parse::<i64>()
        .map_err(|_| CellplotError::InvalidBins {
            value: text.to_string(),
        })?;
    if bins <= 0 {
        return Err(CellplotError::NonPositiveBins { bins });
    }
    match usize::try_from(bins) {
        Ok(bins) if bins <= MAX_BINS => Ok(bins),
        _ => Err(CellplotError::TooManyBins {
            bins: bins as u64,
            max: MAX_BINS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in CellKind::ALL {
            assert_eq!(kind.name().parse::<CellKind>().unwrap(), kind);
        }
        assert!("area".parse::<CellKind>().is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(CellKind::Pie.next(), CellKind::Plot);
        assert_eq!(CellKind::Plot.prev(), CellKind::Pie);
    }

    #[test]
    fn defaults_match_form() {
        let plot = Cell::new(CellId::new(1), CellKind::Plot);
        assert_eq!(plot.field(FieldId::Color), Some("red"));
        assert_eq!(plot.field(FieldId::LineWidth), Some("1.5"));
        assert_eq!(plot.field(FieldId::LineStyle), Some("solid"));
        assert_eq!(plot.field(FieldId::Marker), Some(" "));

        let scatter = Cell::new(CellId::new(2), CellKind::Scatter);
        assert_eq!(scatter.field(FieldId::Marker), Some("."));
        assert_eq!(scatter.field(FieldId::MarkerSize), Some("6.0"));
    }

    #[test]
    fn pie_label_caption_is_plural() {
        assert_eq!(FieldId::Label.caption(CellKind::Pie), "Labels");
        assert_eq!(FieldId::Label.caption(CellKind::Bar), "Label");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut pie = Cell::new(CellId::new(1), CellKind::Pie);
        assert!(pie.field(FieldId::X).is_none());
        assert!(matches!(
            pie.set_field(FieldId::X, "1"),
            Err(CellplotError::UnknownField { .. })
        ));
    }

    #[test]
    fn choice_fields_reject_unknown_values() {
        let mut bar = Cell::new(CellId::new(1), CellKind::Bar);
        assert!(bar.set_field(FieldId::Color, "chartreuse").is_err());
        bar.set_field(FieldId::Color, "teal").unwrap();
        assert_eq!(bar.field(FieldId::Color), Some("teal"));
    }

    #[test]
    fn cycling_wraps_choices_and_clamps_spins() {
        let mut plot = Cell::new(CellId::new(1), CellKind::Plot);
        plot.cycle_field(FieldId::Color, false).unwrap();
        assert_eq!(plot.field(FieldId::Color), Some("olive"));

        plot.set_field(FieldId::LineWidth, "29.8").unwrap();
        plot.cycle_field(FieldId::LineWidth, true).unwrap();
        assert_eq!(plot.field(FieldId::LineWidth), Some("30.0"));

        plot.set_field(FieldId::LineWidth, "0.2").unwrap();
        plot.cycle_field(FieldId::LineWidth, false).unwrap();
        assert_eq!(plot.field(FieldId::LineWidth), Some("0.0"));
    }

    #[test]
    fn bins_parsing() {
        assert_eq!(parse_bins("").unwrap(), DEFAULT_BINS);
        assert_eq!(parse_bins(" 4 ").unwrap(), 4);
        assert!(matches!(
            parse_bins("2.5"),
            Err(CellplotError::InvalidBins { .. })
        ));
        assert!(matches!(
            parse_bins("0"),
            Err(CellplotError::NonPositiveBins { bins: 0 })
        ));
        assert!(matches!(
            parse_bins("1000000000000000000"),
            Err(CellplotError::TooManyBins {
                bins: 1_000_000_000_000_000_000,
                ..
            })
        ));
        assert!(matches!(
            parse_bins("99999999999999999999"),
            Err(CellplotError::InvalidBins { .. })
        ));
    }

    #[test]
    fn plot_without_x_uses_indices() {
        let mut cell = Cell::new(CellId::new(1), CellKind::Plot);
        cell.set_field(FieldId::Y, "4, 5, 6").unwrap();
        let mut fig = Figure::new();
        cell.draw(&mut fig).unwrap();
        let b = fig.bounds().unwrap();
        assert_eq!((b.x_min, b.x_max), (0.0, 2.0));
    }

    #[test]
    fn bad_line_width_fails_draw() {
        let mut cell = Cell::new(CellId::new(1), CellKind::Plot);
        cell.set_field(FieldId::Y, "1, 2").unwrap();
        cell.set_field(FieldId::LineWidth, "thick").unwrap();
        let err = cell.draw(&mut Figure::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not convert string to float: 'thick'"
        );
    }

    #[test]
    fn negative_marker_size_fails_draw() {
        let mut cell = Cell::new(CellId::new(1), CellKind::Scatter);
        cell.set_field(FieldId::MarkerSize, "-2").unwrap();
        assert!(matches!(
            cell.draw(&mut Figure::new()),
            Err(CellplotError::Negative { .. })
        ));
    }

    #[test]
    fn pie_uses_label_field_as_wedge_labels() {
        let mut cell = Cell::new(CellId::new(1), CellKind::Pie);
        cell.set_field(FieldId::Data, "50, 30, 20").unwrap();
        cell.set_field(FieldId::Label, "a, b, c").unwrap();
        let mut fig = Figure::new();
        cell.draw(&mut fig).unwrap();
        let labels: Vec<_> = fig
            .pie_wedges()
            .unwrap()
            .iter()
            .map(|w| w.label.clone().unwrap())
            .collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }
}
