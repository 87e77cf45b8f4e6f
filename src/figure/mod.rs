//! Figure feature - the plotting collaborator and its overlay.
//!
//! A [`Figure`] collects series the way a plotting library does: each call
//! validates its inputs and either appends a series or fails with a
//! descriptive error. The figure never draws anything itself; the overlay in
//! [`ui`] turns the collected series into ratatui widgets.

mod histogram;
pub mod ui;

pub use histogram::{bin_counts, HistogramBin, MAX_BINS};

use crate::cells::style::{LineStyle, Marker, NamedColor};
use crate::cells::values::{numbers, Value};
use crate::error::{CellplotError, Result};

/// Bar width in x units.
pub const BAR_WIDTH: f64 = 0.8;

/// Figure-wide decorations, independent of the cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureOptions {
    /// Figure title, empty for none.
    pub title: String,
    /// X axis label, empty for none.
    pub x_label: String,
    /// Y axis label, empty for none.
    pub y_label: String,
    /// Show a legend of labelled series.
    pub legend: bool,
    /// Draw grid lines.
    pub grid: bool,
}

/// Style of a line series.
#[derive(Debug, Clone)]
pub struct LineOptions {
    /// Line and marker color.
    pub color: NamedColor,
    /// Legend label.
    pub label: String,
    /// Line width in points.
    pub line_width: f64,
    /// Line style.
    pub line_style: LineStyle,
    /// Marker drawn at every point.
    pub marker: Marker,
    /// Marker size in points, `None` for the default.
    pub marker_size: Option<f64>,
}

/// Style of a scatter series.
#[derive(Debug, Clone)]
pub struct ScatterOptions {
    /// Marker color.
    pub color: NamedColor,
    /// Legend label.
    pub label: String,
    /// Marker shape.
    pub marker: Marker,
    /// Marker area in points².
    pub area: f64,
}

/// One pie wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Wedge label, if labels were given.
    pub label: Option<String>,
    /// Raw value.
    pub value: f64,
    /// Share of the whole pie, `0.0..=1.0`.
    pub fraction: f64,
    /// Fill color.
    pub color: NamedColor,
}

/// Geometry of a series.
#[derive(Debug, Clone)]
pub enum SeriesKind {
    /// Connected points.
    Line {
        /// Data points.
        points: Vec<(f64, f64)>,
        /// Line style.
        line_style: LineStyle,
        /// Line width in points.
        line_width: f64,
        /// Point marker.
        marker: Marker,
        /// Marker size in points.
        marker_size: f64,
    },
    /// Unconnected markers.
    Scatter {
        /// Data points.
        points: Vec<(f64, f64)>,
        /// Marker shape.
        marker: Marker,
        /// Marker area in points².
        area: f64,
    },
    /// Vertical bars as `(center, height)`.
    Bars {
        /// Bars.
        bars: Vec<(f64, f64)>,
    },
    /// Histogram bins.
    Histogram {
        /// Bins in ascending order.
        bins: Vec<HistogramBin>,
    },
    /// Pie wedges.
    Pie {
        /// Wedges in input order.
        wedges: Vec<Wedge>,
    },
}

/// A series added to the figure.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label, empty for none.
    pub label: String,
    /// Series color.
    pub color: NamedColor,
    /// Geometry.
    pub kind: SeriesKind,
}

impl Series {
    /// Check if this series shows up in the legend.
    pub fn in_legend(&self) -> bool {
        !self.label.is_empty() && !self.label.starts_with('_')
    }
}

/// Data bounds of the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x.
    pub x_min: f64,
    /// Largest x.
    pub x_max: f64,
    /// Smallest y.
    pub y_min: f64,
    /// Largest y.
    pub y_max: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        if x.is_finite() {
            self.x_min = self.x_min.min(x);
            self.x_max = self.x_max.max(x);
        }
        if y.is_finite() {
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
        }
    }

    fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Widen zero-extent axes so that they can be drawn.
    fn widened(mut self) -> Self {
        if self.x_min == self.x_max {
            self.x_min -= 0.5;
            self.x_max += 0.5;
        }
        if self.y_min == self.y_max {
            self.y_min -= 0.5;
            self.y_max += 0.5;
        }
        self
    }
}

/// How x values are interpreted on this figure.
#[derive(Debug, Clone, Default, PartialEq)]
enum XUnits {
    #[default]
    Unset,
    Numeric,
    Categorical(Vec<String>),
}

/// Composite figure built from every cell.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    series: Vec<Series>,
    x_units: XUnits,
    options: FigureOptions,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot `y` against `x`, or against its indices when `x` is empty.
    pub fn plot(&mut self, x: &[Value], y: &[Value], opts: LineOptions) -> Result<()> {
        let ys = numbers(y)?;
        let xs: Vec<f64> = if x.is_empty() {
            self.x_units.merge_numeric()?;
            (0..ys.len()).map(|i| i as f64).collect()
        } else {
            if x.len() != ys.len() {
                return Err(CellplotError::ShapeMismatch {
                    x: x.len(),
                    y: ys.len(),
                });
            }
            self.x_positions(x)?
        };
        non_negative("line width", opts.line_width)?;
        let marker_size = opts.marker_size.unwrap_or(6.0);
        non_negative("marker size", marker_size)?;

        self.series.push(Series {
            label: opts.label,
            color: opts.color,
            kind: SeriesKind::Line {
                points: xs.into_iter().zip(ys).collect(),
                line_style: opts.line_style,
                line_width: opts.line_width,
                marker: opts.marker,
                marker_size,
            },
        });
        Ok(())
    }

    /// Draw markers at `(x, y)`.
    pub fn scatter(&mut self, x: &[Value], y: &[Value], opts: ScatterOptions) -> Result<()> {
        if x.len() != y.len() {
            return Err(CellplotError::SizeMismatch);
        }
        let ys = numbers(y)?;
        let xs = self.x_positions(x)?;
        non_negative("marker size", opts.area)?;

        self.series.push(Series {
            label: opts.label,
            color: opts.color,
            kind: SeriesKind::Scatter {
                points: xs.into_iter().zip(ys).collect(),
                marker: opts.marker,
                area: opts.area,
            },
        });
        Ok(())
    }

    /// Draw bars of `heights` centered on `x`.
    ///
    /// A single position or a single height is broadcast to the other side.
    pub fn bar(
        &mut self,
        x: &[Value],
        heights: &[Value],
        color: NamedColor,
        label: impl Into<String>,
    ) -> Result<()> {
        let hs = numbers(heights)?;
        let xs = self.x_positions(x)?;

        let bars: Vec<(f64, f64)> = match (xs.len(), hs.len()) {
            (a, b) if a == b => xs.into_iter().zip(hs).collect(),
            (1, _) => hs.into_iter().map(|h| (xs[0], h)).collect(),
            (_, 1) => xs.into_iter().map(|x| (x, hs[0])).collect(),
            (a, b) => return Err(CellplotError::BroadcastMismatch { x: a, y: b }),
        };

        self.series.push(Series {
            label: label.into(),
            color,
            kind: SeriesKind::Bars { bars },
        });
        Ok(())
    }

    /// Draw a histogram of `data` with `bins` equal-width bins.
    pub fn hist(
        &mut self,
        data: &[Value],
        bins: usize,
        color: NamedColor,
        label: impl Into<String>,
    ) -> Result<()> {
        let samples = numbers(data)?;
        let bins = bin_counts(&samples, bins)?;
        self.x_units.merge_numeric()?;

        self.series.push(Series {
            label: label.into(),
            color,
            kind: SeriesKind::Histogram { bins },
        });
        Ok(())
    }

    /// Draw a pie of `data`, optionally labelling every wedge.
    pub fn pie(&mut self, data: &[Value], labels: &[Value]) -> Result<()> {
        let values = numbers(data)?;
        if values.iter().any(|v| *v < 0.0) {
            return Err(CellplotError::NegativeWedge);
        }
        let total: f64 = values.iter().sum();
        if total <= 0.0 || total.is_nan() {
            return Err(CellplotError::EmptyPie);
        }
        if !labels.is_empty() && labels.len() != values.len() {
            return Err(CellplotError::LabelCount {
                labels: labels.len(),
                wedges: values.len(),
            });
        }

        let wedges = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Wedge {
                label: labels.get(i).map(|l| l.to_string()),
                value,
                fraction: value / total,
                color: NamedColor::cycle(i),
            })
            .collect();

        self.series.push(Series {
            label: String::new(),
            color: NamedColor::cycle(0),
            kind: SeriesKind::Pie { wedges },
        });
        Ok(())
    }

    /// Apply title, labels, legend and grid.
    pub fn apply_options(&mut self, options: FigureOptions) {
        self.options = options;
    }

    /// Get the figure options.
    pub fn options(&self) -> &FigureOptions {
        &self.options
    }

    /// Get all series in drawing order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Check if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Get the first pie series' wedges, if the figure holds a pie.
    pub fn pie_wedges(&self) -> Option<&[Wedge]> {
        self.series.iter().find_map(|s| match &s.kind {
            SeriesKind::Pie { wedges } => Some(wedges.as_slice()),
            _ => None,
        })
    }

    /// Get the category names when x is categorical.
    pub fn categories(&self) -> Option<&[String]> {
        match &self.x_units {
            XUnits::Categorical(names) => Some(names),
            _ => None,
        }
    }

    /// Get `(label, color)` for every series shown in the legend.
    pub fn legend_entries(&self) -> Vec<(&str, NamedColor)> {
        self.series
            .iter()
            .filter(|s| s.in_legend())
            .map(|s| (s.label.as_str(), s.color))
            .collect()
    }

    /// Compute the data bounds of all axis-based series.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut b = Bounds::empty();
        for series in &self.series {
            match &series.kind {
                SeriesKind::Line { points, .. } | SeriesKind::Scatter { points, .. } => {
                    for &(x, y) in points {
                        b.include(x, y);
                    }
                },
                SeriesKind::Bars { bars } => {
                    for &(x, h) in bars {
                        b.include(x - BAR_WIDTH / 2.0, 0.0);
                        b.include(x + BAR_WIDTH / 2.0, h);
                    }
                },
                SeriesKind::Histogram { bins } => {
                    for bin in bins {
                        b.include(bin.start, 0.0);
                        b.include(bin.end, bin.count as f64);
                    }
                },
                SeriesKind::Pie { .. } => {},
            }
        }

        if b.is_empty() {
            None
        } else {
            Some(b.widened())
        }
    }

    /// Map x values to axis positions, registering categories as needed.
    fn x_positions(&mut self, x: &[Value]) -> Result<Vec<f64>> {
        if x.is_empty() {
            return Ok(Vec::new());
        }

        if x.iter().all(|v| !v.is_text()) {
            self.x_units.merge_numeric()?;
            return numbers(x);
        }
        if !x.iter().all(Value::is_text) {
            return Err(CellplotError::MixedUnits);
        }

        if self.x_units == XUnits::Unset {
            self.x_units = XUnits::Categorical(Vec::new());
        }
        let names = match &mut self.x_units {
            XUnits::Categorical(names) => names,
            _ => return Err(CellplotError::MixedUnits),
        };

        Ok(x.iter()
            .map(|v| {
                let name = v.to_string();
                let idx = match names.iter().position(|n| *n == name) {
                    Some(idx) => idx,
                    None => {
                        names.push(name);
                        names.len() - 1
                    },
                };
                idx as f64
            })
            .collect())
    }
}

impl XUnits {
    fn merge_numeric(&mut self) -> Result<()> {
        match self {
            XUnits::Categorical(_) => Err(CellplotError::MixedUnits),
            _ => {
                *self = XUnits::Numeric;
                Ok(())
            },
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        Err(CellplotError::Negative { field, value })
    } else {
        Ok(())
    }
}
