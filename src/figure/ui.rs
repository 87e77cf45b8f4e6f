//! Figure overlay - pure rendering layer.

use super::{Bounds, Figure, Series, SeriesKind, Wedge, BAR_WIDTH};
use crate::ui::formatters::{format_axis_label, format_percent, truncate_to_width};
use crate::ui::ThemeColors;
use crate::util::colors::{line_symbol, marker_symbol};
use crate::util::FigureLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Block, Borders, Chart, Clear, Dataset, GraphType, LegendPosition, Paragraph,
    },
    Frame,
};
use std::f64::consts::TAU;

/// Wedge radius in canvas units; labels sit just outside it.
const PIE_RADIUS: f64 = 0.9;
const PIE_LABEL_RADIUS: f64 = 1.05;

/// Most vertical strokes used to fill one bar.
const MAX_BAR_STROKES: usize = 400;

/// One drawable dataset, owned so that the chart can borrow it.
#[derive(Debug)]
struct Layer {
    name: Option<String>,
    points: Vec<(f64, f64)>,
    graph: GraphType,
    marker: symbols::Marker,
    color: Color,
}

/// Draw the figure overlay on top of the main screen.
pub fn draw_figure(
    f: &mut Frame<'_>,
    figure: &Figure,
    layout: &FigureLayoutConfig,
    colors: &ThemeColors,
) {
    let area = centered_rect(layout.overlay_percent, layout.overlay_percent, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let title = if figure.options().title.is_empty() {
        " Figure ".to_string()
    } else {
        format!(" {} ", figure.options().title)
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" q/Esc: close ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_focus))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if figure.is_empty() {
        draw_no_data(f, inner, colors);
        return;
    }
    match (figure.pie_wedges(), figure.bounds()) {
        (Some(wedges), None) => draw_pie(f, inner, figure, wedges, layout, colors),
        (_, Some(bounds)) => draw_chart(f, inner, figure, bounds, layout, colors),
        (None, None) => draw_no_data(f, inner, colors),
    }
}

fn draw_no_data(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let para = Paragraph::new("No data to display")
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    bounds: Bounds,
    layout: &FigureLayoutConfig,
    colors: &ThemeColors,
) {
    let options = figure.options();

    // Bars and histograms keep their baseline on the axis.
    let has_baseline = figure.series().iter().any(|s| {
        matches!(
            s.kind,
            SeriesKind::Bars { .. } | SeriesKind::Histogram { .. }
        )
    });
    let y_pad = (bounds.y_max - bounds.y_min) * layout.y_axis_padding_factor;
    let y_min = if has_baseline && bounds.y_min == 0.0 {
        0.0
    } else {
        bounds.y_min - y_pad
    };
    let y_max = if has_baseline && bounds.y_max == 0.0 {
        0.0
    } else {
        bounds.y_max + y_pad
    };

    let (x_min, x_max, x_labels) = match figure.categories() {
        Some(names) => {
            // One label per category, landing exactly on its index.
            let mut labels = Vec::with_capacity(names.len() + 2);
            labels.push(String::new());
            labels.extend(names.iter().cloned());
            labels.push(String::new());
            (-1.0, names.len() as f64, labels)
        },
        None => {
            let x_pad = (bounds.x_max - bounds.x_min) * layout.y_axis_padding_factor / 2.0;
            let (lo, hi) = (bounds.x_min - x_pad, bounds.x_max + x_pad);
            let labels = vec![
                format_axis_label(lo),
                format_axis_label((lo + hi) / 2.0),
                format_axis_label(hi),
            ];
            (lo, hi, labels)
        },
    };

    let mut layers = Vec::new();
    if options.grid {
        push_grid(
            &mut layers,
            [x_min, x_max],
            [y_min, y_max],
            layout.grid_lines,
            colors.grid,
        );
    }
    let stroke = (x_max - x_min) / (area.width.max(1) as f64 * 2.0);
    for series in figure.series() {
        let name = (options.legend && series.in_legend()).then(|| series.label.clone());
        push_series(&mut layers, series, name, stroke);
    }

    let datasets: Vec<Dataset<'_>> = layers
        .iter()
        .map(|layer| {
            let dataset = Dataset::default()
                .marker(layer.marker)
                .graph_type(layer.graph)
                .style(Style::default().fg(layer.color))
                .data(&layer.points);
            match &layer.name {
                Some(name) => dataset.name(name.as_str()),
                None => dataset,
            }
        })
        .collect();

    let x_axis = Axis::default()
        .title(options.x_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];
    let y_axis = Axis::default()
        .title(options.y_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let legend = if options.legend && !figure.legend_entries().is_empty() {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let chart = Chart::new(datasets)
        .style(Style::default().bg(colors.bg))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

/// Turn one series into chart layers. `name` goes on the first layer only
/// so that the legend lists every series once.
fn push_series(
    layers: &mut Vec<Layer>,
    series: &Series,
    mut name: Option<String>,
    stroke: f64,
) {
    let color = series.color.color();
    let first = layers.len();

    match &series.kind {
        SeriesKind::Line {
            points,
            line_style,
            line_width,
            marker,
            marker_size,
        } => {
            if line_style.is_visible() && *line_width > 0.0 {
                layers.push(Layer {
                    name: name.take(),
                    points: points.clone(),
                    graph: GraphType::Line,
                    marker: line_symbol(*line_style),
                    color,
                });
            }
            if let Some(symbol) = marker_symbol(*marker).filter(|_| *marker_size > 0.0) {
                layers.push(Layer {
                    name: name.take(),
                    points: points.clone(),
                    graph: GraphType::Scatter,
                    marker: symbol,
                    color,
                });
            }
        },
        SeriesKind::Scatter {
            points,
            marker,
            area,
        } => {
            if let Some(symbol) = marker_symbol(*marker).filter(|_| *area > 0.0) {
                layers.push(Layer {
                    name: name.take(),
                    points: points.clone(),
                    graph: GraphType::Scatter,
                    marker: symbol,
                    color,
                });
            }
        },
        SeriesKind::Bars { bars } => {
            let points = bars
                .iter()
                .flat_map(|&(x, h)| {
                    fill_span(x - BAR_WIDTH / 2.0, x + BAR_WIDTH / 2.0, stroke)
                        .into_iter()
                        .map(move |px| (px, h))
                })
                .collect();
            layers.push(Layer {
                name: name.take(),
                points,
                graph: GraphType::Bar,
                marker: symbols::Marker::HalfBlock,
                color,
            });
        },
        SeriesKind::Histogram { bins } => {
            let points = bins
                .iter()
                .flat_map(|bin| {
                    let count = bin.count as f64;
                    fill_span(bin.start, bin.end, stroke)
                        .into_iter()
                        .map(move |px| (px, count))
                })
                .collect();
            layers.push(Layer {
                name: name.take(),
                points,
                graph: GraphType::Bar,
                marker: symbols::Marker::HalfBlock,
                color,
            });
        },
        SeriesKind::Pie { .. } => {},
    }

    // Invisible series still get their legend entry.
    if layers.len() == first && name.is_some() {
        layers.push(Layer {
            name,
            points: Vec::new(),
            graph: GraphType::Scatter,
            marker: symbols::Marker::Dot,
            color,
        });
    }
}

/// X positions of the vertical strokes filling `[start, end]`.
fn fill_span(start: f64, end: f64, stroke: f64) -> Vec<f64> {
    let width = end - start;
    if width <= 0.0 || stroke <= 0.0 || !stroke.is_finite() {
        return vec![start];
    }
    let n = ((width / stroke).ceil() as usize).clamp(1, MAX_BAR_STROKES);
    (0..=n)
        .map(|i| start + width * i as f64 / n as f64)
        .collect()
}

fn push_grid(layers: &mut Vec<Layer>, x: [f64; 2], y: [f64; 2], lines: usize, color: Color) {
    let lines = lines.max(1);
    for k in 1..lines {
        let t = k as f64 / lines as f64;
        let gx = x[0] + (x[1] - x[0]) * t;
        let gy = y[0] + (y[1] - y[0]) * t;
        layers.push(Layer {
            name: None,
            points: vec![(gx, y[0]), (gx, y[1])],
            graph: GraphType::Line,
            marker: symbols::Marker::Dot,
            color,
        });
        layers.push(Layer {
            name: None,
            points: vec![(x[0], gy), (x[1], gy)],
            graph: GraphType::Line,
            marker: symbols::Marker::Dot,
            color,
        });
    }
}

fn draw_pie(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    wedges: &[Wedge],
    layout: &FigureLayoutConfig,
    colors: &ThemeColors,
) {
    let show_legend = figure.options().legend && wedges.iter().any(|w| w.label.is_some());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if show_legend {
            vec![Constraint::Min(10), Constraint::Length(layout.pie_legend_width)]
        } else {
            vec![Constraint::Min(10)]
        })
        .split(area);
    let canvas_area = chunks[0];

    // Braille dots are roughly square, so scale the bounds to the area.
    let dots_x = canvas_area.width.max(1) as f64 * 2.0;
    let dots_y = canvas_area.height.max(1) as f64 * 4.0;
    let ratio = dots_x / dots_y;
    let (x_half, y_half) = if ratio >= 1.0 {
        (ratio, 1.0)
    } else {
        (1.0, 1.0 / ratio)
    };

    let fills = pie_points(wedges, [x_half, y_half], [dots_x, dots_y]);
    let units_per_cell = 2.0 * x_half / canvas_area.width.max(1) as f64;

    let labels: Vec<(f64, f64, String, Color)> = wedge_angles(wedges)
        .zip(wedges)
        .filter_map(|((start, end), wedge)| {
            let label = wedge.label.clone()?;
            let mid = (start + end) / 2.0;
            let mut x = PIE_LABEL_RADIUS * mid.cos();
            let y = PIE_LABEL_RADIUS * mid.sin();
            if mid.cos() < 0.0 {
                x -= label.chars().count() as f64 * units_per_cell;
            }
            Some((x, y, label, colors.text))
        })
        .collect();

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .marker(symbols::Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(move |ctx| {
            for (points, color) in &fills {
                ctx.draw(&Points {
                    coords: points,
                    color: *color,
                });
            }
            ctx.layer();
            for (x, y, label, color) in &labels {
                ctx.print(
                    *x,
                    *y,
                    Span::styled(label.clone(), Style::default().fg(*color)),
                );
            }
        });
    f.render_widget(canvas, canvas_area);

    if show_legend {
        draw_pie_legend(f, chunks[1], wedges, colors);
    }
}

/// Start and end angle of every wedge, counterclockwise from 3 o'clock.
fn wedge_angles(wedges: &[Wedge]) -> impl Iterator<Item = (f64, f64)> + '_ {
    wedges.iter().scan(0.0, |acc, w| {
        let start = *acc;
        *acc += w.fraction * TAU;
        Some((start, *acc))
    })
}

/// Canvas points covering each wedge, one list per wedge.
fn pie_points(wedges: &[Wedge], half: [f64; 2], dots: [f64; 2]) -> Vec<(Vec<(f64, f64)>, Color)> {
    let mut fills: Vec<(Vec<(f64, f64)>, Color)> =
        wedges.iter().map(|w| (Vec::new(), w.color.color())).collect();
    let ends: Vec<f64> = wedge_angles(wedges).map(|(_, end)| end).collect();

    let step_x = 2.0 * half[0] / dots[0];
    let step_y = 2.0 * half[1] / dots[1];
    let mut y = -PIE_RADIUS;
    while y <= PIE_RADIUS {
        let mut x = -PIE_RADIUS;
        while x <= PIE_RADIUS {
            if x * x + y * y <= PIE_RADIUS * PIE_RADIUS {
                let angle = y.atan2(x).rem_euclid(TAU);
                let idx = ends
                    .iter()
                    .position(|end| angle < *end)
                    .unwrap_or(ends.len().saturating_sub(1));
                if let Some((points, _)) = fills.get_mut(idx) {
                    points.push((x, y));
                }
            }
            x += step_x;
        }
        y += step_y;
    }
    fills
}

fn draw_pie_legend(f: &mut Frame<'_>, area: Rect, wedges: &[Wedge], colors: &ThemeColors) {
    let width = area.width.saturating_sub(12) as usize;
    let lines: Vec<Line<'_>> = wedges
        .iter()
        .enumerate()
        .map(|(i, wedge)| {
            let label = wedge
                .label
                .clone()
                .unwrap_or_else(|| format!("wedge {}", i + 1));
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(wedge.color.color())),
                Span::styled(
                    truncate_to_width(&label, width, false),
                    Style::default().fg(colors.text),
                ),
                Span::styled(
                    format!(" {}", format_percent(wedge.fraction)),
                    Style::default().fg(colors.value),
                ),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Legend ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    f.render_widget(legend, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::style::NamedColor;

    fn wedge(fraction: f64) -> Wedge {
        Wedge {
            label: None,
            value: fraction,
            fraction,
            color: NamedColor::DEFAULT,
        }
    }

    #[test]
    fn wedge_angles_cover_the_circle() {
        let wedges = [wedge(0.5), wedge(0.25), wedge(0.25)];
        let angles: Vec<_> = wedge_angles(&wedges).collect();
        assert_eq!(angles[0], (0.0, TAU / 2.0));
        assert!((angles[2].1 - TAU).abs() < 1e-12);
    }

    #[test]
    fn pie_points_split_by_fraction() {
        let wedges = [wedge(0.5), wedge(0.5)];
        let fills = pie_points(&wedges, [1.0, 1.0], [200.0, 200.0]);
        let (upper, lower) = (fills[0].0.len() as f64, fills[1].0.len() as f64);
        assert!((upper / lower - 1.0).abs() < 0.1);
        assert!(fills[0].0.iter().all(|&(_, y)| y >= 0.0));
    }

    #[test]
    fn fill_span_is_bounded() {
        let xs = fill_span(0.0, 0.8, 0.1);
        assert_eq!(xs.first(), Some(&0.0));
        assert!((xs.last().unwrap() - 0.8).abs() < 1e-12);
        assert_eq!(fill_span(0.0, 1.0, 1e-9).len(), MAX_BAR_STROKES + 1);
        assert_eq!(fill_span(0.0, 1.0, 0.0), vec![0.0]);
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(90, 90, outer);
        assert!(inner.width <= 90 && inner.height <= 45);
        assert!(inner.x >= 5);
    }
}
