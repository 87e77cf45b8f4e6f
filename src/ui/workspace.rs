//! Main screen: graph type bar, cell cards and plotting options.

use super::formatters::truncate_to_width;
use super::ThemeColors;
use crate::app::App;
use crate::cells::{Cell, FieldId, FieldInput};
use crate::form::{OptionField, Pane};
use crate::manager::MAX_CELL_NUMBER;
use crate::util::colors::{FAILED_CELL_BG, FAILED_CELL_FG};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn pane_block<'a>(title: &'a str, focused: bool, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            colors.border_focus
        } else {
            colors.border
        }))
        .style(Style::default().bg(colors.bg))
}

/// Draw the graph type selector.
pub(super) fn draw_kinds(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let focused = app.form.pane == Pane::Kinds && app.figure.is_none();
    let block = pane_block(" Choose graph type ", focused, colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = Vec::new();
    for kind in crate::cells::CellKind::ALL {
        let enabled = app.manager.is_kind_enabled(kind);
        let style = if kind == app.selected_kind && focused {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else if kind == app.selected_kind {
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if enabled {
            Style::default().fg(colors.text)
        } else {
            Style::default().fg(colors.disabled)
        };
        let style = if enabled {
            style
        } else {
            style.add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(format!(" {} ", kind), style));
        spans.push(Span::raw(" "));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(34)])
        .split(inner);

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let count = Paragraph::new(format!(
        "Max number of cells: {} ({} used)",
        MAX_CELL_NUMBER,
        app.manager.len()
    ))
    .style(Style::default().fg(colors.label))
    .alignment(Alignment::Right);
    f.render_widget(count, chunks[1]);
}

/// Draw one card per cell, scrolled so that the focused card is visible.
pub(super) fn draw_cells(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let focused = app.form.pane == Pane::Cells && app.figure.is_none();
    let block = pane_block(" Cells ", focused, colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.manager.is_empty() {
        let hint = Paragraph::new("No cells yet. Pick a graph type and press Enter.")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center);
        f.render_widget(hint, inner);
        return;
    }

    let card_width = app.layout.cells.card_width.max(8);
    let fit = ((inner.width / card_width) as usize).max(1);
    let first = if app.form.cell >= fit {
        app.form.cell + 1 - fit
    } else {
        0
    };

    for (slot, (pos, cell)) in app
        .manager
        .iter()
        .enumerate()
        .skip(first)
        .take(fit)
        .enumerate()
    {
        let x = inner.x + slot as u16 * card_width;
        let width = card_width.min(inner.x + inner.width - x);
        let card = Rect::new(x, inner.y, width, inner.height);
        let card_focused = focused && pos == app.form.cell;
        draw_cell_card(f, app, cell, card, card_focused, colors);
    }
}

fn draw_cell_card(
    f: &mut Frame<'_>,
    app: &App,
    cell: &Cell,
    area: Rect,
    focused: bool,
    colors: &ThemeColors,
) {
    let (fg, bg) = if cell.failed() {
        (FAILED_CELL_FG, FAILED_CELL_BG)
    } else {
        (colors.text, colors.bg)
    };

    let title = format!(" {} #{} ", cell.kind(), cell.id());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            colors.border_focus
        } else if cell.failed() {
            colors.error
        } else {
            colors.border
        }))
        .style(Style::default().fg(fg).bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let value_width = inner.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    for (idx, field) in cell.fields().iter().enumerate() {
        let field_focused = focused && idx == app.form.field;
        let editing = field_focused && app.form.editor.is_active();

        let caption_style = if cell.failed() {
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.label)
        };
        lines.push(Line::from(Span::styled(
            field.caption(cell.kind()),
            caption_style,
        )));

        let value = if editing {
            let text = format!("{}▏", app.form.editor.buffer());
            truncate_to_width(&text, value_width, true)
        } else {
            truncate_to_width(&display_value(cell, *field), value_width, false)
        };

        let value_style = if field_focused {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else if cell.failed() {
            Style::default().fg(fg)
        } else {
            Style::default().fg(colors.value)
        };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(value, value_style),
        ]));
    }

    // Keep the focused field on screen on short terminals.
    let rows_per_field = app.layout.cells.field_height.max(1) as usize;
    let visible_fields = (inner.height as usize / rows_per_field).max(1);
    let scroll = if focused && app.form.field >= visible_fields {
        ((app.form.field + 1 - visible_fields) * rows_per_field) as u16
    } else {
        0
    };

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Text shown for a field when it is not being edited.
fn display_value(cell: &Cell, field: FieldId) -> String {
    let raw = cell.field(field).unwrap_or_default();
    match field.input() {
        FieldInput::Choice(_) if raw == " " => "‹ (none) ›".to_string(),
        FieldInput::Choice(_) => format!("‹ {} ›", raw),
        FieldInput::Spin { .. } => format!("{} ±", raw),
        FieldInput::Text if raw.is_empty() => "-".to_string(),
        FieldInput::Text => raw.to_string(),
    }
}

/// Draw the plotting options row.
pub(super) fn draw_options(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let focused = app.form.pane == Pane::Options && app.figure.is_none();
    let block = pane_block(" Plotting (p to plot) ", focused, colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ])
        .split(inner);

    for (idx, field) in OptionField::ALL.into_iter().enumerate() {
        let field_focused = focused && idx == app.form.option;
        let style = if field_focused {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.value)
        };
        let width = chunks[idx].width.saturating_sub(1) as usize;

        let lines = if field.is_toggle() {
            let checked = match field {
                OptionField::Legend => app.options.legend,
                _ => app.options.grid,
            };
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("[{}] {}", if checked { "x" } else { " " }, field.caption()),
                    style,
                )),
            ]
        } else {
            let value = if field_focused && app.form.editor.is_active() {
                truncate_to_width(&format!("{}▏", app.form.editor.buffer()), width, true)
            } else {
                truncate_to_width(app.option_text(field), width, false)
            };
            vec![
                Line::from(Span::styled(field.caption(), Style::default().fg(colors.label))),
                Line::from(Span::styled(value, style)),
            ]
        };

        f.render_widget(Paragraph::new(lines), chunks[idx]);
    }
}
