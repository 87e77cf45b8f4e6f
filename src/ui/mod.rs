//! User interface rendering.

pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;
mod workspace;

use crate::app::App;
use crate::figure::ui::draw_figure;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let panes = &app.layout.panes;

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(panes.kinds_height),
            Constraint::Min(6),
            Constraint::Length(panes.options_height),
            Constraint::Length(panes.status_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    workspace::draw_kinds(f, app, chunks[0], &colors);
    workspace::draw_cells(f, app, chunks[1], &colors);
    workspace::draw_options(f, app, chunks[2], &colors);
    draw_status(f, chunks[3], &app.status, &colors);
    draw_keymap(
        f,
        chunks[4],
        app.form.pane,
        app.form.editor.is_active(),
        app.figure_visible(),
        &colors,
    );

    if let Some(figure) = &app.figure {
        draw_figure(f, figure, &app.layout.figure, &colors);
    }
}
