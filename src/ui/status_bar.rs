//! Status pane UI component.

use crate::status::StatusLog;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the newest status messages that fit in `area`.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, status: &StatusLog, colors: &ThemeColors) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line<'_>> = status.lines(visible).into_iter().map(Line::from).collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
