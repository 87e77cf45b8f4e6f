//! Keymap help bar UI component.

use crate::form::Pane;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    pane: Pane,
    editing: bool,
    figure_visible: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if figure_visible {
        "q/Esc:close figure"
    } else if editing {
        "Enter:save | Esc:cancel | Type to edit"
    } else {
        match pane {
            Pane::Kinds => "←→:type | Enter/a:create | Tab:pane | p:plot | T:theme | q:quit",
            Pane::Cells => {
                "←→:cell | ↑↓:field | Enter:edit | +-:step | a:add | d:remove | C:clear | Tab:pane | p:plot | q:quit"
            },
            Pane::Options => "←→:option | Enter:edit/toggle | Tab:pane | p:plot | q:quit",
        }
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
